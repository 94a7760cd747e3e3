//! AST Diagnostic Printer
//!
//! Renders an AST subtree as an indented listing of node kind, spelling
//! and source location. Inspection aid only; generation never depends on
//! it.

use clang::Entity;

/// Render `node` and every descendant, one line per node, indented two
/// spaces per level. Visits all children regardless of kind and never
/// mutates the tree.
pub fn render(node: Entity, depth: usize) -> Vec<String> {
    let mut lines = vec![describe(node, depth)];
    for child in node.get_children() {
        lines.extend(render(child, depth + 1));
    }
    lines
}

fn describe(node: Entity, depth: usize) -> String {
    let kind = format!("{:?}", node.get_kind());
    let text = node
        .get_name()
        .or_else(|| node.get_display_name())
        .unwrap_or_default();
    let location = node
        .get_location()
        .map(|location| {
            let spot = location.get_file_location();
            let file = spot
                .file
                .map(|file| file.get_path().display().to_string())
                .unwrap_or_default();
            format!("{}:{}:{}", file, spot.line, spot.column)
        })
        .unwrap_or_default();
    format_line(&kind, &text, &location, depth)
}

// Split out from `describe` so the line shape is testable without a
// parsed translation unit.
fn format_line(kind: &str, text: &str, location: &str, depth: usize) -> String {
    format!("{}{}: {} [{}]", "  ".repeat(depth), kind, text, location)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line_root() {
        let line = format_line("EnumDecl", "Color", "input.cpp:1:12", 0);
        assert_eq!(line, "EnumDecl: Color [input.cpp:1:12]");
    }

    #[test]
    fn test_format_line_indents_two_spaces_per_level() {
        let line = format_line("EnumConstantDecl", "Red", "input.cpp:1:20", 2);
        assert!(line.starts_with("    EnumConstantDecl"));
        assert_eq!(format_line("x", "", "", 3).chars().take_while(|c| *c == ' ').count(), 6);
    }
}

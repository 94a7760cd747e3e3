//! C++ Function Emitter
//!
//! Renders an extracted enum class as an error-message lookup function,
//! plus the namespace blocks that wrap it at its original scope.

use crate::domain::flavor::ReturnStyle;
use crate::domain::namespace::NamespacePath;

/// Comment placed at the top of every generated unit.
pub const BANNER: &str = "// Auto-generated error_msg function";

pub struct CodeGenerator {
    style: ReturnStyle,
}

impl CodeGenerator {
    pub fn new(style: ReturnStyle) -> CodeGenerator {
        CodeGenerator { style }
    }

    /// Render the lookup function for one enum: a switch over every
    /// enumerator in declaration order, each case returning the
    /// enumerator's own name, and a default branch.
    pub fn function_source(&self, enum_name: &str, enumerators: &[String]) -> String {
        let function_name = format!("error_msg_{}", enum_name.to_lowercase());

        let mut lines = Vec::new();
        lines.push(format!(
            "{} {}({} err) {{",
            self.style.type_text(),
            function_name,
            enum_name
        ));
        lines.push("    switch(err) {".to_string());
        for enumerator in enumerators {
            lines.push(format!(
                "        case {}::{}: return \"{}\";",
                enum_name, enumerator, enumerator
            ));
        }
        lines.push("        default: return \"Unknown error\";".to_string());
        lines.push("    }".to_string());
        lines.push("}".to_string());
        lines.join("\n")
    }

    /// Opening and closing namespace blocks for a path. The prologue
    /// opens outermost first, the epilogue closes in reverse order with a
    /// trailing comment naming the namespace. Both are empty at global
    /// scope.
    pub fn namespace_wrapping(&self, path: &NamespacePath) -> (String, String) {
        let opening: Vec<String> = path.segments().iter().map(|s| open_line(s)).collect();
        let closing: Vec<String> = path.segments().iter().rev().map(|s| close_line(s)).collect();
        (opening.join("\n"), closing.join("\n"))
    }
}

fn open_line(segment: &str) -> String {
    if segment.is_empty() {
        "namespace {".to_string()
    } else {
        format!("namespace {} {{", segment)
    }
}

fn close_line(segment: &str) -> String {
    if segment.is_empty() {
        "} // namespace".to_string()
    } else {
        format!("}} // namespace {}", segment)
    }
}

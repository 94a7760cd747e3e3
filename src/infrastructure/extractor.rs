//! Enum Extractor
//!
//! Walks a parsed translation unit and collects every `enum class`
//! definition together with the namespace path at its declaration site.

use clang::{Entity, EntityKind};

use crate::domain::flavor::ScanMode;
use crate::domain::namespace::NamespacePath;

/// One discovered enum class. Holds a borrowed cursor into the owning
/// translation unit; records never outlive the parse result.
#[derive(Debug, Clone)]
pub struct EnumRecord<'tu> {
    pub node: Entity<'tu>,
    pub path: NamespacePath,
}

/// Collect every enum-class definition reachable from `root`.
///
/// Traversal is depth-first with children visited before siblings, so the
/// result order matches source declaration order. Only namespace nodes
/// are descended into; enums nested in classes, structs or function
/// bodies are out of scope for this pass.
pub fn extract<'tu>(root: Entity<'tu>, mode: ScanMode) -> Vec<EnumRecord<'tu>> {
    let mut records = Vec::new();
    visit(root, NamespacePath::global(), mode, &mut records);
    records
}

fn visit<'tu>(
    node: Entity<'tu>,
    path: NamespacePath,
    mode: ScanMode,
    records: &mut Vec<EnumRecord<'tu>>,
) {
    for child in node.get_children() {
        match child.get_kind() {
            EntityKind::EnumDecl if child.is_definition() && child.is_scoped() => {
                records.push(EnumRecord {
                    node: child,
                    path: path.clone(),
                });
            }
            EntityKind::Namespace if mode == ScanMode::Namespaces => {
                // An anonymous namespace has no spelling and contributes
                // an empty segment.
                let segment = child.get_name().unwrap_or_default();
                visit(child, path.descend(&segment), mode, records);
            }
            _ => {}
        }
    }
}

/// Enumerator names of an enum definition, in declaration order.
pub fn enumerators(enum_node: Entity) -> Vec<String> {
    enum_node
        .get_children()
        .into_iter()
        .filter(|child| child.get_kind() == EntityKind::EnumConstantDecl)
        .filter_map(|child| child.get_name())
        .collect()
}

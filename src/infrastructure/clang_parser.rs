/// Source Parser.
///
/// Thin wrapper around libclang: points the runtime loader at the
/// library, parses one file as C++ and refuses to hand out a translation
/// unit that carries hard errors.

use std::env;
use std::path::Path;

use anyhow::{bail, Context, Result};
use clang::diagnostic::Severity;
use clang::{Index, TranslationUnit};

/// Point the clang-sys runtime loader at the directory holding the
/// libclang shared library. Must run once, before the first `Clang::new`
/// in the process; later calls have no effect on an already-loaded
/// library. Falls back to the system search paths when the directory
/// does not contain libclang.
pub fn configure_library_path(dir: &str) {
    env::set_var("LIBCLANG_PATH", dir);
}

/// Parse one C++ translation unit with the options the enum extractor
/// relies on: brief documentation comments and detailed preprocessing
/// records are kept, and the file is treated as C++ regardless of its
/// extension.
pub fn parse_cpp_file<'i>(index: &'i Index, path: &Path) -> Result<TranslationUnit<'i>> {
    if !path.is_file() {
        bail!("cannot read source file: {}", path.display());
    }

    let unit = index
        .parser(path)
        .arguments(&["-x", "c++"])
        .briefs_in_completion_results(true)
        .detailed_preprocessing_record(true)
        .parse()
        .with_context(|| format!("failed to parse {}", path.display()))?;

    // libclang happily returns a best-effort tree for broken input; a
    // single reported error is required instead, so hard diagnostics
    // fail the run.
    let errors: Vec<String> = unit
        .get_diagnostics()
        .iter()
        .filter(|diagnostic| {
            matches!(diagnostic.get_severity(), Severity::Error | Severity::Fatal)
        })
        .map(|diagnostic| diagnostic.get_text())
        .collect();

    if let Some(first) = errors.first() {
        bail!(
            "{} ({} error(s) in {})",
            first,
            errors.len(),
            path.display()
        );
    }

    Ok(unit)
}

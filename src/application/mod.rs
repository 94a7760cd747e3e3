// Generation use case: parse one C++ file, collect its enum classes and
// render the generated unit as a single string.

use std::path::PathBuf;

use anyhow::Result;
use clang::{Clang, Index};

use crate::domain::flavor::Flavor;
use crate::infrastructure::{clang_parser, extractor};
use crate::ports::{ast_printer, cpp_emitter};

/// One generation run over a single C++ source file.
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    pub source: PathBuf,
    pub flavor: Flavor,
    pub dump_ast: bool,
}

/// Run the whole pipeline and return the generated source text.
///
/// The output is assembled in memory and handed back in one piece, so a
/// failed run produces no partial text. Finding zero enums is a success;
/// the result is then just the banner (plus the include line in the
/// namespace-aware flavor).
pub fn generate(request: &GenerateRequest) -> Result<String> {
    let clang = Clang::new().map_err(anyhow::Error::msg)?;
    let index = Index::new(&clang, false, false);
    let unit = clang_parser::parse_cpp_file(&index, &request.source)?;

    let records = extractor::extract(unit.get_entity(), request.flavor.scan_mode());
    let generator = cpp_emitter::CodeGenerator::new(request.flavor.return_style());

    let mut sections: Vec<String> = Vec::new();
    sections.push(cpp_emitter::BANNER.to_string());
    if request.flavor.emits_include() {
        sections.push(format!("#include \"{}\"", request.source.display()));
    }

    for record in &records {
        if request.dump_ast {
            let dump: Vec<String> = ast_printer::render(record.node, 0)
                .into_iter()
                .map(|line| format!("// {}", line))
                .collect();
            sections.push(dump.join("\n"));
        }

        let (prologue, epilogue) = generator.namespace_wrapping(&record.path);
        if !prologue.is_empty() {
            sections.push(prologue);
        }

        let enum_name = record.node.get_name().unwrap_or_default();
        let enumerators = extractor::enumerators(record.node);
        sections.push(generator.function_source(&enum_name, &enumerators));

        if !epilogue.is_empty() {
            sections.push(epilogue);
        }
    }

    Ok(sections.join("\n\n") + "\n")
}

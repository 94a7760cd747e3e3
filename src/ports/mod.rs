// Output ports for Enumsmith: generated C++ text and AST dumps.

pub mod ast_printer;
pub mod cpp_emitter;

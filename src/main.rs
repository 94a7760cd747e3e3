// Command-line entry point for Enumsmith.

use clap::Parser;
use enumsmith::application::{self, GenerateRequest};
use enumsmith::domain::flavor::Flavor;
use enumsmith::infrastructure::clang_parser;
use std::path::PathBuf;
use std::process;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the C++ source file containing the enum classes
    cpp_file: PathBuf,

    /// Directory holding the libclang shared library
    #[arg(long, default_value = "/usr/lib/llvm-14/lib")]
    library_path: String,

    /// Generation flavor (minimal, namespaced)
    #[arg(short, long, default_value = "namespaced")]
    flavor: String,

    /// Dump the AST subtree of each enum as comment lines
    #[arg(long)]
    dump_ast: bool,
}

fn main() {
    let cli = Cli::parse();

    let Some(flavor) = Flavor::from_str(&cli.flavor) else {
        println!("Error: unknown flavor: {}", cli.flavor);
        process::exit(1);
    };

    // Point the runtime loader at libclang before anything parses.
    clang_parser::configure_library_path(&cli.library_path);

    let request = GenerateRequest {
        source: cli.cpp_file,
        flavor,
        dump_ast: cli.dump_ast,
    };

    match application::generate(&request) {
        Ok(output) => print!("{}", output),
        Err(e) => {
            println!("Error: {}", e);
            process::exit(1);
        }
    }
}

//! cprunc: generates code point run tables from `UnicodeData.txt`.

use cprunc::{init_tracing, parse_args, run, Command};

fn main() {
    init_tracing();

    let command = match parse_args(std::env::args().skip(1)) {
        Ok(command) => command,
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!("Run `cprunc --help` for usage.");
            std::process::exit(1);
        }
    };

    match command {
        Command::Help => print_usage(),
        Command::Version => println!("cprunc {}", env!("CARGO_PKG_VERSION")),
        Command::Generate(options) => {
            if let Err(err) = run(&options) {
                eprintln!("error: {err}");
                std::process::exit(1);
            }
        }
    }
}

fn print_usage() {
    println!("Generates tables mapping Unicode code points to lexer grammar rules");
    println!();
    println!("Usage: cprunc [options]");
    println!();
    println!("Options:");
    println!("  -u, --unicode-data <path>  UnicodeData.txt to read (default: ./UnicodeData.txt)");
    println!("  -f, --header-file <path>   Header included by the C++ source (default: cprun.hpp)");
    println!("  --include-guard <name>     Header include guard macro (default: CPRUN_HPP)");
    println!("  -o, --output <path>        Write to a file instead of stdout");
    println!("  -h, --help                 Show this help message");
    println!("  -V, --version              Show version information");
    println!();
    println!("Output (pick one):");
    println!("  --hpp                      C++ header declaring the table (default)");
    println!("  -c, --cpp                  C++ source defining the table");
    println!("  --rust                     Rust module with the packed table");
    println!("  -d, --dump                 Decoded Unicode database, one entry per line");
}

//! Quill literal toolkit CLI.

use std::io::{self, Write};

use quill_ir::SymbolTable;
use quillc::commands::{cluster_files, encode_stdin, lex_files, name_files};
use quillc::{init_tracing, parse_options, CliOptions};

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        std::process::exit(1);
    }

    let command = args[1].as_str();
    if matches!(command, "help" | "--help" | "-h") {
        print_usage();
        return;
    }

    let (options, files) = match parse_options(&args[2..]) {
        Ok(parsed) => parsed,
        Err(e) => {
            eprintln!("error: {e}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    };
    init_tracing(options.verbose);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let result = match command {
        "lex" | "names" | "graphemes" => {
            if files.is_empty() {
                eprintln!("Usage: quill {command} <file>... [options]");
                std::process::exit(1);
            }
            match command {
                "lex" => lex_files(&files, &options, &mut out),
                "names" => name_files(&files, &options, &mut out),
                _ => cluster_files(&files, &options, &mut out),
            }
        }
        "encode" => {
            if !files.is_empty() {
                eprintln!("Usage: quill encode [--column=<n>] [--json] < input");
                std::process::exit(1);
            }
            encode_stdin(&mut io::stdin().lock(), &options, &mut out).map(|()| 0)
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    };

    let flushed = result.and_then(|errors| out.flush().map(|()| errors));
    report_stats(&options);

    match flushed {
        Ok(0) => {}
        Ok(errors) => {
            eprintln!("{errors} error(s)");
            std::process::exit(1);
        }
        // A closed pipe is not worth a message.
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => std::process::exit(1),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}

fn report_stats(options: &CliOptions) {
    if options.stats {
        let table = SymbolTable::global();
        eprintln!("symbols interned: {}", table.len());
    }
}

fn print_usage() {
    eprintln!("Quill literal toolkit");
    eprintln!();
    eprintln!("Usage: quill <command> [options]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  lex <file>...        List string literals and their decoded values");
    eprintln!("  names <file>...      Show the Unicode name of every literal character");
    eprintln!("  graphemes <file>...  Split literal values into clusters");
    eprintln!("  encode               Spell stdin as a string literal");
    eprintln!("  help                 Show this message");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --json               Machine-readable output");
    eprintln!("  --stats              Print symbol table statistics to stderr");
    eprintln!("  --strategy=<name>    Clustering: extended (default), legacy, codepoint");
    eprintln!("  --max-cluster=<n>    Longest cluster before splitting (default: 32)");
    eprintln!("  --column=<n>         Column of the opening quotes for encode (default: 0)");
    eprintln!("  --no-parallel        Process files one at a time");
    eprintln!("  -v, --verbose        Debug logging (RUST_LOG overrides)");
}

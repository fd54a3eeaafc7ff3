//! Scene/command tokenizer CLI.

use scnc::commands::{lex_file, tokenize_commands, LexOptions};

fn main() {
    scn_tokenizer::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "lex" => {
            let (options, path) = match LexOptions::parse(&args[2..]) {
                Ok(parsed) => parsed,
                Err(e) => {
                    eprintln!("error: {e}");
                    std::process::exit(1);
                }
            };
            let Some(path) = path else {
                eprintln!("Usage: scnc lex <file> [options]");
                eprintln!();
                eprintln!("Options:");
                eprintln!("  --command             Use the console-command preset");
                eprintln!("  --max-len=<n>         Token capacity including terminator");
                eprintln!("  --overflow=<policy>   truncate (default) or reject");
                eprintln!("  --reject-overflow     Same as --overflow=reject");
                eprintln!("  --cross-line          Accepted for compatibility; no effect");
                std::process::exit(1);
            };
            lex_file(&path, &options);
        }
        "cmd" => {
            if args.len() < 3 {
                eprintln!("Usage: scnc cmd <command line...>");
                std::process::exit(1);
            }
            tokenize_commands(&args[2..].join(" "));
        }
        "help" | "--help" | "-h" => print_usage(),
        "version" | "--version" | "-V" => {
            println!("scnc {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Scene/command tokenizer");
    println!();
    println!("Usage: scnc <command> [options]");
    println!();
    println!("Commands:");
    println!("  lex <file>        Tokenize a scene script and list tokens");
    println!("  cmd <line...>     Split console commands into argv");
    println!("  help              Show this help message");
    println!("  version           Show version information");
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=scn_tokenizer=trace) for diagnostics.");
}

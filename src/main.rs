use std::fs;

use arsharp::Interpreter;
use clap::Parser;

/// arsharp is an interpreter for ArSharp, a toy line-oriented scripting
/// language with C++-flavored syntax.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells arsharp to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    contents: String,
}

fn main() {
    env_logger::init();

    let args = Args::parse();

    let script = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    let mut interpreter = Interpreter::new(script);
    if let Err(e) = interpreter.execute() {
        eprintln!("{e}");
    }
}

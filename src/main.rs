use std::io::{self, BufRead, Write};

use clap::Parser;
use minicalc::evaluate;

/// minicalc evaluates simple mathematical expressions from the command line.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Expression to evaluate. If omitted an interactive prompt is shown.
    #[arg(allow_hyphen_values = true)]
    expression: Option<String>,
}

fn main() {
    let args = Args::parse();

    match args.expression {
        Some(expression) => match evaluate(&expression) {
            Ok(result) => println!("{result}"),
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            },
        },
        None => repl(),
    }
}

/// Runs the interactive read-eval-print loop.
///
/// Reads one expression per line, printing either the result or an
/// `Error: <message>` line. Errors never terminate the loop; `quit`, `exit`
/// (case-insensitive), or end-of-input do.
fn repl() {
    println!("Simple Calculator. Type 'quit' or 'exit' to stop.");

    let stdin = io::stdin();
    let mut line = String::new();

    loop {
        print!("calc> ");
        let _ = io::stdout().flush();

        line.clear();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => {
                println!();
                break;
            },
            Ok(_) => {},
            Err(_) => break,
        }

        let input = line.trim();
        if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("exit") {
            break;
        }

        match evaluate(input) {
            Ok(result) => println!("{result}"),
            Err(e) => println!("Error: {e}"),
        }
    }
}

//! `chemlex` command line interface.
//!
//! Usage: `chemlex [--anchored] [EQUATION...]`. Without an equation argument, one line is read
//! from stdin.

use std::{
    env,
    io::{self, BufRead, Write},
    process::ExitCode,
};

use chemlex::{
    base::{
        log::{Message, Severity},
        Error, PrintHandler, Result,
    },
    catalog::PeriodicTable,
    report::ElementReport,
    syntax::checker::ArrowRule,
};

fn main() -> ExitCode {
    let mut rule = ArrowRule::Scan;
    let mut words = Vec::new();

    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--anchored" => rule = ArrowRule::Anchored,
            "--help" | "-h" => {
                println!("Usage: chemlex [--anchored] [EQUATION...]");
                return ExitCode::SUCCESS;
            }
            _ => words.push(arg),
        }
    }

    let equation = if words.is_empty() {
        match prompt_equation() {
            Ok(equation) => equation,
            Err(err) => {
                eprintln!("{}", Message::new(Severity::Error, err));
                return ExitCode::FAILURE;
            }
        }
    } else {
        words.join(" ")
    };

    // the handler prints the diagnostic
    match chemlex::check(&equation, &PeriodicTable, rule, &PrintHandler::new()) {
        Ok(tokens) => {
            println!(
                "{}",
                Message::new(Severity::Info, "The equation is syntactically correct.")
            );
            print!("{}", ElementReport::from_tokens(&tokens, &PeriodicTable));
            ExitCode::SUCCESS
        }
        Err(_) => ExitCode::FAILURE,
    }
}

/// Asks for one equation on stdin.
fn prompt_equation() -> Result<String> {
    print!("Enter a chemical equation: ");
    io::stdout()
        .flush()
        .map_err(|err| Error::IoError(err.to_string()))?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .map_err(|err| Error::IoError(err.to_string()))?;

    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

// rpncalc: infix to postfix calculator

use std::borrow::Cow;
use std::ffi::OsString;

use rpncalc::constants::{EXIT_FAILURE, EXIT_USAGE};
use rpncalc::evaluator::evaluate;
use rpncalc::format_result;
use rpncalc::notation::translate;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Vec<OsString> = std::env::args_os().collect();

    if args.len() < 2 {
        let program_name = args
            .first()
            .map(|s| s.to_string_lossy())
            .unwrap_or(Cow::Borrowed("rpncalc"));
        eprintln!("Error: No expression provided");
        eprintln!();
        eprintln!("Usage: {} <expression>", program_name);
        eprintln!();
        eprintln!("Examples:");
        eprintln!("  {} \"2+3*4\"       # prints 14.000000", program_name);
        eprintln!("  {} \"6/3 + 2*5\"   # whitespace is ignored", program_name);
        std::process::exit(EXIT_USAGE);
    }

    let Some(infix) = args[1].to_str() else {
        eprintln!("Error: expression is not valid UTF-8");
        std::process::exit(EXIT_FAILURE);
    };

    let postfix = match translate(infix) {
        Ok(postfix) => postfix,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(EXIT_FAILURE);
        }
    };

    match evaluate(&postfix) {
        Ok(result) => println!("{}", format_result(result)),
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("Postfix: {}", postfix.trim_end());
            std::process::exit(EXIT_FAILURE);
        }
    }

    Ok(())
}

use std::{env, fs::read_to_string, process::exit};

use laszlo_highlight::classifier::classifier::classify_source;
use laszlo_highlight::mode::laszlo;

/// Development driver: classify a laszlo source file and dump every
/// token, one per line, as `line:start..end  category  text`.
fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        eprintln!("Usage: {} <file>", args[0]);
        exit(1);
    }

    let file_path = &args[1];
    let file_contents = match read_to_string(file_path) {
        Ok(contents) => contents,
        Err(error) => {
            eprintln!("Failed to read {}: {}", file_path, error);
            exit(1);
        }
    };

    let mode = laszlo::mode();
    let lines = match classify_source(mode.rules(), &file_contents) {
        Ok(lines) => lines,
        Err(error) => {
            eprintln!("Error: {}", error);
            exit(1);
        }
    };

    for (number, line) in lines.iter().enumerate() {
        for token in &line.tokens {
            println!("{}:{}", number + 1, token);
        }
    }
}

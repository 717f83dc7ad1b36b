// SPDX-License-Identifier: Apache-2.0

use std::fs::File;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use naivejson::{parse_with_stack_size, Value, ValueKind, DEFAULT_STACK_INIT_SIZE};

/// Parse a JSON scalar document and print what it contains.
#[derive(Parser, Debug)]
#[command(name = "naivejson-check", version)]
struct Args {
    /// Input file; reads standard input when omitted or "-".
    file: Option<PathBuf>,

    /// Initial size in bytes of the string scratch stack.
    #[arg(long, default_value_t = DEFAULT_STACK_INIT_SIZE as u64, value_parser = clap::value_parser!(u64).range(2..))]
    stack_size: u64,
}

fn read_input(file: Option<&PathBuf>) -> io::Result<Vec<u8>> {
    let mut buf = Vec::new();
    match file {
        Some(path) if path.as_os_str() != "-" => {
            File::open(path)?.read_to_end(&mut buf)?;
        }
        _ => {
            io::stdin().lock().read_to_end(&mut buf)?;
        }
    }
    Ok(buf)
}

fn print_value(v: &Value) {
    match v.kind() {
        ValueKind::Null => println!("null"),
        ValueKind::True => println!("true"),
        ValueKind::False => println!("false"),
        ValueKind::Number => println!("number {}", v.number()),
        ValueKind::String => println!(
            "string ({} bytes) {}",
            v.string_len(),
            String::from_utf8_lossy(v.string())
        ),
        other => println!("{:?}", other),
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let input = match read_input(args.file.as_ref()) {
        Ok(input) => input,
        Err(e) => {
            eprintln!("Error: unable to read input: {}", e);
            return ExitCode::FAILURE;
        }
    };
    log::info!("read {} bytes", input.len());

    let stack_size = usize::try_from(args.stack_size).unwrap_or(DEFAULT_STACK_INIT_SIZE);
    let mut value = Value::default();
    match parse_with_stack_size(&mut value, &input, stack_size) {
        Ok(()) => {
            print_value(&value);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: JSON parsing failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

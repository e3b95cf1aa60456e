//! Command-line tool for extracting values from management-object names.
//!
//! Usage: kpl [OPTIONS] [NAME...]
//!
//! Options:
//!   -n, --object-names     Inputs are whole names (domain:key=value,...)
//!   -f, --file <FILE>      Read inputs from FILE, one per line ("-" for stdin)
//!   -t, --to <FORMAT>      Output format (label, lines, json, yaml, toml, cbor)
//!                          [default: label]
//!   -s, --separator <SEP>  Separator between values in labels [default: ", "]
//!   -o, --output <FILE>    Write output to specified file
//!   -v, --verbose          Debug logging on stderr
//!   -q, --quiet            Only log errors
//!   -h, --help             Print help
//!   -V, --version          Print version
//!
//! With no NAME and no --file, inputs are read from stdin.

use std::fs;
use std::io::{self, BufRead, Write};
use std::process;

use libkpl::DEFAULT_SEPARATOR;
use tracing::{debug, info};

mod encode;
mod logging;
mod record;
mod transcode;

use encode::Format;
use logging::Verbosity;
use record::Record;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mut object_names = false;
    let mut input_file: Option<&str> = None;
    let mut to_format: Option<&str> = None;
    let mut separator: &str = DEFAULT_SEPARATOR;
    let mut output_file: Option<&str> = None;
    let mut verbosity = Verbosity::Normal;
    let mut names: Vec<&str> = Vec::new();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_help();
                return;
            }
            "-V" | "--version" => {
                println!("kpl {}", env!("CARGO_PKG_VERSION"));
                return;
            }
            "-n" | "--object-names" => {
                object_names = true;
            }
            "-f" | "--file" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --file requires an argument");
                    process::exit(1);
                }
                input_file = Some(&args[i]);
            }
            "-t" | "--to" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: -t requires a format argument");
                    process::exit(1);
                }
                if Format::from_name(&args[i]).is_none() {
                    eprintln!("Error: Unknown format: {}", args[i]);
                    process::exit(1);
                }
                to_format = Some(&args[i]);
            }
            "-s" | "--separator" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --separator requires an argument");
                    process::exit(1);
                }
                separator = &args[i];
            }
            "-o" | "--output" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --output requires an argument");
                    process::exit(1);
                }
                output_file = Some(&args[i]);
            }
            "-v" | "--verbose" => {
                verbosity = Verbosity::Verbose;
            }
            "-q" | "--quiet" => {
                verbosity = Verbosity::Quiet;
            }
            "--" => {
                // Everything after "--" is a name, even if it starts with "-"
                names.extend(args[i + 1..].iter().map(String::as_str));
                break;
            }
            arg if arg.starts_with('-') => {
                eprintln!("Error: Unknown option: {}", arg);
                process::exit(1);
            }
            arg => {
                names.push(arg);
            }
        }
        i += 1;
    }

    logging::init(verbosity);

    let format = to_format.and_then(Format::from_name).unwrap_or(Format::Label);

    let inputs = match collect_inputs(&names, input_file) {
        Ok(inputs) => inputs,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
    debug!(count = inputs.len(), ?format, "collected inputs");

    let mut had_errors = false;
    let mut records = Vec::with_capacity(inputs.len());
    for input in &inputs {
        if object_names {
            match Record::from_object_name(input) {
                Ok(record) => records.push(record),
                Err(e) => {
                    eprintln!("Error: {}", e);
                    had_errors = true;
                }
            }
        } else {
            records.push(Record::from_list(input));
        }
    }

    let output = match encode::encode(&records, format, separator) {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = write_output(&output, output_file) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
    info!(records = records.len(), bytes = output.len(), "done");

    if had_errors {
        process::exit(1);
    }
}

/// Gather inputs from positional names and then from the input file.
/// Without either, inputs come from stdin.
fn collect_inputs(names: &[&str], input_file: Option<&str>) -> Result<Vec<String>, String> {
    let mut inputs: Vec<String> = names.iter().map(|s| s.to_string()).collect();

    match input_file {
        Some("-") => read_lines(io::stdin().lock(), &mut inputs)
            .map_err(|e| format!("reading stdin: {}", e))?,
        Some(path) => {
            let file = fs::File::open(path).map_err(|e| format!("reading {}: {}", path, e))?;
            read_lines(io::BufReader::new(file), &mut inputs)
                .map_err(|e| format!("reading {}: {}", path, e))?
        }
        None if names.is_empty() => read_lines(io::stdin().lock(), &mut inputs)
            .map_err(|e| format!("reading stdin: {}", e))?,
        None => {}
    }

    Ok(inputs)
}

/// Append each non-blank line, without its line terminator.
fn read_lines<R: BufRead>(reader: R, inputs: &mut Vec<String>) -> io::Result<()> {
    for line in reader.lines() {
        let line = line?;
        let line = line.strip_suffix('\r').unwrap_or(&line);
        if !line.trim().is_empty() {
            inputs.push(line.to_string());
        }
    }
    Ok(())
}

fn write_output(output: &[u8], output_file: Option<&str>) -> Result<(), String> {
    match output_file {
        Some(path) => {
            fs::write(path, output).map_err(|e| format!("writing {}: {}", path, e))?;
            debug!(path, "wrote output");
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(output)
                .and_then(|_| stdout.flush())
                .map_err(|e| format!("writing stdout: {}", e))?;
        }
    }
    Ok(())
}

fn print_help() {
    println!(
        r#"kpl - extract values from management-object names

Usage: kpl [OPTIONS] [NAME...]

Arguments:
  [NAME...]  Key-property lists (or whole names with -n); stdin when absent

Options:
  -n, --object-names     Inputs are whole names (domain:key=value,...)
  -f, --file <FILE>      Read inputs from FILE, one per line ("-" for stdin)
  -t, --to <FORMAT>      Output format [default: label]
  -s, --separator <SEP>  Separator between values in labels [default: ", "]
  -o, --output <FILE>    Write output to specified file
  -v, --verbose          Debug logging on stderr
  -q, --quiet            Only log errors
  -h, --help             Print help
  -V, --version          Print version

Formats:
  label    One line per input, values joined by the separator
  lines    One value per line, blank line between inputs
  json     JSON array of {{input, domain, values}}
  yaml     YAML sequence of {{input, domain, values}}
  toml     TOML [[names]] tables
  cbor     CBOR array of maps

Environment:
  KPL_LOG    Log level (trace, debug, info, warn, error) [default: warn]
  RUST_LOG   Full tracing filter; overrides -v, -q, and KPL_LOG

Examples:
  kpl 'type=Cat,name="Tom, the cat"'
  kpl -n -t json 'zoo:type=Cat,name=Tom'
  kpl -n -f names.txt -t yaml -o values.yaml"#
    );
}

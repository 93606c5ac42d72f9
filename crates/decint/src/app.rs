//! Protocol evaluation loop.
//!
//! One request per line, one response per line. Every error a request
//! can produce (parse failures, domain errors, divide by zero) is
//! caught and answered as `EXC <message>`; only I/O failures abort the
//! loop.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};

use anyhow::Result;

use decint_core::{IntegerError, SignedInteger, UnsignedInteger};

use crate::config::AppConfig;

/// Run the evaluation loop over stdin or the configured input file.
///
/// # Errors
///
/// Returns an error when the input file cannot be opened or a line
/// cannot be read or written.
pub fn run(config: &AppConfig) -> Result<()> {
    let stdout = io::stdout().lock();
    match &config.input {
        Some(path) => process_lines(BufReader::new(File::open(path)?), stdout),
        None => process_lines(io::stdin().lock(), stdout),
    }
}

/// Evaluate every line of `input`, writing one response per request.
pub fn process_lines<R: BufRead, W: Write>(input: R, mut output: W) -> Result<()> {
    for line in input.lines() {
        if let Some(response) = evaluate_line(&line?) {
            writeln!(output, "{response}")?;
        }
    }
    Ok(())
}

/// Evaluate one protocol line; `None` skips blank lines.
fn evaluate_line(line: &str) -> Option<String> {
    let mut tokens = line.split_whitespace();
    let (kind, op, a) = match (tokens.next(), tokens.next(), tokens.next()) {
        (Some(kind), Some(op), Some(a)) => (kind, op, a),
        (None, ..) => return None,
        _ => return Some("EXC invalid input".to_string()),
    };
    let b = tokens.next();
    if matches!(op, "add" | "sub" | "mul" | "div" | "mod" | "cmp") && b.is_none() {
        return Some("EXC missing operand".to_string());
    }

    let outcome = match kind {
        "U" => evaluate_unsigned(op, a, b),
        "S" => evaluate_signed(op, a, b),
        _ => Err("unknown type".to_string()),
    };
    Some(match outcome {
        Ok(result) => format!("OK {result}"),
        Err(message) => format!("EXC {message}"),
    })
}

fn parse<T: std::str::FromStr<Err = IntegerError>>(text: &str) -> Result<T, String> {
    text.parse().map_err(|error: IntegerError| error.to_string())
}

fn report(error: IntegerError) -> String {
    error.to_string()
}

fn evaluate_unsigned(op: &str, a: &str, b: Option<&str>) -> Result<String, String> {
    if !matches!(
        op,
        "to_str" | "to_u64" | "to_double" | "add" | "sub" | "mul" | "div" | "mod" | "cmp"
    ) {
        return Err("unknown op".to_string());
    }
    let a: UnsignedInteger = parse(a)?;
    match op {
        "to_str" => Ok(a.to_string()),
        "to_u64" => Ok(a.to_u64().to_string()),
        "to_double" => Ok(format!("{:.0}", a.to_f64())),
        "add" | "sub" | "mul" | "div" | "mod" | "cmp" => {
            let b: UnsignedInteger = parse(b.unwrap_or_default())?;
            match op {
                "add" => Ok((&a + &b).to_string()),
                "sub" => a.checked_sub(&b).map(|v| v.to_string()).map_err(report),
                "mul" => a.checked_mul(&b).map(|v| v.to_string()).map_err(report),
                "div" => a.checked_div(&b).map(|v| v.to_string()).map_err(report),
                "mod" => a.checked_rem(&b).map(|v| v.to_string()).map_err(report),
                _ => Ok((a.cmp(&b) as i8).to_string()),
            }
        }
        _ => Err("unknown op".to_string()),
    }
}

fn evaluate_signed(op: &str, a: &str, b: Option<&str>) -> Result<String, String> {
    if !matches!(
        op,
        "to_str" | "to_s64" | "to_u64" | "to_double" | "add" | "sub" | "mul" | "div" | "mod" | "cmp"
    ) {
        return Err("unknown op".to_string());
    }
    let a: SignedInteger = parse(a)?;
    match op {
        "to_str" => Ok(a.to_string()),
        "to_s64" => Ok(a.to_i64().to_string()),
        "to_u64" => a.to_u64().map(|v| v.to_string()).map_err(report),
        "to_double" => Ok(format!("{:.0}", a.to_f64())),
        "add" | "sub" | "mul" | "div" | "mod" | "cmp" => {
            let b: SignedInteger = parse(b.unwrap_or_default())?;
            match op {
                "add" => Ok((&a + &b).to_string()),
                "sub" => Ok((&a - &b).to_string()),
                "mul" => a.checked_mul(&b).map(|v| v.to_string()).map_err(report),
                "div" => a.checked_div(&b).map(|v| v.to_string()).map_err(report),
                "mod" => a.checked_rem(&b).map(|v| v.to_string()).map_err(report),
                _ => Ok((a.cmp(&b) as i8).to_string()),
            }
        }
        _ => Err("unknown op".to_string()),
    }
}

//! Interactive yes/no confirmation
//!
//! Reads from any `BufRead` so the driver can be exercised without a terminal.

use std::io::{self, BufRead, Write};

const RETRY_HINT: &str = "Please respond with 'yes' or 'no' (or 'y' or 'n').";

/// Ask `question` until the answer is recognised
///
/// An empty answer picks `default` when one is given. End of input is an
/// error since the operator can no longer answer.
pub fn confirm<R: BufRead, W: Write>(
    question: &str,
    default: Option<bool>,
    input: &mut R,
    output: &mut W,
) -> io::Result<bool> {
    let suffix = match default {
        None => " [y/n] ",
        Some(true) => " [Y/n] ",
        Some(false) => " [y/N] ",
    };

    loop {
        write!(output, "{}{}", question, suffix)?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "no answer to confirmation prompt",
            ));
        }

        let line = line.trim_end_matches(['\r', '\n']);
        let answer = if line.is_empty() {
            default
        } else {
            parse_answer(line)
        };

        match answer {
            Some(answer) => return Ok(answer),
            None => writeln!(output, "{}", RETRY_HINT)?,
        }
    }
}

/// `Some(true)` for y/ye/yes, `Some(false)` for n/no, otherwise `None`
///
/// Only case is ignored; surrounding spaces make the answer invalid.
pub fn parse_answer(line: &str) -> Option<bool> {
    match line.to_lowercase().as_str() {
        "y" | "ye" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

// src/cli/prompt.rs
use std::io::{self, BufRead, Write};
use thiserror::Error;

pub const MIN_PASSWORD_LENGTH: usize = 8;

pub const LENGTH_PROMPT: &str = "Enter the desired password length (minimum 8): ";
pub const INVALID_NUMBER: &str = "Invalid input. Please enter a numeric value.";
pub const LENGTH_TOO_SHORT: &str = "Password length must be at least 8 characters. Try again.";

#[derive(Debug, Error)]
pub enum PromptError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Input stream closed")]
    InputClosed,
}

pub type Result<T> = std::result::Result<T, PromptError>;

/// Print `prompt` and read one line. `Ok(None)` means end of input.
pub fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> io::Result<Option<String>> {
    write!(output, "{}", prompt)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

/// Keep asking until the user enters a length of at least 8.
pub fn read_password_length<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<usize> {
    loop {
        let line = ask(input, output, LENGTH_PROMPT)?.ok_or(PromptError::InputClosed)?;

        let value = match line.trim().parse::<i64>() {
            Ok(value) => value,
            Err(e) => {
                log::debug!("Rejected length input {:?}: {}", line.trim(), e);
                writeln!(output, "{}", INVALID_NUMBER)?;
                continue;
            }
        };

        match usize::try_from(value) {
            Ok(length) if length >= MIN_PASSWORD_LENGTH => return Ok(length),
            _ => {
                log::debug!("Rejected length {} below minimum", value);
                writeln!(output, "{}", LENGTH_TOO_SHORT)?;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(input: &str) -> (Result<usize>, String) {
        let mut input = Cursor::new(input.as_bytes().to_vec());
        let mut output = Vec::new();
        let result = read_password_length(&mut input, &mut output);
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn accepts_minimum() {
        let (result, output) = run("8\n");
        assert_eq!(result.unwrap(), 8);
        assert_eq!(output, LENGTH_PROMPT);
    }

    #[test]
    fn rejects_non_numeric_then_reprompts() {
        let (result, output) = run("abc\n12\n");
        assert_eq!(result.unwrap(), 12);
        assert_eq!(output, format!("{LENGTH_PROMPT}{INVALID_NUMBER}\n{LENGTH_PROMPT}"));
    }

    #[test]
    fn rejects_short_then_reprompts() {
        let (result, output) = run("5\n8\n");
        assert_eq!(result.unwrap(), 8);
        assert_eq!(output, format!("{LENGTH_PROMPT}{LENGTH_TOO_SHORT}\n{LENGTH_PROMPT}"));
    }

    #[test]
    fn negative_and_zero_are_too_short() {
        let (result, output) = run("-20\n0\n9\n");
        assert_eq!(result.unwrap(), 9);
        assert_eq!(output.matches(LENGTH_TOO_SHORT).count(), 2);
        assert!(!output.contains(INVALID_NUMBER));
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        let (result, _) = run("   64  \r\n");
        assert_eq!(result.unwrap(), 64);
    }

    #[test]
    fn no_upper_bound() {
        let (result, _) = run("100000\n");
        assert_eq!(result.unwrap(), 100_000);
    }

    #[test]
    fn decimals_and_empty_lines_are_not_numbers() {
        let (result, output) = run("8.5\n\n10\n");
        assert_eq!(result.unwrap(), 10);
        assert_eq!(output.matches(INVALID_NUMBER).count(), 2);
    }

    #[test]
    fn separators_and_non_ascii_digits_are_not_numbers() {
        let (result, output) = run("1_000\n\u{FF18}\n12\n");
        assert_eq!(result.unwrap(), 12);
        assert_eq!(output.matches(INVALID_NUMBER).count(), 2);
    }

    #[test]
    fn eof_reports_closed_input() {
        let (result, _) = run("abc\n");
        assert!(matches!(result, Err(PromptError::InputClosed)));
    }

    #[test]
    fn ask_returns_line_and_none_on_eof() {
        let mut input = Cursor::new(b"yes\n".to_vec());
        let mut output = Vec::new();
        assert_eq!(ask(&mut input, &mut output, "> ").unwrap().as_deref(), Some("yes\n"));
        assert_eq!(ask(&mut input, &mut output, "> ").unwrap(), None);
        assert_eq!(output, b"> > ");
    }
}

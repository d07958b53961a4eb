// src/cli/session.rs
use std::io::{self, BufRead, Write};
use thiserror::Error;

use super::prompt::{self, PromptError};
use crate::generators::{GeneratorError, PasswordGenerator};

pub const WELCOME: &str = "Welcome to the Random Password Generator!";
pub const AGAIN_PROMPT: &str = "Would you like to generate another password? (yes/no): ";
pub const GOODBYE: &str = "Thank you for using the Random Password Generator. Goodbye!";

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Generator error: {0}")]
    Generator(#[from] GeneratorError),
}

pub type Result<T> = std::result::Result<T, SessionError>;

/// Interactive loop: read a length, show a password, ask whether to go again.
///
/// Returns the number of passwords shown. Closing the input is treated the
/// same as answering anything other than "yes".
pub fn run_session<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    generator: &mut PasswordGenerator,
) -> Result<usize> {
    writeln!(output, "{}", WELCOME)?;
    let mut generated = 0;

    loop {
        let length = match prompt::read_password_length(input, output) {
            Ok(length) => length,
            Err(PromptError::InputClosed) => {
                log::info!("Input closed while waiting for a length");
                writeln!(output)?;
                break;
            }
            Err(PromptError::Io(e)) => return Err(e.into()),
        };

        let password = generator.generate(length)?;
        generated += 1;
        writeln!(output, "\nYour generated password is: {}\n", password)?;

        let again = prompt::ask(input, output, AGAIN_PROMPT)?.unwrap_or_default();
        if again.trim().to_lowercase() != "yes" {
            break;
        }
    }

    writeln!(output, "\n{}", GOODBYE)?;
    log::info!("Session finished after {} password(s)", generated);
    Ok(generated)
}

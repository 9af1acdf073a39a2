//! Terminal CLI errors that map to specific exit codes.

use crate::constants::exit_codes;

#[derive(Debug)]
pub struct CliError {
    code: i32,
    lines: Vec<String>,
}

impl CliError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            code: exit_codes::NOT_FOUND,
            lines: vec![message.into()],
        }
    }

    /// One line per validation message, in the order they were produced.
    pub fn invalid_input(messages: &[String]) -> Self {
        Self {
            code: exit_codes::INVALID_INPUT,
            lines: messages.to_vec(),
        }
    }

    pub fn not_ready(message: impl Into<String>) -> Self {
        Self {
            code: exit_codes::NOT_READY,
            lines: vec![message.into()],
        }
    }

    pub fn exit(self) -> ! {
        for line in &self.lines {
            eprintln!("Error: {}", line);
        }
        std::process::exit(self.code)
    }
}

//! Interactive console session: yes/no prompts and colored status lines.
//!
//! Input and output are injected so commands can be driven from tests.

use std::io::{self, BufRead, Stdout, StdinLock, Write};

use colored::{ColoredString, Colorize};

use crate::patch::PatchError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Bright,
    Cyan,
    Green,
    Yellow,
    Red,
}

impl Tone {
    fn paint(self, message: &str) -> ColoredString {
        match self {
            Tone::Plain => message.normal(),
            Tone::Bright => message.bold(),
            Tone::Cyan => message.cyan(),
            Tone::Green => message.green(),
            Tone::Yellow => message.yellow(),
            Tone::Red => message.red(),
        }
    }
}

pub struct Session<R, W> {
    input: R,
    output: W,
}

impl Session<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Session::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Session { input, output }
    }

    /// Ask a yes/no question.
    ///
    /// Empty input (or end of input) selects the default; otherwise only `y`
    /// counts as yes, after trimming and lowercasing.
    pub fn ask(&mut self, question: &str, default_yes: bool) -> Result<bool, PatchError> {
        let hint = if default_yes { "(Y/n)" } else { "(y/N)" };
        write!(self.output, "{} {}: ", question, hint)
            .and_then(|_| self.output.flush())
            .map_err(prompt_failed)?;

        let mut answer = String::new();
        self.input.read_line(&mut answer).map_err(prompt_failed)?;
        let answer = answer.trim().to_lowercase();

        if answer.is_empty() {
            Ok(default_yes)
        } else {
            Ok(answer == "y")
        }
    }

    pub fn line(&mut self, tone: Tone, message: &str) {
        let _ = writeln!(self.output, "{}", tone.paint(message));
    }

    pub fn step(&mut self, message: &str) {
        self.line(Tone::Cyan, &format!("[*] {}", message));
    }

    pub fn action(&mut self, message: &str) {
        self.line(Tone::Cyan, &format!("[+] {}", message));
    }

    pub fn success(&mut self, message: &str) {
        self.line(Tone::Green, &format!("[SUCCESS] {}", message));
    }

    pub fn info(&mut self, message: &str) {
        self.line(Tone::Bright, &format!("[INFO] {}", message));
    }

    pub fn notice(&mut self, message: &str) {
        self.line(Tone::Yellow, &format!("[INFO] {}", message));
    }

    pub fn warning(&mut self, message: &str) {
        self.line(Tone::Yellow, &format!("[WARNING] {}", message));
    }

    pub fn error(&mut self, message: &str) {
        self.line(Tone::Red, &format!("[ERROR] {}", message));
    }

    /// Report a failed run: the placement hint for a missing application
    /// directory, a generic header otherwise, then the error message.
    pub fn report_error(&mut self, error: &PatchError) {
        match error {
            PatchError::AppDirNotFound { .. } => {
                self.error("This patcher must be placed in the root directory of EchoAPI!");
                self.line(
                    Tone::Yellow,
                    "        Place it next to the \"resources\" folder or pass --root.",
                );
            }
            _ => self.error("An error occurred:"),
        }
        self.line(Tone::Red, &error.to_string());
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

fn prompt_failed(e: io::Error) -> PatchError {
    PatchError::PromptFailed {
        reason: e.to_string(),
    }
}

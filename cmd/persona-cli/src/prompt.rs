use std::io::{self, BufRead, Write};

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),
}

/// Line-based prompts for profile fields.
///
/// End of input reads as an empty answer.
pub struct Prompt<R, W> {
    reader: R,
    writer: W,
}

impl Prompt<io::StdinLock<'static>, io::Stderr> {
    pub fn stdio() -> Self {
        Prompt::new(io::stdin().lock(), io::stderr())
    }
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Prompt { reader, writer }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    pub fn text(&mut self, label: &str) -> Result<String, Error> {
        write!(self.writer, "{label}: ")?;
        self.read_answer()
    }

    /// Shows `current` and keeps it when the answer is empty.
    pub fn edit(&mut self, label: &str, current: &str) -> Result<String, Error> {
        write!(self.writer, "{label} [{current}]: ")?;
        let answer = self.read_answer()?;
        Ok(if answer.is_empty() {
            current.to_string()
        } else {
            answer
        })
    }

    pub fn confirm(&mut self, question: &str) -> Result<bool, Error> {
        write!(self.writer, "{question} (y/N): ")?;
        let answer = self.read_answer()?.to_lowercase();
        Ok(answer == "y" || answer == "yes")
    }

    fn read_answer(&mut self) -> Result<String, Error> {
        self.writer.flush()?;
        let mut line = String::new();
        self.reader.read_line(&mut line)?;
        Ok(line.trim().to_string())
    }
}

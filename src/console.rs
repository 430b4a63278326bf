//! Text front end for a desk session

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use crate::{
    error::AppResult,
    session::{Frontend, Message, Prompt},
};

/// Line-oriented console over any reader/writer pair
pub struct ConsoleFrontend<R, W> {
    input: R,
    output: W,
}

impl ConsoleFrontend<StdinLock<'static>, Stdout> {
    /// Console bound to the process's stdin and stdout
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsoleFrontend<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}

impl<R: BufRead, W: Write> Frontend for ConsoleFrontend<R, W> {
    fn prompt(&mut self, prompt: Prompt) -> AppResult<Option<String>> {
        writeln!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        // Titles are matched exactly, so only the line ending is dropped
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn display(&mut self, message: &Message) -> AppResult<()> {
        writeln!(self.output, "{}", message)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_prompt_reads_line() {
        let mut console = ConsoleFrontend::new(Cursor::new("The Hunger Games \r\nnext\n"), Vec::new());

        let answer = console.prompt(Prompt::BookTitle).unwrap();
        assert_eq!(answer.as_deref(), Some("The Hunger Games "));
        assert_eq!(console.prompt(Prompt::LoanAction).unwrap().as_deref(), Some("next"));
        assert_eq!(console.prompt(Prompt::MenuChoice).unwrap(), None);

        let (_, output) = console.into_inner();
        let output = String::from_utf8(output).unwrap();
        assert!(output.starts_with("Which book would you like to borrow or return?\n"));
    }

    #[test]
    fn test_display_catalog() {
        let mut console = ConsoleFrontend::new(Cursor::new(""), Vec::new());
        let books = vec![crate::models::BookShort {
            title: "The Hunger Games".to_string(),
            author: "Suzanne Collins".to_string(),
        }];
        console.display(&Message::Catalog(books)).unwrap();

        let (_, output) = console.into_inner();
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "Books available in the library:\nThe Hunger Games by Suzanne Collins\n"
        );
    }
}

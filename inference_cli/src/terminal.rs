//! Terminal ask collaborator - numbered prompts on a text stream.

use inference_core::{Answer, AskCollaborator, InferenceError, PresentedQuestion, Result};
use std::io::{BufRead, Write};

/// Token that ends a multi-choice answer.
const FINISH: &str = "#";

/// Asks questions over any line-based input and output.
pub struct TerminalAsker<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TerminalAsker<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    #[cfg(test)]
    fn into_output(self) -> W {
        self.output
    }

    fn print_question(&mut self, question: &PresentedQuestion) -> std::io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "{}", question.prompt)?;
        if !question.single_choice {
            writeln!(
                self.output,
                "Several answers allowed: enter option numbers and finish with {FINISH}"
            )?;
        }
        for (index, option) in question.options.iter().enumerate() {
            writeln!(self.output, "({index}) {option}")?;
        }
        self.output.flush()
    }

    fn read_line(&mut self) -> Result<String> {
        write!(self.output, "> ").map_err(io_error)?;
        self.output.flush().map_err(io_error)?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line).map_err(io_error)?;
        if read == 0 {
            return Err(InferenceError::Collaborator("input closed".to_string()));
        }
        Ok(line.trim().to_string())
    }

    fn invalid(&mut self, entry: &str) -> Result<()> {
        writeln!(self.output, "invalid input: {entry:?}").map_err(io_error)
    }

    fn ask_single(&mut self, question: &PresentedQuestion) -> Result<Answer> {
        let line = self.read_line()?;
        match line.parse::<usize>().ok().and_then(|i| question.option_at(i)) {
            Some(option) => Ok(Answer::one(option)),
            None => {
                self.invalid(&line)?;
                Ok(Answer::Pending)
            }
        }
    }

    fn ask_multi(&mut self, question: &PresentedQuestion) -> Result<Answer> {
        let mut picked: Vec<String> = Vec::new();
        loop {
            let line = self.read_line()?;
            for token in line.split(|c: char| c == ',' || c.is_whitespace()) {
                if token.is_empty() {
                    continue;
                }
                if token == FINISH {
                    return Ok(Answer::Selected(picked));
                }
                match token.parse::<usize>().ok().and_then(|i| question.option_at(i)) {
                    Some(option) if !picked.iter().any(|p| p == option) => {
                        picked.push(option.to_string())
                    }
                    Some(_) => {}
                    None => self.invalid(token)?,
                }
            }
        }
    }
}

impl<R: BufRead, W: Write> AskCollaborator for TerminalAsker<R, W> {
    fn ask(&mut self, question: &PresentedQuestion) -> Result<Answer> {
        self.print_question(question).map_err(io_error)?;
        if question.single_choice {
            self.ask_single(question)
        } else {
            self.ask_multi(question)
        }
    }

    fn rejected(&mut self, _question: &PresentedQuestion, error: &InferenceError) {
        // Output errors surface on the next read.
        let _ = writeln!(self.output, "{error}");
    }
}

fn io_error(e: std::io::Error) -> InferenceError {
    InferenceError::Collaborator(e.to_string())
}

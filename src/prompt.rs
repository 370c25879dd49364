//! Interactive yes/no confirmation.
use std::io::{self, BufRead, Write};

use anyhow::{Context as _, Result};

/// Source of yes/no answers.
#[cfg_attr(test, mockall::automock)]
pub trait Prompt: Send + Sync + std::fmt::Debug {
    /// Ask `question` and return the answer.
    ///
    /// # Errors
    ///
    /// Returns an error if the answer cannot be read.
    fn confirm(&self, question: &str) -> Result<bool>;
}

/// Interpret a typed answer: `y` or `yes` in any case is affirmative.
#[must_use]
pub fn parse_answer(input: &str) -> bool {
    matches!(input.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

/// Asks on stdout and blocks on one line from stdin.  There is no timeout.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdinPrompt;

impl StdinPrompt {
    fn ask(question: &str, input: &mut impl BufRead, output: &mut impl Write) -> Result<bool> {
        write!(output, "{question}").context("writing prompt")?;
        output.flush().context("flushing stdout")?;

        let mut line = String::new();
        // EOF reads zero bytes and leaves `line` empty, which parses as "no".
        input.read_line(&mut line).context("reading answer")?;
        Ok(parse_answer(&line))
    }
}

impl Prompt for StdinPrompt {
    fn confirm(&self, question: &str) -> Result<bool> {
        Self::ask(question, &mut io::stdin().lock(), &mut io::stdout())
    }
}

/// Answers every question the same way without reading input.
#[derive(Debug, Clone, Copy)]
pub struct FixedPrompt(pub bool);

impl Prompt for FixedPrompt {
    fn confirm(&self, _question: &str) -> Result<bool> {
        Ok(self.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn parse_answer_accepts_y_and_yes() {
        for input in ["y", "Y", "yes", "YES", " yes\n", "y\r\n"] {
            assert!(parse_answer(input), "{input:?} should be yes");
        }
    }

    #[test]
    fn parse_answer_rejects_everything_else() {
        for input in ["", "n", "no", "yep", "sure", "\n"] {
            assert!(!parse_answer(input), "{input:?} should be no");
        }
    }

    #[test]
    fn stdin_prompt_writes_question_and_reads_answer() {
        let mut input = io::Cursor::new(b"y\n".to_vec());
        let mut output = Vec::new();
        let answer = StdinPrompt::ask("Continue? (y/n): ", &mut input, &mut output).unwrap();
        assert!(answer);
        assert_eq!(String::from_utf8(output).unwrap(), "Continue? (y/n): ");
    }

    #[test]
    fn stdin_prompt_eof_is_no() {
        let mut input = io::Cursor::new(Vec::new());
        let mut output = Vec::new();
        assert!(!StdinPrompt::ask("Continue? ", &mut input, &mut output).unwrap());
    }

    #[test]
    fn fixed_prompt_answers_without_input() {
        assert!(FixedPrompt(true).confirm("anything").unwrap());
        assert!(!FixedPrompt(false).confirm("anything").unwrap());
    }

    #[test]
    fn mock_prompt_sees_question() {
        let mut prompt = MockPrompt::new();
        prompt
            .expect_confirm()
            .withf(|q| q.contains("Git"))
            .times(1)
            .returning(|_| Ok(false));
        assert!(!prompt.confirm("Initialize Git?").unwrap());
    }
}

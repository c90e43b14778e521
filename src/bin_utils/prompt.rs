use std::{
    io::{BufRead, Write},
    str::FromStr,
};

use anyhow::{Context, Result};

/// Outcome of asking the user for a value.
#[derive(Debug, PartialEq, Eq)]
pub enum Answer<T> {
    Value(T),
    /// The raw text could not be parsed.
    Invalid(String),
    /// Input ended before an answer was given.
    Closed,
}

/// Blocking line-based question/answer over any reader and writer.
pub struct Prompter<'w, R, W: 'w> {
    input: R,
    output: &'w mut W,
}

impl<'w, R, W> Prompter<'w, R, W>
where
    R: BufRead,
    W: Write + 'w,
{
    pub fn new(input: R, output: &'w mut W) -> Self {
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut *self.output
    }

    /// Returns the trimmed line, or `None` once the input is exhausted.
    pub fn question(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{prompt}").context("Failed to write prompt")?;
        self.output.flush().context("Failed to flush prompt")?;
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read answer")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    pub fn question_parsed<T: FromStr>(&mut self, prompt: &str) -> Result<Answer<T>> {
        let Some(raw) = self.question(prompt)? else {
            return Ok(Answer::Closed);
        };
        Ok(match raw.parse() {
            Ok(value) => Answer::Value(value),
            Err(_) => Answer::Invalid(raw),
        })
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    #[test]
    fn answers_are_trimmed_and_parsed() {
        let mut output = Vec::new();
        let mut prompt = Prompter::new("  42 \n12.5\nabc\n".as_bytes(), &mut output);
        assert_eq!(
            prompt.question_parsed::<u32>("branch: ").unwrap(),
            Answer::Value(42)
        );
        assert_eq!(
            prompt.question_parsed::<Decimal>("amount: ").unwrap(),
            Answer::Value(Decimal::new(125, 1))
        );
        assert_eq!(
            prompt.question_parsed::<u32>("number: ").unwrap(),
            Answer::Invalid("abc".to_string())
        );
        assert_eq!(prompt.question_parsed::<u32>("again: ").unwrap(), Answer::Closed);
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "branch: amount: number: again: "
        );
    }
}

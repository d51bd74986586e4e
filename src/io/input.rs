use std::collections::VecDeque;
use std::io::{BufRead, Write};
use thiserror::Error;

/// The source has no more values to give.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Input aborted")]
pub struct Aborted;

/// Produces one float per request, blocking until it has one.
///
/// Implementations deal with malformed text themselves: they either return a
/// valid number or give up with [`Aborted`].
pub trait NumericInputSource {
    fn next_float(&mut self, prompt: &str) -> Result<f64, Aborted>;
}

/// Answers requests from a fixed queue of values.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    values: VecDeque<f64>,
    pub prompts: Vec<String>,
}

impl ScriptedInput {
    pub fn new(values: impl IntoIterator<Item = f64>) -> Self {
        ScriptedInput {
            values: values.into_iter().collect(),
            prompts: vec![],
        }
    }

    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

impl NumericInputSource for ScriptedInput {
    fn next_float(&mut self, prompt: &str) -> Result<f64, Aborted> {
        let value = self.values.pop_front().ok_or(Aborted)?;
        self.prompts.push(prompt.to_owned());
        Ok(value)
    }
}

/// Interactive source: prompts on `output`, reads lines from `input`.
///
/// Accepts `.` or `,` as decimal separator and asks again on anything that
/// does not parse. End of input aborts.
pub struct LineInput<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LineInput<R, W> {
    pub fn new(input: R, output: W) -> Self {
        LineInput { input, output }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}

pub fn parse_float(text: &str) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    text.replace(',', ".").parse::<f64>().ok()
}

impl<R: BufRead, W: Write> NumericInputSource for LineInput<R, W> {
    fn next_float(&mut self, prompt: &str) -> Result<f64, Aborted> {
        loop {
            write!(self.output, "{}", prompt).map_err(|_| Aborted)?;
            self.output.flush().map_err(|_| Aborted)?;

            let mut line = String::new();
            let read = self.input.read_line(&mut line).map_err(|_| Aborted)?;
            if read == 0 {
                log::warn!("end of input while waiting for `{}`", prompt.trim_end());
                return Err(Aborted);
            }

            match parse_float(&line) {
                Some(value) => return Ok(value),
                None => {
                    log::debug!("rejected input {:?}", line.trim_end());
                    writeln!(self.output, "Invalid value. Enter a number again.")
                        .map_err(|_| Aborted)?;
                }
            }
        }
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_input() {
        let mut source = ScriptedInput::new([1.5, -2.0]);
        assert_eq!(source.next_float("a = "), Ok(1.5));
        assert_eq!(source.next_float("b = "), Ok(-2.0));
        assert_eq!(source.next_float("c = "), Err(Aborted));
        assert_eq!(source.prompts, vec!["a = ", "b = "]);
        assert_eq!(source.remaining(), 0);
    }

    #[test]
    fn test_parse_float() {
        assert_eq!(parse_float("3.25\n"), Some(3.25));
        assert_eq!(parse_float(" -0,5 "), Some(-0.5));
        assert_eq!(parse_float("1e-3"), Some(0.001));
        assert_eq!(parse_float(""), None);
        assert_eq!(parse_float("abc"), None);
        assert_eq!(parse_float("1,2,3"), None);
    }

    #[test]
    fn test_line_input_retries() {
        let text = "oops\n\n2,5\n7\n";
        let mut source = LineInput::new(text.as_bytes(), Vec::new());

        assert_eq!(source.next_float("x1 = "), Ok(2.5));
        assert_eq!(source.next_float("x2 = "), Ok(7.0));
        assert_eq!(source.next_float("x3 = "), Err(Aborted));

        let (_, output) = source.into_inner();
        let output = String::from_utf8(output).unwrap();
        assert_eq!(output.matches("Invalid value").count(), 2);
        assert_eq!(output.matches("x1 = ").count(), 3);
        assert!(output.ends_with("x3 = "));
    }
}

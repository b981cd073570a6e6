//! Whitespace token input over any `BufRead`.
//!
//! Sample collection stops at the first token that is not a finite number.
//! That token and the remainder of its line are dropped, so the next
//! prompted read starts on a fresh line.

use std::collections::VecDeque;
use std::io::{self, BufRead};

use ss_stats::{Sample, StatError};
use thiserror::Error;

pub const PROMPT_SAMPLE: &str = "Enter data values (type 'end' to finish): ";
pub const PROMPT_Z_VALUE: &str = "Enter a value for its z-score: ";
pub const PROMPT_CONFIDENCE: &str = "Enter confidence level (0.90, 0.95, 0.99): ";
pub const PROMPT_PROBE: &str = "Enter a value to find its probability: ";

pub type InputResult<T> = Result<T, InputError>;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("read input failed: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Malformed(#[from] StatError),
}

/// Sample plus the token that ended it (`None` when input ran out).
#[derive(Debug, Clone, PartialEq)]
pub struct SampleInput {
    pub sample: Sample,
    pub terminator: Option<String>,
}

pub struct TokenReader<R> {
    inner: R,
    pending: VecDeque<String>,
    eof: bool,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            pending: VecDeque::new(),
            eof: false,
        }
    }

    pub fn next_token(&mut self) -> io::Result<Option<String>> {
        loop {
            if let Some(tok) = self.pending.pop_front() {
                return Ok(Some(tok));
            }
            if self.eof {
                return Ok(None);
            }
            let mut line = String::new();
            if self.inner.read_line(&mut line)? == 0 {
                self.eof = true;
                continue;
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }

    /// Drops whatever is left of the current line.
    pub fn discard_line(&mut self) {
        self.pending.clear();
    }

    pub fn read_sample(&mut self) -> InputResult<SampleInput> {
        let mut values = Vec::new();
        let terminator = loop {
            match self.next_token()? {
                Some(tok) => match parse_number(&tok) {
                    Some(v) => values.push(v),
                    None => {
                        self.discard_line();
                        break Some(tok);
                    }
                },
                None => break None,
            }
        };
        log::debug!(
            "sample read: {} values, terminator={:?}",
            values.len(),
            terminator
        );
        Ok(SampleInput {
            sample: Sample::new(values)?,
            terminator,
        })
    }

    pub fn read_number(&mut self, field: &str) -> InputResult<f64> {
        match self.next_token()? {
            Some(tok) => match parse_number(&tok) {
                Some(v) => Ok(v),
                None => Err(StatError::malformed(field, Some(tok)).into()),
            },
            None => Err(StatError::malformed(field, None).into()),
        }
    }
}

/// `inf`/`NaN` parse as `f64` but are not observations.
pub fn parse_number(token: &str) -> Option<f64> {
    token.parse::<f64>().ok().filter(|v| v.is_finite())
}

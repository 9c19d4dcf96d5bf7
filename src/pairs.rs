//! Reader for union-find connection files
//!
//! The format is the classic one: a universe size followed by pairs of
//! integer sites, all separated by arbitrary whitespace. Lines starting with
//! `#` are comments.

use anyhow::{bail, Context, Result};
use std::io::BufRead;

pub struct PairReader<R: BufRead> {
    reader: R,
    line_no: usize,
    tokens: std::vec::IntoIter<String>,
}

impl<R: BufRead> PairReader<R> {
    pub fn new(reader: R) -> Self {
        PairReader {
            reader,
            line_no: 0,
            tokens: Vec::new().into_iter(),
        }
    }

    /// Line number of the most recently consumed line (1-based)
    pub fn line_no(&self) -> usize {
        self.line_no
    }

    fn next_token(&mut self) -> Result<Option<i64>> {
        loop {
            if let Some(token) = self.tokens.next() {
                let value = token.parse::<i64>().with_context(|| {
                    format!("line {}: invalid integer '{}'", self.line_no, token)
                })?;
                return Ok(Some(value));
            }

            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.line_no += 1;

            if line.trim_start().starts_with('#') {
                continue;
            }
            self.tokens = line
                .split_whitespace()
                .map(str::to_string)
                .collect::<Vec<_>>()
                .into_iter();
        }
    }

    /// Read the leading universe size
    pub fn read_size(&mut self) -> Result<i64> {
        match self.next_token()? {
            Some(n) => Ok(n),
            None => bail!("empty input: expected the number of sites"),
        }
    }

    /// Read the next pair, or None at end of input
    pub fn read_pair(&mut self) -> Result<Option<(i64, i64)>> {
        let p = match self.next_token()? {
            Some(p) => p,
            None => return Ok(None),
        };
        match self.next_token()? {
            Some(q) => Ok(Some((p, q))),
            None => bail!(
                "line {}: site {} has no partner at end of input",
                self.line_no,
                p
            ),
        }
    }

    pub fn read_all(&mut self) -> Result<Vec<(i64, i64)>> {
        let mut pairs = Vec::new();
        while let Some(pair) = self.read_pair()? {
            pairs.push(pair);
        }
        Ok(pairs)
    }
}

//! Examples: a `left entity... right` window around a candidate span.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use crate::errors::{Error, Result};
use crate::problem::Label;

/// A candidate span with one token of context on each side.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Example {
    pub left: String,
    pub entity: String,
    pub right: String,
}

impl Example {
    /// Splits `text` on whitespace into left, entity and right.
    ///
    /// The first token is `left`, the last is `right`, and everything between
    /// is joined by single spaces into `entity`, which may be empty.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidExample`] is returned when `text` has fewer than two
    /// tokens.
    pub fn parse(text: &str) -> Result<Self> {
        let tokens: Vec<&str> = text.split_whitespace().collect();
        if tokens.len() < 2 {
            return Err(Error::invalid_example(
                text,
                "an example needs at least a left and a right token",
            ));
        }
        let last = tokens.len() - 1;
        Ok(Self {
            left: tokens[0].to_string(),
            entity: tokens[1..last].join(" "),
            right: tokens[last].to_string(),
        })
    }

    pub fn entity_tokens(&self) -> impl Iterator<Item = &str> {
        self.entity.split_whitespace()
    }

    /// The example as a single line of text.
    pub fn text(&self) -> String {
        if self.entity.is_empty() {
            format!("{} {}", self.left, self.right)
        } else {
            format!("{} {} {}", self.left, self.entity, self.right)
        }
    }
}

#[derive(Clone, Debug)]
pub struct LabeledExample {
    pub example: Example,
    pub label: Label,
}

/// Reads labeled examples from a file.
///
/// See [`read_examples_from`] for the format.
pub fn read_examples<P>(path: P) -> Result<Vec<LabeledExample>>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let examples = read_examples_from(File::open(path)?)?;
    tracing::info!("Read {} examples from {}", examples.len(), path.display());
    Ok(examples)
}

/// Reads labeled examples, one per line: `<label> <left> <entity...> <right>`.
///
/// The label is `1` for a person name and `-1` otherwise. Blank lines are
/// skipped.
pub fn read_examples_from<R>(rdr: R) -> Result<Vec<LabeledExample>>
where
    R: Read,
{
    let mut examples = vec![];
    for (i, line) in BufReader::new(rdr).lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let lineno = i + 1;
        let (label, text) = line
            .split_once(char::is_whitespace)
            .ok_or(Error::InvalidLine { line: lineno })?;
        let label = Label::parse(label).ok_or_else(|| Error::InvalidLabel {
            line: lineno,
            label: label.to_string(),
        })?;
        let example = Example::parse(text)?;
        examples.push(LabeledExample { example, label });
    }
    Ok(examples)
}

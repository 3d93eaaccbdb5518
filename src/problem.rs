use crate::errors::Result;
use crate::example::{Example, LabeledExample};
use crate::features::FeatureVector;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Label {
    Positive,
    Negative,
}

impl Label {
    /// Parses a data-file label: `1` or `+1` is positive, `-1` negative.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "1" | "+1" => Some(Self::Positive),
            "-1" => Some(Self::Negative),
            _ => None,
        }
    }

    pub const fn sign(self) -> f64 {
        match self {
            Self::Positive => 1.0,
            Self::Negative => -1.0,
        }
    }

    pub fn from_score(score: f64) -> Self {
        if score > 0.0 {
            Self::Positive
        } else {
            Self::Negative
        }
    }
}

/// A featurized training set.
pub struct Problem {
    pub(crate) xs: Vec<FeatureVector>,
    pub(crate) ys: Vec<Label>,
}

impl Problem {
    pub fn new(xs: Vec<FeatureVector>, ys: Vec<Label>) -> Self {
        Self { xs, ys }
    }

    /// Runs `extractor` once on every example.
    pub fn from_examples<F>(examples: &[LabeledExample], extractor: F) -> Result<Self>
    where
        F: Fn(&Example) -> Result<FeatureVector>,
    {
        let mut xs = Vec::with_capacity(examples.len());
        let mut ys = Vec::with_capacity(examples.len());
        for ex in examples {
            xs.push(extractor(&ex.example)?);
            ys.push(ex.label);
        }
        Ok(Self { xs, ys })
    }

    pub fn len(&self) -> usize {
        self.ys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ys.is_empty()
    }
}

//! Evaluation and diagnostic output.

use std::cmp::Ordering;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::errors::Result;
use crate::example::{Example, LabeledExample};
use crate::features::FeatureVector;
use crate::model::Model;
use crate::problem::{Label, Problem};

/// Returns the fraction of `examples` that `predictor` misclassifies.
///
/// An empty set has an error of `0.0`.
pub fn evaluate_predictor<P>(examples: &[LabeledExample], mut predictor: P) -> Result<f64>
where
    P: FnMut(&Example) -> Result<Label>,
{
    if examples.is_empty() {
        return Ok(0.0);
    }
    let mut n_errors = 0;
    for ex in examples {
        if predictor(&ex.example)? != ex.label {
            n_errors += 1;
        }
    }
    Ok(n_errors as f64 / examples.len() as f64)
}

pub(crate) fn error_rate(prob: &Problem, model: &Model) -> f64 {
    if prob.is_empty() {
        return 0.0;
    }
    let n_errors = prob
        .xs
        .iter()
        .zip(&prob.ys)
        .filter(|&(phi, y)| model.predict(phi) != *y)
        .count();
    n_errors as f64 / prob.len() as f64
}

fn by_descending(a: (&str, f64), b: (&str, f64)) -> Ordering {
    b.1.partial_cmp(&a.1)
        .unwrap_or(Ordering::Equal)
        .then_with(|| a.0.cmp(b.0))
}

/// Writes `name\tweight` lines sorted by descending weight.
pub fn write_weights<W>(model: &Model, wtr: W) -> Result<()>
where
    W: Write,
{
    let mut wtr = BufWriter::new(wtr);
    let mut weights: Vec<_> = model.iter().collect();
    weights.sort_by(|&a, &b| by_descending(a, b));
    for (name, weight) in weights {
        writeln!(wtr, "{}\t{}", name, weight)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn output_weights<P>(model: &Model, path: P) -> Result<()>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    write_weights(model, File::create(path)?)?;
    tracing::info!("{} weights written to {}", model.len(), path.display());
    Ok(())
}

fn write_verbose_prediction<W>(
    wtr: &mut W,
    ex: &LabeledExample,
    phi: &FeatureVector,
    model: &Model,
) -> Result<()>
where
    W: Write,
{
    let score = model.score(phi);
    let prediction = Label::from_score(score);
    let marker = if prediction == ex.label { "" } else { " [WRONG]" };
    writeln!(wtr, "=== {}", ex.example.text())?;
    writeln!(
        wtr,
        "Truth: {}, Prediction: {} ({:.4}){}",
        ex.label.sign(),
        prediction.sign(),
        score,
        marker,
    )?;

    let mut contributions: Vec<(&str, f64, f64)> = phi
        .iter()
        .map(|(name, value)| (name, value, model.weight(name)))
        .collect();
    contributions
        .sort_by(|&(na, va, wa), &(nb, vb, wb)| by_descending((na, va * wa), (nb, vb * wb)));
    for (name, value, weight) in contributions {
        writeln!(wtr, "{}\t{} * {} = {}", name, value, weight, value * weight)?;
    }
    Ok(())
}

/// Writes each example with its prediction and the per-feature
/// contributions to its score.
pub fn write_error_analysis<F, W>(
    examples: &[LabeledExample],
    extractor: F,
    model: &Model,
    wtr: W,
) -> Result<()>
where
    F: Fn(&Example) -> Result<FeatureVector>,
    W: Write,
{
    let mut wtr = BufWriter::new(wtr);
    for ex in examples {
        let phi = extractor(&ex.example)?;
        write_verbose_prediction(&mut wtr, ex, &phi, model)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn output_error_analysis<F, P>(
    examples: &[LabeledExample],
    extractor: F,
    model: &Model,
    path: P,
) -> Result<()>
where
    F: Fn(&Example) -> Result<FeatureVector>,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    write_error_analysis(examples, extractor, model, File::create(path)?)?;
    tracing::info!("Error analysis written to {}", path.display());
    Ok(())
}

//! Hand-crafted features and a hinge-loss linear classifier for person-name spans.

mod errors;
mod eval;
mod example;
mod features;
mod model;
mod problem;
mod sgd;
mod vocab;

pub use crate::errors::{Error, InvalidExampleError, Result};
pub use crate::eval::{
    evaluate_predictor, output_error_analysis, output_weights, write_error_analysis,
    write_weights,
};
pub use crate::example::{read_examples, read_examples_from, Example, LabeledExample};
pub use crate::features::{extract_features, FeatureVector};
pub use crate::model::{dot_product, Model};
pub use crate::problem::{Label, Problem};
pub use crate::sgd::{learn_predictor, learn_predictor_with, Epoch, SgdSolver, SgdSolverIter};
pub use crate::vocab::{PARTICLES, PERSON_VERBS, SPEAKER_VERBS, TITLES};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::errors::{Error, Result};
use crate::eval::error_rate;
use crate::example::{Example, LabeledExample};
use crate::features::FeatureVector;
use crate::model::Model;
use crate::problem::Problem;

/// Stochastic subgradient descent on the hinge loss.
pub struct SgdSolver {
    num_epochs: usize,
    step_size: f64,
    seed: Option<u64>,
}

impl SgdSolver {
    pub fn new(num_epochs: usize, step_size: f64) -> Self {
        Self {
            num_epochs,
            step_size,
            seed: None,
        }
    }

    /// Visits the examples in a seeded random order each epoch instead of
    /// file order.
    pub fn shuffle(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Summary of one pass over the training set.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Epoch {
    pub epoch: usize,
    /// Number of examples that violated the margin and updated the weights.
    pub num_updates: usize,
    /// Training error measured after the pass.
    pub train_error: f64,
}

pub struct SgdSolverIter<'a> {
    solver: &'a SgdSolver,
    prob: &'a Problem,
    model: Model,
    epoch: usize,
    indices: Vec<usize>,
    rng: Option<StdRng>,
}

impl<'a> SgdSolverIter<'a> {
    pub fn model(&self) -> &Model {
        &self.model
    }

    pub fn into_model(self) -> Model {
        self.model
    }
}

impl<'a> Iterator for SgdSolverIter<'a> {
    type Item = Epoch;

    fn next(&mut self) -> Option<Self::Item> {
        if self.epoch >= self.solver.num_epochs {
            return None;
        }
        self.epoch += 1;

        if let Some(rng) = self.rng.as_mut() {
            self.indices.shuffle(rng);
        }

        let mut num_updates = 0;
        for &i in &self.indices {
            let phi = &self.prob.xs[i];
            let y = self.prob.ys[i].sign();
            // Subgradient of max(0, 1 - y * w.phi) is -y * phi inside the margin.
            if self.model.score(phi) * y < 1.0 {
                self.model.increment(self.solver.step_size * y, phi);
                num_updates += 1;
            }
        }

        Some(Epoch {
            epoch: self.epoch,
            num_updates,
            train_error: error_rate(self.prob, &self.model),
        })
    }
}

impl SgdSolver {
    pub fn solve<'a>(&'a self, prob: &'a Problem) -> SgdSolverIter<'a> {
        SgdSolverIter {
            solver: self,
            prob,
            model: Model::new(),
            epoch: 0,
            indices: (0..prob.len()).collect(),
            rng: self.seed.map(StdRng::seed_from_u64),
        }
    }
}

/// Learns weights for `extractor` on `train`, reporting the train and dev
/// error after every epoch.
///
/// # Errors
///
/// [`Error::EmptyDataset`] when `train` is empty, or any error returned by
/// `extractor`.
pub fn learn_predictor<F>(
    train: &[LabeledExample],
    dev: &[LabeledExample],
    extractor: F,
    num_epochs: usize,
    step_size: f64,
) -> Result<Model>
where
    F: Fn(&Example) -> Result<FeatureVector>,
{
    learn_predictor_with(&SgdSolver::new(num_epochs, step_size), train, dev, extractor)
}

/// Same as [`learn_predictor`] with a preconfigured solver.
pub fn learn_predictor_with<F>(
    solver: &SgdSolver,
    train: &[LabeledExample],
    dev: &[LabeledExample],
    extractor: F,
) -> Result<Model>
where
    F: Fn(&Example) -> Result<FeatureVector>,
{
    if train.is_empty() {
        return Err(Error::EmptyDataset);
    }
    let prob = Problem::from_examples(train, &extractor)?;
    let dev_prob = Problem::from_examples(dev, &extractor)?;
    tracing::debug!(
        "Training on {} examples for {} epochs (step size {})",
        prob.len(),
        solver.num_epochs,
        solver.step_size,
    );

    let mut it = solver.solve(&prob);
    while let Some(epoch) = it.next() {
        let dev_error = error_rate(&dev_prob, it.model());
        tracing::info!(
            "Epoch {}: train error = {}, dev error = {}",
            epoch.epoch,
            epoch.train_error,
            dev_error,
        );
        tracing::debug!("Epoch {}: {} updates", epoch.epoch, epoch.num_updates);
    }
    Ok(it.into_model())
}

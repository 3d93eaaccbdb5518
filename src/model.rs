use std::collections::HashMap;

use crate::features::FeatureVector;
use crate::problem::Label;

/// Learned weights, keyed by feature name.
#[derive(Clone, Debug, Default)]
pub struct Model {
    pub(crate) feature_map: HashMap<String, usize>,
    pub(crate) ws: Vec<f64>,
}

impl Model {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_weight(&self, key: &str) -> Option<f64> {
        let id = *self.feature_map.get(key)?;
        self.ws.get(id).cloned()
    }

    /// Returns the weight of `key`, or `0.0` for an unseen feature.
    pub fn weight(&self, key: &str) -> f64 {
        self.get_weight(key).unwrap_or(0.0)
    }

    /// Adds `scale * phi` to the weights, registering unseen features.
    pub fn increment(&mut self, scale: f64, phi: &FeatureVector) {
        for (name, value) in phi.iter() {
            let id = match self.feature_map.get(name) {
                Some(&id) => id,
                None => {
                    let id = self.ws.len();
                    self.feature_map.insert(name.to_string(), id);
                    self.ws.push(0.0);
                    id
                }
            };
            self.ws[id] += scale * value;
        }
    }

    pub fn score(&self, phi: &FeatureVector) -> f64 {
        dot_product(phi, self)
    }

    pub fn predict(&self, phi: &FeatureVector) -> Label {
        Label::from_score(self.score(phi))
    }

    /// Iterates over `(name, weight)` pairs in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        let mut names: Vec<(&str, usize)> = self
            .feature_map
            .iter()
            .map(|(name, &id)| (name.as_str(), id))
            .collect();
        names.sort_unstable_by_key(|&(_, id)| id);
        names.into_iter().map(move |(name, id)| (name, self.ws[id]))
    }

    pub fn len(&self) -> usize {
        self.ws.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ws.is_empty()
    }
}

/// Sparse inner product of a feature vector and the model weights.
pub fn dot_product(phi: &FeatureVector, model: &Model) -> f64 {
    phi.dot(model)
}

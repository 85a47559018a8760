// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Demo classifier returning a random category. Sits behind the same
//! boundary trait as the real model and is selected via configuration only.

use crate::classifier::{ClassifierError, Prediction, TweetClassifier};
use crate::registry::Category;
use async_trait::async_trait;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::sync::Mutex;
use tracing::debug;

pub struct MockClassifier {
    // Seeded RNG for deterministic tests; thread RNG otherwise.
    rng: Option<Mutex<StdRng>>,
}

impl MockClassifier {
    pub fn new() -> Self {
        Self { rng: None }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Some(Mutex::new(StdRng::seed_from_u64(seed))),
        }
    }

    fn sample(&self) -> (Category, f32) {
        match &self.rng {
            Some(rng) => {
                let mut rng = rng.lock().unwrap();
                let category = Category::ALL[rng.gen_range(0..Category::ALL.len())];
                (category, rng.gen_range(0.5..1.0))
            }
            None => {
                let mut rng = rand::thread_rng();
                let category = Category::ALL[rng.gen_range(0..Category::ALL.len())];
                (category, rng.gen_range(0.5..1.0))
            }
        }
    }
}

impl Default for MockClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TweetClassifier for MockClassifier {
    async fn predict(&self, text: &str) -> Result<Prediction, ClassifierError> {
        let (category, confidence) = self.sample();
        debug!(
            "mock classifier sampled '{}' for {} chars of input",
            category,
            text.chars().count()
        );
        Prediction::new(category, Some(confidence))
    }

    fn name(&self) -> &str {
        "mock"
    }
}

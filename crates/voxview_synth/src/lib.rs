//! Deterministic synthetic datasets for exercising the renderer.
//!
//! Builds a record tree shaped like a typical pattern-analysis dataset:
//! a samples-by-features matrix, per-sample attributes (targets and
//! chunks), per-feature attributes, and dataset-level attributes. All
//! randomness flows from one seeded ChaCha stream, so the same builder
//! always yields the same [`Value`] tree.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

use rand::distributions::Standard;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use voxview_foundation::{NumericArray, Record, Result, Sequence, Value};

/// Builder for a synthetic dataset record.
///
/// Samples are grouped `targets * chunks` ways: every combination of a
/// target class and a chunk contributes one sample row. Feature values
/// are a per-target class mean plus gaussian noise.
#[derive(Clone, Debug)]
pub struct SyntheticDataset {
    targets: usize,
    chunks: usize,
    features: usize,
    sigma: f64,
    seed: u64,
}

impl Default for SyntheticDataset {
    fn default() -> Self {
        Self {
            targets: 2,
            chunks: 3,
            features: 6,
            sigma: 1.0,
            seed: 0,
        }
    }
}

impl SyntheticDataset {
    /// Creates a builder with the default geometry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the number of target classes.
    #[must_use]
    pub fn with_targets(mut self, targets: usize) -> Self {
        self.targets = targets;
        self
    }

    /// Builder method to set the number of chunks.
    #[must_use]
    pub fn with_chunks(mut self, chunks: usize) -> Self {
        self.chunks = chunks;
        self
    }

    /// Builder method to set the feature count.
    #[must_use]
    pub fn with_features(mut self, features: usize) -> Self {
        self.features = features;
        self
    }

    /// Builder method to set the noise level.
    #[must_use]
    pub fn with_sigma(mut self, sigma: f64) -> Self {
        self.sigma = sigma;
        self
    }

    /// Builder method to set the random seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Returns the number of sample rows the built dataset will have.
    #[must_use]
    pub fn samples(&self) -> usize {
        self.targets * self.chunks
    }

    /// Builds the dataset record.
    ///
    /// # Errors
    /// Returns [`ErrorKind::ShapeMismatch`](voxview_foundation::ErrorKind::ShapeMismatch)
    /// only on internal geometry bugs; with any builder configuration the
    /// generated rows are rectangular.
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_wrap)]
    pub fn build(&self) -> Result<Record> {
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);

        let mut rows = Vec::with_capacity(self.samples());
        let mut targets = Vec::with_capacity(self.samples());
        let mut chunks = Vec::with_capacity(self.samples());
        for chunk in 0..self.chunks {
            for target in 0..self.targets {
                let mean = target as f64;
                let row = (0..self.features)
                    .map(|_| mean + self.sigma * gaussian(&mut rng))
                    .collect();
                rows.push(row);
                targets.push(vec![target as i64 + 1]);
                chunks.push(vec![chunk as i64 + 1]);
            }
        }

        let sa = Record::new()
            .with("targets", NumericArray::from_int_rows(targets)?)
            .with("chunks", NumericArray::from_int_rows(chunks)?);

        let fa = Record::new().with(
            "feature_ids",
            NumericArray::from_int_rows(vec![(1..=self.features as i64).collect()])?,
        );

        let fdim = Record::new()
            .with(
                "labels",
                Sequence::row(vec![Value::from("targets"), Value::from("chunks")]),
            )
            .with(
                "values",
                Sequence::row(vec![
                    Value::from(class_names(self.targets)),
                    Value::from(NumericArray::from_int_rows(vec![
                        (1..=self.chunks as i64).collect(),
                    ])?),
                ]),
            );
        let a = Record::new().with("fdim", fdim);

        Ok(Record::new()
            .with("samples", NumericArray::from_rows(rows)?)
            .with("sa", sa)
            .with("fa", fa)
            .with("a", a))
    }
}

/// Names the target classes `class1 ... classN`.
fn class_names(targets: usize) -> Sequence {
    Sequence::row(
        (1..=targets)
            .map(|i| Value::from(format!("class{i}")))
            .collect(),
    )
}

/// Draws one standard normal deviate via the Box-Muller transform.
///
/// Only one of the pair is used; dataset sizes here are far too small for
/// the waste to matter, and keeping no carry state keeps the stream a
/// pure function of the draw count.
fn gaussian<R: Rng>(rng: &mut R) -> f64 {
    let u1: f64 = rng.gen_range(f64::MIN_POSITIVE..1.0);
    let u2: f64 = rng.sample(Standard);
    (-2.0 * u1.ln()).sqrt() * (std::f64::consts::TAU * u2).cos()
}

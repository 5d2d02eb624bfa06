//! Weighted outcome selection
//!
//! A draw is a cumulative walk over the lineup weights with a uniform roll
//! in `[0, total)`. The random source is injected so every draw is
//! reproducible from a seed.
use rand::Rng;
use thiserror::Error;

use crate::campaign::{CampaignConfig, DrawOutcome, LineupEntry};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectorError {
    #[error("invalid weights: total weight must be positive")]
    InvalidWeights,
    #[error("invalid weights: {weights} weights for {lineup} lineup entries")]
    WeightCountMismatch { lineup: usize, weights: usize },
}

/// Pick one lineup entry according to the given weights.
///
/// # Errors
///
/// Returns `WeightCountMismatch` when `weights` and `lineup` differ in
/// length, and `InvalidWeights` when the weights sum to zero.
pub fn select<'a, R: Rng + ?Sized>(
    lineup: &'a [LineupEntry],
    weights: &[u32],
    rng: &mut R,
) -> Result<&'a LineupEntry, SelectorError> {
    if lineup.len() != weights.len() {
        return Err(SelectorError::WeightCountMismatch {
            lineup: lineup.len(),
            weights: weights.len(),
        });
    }
    let total: u64 = weights.iter().map(|w| u64::from(*w)).sum();
    if total == 0 {
        return Err(SelectorError::InvalidWeights);
    }

    let roll = rng.gen_range(0..total);
    let mut cumulative = 0_u64;
    for (entry, weight) in lineup.iter().zip(weights) {
        cumulative += u64::from(*weight);
        if roll < cumulative {
            return Ok(entry);
        }
    }
    // total > 0 guarantees the walk terminated above
    Err(SelectorError::InvalidWeights)
}

/// Draw a session outcome from a campaign using its own lineup weights.
///
/// # Errors
///
/// Returns an error when the lineup weights are unusable; a validated
/// `CampaignConfig` never triggers this.
pub fn draw<R: Rng + ?Sized>(
    config: &CampaignConfig,
    rng: &mut R,
) -> Result<DrawOutcome, SelectorError> {
    let weights: Vec<u32> = config.lineup.iter().map(|e| e.probability_weight).collect();
    select(&config.lineup, &weights, rng).map(DrawOutcome::from)
}

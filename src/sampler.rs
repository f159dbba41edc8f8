/*!
 * Length-constrained random sampling over a sentence pool.
 *
 * This module draws a single random sentence (`pick`) or assembles a random
 * multi-sentence paragraph (`generate`) whose byte length falls inside a
 * caller-supplied window:
 * - Bounds arrive as signed integers; negative values mean "no bound"
 * - Filtering is strict on both ends (`min < len < max`)
 * - Randomness comes from an explicitly passed generator so callers decide
 *   how it is seeded
 */

use rand::Rng;
use rand::seq::IndexedRandom;
use log::debug;

use crate::errors::SampleError;
use crate::sentence_extractor::MINIMUM_LINE_LENGTH;

/// A normalized sampling window over sentence byte lengths.
///
/// This is the single representation of "unbounded": any negative raw bound
/// normalizes here, so every entry point shares the same meaning for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthBounds {
    /// Lower bound; lengths must strictly exceed it
    pub min: usize,
    /// Upper bound; lengths must stay strictly below it. `None` disables
    /// filtering altogether
    pub max: Option<usize>,
}

impl LengthBounds {
    /// Normalize raw signed bounds: a negative minimum becomes 0, a negative
    /// maximum becomes unbounded
    pub fn from_raw(min: i64, max: i64) -> Self {
        let min = if min < 0 { 0 } else { min as usize };
        let max = if max < 0 { None } else { Some(max as usize) };

        LengthBounds { min, max }
    }
}

/// Pick one random sentence from the pool whose byte length lies strictly
/// inside the window.
///
/// An unbounded maximum short-circuits to a uniform draw over the whole
/// pool with no length filtering. A bounded window below the minimum viable
/// sentence length can never be satisfied and fails up front.
pub fn pick<R: Rng + ?Sized>(pool: &[String], min: i64, max: i64, rng: &mut R) -> Result<String, SampleError> {
    if pool.is_empty() {
        return Err(SampleError::EmptyPool);
    }

    let bounds = LengthBounds::from_raw(min, max);

    let bounded_max = match bounds.max {
        Some(value) => value,
        None => {
            return match pool.choose(rng) {
                Some(sentence) => Ok(sentence.clone()),
                None => Err(SampleError::EmptyPool),
            };
        }
    };

    if bounds.min > bounded_max {
        return Err(SampleError::InvalidRange { min: bounds.min, max: bounded_max });
    }

    if bounded_max < MINIMUM_LINE_LENGTH {
        return Err(SampleError::RangeTooSmall { max: bounded_max });
    }

    let filtered: Vec<&String> = pool
        .iter()
        .filter(|sentence| sentence.len() > bounds.min && sentence.len() < bounded_max)
        .collect();

    if filtered.is_empty() {
        return Err(SampleError::NoCandidates { min: bounds.min, max: bounded_max });
    }

    match filtered.choose(rng) {
        Some(sentence) => Ok((*sentence).clone()),
        None => Err(SampleError::NoCandidates { min: bounds.min, max: bounded_max }),
    }
}

/// Assemble a random paragraph from one or more pool sentences.
///
/// Each iteration picks with the remaining budget (`max` minus what is
/// already accumulated) as the upper bound, so the paragraph can never
/// exceed the original `max`. Sentences are joined with a single space and
/// accumulation stops once the length exceeds `min`. A pool that cannot
/// reach `min` within `max` fails through the propagated pick error.
pub fn generate<R: Rng + ?Sized>(pool: &[String], min: i64, max: i64, rng: &mut R) -> Result<String, SampleError> {
    let mut out = String::new();

    loop {
        let remaining = max - out.len() as i64;
        let sentence = pick(pool, -1, remaining, rng)?;

        out.push_str(&sentence);

        if out.len() as i64 > min {
            break;
        }

        out.push(' ');
    }

    debug!("Generated paragraph of {} bytes for window ({}, {})", out.len(), min, max);

    Ok(out)
}

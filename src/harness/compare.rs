//! Cross-engine agreement checks

use super::measure::{measure, Measurement};
use super::HarnessError;
use crate::batch::Strategy;
use crate::math;

/// Tolerance used when none is configured
pub const DEFAULT_TOLERANCE: f64 = 1e-9;

/// How closely a candidate tracked the reference
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Agreement {
    pub label: String,
    pub max_abs_diff: f64,
    pub sum_abs_diff: f64,
}

/// Check a candidate's averages against the reference, element by element
///
/// Each pair must satisfy `|expected - found| <= tolerance * max(1, |expected|)`.
/// The first offending window is reported.
pub fn verify_agreement(
    label: &str,
    reference: &[f64],
    candidate: &[f64],
    tolerance: f64,
) -> Result<Agreement, HarnessError> {
    if reference.len() != candidate.len() {
        return Err(HarnessError::LengthMismatch {
            label: label.to_owned(),
            expected: reference.len(),
            found: candidate.len(),
        });
    }

    if let Some((index, (&expected, &found))) = reference
        .iter()
        .zip(candidate)
        .enumerate()
        .find(|&(_, (expected, found))| !math::approx_eq(*expected, *found, tolerance))
    {
        return Err(HarnessError::ValueMismatch {
            label: label.to_owned(),
            index,
            expected,
            found,
            tolerance,
        });
    }

    Ok(Agreement {
        label: label.to_owned(),
        max_abs_diff: math::max_abs_diff(reference, candidate),
        sum_abs_diff: math::sum_abs_diff(reference, candidate),
    })
}

/// Measurements of several strategies over one input and window
#[derive(Debug, Clone, serde::Serialize)]
pub struct Comparison {
    pub period: usize,
    pub measurements: Vec<Measurement>,
    /// One entry per strategy after the first
    pub agreements: Vec<Agreement>,
    /// Averages of the first strategy
    #[serde(skip)]
    pub reference: Vec<f64>,
}

/// Measure each strategy and verify it against the first one
///
/// The first strategy in `strategies` is the reference, so pass
/// [`Strategy::Naive`] first to check against the oracle.
pub fn run_comparison(
    values: &[f64],
    period: usize,
    strategies: &[Strategy],
    tolerance: f64,
) -> Result<Comparison, HarnessError> {
    let span = tracing::info_span!("comparison", period, len = values.len());
    let _guard = span.enter();

    let mut comparison = Comparison {
        period,
        measurements: Vec::with_capacity(strategies.len()),
        agreements: Vec::with_capacity(strategies.len().saturating_sub(1)),
        reference: Vec::new(),
    };

    for (i, &strategy) in strategies.iter().enumerate() {
        let (averages, measurement) = measure(strategy, values, period)?;
        if i == 0 {
            comparison.reference = averages;
        } else {
            let agreement =
                verify_agreement(strategy.name(), &comparison.reference, &averages, tolerance)?;
            tracing::debug!(
                label = %agreement.label,
                max_abs_diff = agreement.max_abs_diff,
                "agrees with reference"
            );
            comparison.agreements.push(agreement);
        }
        comparison.measurements.push(measurement);
    }

    Ok(comparison)
}

//! Single-channel evaluation: formula, fallback policy, then pipeline.

use crate::channel::Channel;
use crate::transform::formula::{self, Formula, FormulaFault};
use crate::transform::params::ConversionParams;

/// Value substituted for a channel whose formula faulted.
pub const FAULT_FALLBACK: f64 = 0.0;

/// Raw formula value with the fallback policy applied.
///
/// A faulted formula yields [`FAULT_FALLBACK`] for that channel only; the
/// other channels of the same conversion are unaffected.
pub fn raw_or_fallback(channel: Channel, c: i64) -> f64 {
    evaluate_or_fallback(channel, formula::rules_for(channel).select(c), c)
}

/// Evaluate `formula` for `channel` at `c`, substituting [`FAULT_FALLBACK`]
/// on a fault.
pub fn evaluate_or_fallback(channel: Channel, formula: Formula, c: i64) -> f64 {
    formula.evaluate(c).unwrap_or_else(|fault| {
        log_fault(channel, &fault);
        FAULT_FALLBACK
    })
}

/// Unrounded channel value in [0, 1].
///
/// `c` is used as given; `convert` clamps before calling this.
pub fn channel_value(channel: Channel, c: i64, params: &ConversionParams) -> f64 {
    params.get(channel).apply(raw_or_fallback(channel, c))
}

fn log_fault(channel: Channel, fault: &FormulaFault) {
    tracing::warn!(
        %channel,
        code_point = fault.code_point,
        value = fault.value,
        formula = ?fault.formula,
        "channel formula faulted, using fallback"
    );
}

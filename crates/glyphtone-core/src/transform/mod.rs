//! Transform pipeline: raw formulas, pipeline parameters, and evaluation.

pub mod evaluate;
pub mod formula;
pub mod params;

//! Game operations built on top of the metric: target selection and the
//! per-guess verdict.

pub mod compare;
pub mod select;

//! Tax calculation modules.
//!
//! [`brackets`] holds the progressive bracket evaluator; [`liability`]
//! composes the per-category computations into a full liability estimate.

pub mod brackets;
pub mod common;
pub mod liability;

pub use brackets::progressive_tax;
pub use liability::{LiabilityError, LiabilityWorksheet, TaxResult};

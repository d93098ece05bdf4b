pub mod calculations;
pub mod models;

pub use calculations::liability::{LiabilityError, LiabilityWorksheet, TaxResult};
pub use models::*;

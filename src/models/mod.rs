//! Market split domain models.
//!
//! | Type | Role |
//! |------|------|
//! | `InstanceParams` | Generator input `(m, D, seed)` and derived `n`, file name |
//! | `Instance` | Dense coefficient matrix `A` and right-hand side `b` |

mod instance;
mod params;

pub use instance::Instance;
pub use params::{InstanceParams, VARS_PER_ROW};

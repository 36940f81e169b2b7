//! Type definitions for spendtrack

mod category;
mod entry;
mod error;
mod stats;

pub use category::*;
pub use entry::*;
pub use error::*;
pub use stats::*;

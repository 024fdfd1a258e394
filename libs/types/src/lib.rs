//! Types library for the MIRI risk calculator
//!
//! Shared definitions used by the risk engine and the presentation
//! gateway.
//!
//! # Modules
//! - `ids`: Assessment identifiers
//! - `patient`: Raw form submissions and validated patient inputs
//! - `risk`: Risk bands, factor assessments and results
//! - `errors`: Validation error taxonomy

pub mod ids;
pub mod patient;
pub mod risk;
pub mod errors;

// Library version constant
pub const LIB_VERSION: &str = "1.0.0";

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::ids::*;
    pub use crate::patient::*;
    pub use crate::risk::*;
    pub use crate::errors::*;
}

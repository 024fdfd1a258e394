//! MIRI Risk Engine
//!
//! Scores the risk of myocardial ischemia-reperfusion injury from shock
//! index, TIMI score and culprit vessel using a fixed logistic model.
//!
//! Provides submission validation, probability computation, risk band
//! classification, per-factor interpretation and assessment events.

pub mod validator;
pub mod model;
pub mod banding;
pub mod factors;
pub mod events;
pub mod engine;

pub use engine::RiskEngine;

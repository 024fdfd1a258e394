pub mod assessment;
pub mod form;

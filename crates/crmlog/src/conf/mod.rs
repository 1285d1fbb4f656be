//! Conf module — configuration model, loading from file and environment, validation.

pub mod model;
pub mod load;

pub use model::{CrmLogConfig, OutputFormat};

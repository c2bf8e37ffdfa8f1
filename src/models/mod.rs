//! Models module - domain records and error taxonomy.

pub mod errors;
pub mod types;

pub use errors::*;
pub use types::*;

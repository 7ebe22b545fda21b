mod core;

pub use crate::core::data::complex::{Complex, ComplexError};

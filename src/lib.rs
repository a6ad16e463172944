mod config;
mod encoder;
mod error;
mod kzg;
mod poly_utils;
mod polynomial;

pub use config::*;
pub use encoder::*;
pub use error::*;
pub use kzg::*;
pub use poly_utils::{checked_inverse, determinant, interpolate_by_determinants, random_scalar};
pub use polynomial::*;

pub mod config;
pub mod error;
pub mod input;
pub mod interpolate;
pub mod point;
pub mod utils;

pub use crate::error::{Error, Result};
pub use crate::interpolate::{reconstruct_secret, Interpolator};
pub use crate::point::{decode_point, Point};

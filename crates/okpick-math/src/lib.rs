//! # okpick-math
//!
//! Math utilities for the okpick color engine.
//!
//! - [`DVec3`] / [`DMat3`] - glam's `f64` vector and matrix, used for RGB,
//!   LMS and Lab triplets and the Oklab linear stages
//! - [`mat3_from_rows`] - builds a [`DMat3`] from published row-major
//!   coefficients
//! - Scalar helpers ([`saturate`], [`fract`], [`sign`], [`sample_position`])
//!
//! Everything is `f64`: the Oklab coefficients are published with ten
//! significant digits and the gamut search depends on them.
//!
//! # Usage
//!
//! ```rust
//! use okpick_math::{DVec3, mat3_from_rows};
//!
//! let m = mat3_from_rows([
//!     [0.4122214708, 0.5363325363, 0.0514459929],
//!     [0.2119034982, 0.6806995451, 0.1073969566],
//!     [0.0883024619, 0.2817188376, 0.6299787005],
//! ]);
//! let lms = m * DVec3::ONE;
//! assert!((lms.x - 1.0).abs() < 1e-9);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod mat3;
mod scalar;

pub use glam::{DMat3, DVec3};
pub use mat3::mat3_from_rows;
pub use scalar::*;

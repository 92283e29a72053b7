//! Ejes: sparse vectors as functions over named axes
//!
//! **Ejes** (Spanish: "axes") represents a mathematical vector as a function
//! from a finite domain of named axes to numeric values. A vector pairs an
//! ordered list of axis labels with a sparse map of components; only the
//! components that were explicitly set are stored, and every other axis
//! reads as the additive identity of the component type.
//!
//! # Design Principles
//!
//! - **Absence is zero**: a label missing from the map reads as zero, and
//!   stays observably distinct from a stored zero
//! - **Values, not places**: every operation returns a fresh vector; a
//!   constructed vector is never mutated
//! - **Closed numeric kinds**: components are `u64`, `i64`, `f32` or `f64`,
//!   enforced at compile time through the [`Scalar`] bound
//!
//! # Quick Start
//!
//! ```rust
//! use ejes::Vector;
//!
//! // Zero vector over two named axes: nothing is materialized.
//! let z = Vector::<i64>::zero(["A", "B"]);
//! assert_eq!(z.lookup("A"), (0, false));
//!
//! // Scaling always yields a double-precision vector.
//! let scaled = z.scalar_mul(2.0);
//! assert_eq!(scaled.lookup("A"), (0.0, false));
//! ```

pub mod scalar;
pub mod vector;

pub use scalar::Scalar;
pub use vector::Vector;

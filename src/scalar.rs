//! Numeric bound for vector components

use std::fmt;

use num_traits::cast::AsPrimitive;
use num_traits::Zero;

mod sealed {
    pub trait Sealed {}

    impl Sealed for u64 {}
    impl Sealed for i64 {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// Component types a [`Vector`](crate::Vector) may hold.
///
/// The set is closed: exactly `u64`, `i64`, `f32` and `f64` implement this
/// trait, and the seal prevents downstream impls. A non-numeric component
/// type is rejected at compile time, never at runtime.
///
/// The supertraits carry the two facts every operation relies on:
///
/// - [`Zero`] supplies the additive identity reported for axes with no
///   materialized component
/// - [`AsPrimitive<f64>`] supplies the widening conversion applied by
///   [`Vector::scalar_mul`](crate::Vector::scalar_mul)
///
/// # Examples
///
/// ```
/// use ejes::Scalar;
///
/// fn additive_identity<T: Scalar>() -> T {
///     T::zero()
/// }
///
/// assert_eq!(additive_identity::<i64>(), 0);
/// assert_eq!(additive_identity::<f64>(), 0.0);
/// ```
pub trait Scalar: Copy + Zero + AsPrimitive<f64> + fmt::Display + sealed::Sealed {}

impl Scalar for u64 {}
impl Scalar for i64 {}
impl Scalar for f32 {}
impl Scalar for f64 {}

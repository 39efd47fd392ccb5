//! Type-level numeric constraints used to validate model inputs.
//!
//! Every positivity requirement in the clamp-sensor model is checked by
//! wrapping the raw quantity in a [`Constrained<T, C>`] at the boundary of the
//! component that needs it. Construction either succeeds, after which the
//! invariant holds for free, or fails with a [`ConstraintError`] that the
//! model attaches to the name of the offending quantity.
//!
//! # Provided constraints
//!
//! - [`NonNegative`]: Zero or greater (contact-layer thickness, exposed wire
//!   length, spreading factor)
//! - [`StrictlyPositive`]: Greater than zero (diameters, areas,
//!   conductivities, convection coefficients, flow rates)
//!
//! Both reject `NaN`.

mod non_negative;
mod strictly_positive;

use std::marker::PhantomData;

use thiserror::Error;

pub use non_negative::NonNegative;
pub use strictly_positive::StrictlyPositive;

/// A trait for enforcing numeric invariants at construction time.
pub trait Constraint<T> {
    /// Checks that the given value satisfies this constraint.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if the value does not satisfy the constraint.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// An error returned when a [`Constraint`] is violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("value must not be negative")]
    Negative,
    #[error("value must not be zero")]
    Zero,
    #[error("value is not a number")]
    NotANumber,
}

/// A wrapper enforcing a numeric constraint at construction time.
///
/// # Example
///
/// ```
/// use clampon_bias::support::constraint::{Constrained, StrictlyPositive};
/// use uom::si::{f64::Length, length::millimeter};
///
/// let wall = Length::new::<millimeter>(1.5);
/// let wall = Constrained::<_, StrictlyPositive>::new(wall).unwrap();
/// assert!((wall.into_inner().get::<millimeter>() - 1.5).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Constrained<T, C: Constraint<T>> {
    value: T,
    _marker: PhantomData<C>,
}

impl<T, C: Constraint<T>> Constrained<T, C> {
    /// Constructs a new constrained value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value does not satisfy the constraint.
    pub fn new(value: T) -> Result<Self, ConstraintError> {
        C::check(&value)?;
        Ok(Self {
            value,
            _marker: PhantomData,
        })
    }

    /// Consumes the wrapper and returns the inner value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

/// Returns a reference to the inner unconstrained value.
impl<T, C: Constraint<T>> AsRef<T> for Constrained<T, C> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}

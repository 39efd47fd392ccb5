use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is non-negative (zero or greater).
///
/// Used where zero is physically meaningful, such as a paste-less contact
/// (zero layer thickness) or a sensor whose leads are not exposed to air.
///
/// # Examples
///
/// ```
/// use clampon_bias::support::constraint::NonNegative;
///
/// assert!(NonNegative::new(0.0).is_ok());
/// assert!(NonNegative::new(1.0).is_ok());
/// assert!(NonNegative::new(-0.5).is_err());
/// assert!(NonNegative::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct NonNegative;

impl NonNegative {
    /// Constructs a [`Constrained<T, NonNegative>`] if the value is non-negative.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is negative or not a number (`NaN`).
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, NonNegative>, ConstraintError> {
        Constrained::<T, NonNegative>::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for NonNegative {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater | Ordering::Equal) => Ok(()),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{
        f64::{Length, ThermalConductance},
        length::millimeter,
        thermal_conductance::watt_per_kelvin,
    };

    #[test]
    fn spreading_factors() {
        assert!(NonNegative::new(0.0).is_ok());
        assert!(NonNegative::new(2.0).is_ok());
        assert_eq!(NonNegative::new(-0.1), Err(ConstraintError::Negative));
    }

    #[test]
    fn layer_thicknesses() {
        let t = Length::new::<millimeter>(0.0);
        assert!(NonNegative::new(t).is_ok());

        let t = Length::new::<millimeter>(-0.2);
        assert_eq!(NonNegative::new(t).unwrap_err(), ConstraintError::Negative);
    }

    #[test]
    fn conductances() {
        let g = ThermalConductance::new::<watt_per_kelvin>(0.0);
        assert_eq!(NonNegative::new(g).unwrap().into_inner(), g);

        let g = ThermalConductance::new::<watt_per_kelvin>(f64::NAN);
        assert_eq!(
            NonNegative::new(g).unwrap_err(),
            ConstraintError::NotANumber
        );
    }
}

use thiserror::Error;
use uom::si::f64::{ThermalConductance, VolumeRate};

use crate::support::constraint::ConstraintError;

/// Errors that can occur while evaluating the clamp-on sensor model.
///
/// Every error is raised before any result is produced for the offending
/// input; the model never substitutes a default for an invalid value.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ClampSensorError {
    /// A dimension, conductivity, convection coefficient, or count violates
    /// its sign requirement.
    #[error("invalid geometry: {quantity}")]
    InvalidGeometry {
        /// Name of the offending input.
        quantity: &'static str,

        /// Which requirement was violated.
        #[source]
        source: ConstraintError,
    },

    /// A volumetric flow rate is not strictly positive.
    #[error("invalid flow rate: {flow:?}")]
    InvalidFlow {
        /// The rejected flow rate.
        flow: VolumeRate,

        /// Which requirement was violated.
        #[source]
        source: ConstraintError,
    },

    /// A water or copper property, or an absolute temperature, is not
    /// strictly positive.
    #[error("invalid material property: {quantity}")]
    InvalidProperty {
        /// Name of the offending input.
        quantity: &'static str,

        /// Which requirement was violated.
        #[source]
        source: ConstraintError,
    },

    /// The sensor node has no positive path to either reservoir.
    ///
    /// Raised when either conductance is negative or `NaN`, or when their
    /// sum is not strictly positive.
    #[error("degenerate conductance: water_side={water_side:?}, wire_side={wire_side:?}")]
    DegenerateConductance {
        /// Conductance from the sensor to the water.
        water_side: ThermalConductance,

        /// Conductance from the sensor to the air through the lead wires.
        wire_side: ThermalConductance,
    },
}

impl ClampSensorError {
    /// Returns a closure mapping a [`ConstraintError`] to [`Self::InvalidGeometry`].
    pub(super) fn geometry(quantity: &'static str) -> impl FnOnce(ConstraintError) -> Self {
        move |source| Self::InvalidGeometry { quantity, source }
    }

    /// Returns a closure mapping a [`ConstraintError`] to [`Self::InvalidProperty`].
    pub(super) fn property(quantity: &'static str) -> impl FnOnce(ConstraintError) -> Self {
        move |source| Self::InvalidProperty { quantity, source }
    }
}

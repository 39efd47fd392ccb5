mod contact;
mod convection;
mod water;
mod wires;

pub use contact::Contact;
pub use convection::{AirConvection, ConvectionRegime};
pub use water::WaterProperties;
pub use wires::LeadWires;

use uom::si::f64::{Length, ThermodynamicTemperature};

/// Everything the model needs to know about one clamp-on installation.
///
/// Fields are plain quantities. Each is validated by the component that
/// consumes it, so an invalid field surfaces as a
/// [`ClampSensorError`](super::ClampSensorError) naming that field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThermalInputs {
    pub temperatures: Temperatures,
    pub pipe: Pipe,
    pub contact: Contact,
    pub wires: LeadWires,
    pub convection: AirConvection,
    pub water: WaterProperties,
}

/// The two reservoir temperatures the sensor sits between.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Temperatures {
    /// True temperature of the water in the pipe.
    pub water: ThermodynamicTemperature,

    /// Ambient air temperature around the sensor leads.
    pub air: ThermodynamicTemperature,
}

/// Pipe geometry seen by the flowing water.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pipe {
    /// Inner (wetted) diameter.
    pub inner_diameter: Length,
}

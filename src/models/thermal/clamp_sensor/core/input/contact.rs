use uom::si::f64::{Area, Length, ThermalConductivity};

/// Conduction path from the inner pipe wall to the sensor face.
///
/// Heat crosses the pipe wall, then the contact layer (paste, adhesive), and
/// pays an empirical spreading penalty for the small contact footprint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Sensor contact footprint.
    pub area: Area,

    /// Pipe wall thickness under the sensor.
    pub wall_thickness: Length,

    /// Pipe wall conductivity.
    pub wall_conductivity: ThermalConductivity,

    /// Contact-layer thickness; zero for a dry contact.
    pub layer_thickness: Length,

    /// Contact-layer conductivity.
    pub layer_conductivity: ThermalConductivity,

    /// Multiplier on the wall resistance added as a spreading penalty.
    ///
    /// `0` is the ideal one-dimensional wall; `1` doubles the wall term.
    pub spreading_factor: f64,
}

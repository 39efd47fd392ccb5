use uom::si::{
    f64::{Length, ThermalConductivity},
    thermal_conductivity::watt_per_meter_kelvin,
};

/// Conductivity of the copper wire cores, W/m·K.
const COPPER_CONDUCTIVITY: f64 = 400.0;

/// Sensor lead wires running from the sensor into the surrounding air.
///
/// Only the copper core carries heat along the wire; the insulation sets the
/// outer surface that exchanges heat with the air.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LeadWires {
    /// Number of conductors leaving the sensor.
    pub count: u32,

    /// Length of each conductor exposed to the air.
    pub exposed_length: Length,

    /// Copper core diameter.
    pub core_diameter: Length,

    /// Outer diameter over the insulation.
    pub outer_diameter: Length,

    /// Core conductivity.
    pub core_conductivity: ThermalConductivity,
}

impl LeadWires {
    /// Creates lead wires with copper cores.
    #[must_use]
    pub fn copper(
        count: u32,
        exposed_length: Length,
        core_diameter: Length,
        outer_diameter: Length,
    ) -> Self {
        Self {
            count,
            exposed_length,
            core_diameter,
            outer_diameter,
            core_conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(
                COPPER_CONDUCTIVITY,
            ),
        }
    }
}

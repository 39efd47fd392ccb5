//! Heat leak from the sensor to the air along its lead wires.
//!
//! Each wire is a straight fin: axial conduction through the copper core,
//! convection from the insulation surface, base at the sensor temperature and
//! a convective tip. With `m = √(h·P/(k·A))` the finite fin conducts
//!
//! ```text
//! G₁ = m·k·A·tanh(m·L)
//! ```
//!
//! and `n` wires act in parallel, `G_w = n·G₁`.

use std::{f64::consts::PI, ops::Deref};

use uom::si::{
    f64::{HeatTransfer, ThermalConductance},
    heat_transfer::watt_per_square_meter_kelvin,
    length::meter,
    thermal_conductance::watt_per_kelvin,
    thermal_conductivity::watt_per_meter_kelvin,
};

use crate::support::constraint::{NonNegative, StrictlyPositive};

use super::{ClampSensorError, LeadWires};

/// Conductance between the sensor node and the air through the lead wires, `G_w`.
///
/// Never negative; zero when no wire is exposed.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct WireSideConductance(ThermalConductance);

impl Deref for WireSideConductance {
    type Target = ThermalConductance;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Computes the total lead-wire conductance for one air-side coefficient.
///
/// The result does not depend on the water flow, so it is evaluated once per
/// convection regime.
///
/// # Errors
///
/// Returns [`ClampSensorError::InvalidGeometry`] if the wire count, either
/// diameter, or the air coefficient is not strictly positive, or if the
/// exposed length is negative. A non-positive core conductivity is reported
/// as [`ClampSensorError::InvalidProperty`].
pub fn wire_conductance(
    air: HeatTransfer,
    wires: &LeadWires,
) -> Result<WireSideConductance, ClampSensorError> {
    let h = StrictlyPositive::new(air)
        .map_err(ClampSensorError::geometry("air convection coefficient"))?
        .into_inner()
        .get::<watt_per_square_meter_kelvin>();
    let count = StrictlyPositive::new(wires.count)
        .map_err(ClampSensorError::geometry("wire count"))?
        .into_inner();
    let length = NonNegative::new(wires.exposed_length)
        .map_err(ClampSensorError::geometry("exposed wire length"))?
        .into_inner()
        .get::<meter>();
    let core = StrictlyPositive::new(wires.core_diameter)
        .map_err(ClampSensorError::geometry("wire core diameter"))?
        .into_inner()
        .get::<meter>();
    let outer = StrictlyPositive::new(wires.outer_diameter)
        .map_err(ClampSensorError::geometry("wire outer diameter"))?
        .into_inner()
        .get::<meter>();
    let k = StrictlyPositive::new(wires.core_conductivity)
        .map_err(ClampSensorError::property("wire core conductivity"))?
        .into_inner()
        .get::<watt_per_meter_kelvin>();

    let area = PI * core * core / 4.0;
    let perimeter = PI * outer;
    let m = (h * perimeter / (k * area)).sqrt();
    let single = m * k * area * (m * length).tanh();

    Ok(WireSideConductance(ThermalConductance::new::<watt_per_kelvin>(
        f64::from(count) * single,
    )))
}

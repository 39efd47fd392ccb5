//! Lumped conductance from the water to the sensor.
//!
//! The path is a planar series network per unit contact area:
//!
//! ```text
//! R = 1/h_i + t_r/k_r + t_p/k_p + σ·t_r/k_r
//! ```
//!
//! The last term penalizes the wall for lateral spreading under a small
//! contact spot. `K_w = S/R` scales the network by the contact footprint.

use std::ops::Deref;

use uom::si::f64::{HeatTransfer, ThermalConductance};

use crate::support::{
    constraint::{NonNegative, StrictlyPositive},
    units::AreaThermalResistance,
};

use super::{ClampSensorError, Contact};

/// Conductance between the water and the sensor node, `K_w`.
///
/// Always strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct WaterSideConductance(ThermalConductance);

impl Deref for WaterSideConductance {
    type Target = ThermalConductance;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Computes the unit-area resistance `R` from the water to the sensor face.
///
/// # Errors
///
/// Returns [`ClampSensorError::InvalidGeometry`] if the film coefficient,
/// wall thickness, or either conductivity is not strictly positive, or if the
/// layer thickness or spreading factor is negative.
pub fn unit_resistance(
    film: HeatTransfer,
    contact: &Contact,
) -> Result<AreaThermalResistance, ClampSensorError> {
    let film = StrictlyPositive::new(film)
        .map_err(ClampSensorError::geometry("film coefficient"))?
        .into_inner();
    let wall_thickness = StrictlyPositive::new(contact.wall_thickness)
        .map_err(ClampSensorError::geometry("wall thickness"))?
        .into_inner();
    let wall_conductivity = StrictlyPositive::new(contact.wall_conductivity)
        .map_err(ClampSensorError::geometry("wall conductivity"))?
        .into_inner();
    let layer_thickness = NonNegative::new(contact.layer_thickness)
        .map_err(ClampSensorError::geometry("contact layer thickness"))?
        .into_inner();
    let layer_conductivity = StrictlyPositive::new(contact.layer_conductivity)
        .map_err(ClampSensorError::geometry("contact layer conductivity"))?
        .into_inner();
    let spreading = NonNegative::new(contact.spreading_factor)
        .map_err(ClampSensorError::geometry("spreading factor"))?
        .into_inner();

    let convection: AreaThermalResistance = film.recip();
    let wall: AreaThermalResistance = wall_thickness / wall_conductivity;
    let layer: AreaThermalResistance = layer_thickness / layer_conductivity;

    Ok(convection + wall + layer + wall * spreading)
}

/// Computes the water-side conductance `K_w = S/R`.
///
/// # Errors
///
/// Returns [`ClampSensorError::InvalidGeometry`] if the contact area is not
/// strictly positive, or for any failure of [`unit_resistance`].
pub fn water_side_conductance(
    film: HeatTransfer,
    contact: &Contact,
) -> Result<WaterSideConductance, ClampSensorError> {
    let area = StrictlyPositive::new(contact.area)
        .map_err(ClampSensorError::geometry("contact area"))?
        .into_inner();
    let resistance = unit_resistance(film, contact)?;

    Ok(WaterSideConductance(area / resistance))
}

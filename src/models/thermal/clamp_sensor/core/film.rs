//! Internal convection from the flowing water to the pipe wall.
//!
//! The film coefficient comes from the Nusselt number of fully developed flow
//! in a round tube:
//!
//! - `Re < 2300`: laminar, `Nu = 3.66` (constant wall temperature)
//! - `Re ≥ 2300`: Dittus–Boelter, `Nu = 0.023·Re^0.8·Pr^0.4` (heating)
//!
//! Flows with `2300 ≤ Re < 4000` are tagged [`FlowRegime::Transitional`]. The
//! tag only marks the turbulent correlation as extrapolated there; it never
//! selects a different formula.

use std::{f64::consts::PI, fmt};

use uom::si::{
    f64::{Area, HeatTransfer, Length, Ratio, Velocity, VolumeRate},
    ratio::ratio,
};

use crate::support::constraint::StrictlyPositive;

use super::{ClampSensorError, WaterProperties};

/// Reynolds number at which the laminar correlation stops applying.
const LAMINAR_LIMIT: f64 = 2300.0;

/// Reynolds number above which the turbulent correlation is fully trusted.
const TURBULENT_ONSET: f64 = 4000.0;

/// Fully developed laminar Nusselt number for a constant wall temperature.
const LAMINAR_NUSSELT: f64 = 3.66;

/// Flow regime classification by Reynolds number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlowRegime {
    /// `Re < 2300`
    Laminar,
    /// `2300 ≤ Re < 4000`; turbulent correlation, lower confidence.
    Transitional,
    /// `Re ≥ 4000`
    Turbulent,
}

impl FlowRegime {
    /// Classifies a Reynolds number.
    #[must_use]
    pub fn from_reynolds(reynolds: f64) -> Self {
        if reynolds < LAMINAR_LIMIT {
            Self::Laminar
        } else if reynolds < TURBULENT_ONSET {
            Self::Transitional
        } else {
            Self::Turbulent
        }
    }

    /// Returns `true` when the Nusselt number comes from the turbulent
    /// correlation rather than the laminar constant.
    #[must_use]
    pub fn is_estimated(self) -> bool {
        !matches!(self, Self::Laminar)
    }

    /// Returns `true` when the correlation is applied outside its range.
    #[must_use]
    pub fn is_low_confidence(self) -> bool {
        matches!(self, Self::Transitional)
    }
}

impl fmt::Display for FlowRegime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Laminar => "laminar",
            Self::Transitional => "transitional",
            Self::Turbulent => "turbulent",
        })
    }
}

/// Internal film coefficient and the dimensionless groups behind it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilmCoefficient {
    /// Water-to-wall convection coefficient `h_i`.
    pub h: HeatTransfer,
    pub reynolds: f64,
    pub prandtl: f64,
    pub nusselt: f64,
    pub regime: FlowRegime,
}

/// Computes the internal film coefficient for water flowing through a pipe.
///
/// # Errors
///
/// Returns [`ClampSensorError::InvalidGeometry`] if the diameter is not
/// strictly positive, [`ClampSensorError::InvalidFlow`] if the flow rate is
/// not strictly positive, and [`ClampSensorError::InvalidProperty`] for a
/// non-positive water property.
pub fn film_coefficient(
    inner_diameter: Length,
    flow: VolumeRate,
    water: &WaterProperties,
) -> Result<FilmCoefficient, ClampSensorError> {
    let diameter = StrictlyPositive::new(inner_diameter)
        .map_err(ClampSensorError::geometry("pipe inner diameter"))?
        .into_inner();
    let flow = StrictlyPositive::new(flow)
        .map_err(|source| ClampSensorError::InvalidFlow { flow, source })?
        .into_inner();

    let prandtl = prandtl_number(water)?;
    let reynolds = reynolds_number(diameter, flow, water);
    let regime = FlowRegime::from_reynolds(reynolds);

    let nusselt = if regime.is_estimated() {
        dittus_boelter(reynolds, prandtl)
    } else {
        LAMINAR_NUSSELT
    };

    let h: HeatTransfer = water.conductivity * nusselt / diameter;

    Ok(FilmCoefficient {
        h,
        reynolds,
        prandtl,
        nusselt,
        regime,
    })
}

/// Computes the Prandtl number `μ·cp/k` of the water.
///
/// # Errors
///
/// Returns [`ClampSensorError::InvalidProperty`] if any water property is
/// not strictly positive.
pub fn prandtl_number(water: &WaterProperties) -> Result<f64, ClampSensorError> {
    StrictlyPositive::new(water.density).map_err(ClampSensorError::property("water density"))?;
    let viscosity = StrictlyPositive::new(water.viscosity)
        .map_err(ClampSensorError::property("water viscosity"))?
        .into_inner();
    let conductivity = StrictlyPositive::new(water.conductivity)
        .map_err(ClampSensorError::property("water conductivity"))?
        .into_inner();
    let specific_heat = StrictlyPositive::new(water.specific_heat)
        .map_err(ClampSensorError::property("water specific heat"))?
        .into_inner();

    let prandtl: Ratio = viscosity * specific_heat / conductivity;
    Ok(prandtl.get::<ratio>())
}

/// Reynolds number `ρ·v·D/μ` from the mean velocity `v = Q/(π·D²/4)`.
fn reynolds_number(diameter: Length, flow: VolumeRate, water: &WaterProperties) -> f64 {
    let cross_section: Area = diameter * diameter * (PI / 4.0);
    let velocity: Velocity = flow / cross_section;
    let reynolds: Ratio = water.density * velocity * diameter / water.viscosity;
    reynolds.get::<ratio>()
}

fn dittus_boelter(reynolds: f64, prandtl: f64) -> f64 {
    0.023 * reynolds.powf(0.8) * prandtl.powf(0.4)
}

//! Clamp-on pipe temperature sensor bias.
//!
//! A sensor strapped to the outside of a water pipe reads a blend of the water
//! and the surrounding air: heat reaches it through the pipe wall and contact
//! layer, and leaks away along its lead wires. This module estimates the
//! resulting reading error for a set of flow rates in still air and in a
//! draft.
//!
//! [`ClampSensor`] is the [`twine_core::Model`] adapter. The computation
//! lives in the internal `core` module, whose component functions are
//! re-exported here for callers that need a single stage.
//!
//! # Example
//!
//! ```
//! use clampon_bias::config::Parameters;
//! use clampon_bias::models::thermal::clamp_sensor::{ClampSensor, ReadingDirection};
//! use twine_core::Model;
//!
//! let inputs = Parameters::default().to_inputs().unwrap();
//! let report = ClampSensor::default().call(&inputs).unwrap();
//!
//! let headline = report.headline().unwrap();
//! assert_eq!(headline.still.direction(), ReadingDirection::OverReads);
//! ```

mod core;

pub use self::core::{
    AirConvection, ClampSensorError, Contact, ConvectionRegime, DEFAULT_FLOWS_LPM,
    FilmCoefficient, FlowRegime, HEADLINE_FLOW_LPM, Headline, LeadWires, Pipe, Reading,
    ReadingDirection, Report, ReportRow, SensorBias, SensorBiasResult, Temperatures,
    ThermalInputs, WaterProperties, WaterSideConductance, WireSideConductance, default_flows,
    evaluate, film_coefficient, prandtl_number, sensor_bias, unit_resistance,
    water_side_conductance, wire_conductance,
};

use twine_core::Model;
use uom::si::f64::VolumeRate;

/// Evaluates a clamp-on installation over a fixed list of flow rates.
#[derive(Debug, Clone, PartialEq)]
pub struct ClampSensor {
    flows: Vec<VolumeRate>,
}

impl ClampSensor {
    /// Creates a model evaluating `flows`, in order.
    #[must_use]
    pub fn new(flows: Vec<VolumeRate>) -> Self {
        Self { flows }
    }

    /// Flow rates this model evaluates.
    #[must_use]
    pub fn flows(&self) -> &[VolumeRate] {
        &self.flows
    }
}

/// Evaluates [`DEFAULT_FLOWS_LPM`].
impl Default for ClampSensor {
    fn default() -> Self {
        Self::new(default_flows())
    }
}

impl Model for ClampSensor {
    type Input = ThermalInputs;
    type Output = Report;
    type Error = ClampSensorError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let results = evaluate(input, &self.flows)?;
        Ok(Report::assemble(&results, &input.temperatures))
    }
}

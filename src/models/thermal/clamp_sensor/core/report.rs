//! Tabular packaging of evaluation results for display.

use std::fmt;

use uom::si::{
    f64::{TemperatureInterval, ThermalConductance, ThermodynamicTemperature, VolumeRate},
    temperature_interval::kelvin as delta_kelvin,
    volume_rate::liter_per_minute,
};

use crate::support::units::TemperatureDifference;

use super::{ConvectionRegime, FlowRegime, SensorBiasResult, Temperatures};

/// Flow rate summarized by [`Report::headline`], L/min.
pub const HEADLINE_FLOW_LPM: f64 = 10.0;

/// Relative tolerance used when looking up a row by flow rate.
const FLOW_MATCH_TOLERANCE: f64 = 1e-9;

/// Which way the sensor misreads the water temperature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReadingDirection {
    /// The sensor reads warmer than the water.
    OverReads,
    /// The sensor reads colder than the water.
    UnderReads,
    /// The sensor reads the water temperature.
    Unbiased,
}

impl ReadingDirection {
    /// Classifies a bias by its sign.
    #[must_use]
    pub fn from_bias(bias: TemperatureInterval) -> Self {
        let bias = bias.get::<delta_kelvin>();
        if bias > 0.0 {
            Self::OverReads
        } else if bias < 0.0 {
            Self::UnderReads
        } else {
            Self::Unbiased
        }
    }
}

impl fmt::Display for ReadingDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::OverReads => "over-reads",
            Self::UnderReads => "under-reads",
            Self::Unbiased => "no bias",
        })
    }
}

/// The sensor reading under one convection regime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reading {
    /// Lead-wire conductance to the air for this regime.
    pub wire_side: ThermalConductance,
    pub sensor_temperature: ThermodynamicTemperature,
    pub bias: TemperatureInterval,
}

impl Reading {
    #[must_use]
    pub fn direction(&self) -> ReadingDirection {
        ReadingDirection::from_bias(self.bias)
    }
}

impl From<&SensorBiasResult> for Reading {
    fn from(result: &SensorBiasResult) -> Self {
        Self {
            wire_side: result.wire_side,
            sensor_temperature: result.sensor_temperature,
            bias: result.bias,
        }
    }
}

/// One table row: a flow rate with still-air and draft readings side by side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReportRow {
    pub flow: VolumeRate,
    pub reynolds: f64,
    pub regime: FlowRegime,
    /// Water-side conductance at this flow.
    pub water_side: ThermalConductance,
    pub still: Reading,
    pub draft: Reading,
}

impl ReportRow {
    /// Returns the reading for `regime`.
    #[must_use]
    pub fn reading(&self, regime: ConvectionRegime) -> &Reading {
        match regime {
            ConvectionRegime::Still => &self.still,
            ConvectionRegime::Draft => &self.draft,
        }
    }

    fn from_pair(pair: &[SensorBiasResult]) -> Option<Self> {
        let [still, draft] = pair else {
            return None;
        };
        if still.convection != ConvectionRegime::Still
            || draft.convection != ConvectionRegime::Draft
        {
            return None;
        }

        Some(Self {
            flow: still.flow,
            reynolds: still.reynolds,
            regime: still.regime,
            water_side: still.water_side,
            still: still.into(),
            draft: draft.into(),
        })
    }
}

/// Summary of the readings at [`HEADLINE_FLOW_LPM`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Headline {
    /// Water minus air temperature.
    pub water_minus_air: TemperatureInterval,
    pub still: Reading,
    pub draft: Reading,
}

/// Evaluation results grouped by flow rate, in evaluation order.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub rows: Vec<ReportRow>,

    /// Water minus air temperature.
    pub water_minus_air: TemperatureInterval,
}

impl Report {
    /// Groups flat results into one row per flow rate.
    ///
    /// `results` is expected in the order produced by
    /// [`evaluate`](super::evaluate): for each flow, the still-air result
    /// followed by the draft result. Results that do not form such a pair
    /// are skipped.
    #[must_use]
    pub fn assemble(results: &[SensorBiasResult], temperatures: &Temperatures) -> Self {
        let rows = results
            .chunk_by(|a, b| {
                a.flow == b.flow
                    && a.convection == ConvectionRegime::Still
                    && b.convection == ConvectionRegime::Draft
            })
            .filter_map(ReportRow::from_pair)
            .collect();

        Self {
            rows,
            water_minus_air: temperatures.water.minus(temperatures.air),
        }
    }

    /// Returns the first row whose flow matches `flow`.
    #[must_use]
    pub fn row_at(&self, flow: VolumeRate) -> Option<&ReportRow> {
        let target = flow.get::<liter_per_minute>();
        self.rows.iter().find(|row| {
            let lpm = row.flow.get::<liter_per_minute>();
            (lpm - target).abs() <= FLOW_MATCH_TOLERANCE * target.abs().max(lpm.abs())
        })
    }

    /// Returns the still and draft readings at [`HEADLINE_FLOW_LPM`], if evaluated.
    #[must_use]
    pub fn headline(&self) -> Option<Headline> {
        self.row_at(VolumeRate::new::<liter_per_minute>(HEADLINE_FLOW_LPM))
            .map(|row| Headline {
                water_minus_air: self.water_minus_air,
                still: row.still,
                draft: row.draft,
            })
    }

    /// Returns the still and draft lead-wire conductances.
    ///
    /// These do not depend on flow, so any row carries them.
    #[must_use]
    pub fn wire_sides(&self) -> Option<[ThermalConductance; 2]> {
        self.rows
            .first()
            .map(|row| [row.still.wire_side, row.draft.wire_side])
    }
}

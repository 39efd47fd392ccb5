//! Steady-state bias of a clamp-on pipe temperature sensor.
//!
//! The sensor node sits between two reservoirs:
//!
//! ```text
//!   T_w ──[ K_w: film + wall + contact + spreading ]── T_s ──[ G_w: lead-wire fins ]── T_air
//! ```
//!
//! [`film_coefficient`] turns a flow rate into the internal convection
//! coefficient, [`water_side_conductance`] builds `K_w` from it,
//! [`wire_conductance`] gives `G_w` for each air-side regime, and
//! [`sensor_bias`] balances the node. [`evaluate`] runs that pipeline for
//! every flow rate and both convection regimes.

mod bias;
mod contact;
mod error;
mod film;
mod input;
mod report;
mod wire;

#[cfg(test)]
pub(crate) mod test_support;

pub use bias::{SensorBias, sensor_bias};
pub use contact::{WaterSideConductance, unit_resistance, water_side_conductance};
pub use error::ClampSensorError;
pub use film::{FilmCoefficient, FlowRegime, film_coefficient, prandtl_number};
pub use input::{
    AirConvection, Contact, ConvectionRegime, LeadWires, Pipe, Temperatures, ThermalInputs,
    WaterProperties,
};
pub use report::{HEADLINE_FLOW_LPM, Headline, Reading, ReadingDirection, Report, ReportRow};
pub use wire::{WireSideConductance, wire_conductance};

use log::{debug, warn};
use uom::si::{
    f64::{TemperatureInterval, ThermalConductance, ThermodynamicTemperature, VolumeRate},
    heat_transfer::watt_per_square_meter_kelvin,
    thermal_conductance::watt_per_kelvin,
    volume_rate::liter_per_minute,
};

/// Flow rates evaluated when the caller does not choose any, L/min.
pub const DEFAULT_FLOWS_LPM: [f64; 3] = [5.0, 10.0, 20.0];

/// Returns [`DEFAULT_FLOWS_LPM`] as flow-rate quantities.
#[must_use]
pub fn default_flows() -> Vec<VolumeRate> {
    DEFAULT_FLOWS_LPM
        .iter()
        .map(|&lpm| VolumeRate::new::<liter_per_minute>(lpm))
        .collect()
}

/// Sensor reading for one flow rate under one convection regime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensorBiasResult {
    pub flow: VolumeRate,
    pub convection: ConvectionRegime,
    pub sensor_temperature: ThermodynamicTemperature,

    /// `T_s − T_w`; positive when the sensor over-reads.
    pub bias: TemperatureInterval,

    pub reynolds: f64,
    pub regime: FlowRegime,
    pub water_side: ThermalConductance,
    pub wire_side: ThermalConductance,
}

/// Evaluates the sensor bias for every flow rate and convection regime.
///
/// Results are ordered by flow, in the order given, and within each flow by
/// [`ConvectionRegime::ALL`] (still air, then draft). The lead-wire
/// conductances are flow-independent and computed once up front, so an
/// empty `flows` yields an empty result only after the wire inputs have been
/// validated.
///
/// # Errors
///
/// Returns the first [`ClampSensorError`] raised by any component. No partial
/// results are returned.
///
/// # Example
///
/// ```
/// # use clampon_bias::models::thermal::clamp_sensor::{default_flows, evaluate};
/// # fn inputs() -> clampon_bias::models::thermal::clamp_sensor::ThermalInputs {
/// #     clampon_bias::config::Parameters::default().to_inputs().unwrap()
/// # }
/// let results = evaluate(&inputs(), &default_flows()).unwrap();
/// assert_eq!(results.len(), 6);
/// ```
pub fn evaluate(
    inputs: &ThermalInputs,
    flows: &[VolumeRate],
) -> Result<Vec<SensorBiasResult>, ClampSensorError> {
    let wire_sides = ConvectionRegime::ALL
        .into_iter()
        .map(|convection| {
            let air = inputs.convection.coefficient(convection);
            let wire_side = wire_conductance(air, &inputs.wires)?;
            debug!(
                "{convection:?} air: G_w = {:.4e} W/K",
                wire_side.get::<watt_per_kelvin>()
            );
            Ok::<_, ClampSensorError>((convection, wire_side))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut results = Vec::with_capacity(flows.len() * wire_sides.len());

    for &flow in flows {
        let film = film_coefficient(inputs.pipe.inner_diameter, flow, &inputs.water)?;
        let water_side = water_side_conductance(film.h, &inputs.contact)?;

        debug!(
            "{:.2} L/min: Re = {:.0} ({:?}), h_i = {:.1} W/m²·K, K_w = {:.4e} W/K",
            flow.get::<liter_per_minute>(),
            film.reynolds,
            film.regime,
            film.h.get::<watt_per_square_meter_kelvin>(),
            water_side.get::<watt_per_kelvin>(),
        );
        if film.regime.is_low_confidence() {
            warn!(
                "{:.2} L/min: Re = {:.0} is transitional; turbulent correlation extrapolated",
                flow.get::<liter_per_minute>(),
                film.reynolds,
            );
        }

        for &(convection, wire_side) in &wire_sides {
            let SensorBias {
                sensor_temperature,
                bias,
            } = sensor_bias(*water_side, *wire_side, &inputs.temperatures)?;

            results.push(SensorBiasResult {
                flow,
                convection,
                sensor_temperature,
                bias,
                reynolds: film.reynolds,
                regime: film.regime,
                water_side: *water_side,
                wire_side: *wire_side,
            });
        }
    }

    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        area::square_millimeter,
        f64::{Area, HeatTransfer, Length},
        length::millimeter,
        temperature_interval::kelvin as delta_kelvin,
    };

    use crate::support::constraint::ConstraintError;
    use super::test_support::{reference_inputs, temperatures};

    fn bias_k(result: &SensorBiasResult) -> f64 {
        result.bias.get::<delta_kelvin>()
    }

    fn at(results: &[SensorBiasResult], convection: ConvectionRegime) -> Vec<f64> {
        results
            .iter()
            .filter(|r| r.convection == convection)
            .map(bias_k)
            .collect()
    }

    #[test]
    fn reference_scenario() {
        let flow = VolumeRate::new::<liter_per_minute>(10.0);
        let results = evaluate(&reference_inputs(), &[flow]).unwrap();

        let [still, draft] = results.as_slice() else {
            panic!("expected two results, got {}", results.len());
        };

        assert_eq!(still.convection, ConvectionRegime::Still);
        assert_eq!(draft.convection, ConvectionRegime::Draft);
        assert_eq!(still.regime, FlowRegime::Turbulent);
        assert_relative_eq!(still.reynolds, 21_135.945_869, max_relative = 1e-9);

        assert_relative_eq!(bias_k(still), 4.226_640_543_9, max_relative = 1e-8);
        assert_relative_eq!(bias_k(draft), 4.994_131_700_0, max_relative = 1e-8);
        assert!(bias_k(still) > 0.0);
        assert!(bias_k(draft) > bias_k(still));
    }

    #[test]
    fn preserves_flow_order() {
        let flows: Vec<VolumeRate> = [20.0, 5.0, 10.0]
            .into_iter()
            .map(VolumeRate::new::<liter_per_minute>)
            .collect();

        let results = evaluate(&reference_inputs(), &flows).unwrap();
        assert_eq!(results.len(), 6);

        for (pair, flow) in results.chunks_exact(2).zip(&flows) {
            assert_eq!(pair[0].flow, *flow);
            assert_eq!(pair[1].flow, *flow);
            assert_eq!(pair[0].convection, ConvectionRegime::Still);
            assert_eq!(pair[1].convection, ConvectionRegime::Draft);
        }
    }

    #[test]
    fn bias_sign_law() {
        let cases = [(17.0, 23.0), (60.0, 20.0), (20.0, 20.0), (4.0, 35.0)];

        for (water, air) in cases {
            let mut inputs = reference_inputs();
            inputs.temperatures = temperatures(water, air);

            let results = evaluate(&inputs, &default_flows()).unwrap();
            for result in &results {
                let bias = bias_k(result);
                let driving = air - water;
                if driving > 0.0 {
                    assert!(bias >= 0.0);
                } else if driving < 0.0 {
                    assert!(bias <= 0.0);
                } else {
                    assert_eq!(bias, 0.0);
                }
                assert!(bias.abs() <= driving.abs() + 1e-9);
            }
        }
    }

    #[test]
    fn draft_pulls_further_toward_air() {
        for (water, air) in [(17.0, 23.0), (50.0, 21.0)] {
            let mut inputs = reference_inputs();
            inputs.temperatures = temperatures(water, air);

            let results = evaluate(&inputs, &default_flows()).unwrap();
            let still = at(&results, ConvectionRegime::Still);
            let draft = at(&results, ConvectionRegime::Draft);

            for (s, d) in still.iter().zip(&draft) {
                assert!(d.abs() >= s.abs(), "still={s} draft={d}");
            }
        }
    }

    #[test]
    fn zero_length_wire_reads_water() {
        let mut inputs = reference_inputs();
        inputs.wires.exposed_length = Length::new::<millimeter>(0.0);
        inputs.convection.draft = HeatTransfer::new::<watt_per_square_meter_kelvin>(500.0);

        let results = evaluate(&inputs, &default_flows()).unwrap();
        for result in &results {
            assert_eq!(result.wire_side.get::<watt_per_kelvin>(), 0.0);
            assert_eq!(bias_k(result), 0.0);
            assert_eq!(result.sensor_temperature, inputs.temperatures.water);
        }
    }

    #[test]
    fn spreading_increases_bias() {
        let flow = [VolumeRate::new::<liter_per_minute>(10.0)];

        let biases: Vec<f64> = [0.0, 0.5, 1.0, 2.0]
            .into_iter()
            .map(|sigma| {
                let mut inputs = reference_inputs();
                inputs.contact.spreading_factor = sigma;
                bias_k(&evaluate(&inputs, &flow).unwrap()[0])
            })
            .collect();

        assert!(biases.windows(2).all(|pair| pair[1] > pair[0]));
        assert!(biases.iter().all(|&bias| bias < 6.0));
    }

    #[test]
    fn faster_flow_reads_closer_to_water() {
        let results = evaluate(&reference_inputs(), &default_flows()).unwrap();
        let still = at(&results, ConvectionRegime::Still);

        assert!(still.windows(2).all(|pair| pair[1] < pair[0]));
    }

    #[test]
    fn rejects_invalid_inputs() {
        let flows = default_flows();

        let mut inputs = reference_inputs();
        inputs.pipe.inner_diameter = Length::new::<millimeter>(0.0);
        assert_eq!(
            evaluate(&inputs, &flows).unwrap_err(),
            ClampSensorError::InvalidGeometry {
                quantity: "pipe inner diameter",
                source: ConstraintError::Zero,
            }
        );

        let mut inputs = reference_inputs();
        inputs.contact.area = Area::new::<square_millimeter>(-1.0);
        assert_eq!(
            evaluate(&inputs, &flows).unwrap_err(),
            ClampSensorError::InvalidGeometry {
                quantity: "contact area",
                source: ConstraintError::Negative,
            }
        );

        let mut inputs = reference_inputs();
        inputs.wires.count = 0;
        assert_eq!(
            evaluate(&inputs, &flows).unwrap_err(),
            ClampSensorError::InvalidGeometry {
                quantity: "wire count",
                source: ConstraintError::Zero,
            }
        );
    }

    #[test]
    fn one_bad_flow_fails_the_whole_evaluation() {
        let flows = [
            VolumeRate::new::<liter_per_minute>(10.0),
            VolumeRate::new::<liter_per_minute>(0.0),
        ];

        assert!(matches!(
            evaluate(&reference_inputs(), &flows),
            Err(ClampSensorError::InvalidFlow { .. })
        ));
    }

    #[test]
    fn empty_flows_still_validate_wires() {
        assert!(evaluate(&reference_inputs(), &[]).unwrap().is_empty());

        let mut inputs = reference_inputs();
        inputs.wires.count = 0;
        assert!(evaluate(&inputs, &[]).is_err());
    }
}

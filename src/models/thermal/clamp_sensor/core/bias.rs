//! Steady-state energy balance at the sensor node.
//!
//! The sensor exchanges heat with exactly two reservoirs: the water through
//! `K_w` and the air through `G_w`. Zero net heat flow gives the
//! conductance-weighted average
//!
//! ```text
//! T_s = (K_w·T_w + G_w·T_air) / (K_w + G_w)
//! ```
//!
//! evaluated here as `T_s = T_w + Δ` with `Δ = (T_air − T_w)·G_w/(K_w + G_w)`.
//! The two forms are algebraically identical. In the second, `Δ` is exactly
//! zero when the temperatures match or no wire is exposed, and `|Δ|` never
//! exceeds `|T_air − T_w|` since the weight lies in `[0, 1]`.

use uom::si::{
    f64::{Ratio, TemperatureInterval, ThermalConductance, ThermodynamicTemperature},
    ratio::ratio,
    thermodynamic_temperature::kelvin,
};

use crate::support::{
    constraint::{NonNegative, StrictlyPositive},
    units::TemperatureDifference,
};

use super::{ClampSensorError, Temperatures};

/// Equilibrium sensor reading and its error relative to the water.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensorBias {
    /// Temperature the sensor settles at, `T_s`.
    pub sensor_temperature: ThermodynamicTemperature,

    /// Reading error `Δ = T_s − T_w`.
    ///
    /// Positive when the sensor over-reads (warmer air pulls it up).
    pub bias: TemperatureInterval,
}

/// Computes the sensor temperature and bias from the two conductances.
///
/// # Errors
///
/// Returns [`ClampSensorError::InvalidProperty`] if either temperature is not
/// a strictly positive absolute temperature, and
/// [`ClampSensorError::DegenerateConductance`] if either conductance is
/// negative or `NaN`, or if their sum is not strictly positive.
pub fn sensor_bias(
    water_side: ThermalConductance,
    wire_side: ThermalConductance,
    temperatures: &Temperatures,
) -> Result<SensorBias, ClampSensorError> {
    let degenerate = |_| ClampSensorError::DegenerateConductance {
        water_side,
        wire_side,
    };

    let water = positive_temperature(temperatures.water, "water temperature")?;
    let air = positive_temperature(temperatures.air, "air temperature")?;

    let k = NonNegative::new(water_side).map_err(degenerate)?.into_inner();
    let g = NonNegative::new(wire_side).map_err(degenerate)?.into_inner();
    let total = StrictlyPositive::new(k + g).map_err(degenerate)?.into_inner();

    let weight: Ratio = g / total;
    let bias = air.minus(water) * weight.get::<ratio>();

    Ok(SensorBias {
        sensor_temperature: water + bias,
        bias,
    })
}

fn positive_temperature(
    temperature: ThermodynamicTemperature,
    quantity: &'static str,
) -> Result<ThermodynamicTemperature, ClampSensorError> {
    StrictlyPositive::new(temperature.get::<kelvin>())
        .map_err(ClampSensorError::property(quantity))?;
    Ok(temperature)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        temperature_interval::kelvin as delta_kelvin, thermal_conductance::watt_per_kelvin,
    };

    use crate::models::thermal::clamp_sensor::core::test_support::temperatures;
    use crate::support::constraint::ConstraintError;

    fn conductance(w_per_k: f64) -> ThermalConductance {
        ThermalConductance::new::<watt_per_kelvin>(w_per_k)
    }

    fn bias_k(result: SensorBias) -> f64 {
        result.bias.get::<delta_kelvin>()
    }

    #[test]
    fn matches_weighted_average() {
        let (k, g) = (7.835e-4, 1.867e-3);
        let t = temperatures(17.0, 23.0);

        let result = sensor_bias(conductance(k), conductance(g), &t).unwrap();

        let tw = 17.0 + 273.15;
        let ta = 23.0 + 273.15;
        let weighted = (k * tw + g * ta) / (k + g);

        assert_relative_eq!(
            result.sensor_temperature.get::<kelvin>(),
            weighted,
            max_relative = 1e-12
        );
        assert_relative_eq!(bias_k(result), weighted - tw, max_relative = 1e-9);
    }

    #[test]
    fn sign_follows_air_minus_water() {
        let (k, g) = (conductance(1e-3), conductance(2e-3));

        let warm_air = sensor_bias(k, g, &temperatures(17.0, 23.0)).unwrap();
        assert!(bias_k(warm_air) > 0.0);

        let cold_air = sensor_bias(k, g, &temperatures(60.0, 20.0)).unwrap();
        assert!(bias_k(cold_air) < 0.0);

        let equal = sensor_bias(k, g, &temperatures(20.0, 20.0)).unwrap();
        assert_eq!(bias_k(equal), 0.0);
    }

    #[test]
    fn bounded_by_driving_difference() {
        let t = temperatures(10.0, 30.0);

        for (k, g) in [(1e-9, 1.0), (1.0, 1e-9), (1e-3, 1e-3), (0.0, 5e-3)] {
            let result = sensor_bias(conductance(k), conductance(g), &t).unwrap();
            let bias = bias_k(result);
            assert!(bias >= 0.0 && bias <= 20.0 + 1e-12, "k={k} g={g} bias={bias}");
        }

        // Only the air path: the sensor reads the air.
        let result = sensor_bias(conductance(0.0), conductance(5e-3), &t).unwrap();
        assert_relative_eq!(bias_k(result), 20.0, max_relative = 1e-12);
    }

    #[test]
    fn no_wire_path_reads_water_exactly() {
        let t = temperatures(17.0, 23.0);
        let result = sensor_bias(conductance(7.8e-4), conductance(0.0), &t).unwrap();

        assert_eq!(bias_k(result), 0.0);
        assert_eq!(result.sensor_temperature, t.water);
    }

    #[test]
    fn rejects_degenerate_conductance() {
        let t = temperatures(17.0, 23.0);

        let err = sensor_bias(conductance(0.0), conductance(0.0), &t).unwrap_err();
        assert!(matches!(err, ClampSensorError::DegenerateConductance { .. }));

        let err = sensor_bias(conductance(-1e-3), conductance(2e-3), &t).unwrap_err();
        assert!(matches!(err, ClampSensorError::DegenerateConductance { .. }));

        let err = sensor_bias(conductance(f64::NAN), conductance(2e-3), &t).unwrap_err();
        assert!(matches!(err, ClampSensorError::DegenerateConductance { .. }));
    }

    #[test]
    fn rejects_non_physical_temperature() {
        let t = Temperatures {
            water: ThermodynamicTemperature::new::<kelvin>(0.0),
            air: ThermodynamicTemperature::new::<kelvin>(296.15),
        };

        assert_eq!(
            sensor_bias(conductance(1e-3), conductance(1e-3), &t).unwrap_err(),
            ClampSensorError::InvalidProperty {
                quantity: "water temperature",
                source: ConstraintError::Zero,
            }
        );
    }
}

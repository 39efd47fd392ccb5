use uom::{
    si::{ISQ, Quantity, SI, f64::HeatTransfer, heat_transfer::watt_per_square_meter_kelvin},
    typenum::{N1, P1, P3, Z0},
};

/// Unit-area thermal resistance, m²·K/W in SI.
///
/// The reciprocal of a [`HeatTransfer`] coefficient. Series layers of a
/// planar wall add in this quantity: `1/h + t₁/k₁ + t₂/k₂`.
pub type AreaThermalResistance = Quantity<ISQ<Z0, N1, P3, Z0, P1, Z0, Z0>, SI<f64>, f64>;

/// Returns an [`AreaThermalResistance`] of `value` m²·K/W.
#[must_use]
pub fn square_meter_kelvin_per_watt(value: f64) -> AreaThermalResistance {
    HeatTransfer::new::<watt_per_square_meter_kelvin>(1.0).recip() * value
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        f64::{Area, Length, ThermalConductance, ThermalConductivity},
        area::square_millimeter,
        length::millimeter,
        thermal_conductance::watt_per_kelvin,
        thermal_conductivity::watt_per_meter_kelvin,
    };

    #[test]
    fn layers_add_in_series() {
        let film = HeatTransfer::new::<watt_per_square_meter_kelvin>(1000.0).recip();
        let wall: AreaThermalResistance = Length::new::<millimeter>(1.5)
            / ThermalConductivity::new::<watt_per_meter_kelvin>(0.2);

        let total: AreaThermalResistance = film + wall;
        assert_relative_eq!(total.value, 0.001 + 0.0075, epsilon = 1e-15);
    }

    #[test]
    fn area_over_resistance_is_conductance() {
        let area = Area::new::<square_millimeter>(12.0);
        let resistance = square_meter_kelvin_per_watt(0.015);

        let conductance: ThermalConductance = area / resistance;
        assert_relative_eq!(
            conductance.get::<watt_per_kelvin>(),
            12e-6 / 0.015,
            epsilon = 1e-15
        );
    }
}

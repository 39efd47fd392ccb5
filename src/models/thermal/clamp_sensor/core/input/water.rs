use uom::si::{
    dynamic_viscosity::pascal_second,
    f64::{DynamicViscosity, MassDensity, SpecificHeatCapacity, ThermalConductivity},
    mass_density::kilogram_per_cubic_meter,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermal_conductivity::watt_per_meter_kelvin,
};

/// Constant transport properties of the water in the pipe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaterProperties {
    pub density: MassDensity,
    pub viscosity: DynamicViscosity,
    pub conductivity: ThermalConductivity,
    pub specific_heat: SpecificHeatCapacity,
}

impl WaterProperties {
    /// Liquid water near 20–30 °C.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            density: MassDensity::new::<kilogram_per_cubic_meter>(998.0),
            viscosity: DynamicViscosity::new::<pascal_second>(1.002e-3),
            conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(0.60),
            specific_heat: SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(4182.0),
        }
    }
}

impl Default for WaterProperties {
    fn default() -> Self {
        Self::standard()
    }
}

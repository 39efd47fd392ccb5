use uom::si::{
    area::square_millimeter,
    f64::{Area, HeatTransfer, Length, ThermalConductivity, ThermodynamicTemperature},
    heat_transfer::watt_per_square_meter_kelvin,
    length::millimeter,
    thermal_conductivity::watt_per_meter_kelvin,
    thermodynamic_temperature::degree_celsius,
};

use super::{
    AirConvection, Contact, LeadWires, Pipe, Temperatures, ThermalInputs, WaterProperties,
};

/// Rubber hose, paste-mounted sensor, four 0.2 mm leads, 17 °C water in 23 °C air.
pub(crate) fn reference_inputs() -> ThermalInputs {
    ThermalInputs {
        temperatures: Temperatures {
            water: ThermodynamicTemperature::new::<degree_celsius>(17.0),
            air: ThermodynamicTemperature::new::<degree_celsius>(23.0),
        },
        pipe: Pipe {
            inner_diameter: Length::new::<millimeter>(10.0),
        },
        contact: Contact {
            area: Area::new::<square_millimeter>(12.0),
            wall_thickness: Length::new::<millimeter>(1.5),
            wall_conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(0.20),
            layer_thickness: Length::new::<millimeter>(0.20),
            layer_conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(1.0),
            spreading_factor: 1.0,
        },
        wires: LeadWires::copper(
            4,
            Length::new::<millimeter>(50.0),
            Length::new::<millimeter>(0.20),
            Length::new::<millimeter>(0.60),
        ),
        convection: AirConvection {
            still: HeatTransfer::new::<watt_per_square_meter_kelvin>(10.0),
            draft: HeatTransfer::new::<watt_per_square_meter_kelvin>(40.0),
        },
        water: WaterProperties::standard(),
    }
}

/// Temperatures in °C.
pub(crate) fn temperatures(water: f64, air: f64) -> Temperatures {
    Temperatures {
        water: ThermodynamicTemperature::new::<degree_celsius>(water),
        air: ThermodynamicTemperature::new::<degree_celsius>(air),
    }
}

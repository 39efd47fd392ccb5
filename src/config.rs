//! Parameter files.
//!
//! A parameter file is TOML in the units an installer measures in: °C,
//! millimetres, mm², L/min. Every key is optional and falls back to the
//! reference installation, so an empty file is valid:
//!
//! ```toml
//! flows_lpm = [2.0, 10.0]
//!
//! [temperatures]
//! water_c = 60.0
//! air_c = 20.0
//!
//! [contact]
//! wall_material = "pvc"
//! layer_material = "other"
//! layer_conductivity = 0.8
//! ```
//!
//! [`Parameters::to_inputs`] converts a file into [`ThermalInputs`]. It only
//! converts units and resolves material presets; physical validation is left
//! to the model.

use std::{fs, io, path::Path, path::PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uom::si::{
    area::square_millimeter,
    dynamic_viscosity::pascal_second,
    f64::{
        Area, DynamicViscosity, HeatTransfer, Length, MassDensity, SpecificHeatCapacity,
        ThermalConductivity, ThermodynamicTemperature, VolumeRate,
    },
    heat_transfer::watt_per_square_meter_kelvin,
    length::millimeter,
    mass_density::kilogram_per_cubic_meter,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermal_conductivity::watt_per_meter_kelvin,
    thermodynamic_temperature::degree_celsius,
    volume_rate::liter_per_minute,
};

use crate::{
    models::thermal::clamp_sensor::{
        AirConvection, Contact, DEFAULT_FLOWS_LPM, LeadWires, Pipe, Temperatures, ThermalInputs,
        WaterProperties,
    },
    support::materials::{ContactMaterial, WallMaterial},
};

/// Errors from reading or resolving a parameter file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read `{}`", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid parameter file")]
    Parse(#[from] toml::de::Error),

    #[error("could not write parameters")]
    Serialize(#[from] toml::ser::Error),

    /// A material of `other` was selected without giving its conductivity.
    #[error("{layer} material is `other` but no {layer} conductivity was given")]
    MissingConductivity { layer: &'static str },
}

/// Reads and parses a parameter file.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] if the file cannot be read and
/// [`ConfigError::Parse`] if it is not a valid parameter file.
pub fn load(path: impl AsRef<Path>) -> Result<Parameters, ConfigError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Parameters::from_toml(&text)
}

/// A complete set of model parameters in display units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Parameters {
    /// Flow rates to evaluate, L/min.
    pub flows_lpm: Vec<f64>,

    pub temperatures: TemperatureParameters,
    pub pipe: PipeParameters,
    pub contact: ContactParameters,
    pub wires: WireParameters,
    pub convection: ConvectionParameters,
    pub water: WaterParameters,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TemperatureParameters {
    pub water_c: f64,
    pub air_c: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PipeParameters {
    pub inner_diameter_mm: f64,
}

/// Wall and contact layer between the water and the sensor.
///
/// An explicit conductivity overrides the material preset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContactParameters {
    pub area_mm2: f64,

    pub wall_material: WallMaterial,
    pub wall_thickness_mm: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wall_conductivity: Option<f64>,

    pub layer_material: ContactMaterial,
    pub layer_thickness_mm: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layer_conductivity: Option<f64>,

    /// Extra wall resistance, as a multiple of the wall's own, 0 to about 2.
    pub spreading_factor: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WireParameters {
    pub count: u32,
    pub exposed_length_mm: f64,
    pub core_diameter_mm: f64,
    pub outer_diameter_mm: f64,
    /// W/m·K
    pub core_conductivity: f64,
}

/// Air-side convection coefficients, W/m²·K.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConvectionParameters {
    pub still: f64,
    pub draft: f64,
}

/// Water properties in SI units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WaterParameters {
    /// kg/m³
    pub density: f64,
    /// Pa·s
    pub viscosity: f64,
    /// W/m·K
    pub conductivity: f64,
    /// J/kg·K
    pub specific_heat: f64,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            flows_lpm: DEFAULT_FLOWS_LPM.to_vec(),
            temperatures: TemperatureParameters::default(),
            pipe: PipeParameters::default(),
            contact: ContactParameters::default(),
            wires: WireParameters::default(),
            convection: ConvectionParameters::default(),
            water: WaterParameters::default(),
        }
    }
}

impl Default for TemperatureParameters {
    fn default() -> Self {
        Self {
            water_c: 17.0,
            air_c: 23.0,
        }
    }
}

impl Default for PipeParameters {
    fn default() -> Self {
        Self {
            inner_diameter_mm: 10.0,
        }
    }
}

impl Default for ContactParameters {
    fn default() -> Self {
        Self {
            area_mm2: 12.0,
            wall_material: WallMaterial::default(),
            wall_thickness_mm: 1.5,
            wall_conductivity: None,
            layer_material: ContactMaterial::default(),
            layer_thickness_mm: 0.20,
            layer_conductivity: None,
            spreading_factor: 1.0,
        }
    }
}

impl Default for WireParameters {
    fn default() -> Self {
        Self {
            count: 4,
            exposed_length_mm: 50.0,
            core_diameter_mm: 0.20,
            outer_diameter_mm: 0.60,
            core_conductivity: 400.0,
        }
    }
}

impl Default for ConvectionParameters {
    fn default() -> Self {
        Self {
            still: 10.0,
            draft: 40.0,
        }
    }
}

impl Default for WaterParameters {
    fn default() -> Self {
        Self {
            density: 998.0,
            viscosity: 1.002e-3,
            conductivity: 0.60,
            specific_heat: 4182.0,
        }
    }
}

impl Parameters {
    /// Parses parameters from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] on malformed TOML, unknown keys, or
    /// values of the wrong type.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Renders the parameters as TOML.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Serialize`] if a value cannot be represented.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// The flow rates to evaluate.
    #[must_use]
    pub fn flows(&self) -> Vec<VolumeRate> {
        self.flows_lpm
            .iter()
            .map(|&lpm| VolumeRate::new::<liter_per_minute>(lpm))
            .collect()
    }

    /// Converts to SI model inputs, resolving material presets.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingConductivity`] if a material is `other`
    /// and no explicit conductivity is given.
    pub fn to_inputs(&self) -> Result<ThermalInputs, ConfigError> {
        let mm = Length::new::<millimeter>;
        let Self {
            temperatures,
            pipe,
            contact,
            wires,
            convection,
            water,
            ..
        } = self;

        Ok(ThermalInputs {
            temperatures: Temperatures {
                water: ThermodynamicTemperature::new::<degree_celsius>(temperatures.water_c),
                air: ThermodynamicTemperature::new::<degree_celsius>(temperatures.air_c),
            },
            pipe: Pipe {
                inner_diameter: mm(pipe.inner_diameter_mm),
            },
            contact: Contact {
                area: Area::new::<square_millimeter>(contact.area_mm2),
                wall_thickness: mm(contact.wall_thickness_mm),
                wall_conductivity: resolve(
                    contact.wall_conductivity,
                    contact.wall_material.conductivity(),
                    "wall",
                )?,
                layer_thickness: mm(contact.layer_thickness_mm),
                layer_conductivity: resolve(
                    contact.layer_conductivity,
                    contact.layer_material.conductivity(),
                    "contact layer",
                )?,
                spreading_factor: contact.spreading_factor,
            },
            wires: LeadWires {
                count: wires.count,
                exposed_length: mm(wires.exposed_length_mm),
                core_diameter: mm(wires.core_diameter_mm),
                outer_diameter: mm(wires.outer_diameter_mm),
                core_conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(
                    wires.core_conductivity,
                ),
            },
            convection: AirConvection {
                still: HeatTransfer::new::<watt_per_square_meter_kelvin>(convection.still),
                draft: HeatTransfer::new::<watt_per_square_meter_kelvin>(convection.draft),
            },
            water: WaterProperties {
                density: MassDensity::new::<kilogram_per_cubic_meter>(water.density),
                viscosity: DynamicViscosity::new::<pascal_second>(water.viscosity),
                conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(
                    water.conductivity,
                ),
                specific_heat: SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(
                    water.specific_heat,
                ),
            },
        })
    }
}

fn resolve(
    explicit: Option<f64>,
    preset: Option<ThermalConductivity>,
    layer: &'static str,
) -> Result<ThermalConductivity, ConfigError> {
    explicit
        .map(ThermalConductivity::new::<watt_per_meter_kelvin>)
        .or(preset)
        .ok_or(ConfigError::MissingConductivity { layer })
}

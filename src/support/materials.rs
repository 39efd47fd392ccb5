//! Named material presets for the wall and contact-layer conductivities.
//!
//! A preset only supplies a starting conductivity. Callers resolve the
//! numeric value themselves (an explicit value always wins), so the model
//! never sees a material name, only a [`ThermalConductivity`].

use serde::{Deserialize, Serialize};
use uom::si::{f64::ThermalConductivity, thermal_conductivity::watt_per_meter_kelvin};

/// Pipe (hose) wall materials with a typical conductivity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WallMaterial {
    /// ≈0.20 W/m·K
    #[default]
    Rubber,
    /// ≈0.25 W/m·K
    Silicone,
    /// ≈0.19 W/m·K
    Pvc,
    /// ≈0.30 W/m·K
    Polyurethane,
    /// No preset; the conductivity must be given explicitly.
    Other,
}

impl WallMaterial {
    /// Every selectable wall material, in menu order.
    pub const ALL: [Self; 5] = [
        Self::Rubber,
        Self::Silicone,
        Self::Pvc,
        Self::Polyurethane,
        Self::Other,
    ];

    /// Returns the preset conductivity, or `None` for [`WallMaterial::Other`].
    #[must_use]
    pub fn conductivity(self) -> Option<ThermalConductivity> {
        let k = match self {
            Self::Rubber => 0.20,
            Self::Silicone => 0.25,
            Self::Pvc => 0.19,
            Self::Polyurethane => 0.30,
            Self::Other => return None,
        };
        Some(ThermalConductivity::new::<watt_per_meter_kelvin>(k))
    }
}

/// Contact-layer materials between the sensor and the pipe wall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContactMaterial {
    /// ≈1.0 W/m·K
    #[default]
    ThermalPaste,
    /// ≈0.5 W/m·K
    SiliconeAdhesive,
    /// ≈0.2 W/m·K
    Epoxy,
    /// No preset; the conductivity must be given explicitly.
    Other,
}

impl ContactMaterial {
    /// Every selectable contact material, in menu order.
    pub const ALL: [Self; 4] = [
        Self::ThermalPaste,
        Self::SiliconeAdhesive,
        Self::Epoxy,
        Self::Other,
    ];

    /// Returns the preset conductivity, or `None` for [`ContactMaterial::Other`].
    #[must_use]
    pub fn conductivity(self) -> Option<ThermalConductivity> {
        let k = match self {
            Self::ThermalPaste => 1.0,
            Self::SiliconeAdhesive => 0.5,
            Self::Epoxy => 0.2,
            Self::Other => return None,
        };
        Some(ThermalConductivity::new::<watt_per_meter_kelvin>(k))
    }
}

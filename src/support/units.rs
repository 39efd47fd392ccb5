//! Extensions to [`uom`].
//!
//! All physical quantities in this crate are [`uom`] quantities. This module
//! adds what the clamp-sensor model needs beyond [`uom`] itself:
//!
//! - [`TemperatureDifference`] subtracts two absolute temperatures into a
//!   [`TemperatureInterval`](uom::si::f64::TemperatureInterval), which is how
//!   sensor bias is expressed.
//! - [`AreaThermalResistance`] is the unit-area resistance (m²·K/W) of the
//!   water-to-sensor series network.
//!
//! ```
//! use uom::si::f64::ThermodynamicTemperature;
//! use uom::si::thermodynamic_temperature::degree_celsius;
//! use uom::si::temperature_interval::kelvin;
//! use clampon_bias::support::units::TemperatureDifference;
//!
//! let air = ThermodynamicTemperature::new::<degree_celsius>(23.0);
//! let water = ThermodynamicTemperature::new::<degree_celsius>(17.0);
//! assert!((air.minus(water).get::<kelvin>() - 6.0).abs() < 1e-9);
//! ```

mod quantities;
mod temperature_difference;

pub use quantities::{AreaThermalResistance, square_meter_kelvin_per_watt};
pub use temperature_difference::TemperatureDifference;

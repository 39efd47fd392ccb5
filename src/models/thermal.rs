//! Thermal systems models.

pub mod clamp_sensor;

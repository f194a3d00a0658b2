#![warn(clippy::all)]
//! Core data structures of the `unifac` crate.
//!
//! Contains the parameter records of the UNIFAC group-contribution method
//! (subgroup volume and surface parameters, group interaction parameters
//! and group decompositions of compounds), the lookup tables built from
//! them and the error types shared by all calculations.

mod errors;
pub mod parameter;

pub use errors::{
    validate_denominator, validate_mole_fraction, validate_temperature, UnifacError,
    UnifacResult,
};

#![warn(clippy::all)]
//! Binary diffusion coefficients estimated from UNIFAC activity coefficients.
//!
//! # Example
//!
//! ```
//! # use unifac::UnifacResult;
//! # fn main() -> UnifacResult<()> {
//! let result = unifac::estimate_diffusion("Ethanol", "Water", 0.3, 298.15, Some(1.2e-9))?;
//! assert!(result.diffusion_coefficient > 0.0);
//! assert!(result.relative_error_percent.is_some());
//! # Ok(())
//! # }
//! ```

pub mod activity;
pub mod database;
pub mod diffusion;

pub use activity::{CombinatorialTerm, Contributions, Unifac, UnifacOptions};
pub use database::builtin_parameters;
pub use diffusion::{DiffusionOptions, DiffusionResult, DiffusivityEstimator, MixturePoint};
pub use unifac_core::parameter;
pub use unifac_core::{UnifacError, UnifacResult};

/// Names of the compounds of the built-in database.
pub fn list_available_compounds() -> UnifacResult<Vec<String>> {
    Ok(builtin_parameters()?.list_available())
}

/// Diffusion coefficient of `compound1` in `compound2` using the built-in
/// database and default options.
///
/// `x1` is the mole fraction of `compound1`, `temperature` is given in
/// Kelvin and `experimental_diffusivity` (m^2/s), if given, is used to
/// compute the relative error of the estimate.
pub fn estimate_diffusion(
    compound1: &str,
    compound2: &str,
    x1: f64,
    temperature: f64,
    experimental_diffusivity: Option<f64>,
) -> UnifacResult<DiffusionResult> {
    DiffusivityEstimator::new(builtin_parameters()?).estimate(
        compound1,
        compound2,
        x1,
        temperature,
        experimental_diffusivity,
    )
}

//! Empirical diffusion coefficients from UNIFAC activity coefficients.
//!
//! The logarithm of the diffusion coefficient is the mole fraction weighted
//! blend of the activity coefficients of both components,
//!
//! ln(D) = (1 - x_1) ln(gamma_1) + x_1 ln(gamma_2),
//!
//! scaled by a constant factor into units of m^2/s.
use crate::activity::{Unifac, UnifacOptions};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use unifac_core::parameter::UnifacParameters;
use unifac_core::{validate_mole_fraction, validate_temperature, UnifacError, UnifacResult};

/// Configuration of the diffusivity estimate.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct DiffusionOptions {
    /// factor converting exp(ln D) into m^2/s
    pub scale_factor: f64,
}

impl Default for DiffusionOptions {
    fn default() -> Self {
        Self { scale_factor: 1e-6 }
    }
}

impl DiffusionOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scale_factor(mut self, scale_factor: f64) -> Self {
        self.scale_factor = scale_factor;
        self
    }
}

/// A single binary mixture for which the diffusion coefficient is requested.
#[derive(Debug, Clone, PartialEq)]
pub struct MixturePoint {
    pub compound1: String,
    pub compound2: String,
    /// mole fraction of the first compound
    pub x1: f64,
    /// temperature in Kelvin
    pub temperature: f64,
    /// experimental diffusion coefficient in m^2/s
    pub experimental_diffusivity: Option<f64>,
}

impl MixturePoint {
    /// Creates a new mixture point, rejecting mole fractions outside of
    /// (0, 1) and non-positive temperatures.
    pub fn new(
        compound1: &str,
        compound2: &str,
        x1: f64,
        temperature: f64,
        experimental_diffusivity: Option<f64>,
    ) -> UnifacResult<Self> {
        validate_mole_fraction("mixture point", x1)?;
        validate_temperature("mixture point", temperature)?;
        Ok(Self {
            compound1: compound1.into(),
            compound2: compound2.into(),
            x1,
            temperature,
            experimental_diffusivity,
        })
    }

    /// Mole fraction of the second compound.
    pub fn x2(&self) -> f64 {
        1.0 - self.x1
    }
}

/// Estimated diffusion coefficient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiffusionResult {
    /// diffusion coefficient in m^2/s
    pub diffusion_coefficient: f64,
    /// |D_exp - D| / D_exp in percent, only if a reference value was given
    pub relative_error_percent: Option<f64>,
    /// `[ln(gamma_1), ln(gamma_2)]` the estimate is based on
    pub ln_gamma: [f64; 2],
}

impl fmt::Display for DiffusionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DiffusionResult(D={} m^2/s", self.diffusion_coefficient)?;
        if let Some(e) = self.relative_error_percent {
            write!(f, ", error={e}%")?;
        }
        write!(f, ")")
    }
}

/// Relative deviation of an estimate from an experimental value in percent.
///
/// The deviation is divided by the signed experimental value, so a negative
/// reference value gives a negative percentage. Zero and non-finite
/// reference values are rejected.
pub fn relative_error_percent(experimental: f64, estimate: f64) -> UnifacResult<f64> {
    if experimental == 0.0 || !experimental.is_finite() {
        return Err(UnifacError::InvalidReferenceValue(experimental));
    }
    Ok((experimental - estimate).abs() / experimental * 100.0)
}

/// Estimates binary diffusion coefficients of registered compounds.
#[derive(Debug, Clone)]
pub struct DiffusivityEstimator {
    unifac: Unifac,
    options: DiffusionOptions,
}

impl DiffusivityEstimator {
    pub fn new(parameters: Arc<UnifacParameters>) -> Self {
        Self::with_options(
            parameters,
            UnifacOptions::default(),
            DiffusionOptions::default(),
        )
    }

    pub fn with_options(
        parameters: Arc<UnifacParameters>,
        unifac_options: UnifacOptions,
        options: DiffusionOptions,
    ) -> Self {
        Self {
            unifac: Unifac::with_options(parameters, unifac_options),
            options,
        }
    }

    /// The underlying activity coefficient model.
    pub fn unifac(&self) -> &Unifac {
        &self.unifac
    }

    pub fn options(&self) -> &DiffusionOptions {
        &self.options
    }

    /// Names of the compounds a diffusion coefficient can be estimated for.
    pub fn list_available(&self) -> Vec<String> {
        self.unifac.parameters.list_available()
    }

    /// Diffusion coefficient of `compound1` in a binary mixture with
    /// `compound2` at mole fraction `x1` and temperature `temperature` (K).
    ///
    /// If an experimental value is given, the result also contains the
    /// relative deviation of the estimate in percent.
    pub fn estimate(
        &self,
        compound1: &str,
        compound2: &str,
        x1: f64,
        temperature: f64,
        experimental_diffusivity: Option<f64>,
    ) -> UnifacResult<DiffusionResult> {
        let compounds = &self.unifac.parameters.compounds;
        let comp1 = compounds.decomposition(compound1)?;
        let comp2 = compounds.decomposition(compound2)?;
        debug!("estimating diffusion coefficient of {compound1} in {compound2} (x1={x1}, T={temperature} K)");

        let ln_gamma = self.unifac.ln_gamma(x1, comp1, comp2, temperature)?;
        let ln_d = (1.0 - x1) * ln_gamma[0] + x1 * ln_gamma[1];
        let diffusion_coefficient = ln_d.exp() * self.options.scale_factor;
        if !diffusion_coefficient.is_finite() {
            return Err(UnifacError::DomainError(
                "diffusion coefficient".into(),
                "ln D".into(),
                ln_d,
            ));
        }

        let relative_error_percent = experimental_diffusivity
            .map(|d_exp| relative_error_percent(d_exp, diffusion_coefficient))
            .transpose()?;
        let result = DiffusionResult {
            diffusion_coefficient,
            relative_error_percent,
            ln_gamma,
        };
        debug!("{result}");
        Ok(result)
    }

    /// Diffusion coefficient for a prepared [MixturePoint].
    pub fn estimate_point(&self, point: &MixturePoint) -> UnifacResult<DiffusionResult> {
        self.estimate(
            &point.compound1,
            &point.compound2,
            point.x1,
            point.temperature,
            point.experimental_diffusivity,
        )
    }
}

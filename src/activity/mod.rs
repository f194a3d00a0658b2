//! UNIFAC activity coefficients of binary mixtures.
//!
//! The natural logarithm of the activity coefficient of each component is
//! split into a combinatorial part, which only depends on the size and
//! shape of the molecules, and a residual part that accounts for the
//! energetic interactions between subgroups:
//!
//! ln(gamma_i) = ln(gamma_i^comb) + ln(gamma_i^res)
use indexmap::IndexMap;
use log::debug;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use unifac_core::parameter::UnifacParameters;
use unifac_core::{validate_mole_fraction, validate_temperature, UnifacError, UnifacResult};

mod combinatorial;
mod residual;

use combinatorial::{ln_gamma_combinatorial, size_parameters};
use residual::ln_gamma_residual;

/// Formulation of the combinatorial contribution.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CombinatorialTerm {
    /// `(1 - phi_i) + ln(phi_i) - z/2 q_i (1 - theta_i/phi_i + ln(theta_i/phi_i))`
    #[default]
    StavermanGuggenheim,
    /// `ln(phi_i/x_i) + z/2 q_i ln(theta_i/phi_i) + phi_j - phi_i`
    Alternative,
}

/// Configuration of the activity coefficient model.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct UnifacOptions {
    /// formulation of the combinatorial term
    pub combinatorial: CombinatorialTerm,
    /// lattice coordination number z
    pub coordination_number: f64,
}

impl Default for UnifacOptions {
    fn default() -> Self {
        Self {
            combinatorial: CombinatorialTerm::StavermanGuggenheim,
            coordination_number: 10.0,
        }
    }
}

impl UnifacOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn combinatorial(mut self, combinatorial: CombinatorialTerm) -> Self {
        self.combinatorial = combinatorial;
        self
    }

    pub fn coordination_number(mut self, coordination_number: f64) -> Self {
        self.coordination_number = coordination_number;
        self
    }
}

/// Possible contributions that can be computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contributions {
    /// Only the size and shape contribution
    Combinatorial,
    /// Only the group interaction contribution
    Residual,
    /// The sum of both contributions
    Total,
}

/// UNIFAC activity coefficient model for binary mixtures.
#[derive(Debug, Clone)]
pub struct Unifac {
    pub parameters: Arc<UnifacParameters>,
    options: UnifacOptions,
}

impl Unifac {
    pub fn new(parameters: Arc<UnifacParameters>) -> Self {
        Self::with_options(parameters, UnifacOptions::default())
    }

    pub fn with_options(parameters: Arc<UnifacParameters>, options: UnifacOptions) -> Self {
        Self {
            parameters,
            options,
        }
    }

    pub fn options(&self) -> &UnifacOptions {
        &self.options
    }

    /// Natural logarithms of the activity coefficients `[ln(gamma_1), ln(gamma_2)]`.
    ///
    /// `x1` is the mole fraction of the first component, `comp1` and `comp2`
    /// map subgroup identifiers to their number of occurences and the
    /// temperature is given in Kelvin.
    pub fn ln_gamma(
        &self,
        x1: f64,
        comp1: &IndexMap<String, usize>,
        comp2: &IndexMap<String, usize>,
        temperature: f64,
    ) -> UnifacResult<[f64; 2]> {
        self.ln_gamma_contributions(x1, comp1, comp2, temperature, Contributions::Total)
    }

    /// Natural logarithms of the activity coefficients restricted to the
    /// given contributions.
    pub fn ln_gamma_contributions(
        &self,
        x1: f64,
        comp1: &IndexMap<String, usize>,
        comp2: &IndexMap<String, usize>,
        temperature: f64,
        contributions: Contributions,
    ) -> UnifacResult<[f64; 2]> {
        validate_mole_fraction("activity coefficients", x1)?;
        validate_temperature("activity coefficients", temperature)?;
        let x = [x1, 1.0 - x1];

        let mut ln_gamma = [0.0; 2];
        if contributions != Contributions::Residual {
            let (r1, q1) = size_parameters(&self.parameters.groups, comp1)?;
            let (r2, q2) = size_parameters(&self.parameters.groups, comp2)?;
            let comb = ln_gamma_combinatorial(
                x,
                [r1, r2],
                [q1, q2],
                self.options.combinatorial,
                self.options.coordination_number,
            )?;
            debug!("ln gamma (combinatorial) = {comb:?}");
            ln_gamma[0] += comb[0];
            ln_gamma[1] += comb[1];
        }
        if contributions != Contributions::Combinatorial {
            let res = ln_gamma_residual(&self.parameters, x, [comp1, comp2], temperature)?;
            debug!("ln gamma (residual) = {res:?}");
            ln_gamma[0] += res[0];
            ln_gamma[1] += res[1];
        }

        for l in ln_gamma {
            if !l.is_finite() {
                return Err(UnifacError::DomainError(
                    "activity coefficients".into(),
                    "ln gamma".into(),
                    l,
                ));
            }
        }
        Ok(ln_gamma)
    }

    /// Activity coefficients `[gamma_1, gamma_2]`.
    pub fn gamma(
        &self,
        x1: f64,
        comp1: &IndexMap<String, usize>,
        comp2: &IndexMap<String, usize>,
        temperature: f64,
    ) -> UnifacResult<[f64; 2]> {
        let ln_gamma = self.ln_gamma(x1, comp1, comp2, temperature)?;
        Ok(ln_gamma.map(f64::exp))
    }

    /// Natural logarithms of the activity coefficients of two registered compounds.
    pub fn ln_gamma_compounds(
        &self,
        compound1: &str,
        compound2: &str,
        x1: f64,
        temperature: f64,
    ) -> UnifacResult<[f64; 2]> {
        let comp1 = self.parameters.compounds.decomposition(compound1)?;
        let comp2 = self.parameters.compounds.decomposition(compound2)?;
        self.ln_gamma(x1, comp1, comp2, temperature)
    }
}

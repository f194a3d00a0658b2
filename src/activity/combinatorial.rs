use super::CombinatorialTerm;
use indexmap::IndexMap;
use unifac_core::parameter::GroupTable;
use unifac_core::{validate_denominator, UnifacResult};

/// Molecular volume r and surface q of a compound: sums of the subgroup
/// parameters weighted by their number of occurences.
pub(super) fn size_parameters(
    groups: &GroupTable,
    composition: &IndexMap<String, usize>,
) -> UnifacResult<(f64, f64)> {
    let mut r = 0.0;
    let mut q = 0.0;
    for (g, &n) in composition {
        let (r_g, q_g) = groups.r_q(g)?;
        r += n as f64 * r_g;
        q += n as f64 * q_g;
    }
    Ok((r, q))
}

/// Combinatorial (size and shape) contribution to ln(gamma) of both components.
pub(super) fn ln_gamma_combinatorial(
    x: [f64; 2],
    r: [f64; 2],
    q: [f64; 2],
    term: CombinatorialTerm,
    coordination_number: f64,
) -> UnifacResult<[f64; 2]> {
    let sum_r = x[0] * r[0] + x[1] * r[1];
    let sum_q = x[0] * q[0] + x[1] * q[1];
    validate_denominator("combinatorial term", "sum of x r", sum_r)?;
    validate_denominator("combinatorial term", "sum of x q", sum_q)?;

    let phi = [x[0] * r[0] / sum_r, x[1] * r[1] / sum_r];
    let theta = [x[0] * q[0] / sum_q, x[1] * q[1] / sum_q];
    for p in phi {
        validate_denominator("combinatorial term", "volume fraction", p)?;
    }
    let z_half = 0.5 * coordination_number;

    let ln_gamma = |i: usize| {
        let j = 1 - i;
        let theta_phi = theta[i] / phi[i];
        match term {
            CombinatorialTerm::StavermanGuggenheim => {
                (1.0 - phi[i]) + phi[i].ln() - z_half * q[i] * (1.0 - theta_phi + theta_phi.ln())
            }
            CombinatorialTerm::Alternative => {
                (phi[i] / x[i]).ln() + z_half * q[i] * theta_phi.ln() + phi[j] - phi[i]
            }
        }
    };
    Ok([ln_gamma(0), ln_gamma(1)])
}

use indexmap::{IndexMap, IndexSet};
use log::trace;
use ndarray::{Array1, Array2};
use unifac_core::parameter::{ParameterError, UnifacParameters};
use unifac_core::{validate_denominator, UnifacResult};

/// Residual (group interaction) contribution to ln(gamma) of both components.
pub(super) fn ln_gamma_residual(
    parameters: &UnifacParameters,
    x: [f64; 2],
    compositions: [&IndexMap<String, usize>; 2],
    temperature: f64,
) -> UnifacResult<[f64; 2]> {
    // all subgroups of the mixture, groups of the first component first
    let groups: IndexSet<&str> = compositions
        .iter()
        .flat_map(|c| c.keys().map(|g| g.as_str()))
        .collect();
    let n = groups.len();

    let q = groups
        .iter()
        .map(|g| parameters.groups.r_q(g).map(|(_, q)| q))
        .collect::<Result<Array1<f64>, _>>()?;

    // group mole numbers of the mixture weighted by the surface parameter
    let count = |c: &IndexMap<String, usize>, g: &str| c.get(g).copied().unwrap_or(0) as f64;
    let weighted = Array1::from_shape_fn(n, |k| {
        let g = groups[k];
        (count(compositions[0], g) * x[0] + count(compositions[1], g) * x[1]) * q[k]
    });
    let total = weighted.sum();
    validate_denominator("residual term", "sum of group surface fractions", total)?;
    let theta = weighted / total;

    let tau = Array2::from_shape_fn((n, n), |(k, m)| {
        parameters
            .interactions
            .tau(groups[k], groups[m], temperature)
    });
    // s1[g] = sum_k theta_k tau_kg, s2[g] = sum_k theta_k tau_gk
    let s1 = tau.t().dot(&theta);
    let s2 = tau.dot(&theta);

    let mut ln_gamma = [0.0; 2];
    for (i, composition) in compositions.iter().enumerate() {
        for (g, &nu) in composition.iter() {
            let k = group_index(&groups, g)?;
            validate_denominator("residual term", "sum of theta tau", s1[k])?;
            let contribution = nu as f64 * q[k] * (1.0 - s1[k].ln() - s2[k] / s1[k]);
            trace!("component {}, group {g}: ln gamma_res += {contribution}", i + 1);
            ln_gamma[i] += contribution;
        }
    }
    Ok(ln_gamma)
}

/// Position of a subgroup in the mixture's group set.
fn group_index(groups: &IndexSet<&str>, group: &str) -> Result<usize, ParameterError> {
    groups
        .get_index_of(group)
        .ok_or_else(|| ParameterError::MissingParameter(group.to_string()))
}

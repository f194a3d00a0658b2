//! Built-in UNIFAC parameter set.
//!
//! Subgroup parameters follow the standard UNIFAC tables; the interaction
//! parameters are a reduced set in units of Kelvin.
use indexmap::IndexMap;
use lazy_static::lazy_static;
use std::sync::Arc;
use unifac_core::parameter::{
    ChemicalRecord, InteractionRecord, ParameterError, SubgroupRecord, UnifacParameters,
};

lazy_static! {
    static ref SUBGROUPS: Vec<SubgroupRecord> = vec![
        SubgroupRecord::new("CH3", 0.9011, 0.848),
        SubgroupRecord::new("CH2", 0.6744, 0.540),
        SubgroupRecord::new("CH2=CH", 1.3454, 1.176),
        SubgroupRecord::new("ACH", 0.5313, 0.400),
        SubgroupRecord::new("HCO", 0.9980, 0.948),
        SubgroupRecord::new("CH2NH", 1.2070, 0.936),
        SubgroupRecord::new("OH", 0.9200, 1.4000),
        SubgroupRecord::new("AC", 0.4000, 0.2280),
    ];
    static ref INTERACTIONS: Vec<InteractionRecord> = vec![
        InteractionRecord::new("CH3", "CH2=CH", 986.5),
        InteractionRecord::new("CH3", "ACH", 476.4),
        InteractionRecord::new("CH3", "HCO", 663.5),
        InteractionRecord::new("CH3", "CH2NH", 335.8),
        InteractionRecord::new("CH2=CH", "ACH", 84.0),
        InteractionRecord::new("CH2=CH", "HCO", 199.0),
        InteractionRecord::new("CH2=CH", "CH2NH", 313.5),
        InteractionRecord::new("ACH", "HCO", 669.4),
        InteractionRecord::new("ACH", "CH2NH", 53.59),
        InteractionRecord::new("HCO", "CH2NH", 228.4),
        // hydroxyl
        InteractionRecord::new("OH", "CH3", 1500.0),
        InteractionRecord::new("OH", "CH2", 1400.0),
        InteractionRecord::new("OH", "CH2=CH", 1300.0),
        InteractionRecord::new("OH", "ACH", 1700.0),
        InteractionRecord::new("OH", "HCO", 600.0),
        InteractionRecord::new("OH", "CH2NH", 500.0),
        // aromatic carbon
        InteractionRecord::new("AC", "CH3", 500.0),
        InteractionRecord::new("AC", "ACH", 200.0),
    ];
    static ref COMPOUNDS: Vec<ChemicalRecord> = vec![
        compound("Propylene", &[("CH3", 1), ("CH2=CH", 1)]),
        compound("Benzene", &[("ACH", 6)]),
        compound("Acetaldehyde", &[("CH3", 1), ("HCO", 1)]),
        compound("MethylEthylamine", &[("CH3", 2), ("CH2NH", 1)]),
        compound("Ethanol", &[("CH3", 1), ("CH2", 1), ("OH", 1)]),
        compound("Toluene", &[("CH3", 1), ("ACH", 5), ("AC", 1)]),
        compound("Water", &[("OH", 1)]),
    ];
    static ref BUILTIN: Result<Arc<UnifacParameters>, String> = {
        let (groups, interactions, compounds) = builtin_records();
        UnifacParameters::from_records(groups, interactions, compounds)
            .map(Arc::new)
            .map_err(|e| e.to_string())
    };
}

fn compound(name: &str, groups: &[(&str, usize)]) -> ChemicalRecord {
    let groups: IndexMap<_, _> = groups.iter().map(|&(g, n)| (g.to_string(), n)).collect();
    ChemicalRecord::new(name, groups)
}

/// The built-in parameter set, validated once on first use.
pub fn builtin_parameters() -> Result<Arc<UnifacParameters>, ParameterError> {
    match &*BUILTIN {
        Ok(parameters) => Ok(parameters.clone()),
        Err(msg) => Err(ParameterError::IncompatibleParameters(msg.clone())),
    }
}

/// The raw records of the built-in parameter set.
pub fn builtin_records() -> (
    Vec<SubgroupRecord>,
    Vec<InteractionRecord>,
    Vec<ChemicalRecord>,
) {
    (SUBGROUPS.clone(), INTERACTIONS.clone(), COMPOUNDS.clone())
}

use super::{ChemicalRecord, InteractionRecord, ParameterError, SubgroupRecord};
use indexmap::IndexMap;
use log::trace;

/// Subgroup identifier -> (R, Q).
#[derive(Debug, Clone, Default)]
pub struct GroupTable {
    records: IndexMap<String, SubgroupRecord>,
}

impl GroupTable {
    /// Build the table, rejecting duplicates and non-positive parameters.
    pub fn new(records: Vec<SubgroupRecord>) -> Result<Self, ParameterError> {
        let mut map = IndexMap::with_capacity(records.len());
        for record in records {
            record.validate()?;
            if map.contains_key(&record.identifier) {
                return Err(ParameterError::IncompatibleParameters(format!(
                    "subgroup '{}' was defined more than once",
                    record.identifier
                )));
            }
            map.insert(record.identifier.clone(), record);
        }
        Ok(Self { records: map })
    }

    pub fn get(&self, subgroup: &str) -> Option<&SubgroupRecord> {
        self.records.get(subgroup)
    }

    /// Like [GroupTable::get], but a missing subgroup is an error.
    pub fn record(&self, subgroup: &str) -> Result<&SubgroupRecord, ParameterError> {
        self.get(subgroup)
            .ok_or_else(|| ParameterError::MissingParameter(subgroup.to_string()))
    }

    /// Volume and surface parameter of a subgroup.
    pub fn r_q(&self, subgroup: &str) -> Result<(f64, f64), ParameterError> {
        self.record(subgroup).map(|r| (r.r, r.q))
    }

    pub fn contains(&self, subgroup: &str) -> bool {
        self.records.contains_key(subgroup)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> impl Iterator<Item = &SubgroupRecord> {
        self.records.values()
    }
}

/// Symmetric lookup of group interaction parameters.
///
/// Every record is stored under both orders of its groups, so lookups only
/// borrow the identifiers. Pairs without a record interact with `a_ij = 0`,
/// i.e. `tau = 1`.
#[derive(Debug, Clone, Default)]
pub struct InteractionTable {
    records: IndexMap<String, IndexMap<String, f64>>,
    pairs: Vec<InteractionRecord>,
}

impl InteractionTable {
    /// Build the table.
    ///
    /// Fails if a pair is listed in both orders with different values, if a
    /// subgroup is given a non-zero interaction with itself, or if a value
    /// is not finite.
    pub fn new(records: Vec<InteractionRecord>) -> Result<Self, ParameterError> {
        let mut map: IndexMap<String, IndexMap<String, f64>> = IndexMap::new();
        let mut pairs = Vec::with_capacity(records.len());
        for record in records {
            let InteractionRecord { id1, id2, a_ij } = &record;
            if !a_ij.is_finite() {
                return Err(ParameterError::IncompatibleParameters(format!(
                    "interaction parameter between '{id1}' and '{id2}' is not finite"
                )));
            }
            if id1 == id2 && *a_ij != 0.0 {
                return Err(ParameterError::IncompatibleParameters(format!(
                    "subgroup '{id1}' has a non-zero interaction with itself"
                )));
            }
            if let Some(&a) = map.get(id1.as_str()).and_then(|m| m.get(id2.as_str())) {
                if a != *a_ij {
                    return Err(ParameterError::IncompatibleParameters(format!(
                        "conflicting interaction parameters between '{id1}' and '{id2}': {a} and {a_ij}"
                    )));
                }
                continue;
            }
            map.entry(id1.clone()).or_default().insert(id2.clone(), *a_ij);
            map.entry(id2.clone()).or_default().insert(id1.clone(), *a_ij);
            pairs.push(record);
        }
        Ok(Self {
            records: map,
            pairs,
        })
    }

    /// Interaction parameter a_ij in Kelvin, independent of the order of the groups.
    pub fn interaction(&self, g1: &str, g2: &str) -> f64 {
        match self.records.get(g1).and_then(|m| m.get(g2)) {
            Some(&a) => a,
            None => {
                trace!("no interaction parameter for ({g1}, {g2}), using a_ij = 0");
                0.0
            }
        }
    }

    /// Boltzmann factor `exp(-a_ij / T)` of a pair of groups.
    pub fn tau(&self, g1: &str, g2: &str, temperature: f64) -> f64 {
        (-self.interaction(g1, g2) / temperature).exp()
    }

    /// Number of distinct pairs.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// The stored records in input order, without repeated pairs.
    pub fn records(&self) -> &[InteractionRecord] {
        &self.pairs
    }
}

/// Compound name -> group decomposition.
#[derive(Debug, Clone, Default)]
pub struct CompoundRegistry {
    records: IndexMap<String, ChemicalRecord>,
}

impl CompoundRegistry {
    pub fn new(records: Vec<ChemicalRecord>) -> Result<Self, ParameterError> {
        let mut map = IndexMap::with_capacity(records.len());
        for record in records {
            record.validate()?;
            if map.contains_key(&record.name) {
                return Err(ParameterError::IncompatibleParameters(format!(
                    "compound '{}' was defined more than once",
                    record.name
                )));
            }
            map.insert(record.name.clone(), record);
        }
        Ok(Self { records: map })
    }

    /// Chemical record of a compound.
    pub fn get(&self, name: &str) -> Result<&ChemicalRecord, ParameterError> {
        self.records
            .get(name)
            .ok_or_else(|| ParameterError::UnknownCompound {
                name: name.to_string(),
                available: self.list_available(),
            })
    }

    /// Subgroup counts of a compound.
    pub fn decomposition(&self, name: &str) -> Result<&IndexMap<String, usize>, ParameterError> {
        self.get(name).map(|r| r.segment_count())
    }

    /// Names of all registered compounds in insertion order.
    pub fn list_available(&self) -> Vec<String> {
        self.records.keys().cloned().collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> impl Iterator<Item = &ChemicalRecord> {
        self.records.values()
    }
}

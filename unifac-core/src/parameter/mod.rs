//! Structures used to build the parameter set of the UNIFAC method.

use indexmap::IndexSet;
use log::{debug, warn};
use std::fmt;
use std::io;
use std::path::Path;
use thiserror::Error;

mod binary_record;
mod chemical_record;
mod segment;
mod tables;

pub use binary_record::InteractionRecord;
pub use chemical_record::ChemicalRecord;
pub use segment::SubgroupRecord;
pub use tables::{CompoundRegistry, GroupTable, InteractionTable};

/// Complete parameter set: subgroups, group interactions and compounds.
///
/// All three tables are immutable after construction; share the parameters
/// between threads behind an `Arc`.
#[derive(Debug, Clone, Default)]
pub struct UnifacParameters {
    pub groups: GroupTable,
    pub interactions: InteractionTable,
    pub compounds: CompoundRegistry,
}

impl UnifacParameters {
    /// Creates parameters from records.
    ///
    /// Every subgroup referenced by a compound has to be present in
    /// `group_records`. Interactions that refer to unknown subgroups are
    /// accepted but never used.
    pub fn from_records(
        group_records: Vec<SubgroupRecord>,
        interaction_records: Vec<InteractionRecord>,
        chemical_records: Vec<ChemicalRecord>,
    ) -> Result<Self, ParameterError> {
        let groups = GroupTable::new(group_records)?;
        let interactions = InteractionTable::new(interaction_records)?;
        let compounds = CompoundRegistry::new(chemical_records)?;

        for record in compounds.records() {
            if let Err(ParameterError::MissingParameter(missing)) = record.segment_map(&groups) {
                return Err(ParameterError::IncompatibleParameters(format!(
                    "compound '{}' references unknown subgroup(s): {}",
                    record.name, missing
                )));
            }
        }
        for r in interactions.records() {
            if !groups.contains(&r.id1) || !groups.contains(&r.id2) {
                warn!(
                    "interaction ({}, {}) refers to a subgroup without parameters",
                    r.id1, r.id2
                );
            }
        }

        Ok(Self {
            groups,
            interactions,
            compounds,
        })
    }

    /// Creates parameters from information stored in json files.
    ///
    /// Only the compounds listed in `substances` are read from
    /// `file_compounds`; an empty list selects every compound in the file.
    pub fn from_json<P>(
        substances: &[&str],
        file_compounds: P,
        file_groups: P,
        file_interactions: Option<P>,
    ) -> Result<Self, ParameterError>
    where
        P: AsRef<Path>,
    {
        let queried: IndexSet<String> = substances.iter().map(|s| s.to_string()).collect();
        if queried.len() != substances.len() {
            return Err(ParameterError::IncompatibleParameters(
                "A substance was defined more than once.".to_string(),
            ));
        }

        let mut chemical_records = ChemicalRecord::from_json(file_compounds)?;
        if !queried.is_empty() {
            let available: IndexSet<String> =
                chemical_records.iter().map(|r| r.name.clone()).collect();
            if !queried.is_subset(&available) {
                let missing: Vec<_> = queried.difference(&available).cloned().collect();
                return Err(ParameterError::UnknownCompound {
                    name: missing.join("', '"),
                    available: available.into_iter().collect(),
                });
            }
            // keep the order of the query
            chemical_records = queried
                .iter()
                .filter_map(|s| chemical_records.iter().find(|r| &r.name == s).cloned())
                .collect();
        }

        let group_records = SubgroupRecord::from_json(file_groups)?;
        let interaction_records = file_interactions
            .map(InteractionRecord::from_json)
            .transpose()?
            .unwrap_or_default();
        debug!(
            "read {} compounds, {} subgroups and {} interaction parameters",
            chemical_records.len(),
            group_records.len(),
            interaction_records.len()
        );

        Self::from_records(group_records, interaction_records, chemical_records)
    }

    /// Names of the compounds available in this parameter set.
    pub fn list_available(&self) -> Vec<String> {
        self.compounds.list_available()
    }
}

impl fmt::Display for UnifacParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UnifacParameters(")?;
        write!(f, "\n\tsubgroups={},", self.groups.len())?;
        write!(f, "\n\tinteractions={},", self.interactions.len())?;
        write!(f, "\n\tcompounds={:?}", self.list_available())?;
        write!(f, "\n)")
    }
}

/// Error type for incomplete parameter information and IO problems.
#[derive(Error, Debug)]
pub enum ParameterError {
    #[error(transparent)]
    FileIO(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
    #[error("Unknown compound '{name}'. Available compounds: {available:?}")]
    UnknownCompound { name: String, available: Vec<String> },
    #[error("Missing UNIFAC parameters for subgroup(s): {0}")]
    MissingParameter(String),
    #[error("Incompatible parameters: {0}")]
    IncompatibleParameters(String),
}

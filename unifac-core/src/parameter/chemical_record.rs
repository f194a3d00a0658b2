use super::{GroupTable, ParameterError, SubgroupRecord};
use indexmap::IndexMap;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

// Auxiliary structure used to deserialize chemical records given either as
// group counts or as a flat list of segments.
#[derive(Serialize, Deserialize)]
struct ChemicalRecordJSON {
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    groups: Option<IndexMap<String, usize>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    segments: Option<Vec<String>>,
}

/// Group decomposition of a compound.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(try_from = "ChemicalRecordJSON")]
#[serde(into = "ChemicalRecordJSON")]
pub struct ChemicalRecord {
    pub name: String,
    /// Subgroup identifier and number of occurences
    pub groups: IndexMap<String, usize>,
}

impl TryFrom<ChemicalRecordJSON> for ChemicalRecord {
    type Error = ParameterError;

    fn try_from(record: ChemicalRecordJSON) -> Result<Self, Self::Error> {
        match (record.groups, record.segments) {
            (Some(groups), None) => Ok(Self::new(&record.name, groups)),
            (None, Some(segments)) => Ok(Self::from_segments(&record.name, &segments)),
            _ => Err(ParameterError::IncompatibleParameters(format!(
                "compound '{}' needs exactly one of 'groups' or 'segments'",
                record.name
            ))),
        }
    }
}

impl From<ChemicalRecord> for ChemicalRecordJSON {
    fn from(record: ChemicalRecord) -> Self {
        Self {
            name: record.name,
            groups: Some(record.groups),
            segments: None,
        }
    }
}

impl ChemicalRecord {
    /// Create a new `ChemicalRecord` from subgroup counts.
    pub fn new(name: &str, groups: IndexMap<String, usize>) -> Self {
        Self {
            name: name.into(),
            groups,
        }
    }

    /// Create a new `ChemicalRecord` from a list of segments.
    ///
    /// Every occurence of a subgroup identifier in `segments` is counted once.
    pub fn from_segments<S: AsRef<str>>(name: &str, segments: &[S]) -> Self {
        let mut groups = IndexMap::with_capacity(segments.len());
        for s in segments {
            *groups.entry(s.as_ref().to_string()).or_insert(0) += 1;
        }
        Self::new(name, groups)
    }

    /// Read a list of `ChemicalRecord`s from a JSON file.
    pub fn from_json<P: AsRef<Path>>(file: P) -> Result<Vec<Self>, ParameterError> {
        Ok(serde_json::from_reader(BufReader::new(File::open(file)?))?)
    }

    /// The map contains the subgroup identifier as key and the count as value.
    pub fn segment_count(&self) -> &IndexMap<String, usize> {
        &self.groups
    }

    /// Ensures that the decomposition is not empty and every count is at least one.
    pub fn validate(&self) -> Result<(), ParameterError> {
        if self.groups.is_empty() {
            return Err(ParameterError::IncompatibleParameters(format!(
                "compound '{}' has no subgroups",
                self.name
            )));
        }
        if let Some((g, _)) = self.groups.iter().find(|(_, &n)| n == 0) {
            return Err(ParameterError::IncompatibleParameters(format!(
                "compound '{}' lists subgroup '{}' zero times",
                self.name, g
            )));
        }
        Ok(())
    }

    /// Pair every subgroup of the compound with its record in `groups`.
    ///
    /// Fails with [ParameterError::MissingParameter] naming all subgroups
    /// that are not part of the table.
    pub fn segment_map<'a>(
        &self,
        groups: &'a GroupTable,
    ) -> Result<Vec<(&'a SubgroupRecord, usize)>, ParameterError> {
        let missing: Vec<_> = self
            .groups
            .keys()
            .filter(|g| groups.get(g).is_none())
            .collect();
        if !missing.is_empty() {
            return Err(ParameterError::MissingParameter(
                missing.into_iter().join(", "),
            ));
        }
        self.groups
            .iter()
            .map(|(g, &n)| groups.record(g).map(|r| (r, n)))
            .collect()
    }
}

impl std::fmt::Display for ChemicalRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ChemicalRecord(")?;
        write!(f, "\n\tname={},", self.name)?;
        let groups = self
            .groups
            .iter()
            .map(|(g, n)| format!("{g}: {n}"))
            .join(", ");
        write!(f, "\n\tgroups={{{groups}}}\n)")
    }
}

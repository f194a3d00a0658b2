use super::ParameterError;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Energy interaction parameter between two UNIFAC subgroups.
///
/// The pair is unordered: a record for `(id1, id2)` is also used for
/// `(id2, id1)`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct InteractionRecord {
    /// Identifier of the first subgroup
    pub id1: String,
    /// Identifier of the second subgroup
    pub id2: String,
    /// Interaction parameter a_ij in units of Kelvin
    pub a_ij: f64,
}

impl InteractionRecord {
    /// Creates a new `InteractionRecord`.
    pub fn new(id1: &str, id2: &str, a_ij: f64) -> Self {
        Self {
            id1: id1.into(),
            id2: id2.into(),
            a_ij,
        }
    }

    /// Read a list of `InteractionRecord`s from a JSON file.
    pub fn from_json<P: AsRef<Path>>(file: P) -> Result<Vec<Self>, ParameterError> {
        Ok(serde_json::from_reader(BufReader::new(File::open(file)?))?)
    }
}

impl std::fmt::Display for InteractionRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "InteractionRecord(")?;
        write!(f, "\n\tid1={},", self.id1)?;
        write!(f, "\n\tid2={},", self.id2)?;
        write!(f, "\n\ta_ij={},", self.a_ij)?;
        write!(f, "\n)")
    }
}

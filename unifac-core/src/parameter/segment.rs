use super::ParameterError;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::hash::{Hash, Hasher};
use std::io::BufReader;
use std::path::Path;

/// Volume and surface parameters of an individual UNIFAC subgroup.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SubgroupRecord {
    pub identifier: String,
    /// Relative van der Waals volume R
    pub r: f64,
    /// Relative van der Waals surface area Q
    pub q: f64,
}

impl SubgroupRecord {
    /// Creates a new `SubgroupRecord`.
    pub fn new(identifier: &str, r: f64, q: f64) -> Self {
        Self {
            identifier: identifier.into(),
            r,
            q,
        }
    }

    /// Read a list of `SubgroupRecord`s from a JSON file.
    pub fn from_json<P: AsRef<Path>>(file: P) -> Result<Vec<Self>, ParameterError> {
        Ok(serde_json::from_reader(BufReader::new(File::open(file)?))?)
    }

    /// Ensures both parameters are strictly positive and finite.
    pub fn validate(&self) -> Result<(), ParameterError> {
        let valid = |x: f64| x.is_finite() && x > 0.0;
        if valid(self.r) && valid(self.q) {
            Ok(())
        } else {
            Err(ParameterError::IncompatibleParameters(format!(
                "subgroup '{}' has non-positive parameters (R={}, Q={})",
                self.identifier, self.r, self.q
            )))
        }
    }
}

impl Hash for SubgroupRecord {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identifier.hash(state);
    }
}

impl PartialEq for SubgroupRecord {
    fn eq(&self, other: &Self) -> bool {
        self.identifier == other.identifier
    }
}
impl Eq for SubgroupRecord {}

impl std::fmt::Display for SubgroupRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "SubgroupRecord(identifier={}, r={}, q={})",
            self.identifier, self.r, self.q
        )
    }
}

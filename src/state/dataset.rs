use std::path::Path;

use crate::data::loader;
use crate::data::parser::MalformedPolicy;
use crate::error::LoadError;
use crate::processing::statistics::{self, SeriesStats};

/// An ordered set of values plus the statistics queries over it.
///
/// Queries are recomputed on every call; nothing is cached. An empty
/// dataset is a valid state and every query returns `None` for it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    values: Vec<f64>,
}

impl Dataset {
    pub fn new() -> Self {
        Self { values: Vec::new() }
    }

    pub fn from_values(values: Vec<f64>) -> Self {
        Self { values }
    }

    /// Replace the stored values with the contents of `path`.
    ///
    /// Returns the number of values loaded. On error the previous values are
    /// kept as they were.
    pub fn load(&mut self, path: &Path, policy: MalformedPolicy) -> Result<usize, LoadError> {
        let values = loader::load_file(path, policy)?;
        if !self.values.is_empty() {
            tracing::debug!("Replacing {} previously loaded values", self.values.len());
        }
        self.values = values;
        Ok(self.values.len())
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn mean(&self) -> Option<f64> {
        statistics::mean(&self.values)
    }

    /// Population variance.
    pub fn variance(&self) -> Option<f64> {
        statistics::variance(&self.values)
    }

    pub fn standard_deviation(&self) -> Option<f64> {
        statistics::std_dev(&self.values)
    }

    pub fn minimum(&self) -> Option<f64> {
        statistics::min(&self.values)
    }

    pub fn maximum(&self) -> Option<f64> {
        statistics::max(&self.values)
    }

    pub fn median(&self) -> Option<f64> {
        statistics::median(&self.values)
    }

    pub fn summary(&self) -> Option<SeriesStats> {
        SeriesStats::compute(&self.values)
    }
}

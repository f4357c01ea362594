use std::path::Path;

use crate::data::parser::{self, MalformedPolicy};
use crate::error::LoadError;

/// Read a text file holding one number per line.
///
/// The file is read in full and closed before parsing starts. Only failures
/// to open or read it are `SourceUnavailable`; a line that is not valid
/// UTF-8 is a `MalformedValue` and follows `policy`.
pub fn load_file(path: &Path, policy: MalformedPolicy) -> Result<Vec<f64>, LoadError> {
    tracing::debug!("Reading {:?}", path);

    let content = std::fs::read(path).map_err(|source| LoadError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    })?;

    let values = parser::parse_bytes(&content, policy)?;
    tracing::info!("Loaded {} values from {:?}", values.len(), path);
    Ok(values)
}

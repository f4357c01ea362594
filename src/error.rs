use std::path::PathBuf;

/// Errors raised while loading a dataset from a text source.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The source could not be opened or read.
    #[error("cannot read {}: {source}", path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A non-blank line did not parse as a floating-point number.
    #[error("line {line}: '{content}' is not a number")]
    MalformedValue { line: usize, content: String },
}

impl LoadError {
    /// Short label used in log events.
    pub fn kind(&self) -> &'static str {
        match self {
            LoadError::SourceUnavailable { .. } => "source unavailable",
            LoadError::MalformedValue { .. } => "malformed value",
        }
    }
}

pub mod app;
pub mod cli;
pub mod data;
pub mod error;
pub mod processing;
pub mod state;

pub use data::parser::MalformedPolicy;
pub use error::LoadError;
pub use processing::statistics::SeriesStats;
pub use state::dataset::Dataset;

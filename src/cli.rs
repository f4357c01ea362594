use std::path::PathBuf;

use clap::Parser;

use crate::data::parser::MalformedPolicy;
use crate::processing::report::ReportFormat;

pub const DEFAULT_INPUT: &str = "sample_data.txt";

#[derive(Parser, Debug, Clone)]
#[command(
    name = "stat-analyzer",
    version,
    about = "Descriptive statistics over a file of numbers, one per line"
)]
pub struct CliArgs {
    /// Input file, one number per line
    #[arg(default_value = DEFAULT_INPUT)]
    pub path: PathBuf,
    /// Skip lines that are not numbers instead of failing the load
    #[arg(long)]
    pub skip_malformed: bool,
    /// On load failure, report on an empty dataset and exit 0
    #[arg(long)]
    pub lenient: bool,
    /// Report format
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,
    /// Emit debug-level log events on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl CliArgs {
    pub fn malformed_policy(&self) -> MalformedPolicy {
        if self.skip_malformed {
            MalformedPolicy::Skip
        } else {
            MalformedPolicy::Abort
        }
    }
}

pub mod convert;

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "ftm-senzing",
    about = "Convert FollowTheMoney JSONL into Senzing JSONL",
    version
)]
pub struct Cli {
    /// FollowTheMoney JSONL file, or a directory of .jsonl files
    pub input: PathBuf,
    /// Destination Senzing JSONL file
    pub output: PathBuf,
    /// Stop loading after this many Person/Company records
    #[arg(long, value_name = "N")]
    pub sample: Option<usize>,
    /// JSON file with data source settings
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// DATA_SOURCE for person records (default SANCTIONS)
    #[arg(long = "person-source", value_name = "NAME")]
    pub person_source: Option<String>,
    /// DATA_SOURCE for organization records (default CORP_FILINGS)
    #[arg(long = "org-source", value_name = "NAME")]
    pub org_source: Option<String>,
}

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_output_file, Validate};
use clap::{Parser, ValueEnum};
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StatsFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "upstream-domains", version)]
#[command(about = "Extract plain domain rules from upstream adblock, hosts and domain lists")]
pub struct CliConfig {
    /// Directory of DNS-oriented upstream lists
    pub dns_dir: OsString,

    /// Directory of content-filter upstream lists
    pub content_dir: OsString,

    /// Accepted and ignored
    #[arg(hide = true)]
    pub extra: Vec<OsString>,

    /// Write rules to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print a run summary to stderr
    #[arg(long, value_enum)]
    pub stats: Option<StatsFormat>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

/// An empty directory argument means the current directory.
fn source_dir(arg: &OsStr) -> &Path {
    if arg.is_empty() {
        Path::new(".")
    } else {
        Path::new(arg)
    }
}

impl ConfigProvider for CliConfig {
    fn dns_dir(&self) -> &Path {
        source_dir(&self.dns_dir)
    }

    fn content_dir(&self) -> &Path {
        source_dir(&self.content_dir)
    }

    fn output_path(&self) -> Option<&Path> {
        self.output.as_deref()
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(output) = &self.output {
            validate_output_file("output", output)?;
        }
        Ok(())
    }
}

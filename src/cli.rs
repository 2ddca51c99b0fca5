#![allow(clippy::missing_errors_doc)]

use clap::Parser;

use crate::harness::Property;

#[derive(Debug, Parser, Clone)]
#[command(
    name = "thermoprop",
    version,
    about = "Property checks for temperature scale conversions"
)]
pub struct Cli {
    /// Properties to check, by name (default: all)
    pub properties: Vec<String>,

    /// Samples drawn per property batch
    #[arg(long, default_value_t = 10)]
    pub samples: usize,

    /// Seed for the random source (default: OS entropy)
    #[arg(long)]
    pub seed: Option<u64>,

    /// List the available properties and exit
    #[arg(long)]
    pub list: bool,

    /// Emit the report as JSON
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.samples == 0 {
            anyhow::bail!("--samples must be at least 1");
        }
        for name in &self.properties {
            if Property::from_name(name).is_none() {
                anyhow::bail!(
                    "unknown property '{name}' (run with --list to see the available names)"
                );
            }
        }
        Ok(())
    }
}

use std::path::PathBuf;

use clap::Parser;

use crate::{prelude::*, profile::Profile};

#[derive(Parser)]
pub struct SampleArgs {
    #[clap(long, default_value = "profile.toml")]
    output: PathBuf,

    /// Overwrite an existing file.
    #[clap(long)]
    force: bool,
}

impl SampleArgs {
    #[instrument(skip_all, fields(output = %self.output.display()))]
    pub fn run(self) -> Result {
        if self.output.exists() && !self.force {
            bail!("`{}` already exists, use `--force` to overwrite", self.output.display());
        }
        Profile::reference().write_to(&self.output)?;
        info!("written the sample profile");
        Ok(())
    }
}

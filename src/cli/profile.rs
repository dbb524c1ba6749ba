use std::path::PathBuf;

use clap::Parser;

use crate::{prelude::*, profile::Profile};

#[derive(Parser)]
pub struct ProfileArgs {
    /// TOML file with the rates, the current contract, and twelve monthly demands.
    #[clap(long = "profile", env = "PROFILE", default_value = "profile.toml")]
    path: PathBuf,
}

impl ProfileArgs {
    pub fn read(&self) -> Result<Profile> {
        Profile::read_from(&self.path)
    }
}

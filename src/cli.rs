mod evaluate;
mod optimize;
mod profile;
mod sample;
mod search;

use clap::{Parser, Subcommand};

use crate::{
    cli::{evaluate::EvaluateArgs, optimize::OptimizeArgs, sample::SampleArgs},
    prelude::*,
};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Main command: find the contract capacities with the lowest annual demand charges.
    #[clap(name = "optimize")]
    Optimize(Box<OptimizeArgs>),

    /// Show the monthly demand charges of the current or an ad-hoc contract.
    #[clap(name = "evaluate")]
    Evaluate(Box<EvaluateArgs>),

    /// Write the sample profile to get started.
    #[clap(name = "sample")]
    Sample(SampleArgs),
}

impl Command {
    pub async fn run(self) -> Result {
        match self {
            Self::Optimize(args) => args.run().await,
            Self::Evaluate(args) => args.run(),
            Self::Sample(args) => args.run(),
        }
    }
}

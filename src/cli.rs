mod hunt;
mod scout;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use price_optimiser::{
    core::{PriceList, Vat},
    prelude::*,
};

use crate::{
    cli::{hunt::HuntArgs, scout::ScoutArgs},
    price_file,
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
    /// Main command: find the cheapest time to run the load.
    #[clap(name = "hunt")]
    Hunt(Box<HuntArgs>),

    /// Show the price list.
    #[clap(name = "scout")]
    Scout(Box<ScoutArgs>),
}

#[derive(Parser)]
pub struct PriceArgs {
    /// Price list file, JSON or TOML depending on the extension.
    #[clap(long = "prices", env = "PRICES_PATH")]
    pub path: PathBuf,

    /// Which of the published rates to use.
    #[clap(long, env = "VAT", value_enum, default_value = "included")]
    pub vat: Vat,
}

impl PriceArgs {
    pub fn load(&self) -> Result<PriceList> {
        price_file::load(&self.path)
    }
}

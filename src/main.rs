#![allow(clippy::doc_markdown)]

mod cli;
mod price_file;
mod tables;

use clap::{Parser, crate_version};
use price_optimiser::prelude::*;

use crate::cli::{Args, Command};

fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().without_time().compact().with_writer(std::io::stderr).init();
    info!(version = crate_version!(), "starting…");

    match Args::parse().command {
        Command::Hunt(args) => args.run()?,
        Command::Scout(args) => args.run()?,
    }

    info!("done!");
    Ok(())
}

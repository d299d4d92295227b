use clap::Parser;
use price_optimiser::prelude::*;

use crate::{cli::PriceArgs, tables::build_price_table};

#[derive(Parser)]
pub struct ScoutArgs {
    #[clap(flatten)]
    prices: PriceArgs,
}

impl ScoutArgs {
    #[instrument(skip_all)]
    pub fn run(&self) -> Result {
        let price_list = self.prices.load()?;
        println!("{}", build_price_table(&price_list, self.prices.vat, None));
        Ok(())
    }
}

use chrono::{DateTime, Local, NaiveTime, TimeDelta, Timelike};
use clap::Parser;
use price_optimiser::{
    core::{Optimiser, PriceList, Solution, next_time_of_day},
    ops::Interval,
    prelude::*,
};

use crate::{
    cli::PriceArgs,
    tables::{build_price_table, build_solution_table},
};

#[derive(Parser)]
pub struct HuntArgs {
    #[clap(flatten)]
    prices: PriceArgs,

    /// Required run time, for example: `2h 30min`.
    #[clap(long, env = "DURATION")]
    duration: humantime::Duration,

    /// Earliest start as an RFC 3339 timestamp.
    #[clap(long, env = "EARLIEST_START", conflicts_with = "start_time")]
    earliest_start: Option<DateTime<Local>>,

    /// Earliest start as a daily time, for example: `22:00`.
    #[clap(long, env = "START_TIME")]
    start_time: Option<NaiveTime>,

    /// Latest finish as an RFC 3339 timestamp.
    #[clap(long, env = "LATEST_FINISH", conflicts_with = "end_time")]
    latest_finish: Option<DateTime<Local>>,

    /// Latest finish as a daily time, for example: `07:00`.
    #[clap(long, env = "END_TIME")]
    end_time: Option<NaiveTime>,

    /// Print the solution as JSON instead of the tables.
    #[clap(long)]
    json: bool,
}

#[derive(Copy, Clone, Debug)]
enum Bound {
    Absolute(DateTime<Local>),
    Recurring(NaiveTime),
    Open,
}

impl Bound {
    fn new(absolute: Option<DateTime<Local>>, recurring: Option<NaiveTime>) -> Self {
        match (absolute, recurring) {
            (Some(time), _) => Self::Absolute(time),
            (None, Some(time_of_day)) => Self::Recurring(time_of_day),
            (None, None) => Self::Open,
        }
    }

    fn resolve(self, now: DateTime<Local>) -> Result<Option<DateTime<Local>>> {
        match self {
            Self::Absolute(time) => Ok(Some(time)),
            Self::Recurring(time_of_day) => Ok(Some(next_time_of_day(now, time_of_day)?)),
            Self::Open => Ok(None),
        }
    }
}

impl HuntArgs {
    #[instrument(skip_all)]
    pub fn run(&self) -> Result {
        let price_list = self.prices.load()?;
        let now = Local::now().with_nanosecond(0).context("failed to truncate the current time")?;
        let duration =
            TimeDelta::from_std(self.duration.into()).context("the duration is out of range")?;

        let solution = self
            .optimise(&price_list, duration, now)
            .context("failed to find the start time")?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&solution)?);
        } else {
            let run = Interval::new(solution.start_time, solution.end_time());
            println!("{}", build_price_table(&price_list, self.prices.vat, Some(run)));
            println!("{}", build_solution_table(&solution));
        }
        Ok(())
    }

    /// Pick the entry point matching the given bounds.
    fn optimise(
        &self,
        price_list: &PriceList,
        duration: TimeDelta,
        now: DateTime<Local>,
    ) -> Result<Solution> {
        let optimiser = Optimiser::builder().vat(self.prices.vat).build();
        let start = Bound::new(self.earliest_start, self.start_time);
        let end = Bound::new(self.latest_finish, self.end_time);
        debug!(?start, ?end, ?duration, "resolving the window…");

        let solution = match (start, end) {
            (Bound::Recurring(start_time), Bound::Recurring(end_time)) => {
                optimiser.optimise(duration, start_time, end_time, now, price_list)?
            }
            (Bound::Recurring(start_time), Bound::Open) => {
                optimiser.optimise_with_recurring_start_time(duration, start_time, now, price_list)?
            }
            (Bound::Absolute(earliest_start), Bound::Open) => {
                optimiser.optimise_with_absolute_start_time(duration, earliest_start, price_list)?
            }
            (Bound::Open, Bound::Recurring(end_time)) => {
                // The list may start in the past, so the open start means now:
                optimiser.optimise_with_absolute_start_and_end_time(
                    duration,
                    now,
                    next_time_of_day(now, end_time)?,
                    price_list,
                )?
            }
            (Bound::Open, Bound::Open) => {
                optimiser.optimise_with_absolute_start_time(duration, now, price_list)?
            }
            (start, end @ Bound::Absolute(_)) | (start @ Bound::Absolute(_), end) => {
                let earliest_start = start.resolve(now)?.unwrap_or(now);
                let latest_finish = end.resolve(now)?.context("the latest finish is required")?;
                optimiser.optimise_with_absolute_start_and_end_time(
                    duration,
                    earliest_start,
                    latest_finish,
                    price_list,
                )?
            }
        };
        Ok(solution)
    }
}

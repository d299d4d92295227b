use bon::Builder;
use chrono::{DateTime, Local, NaiveTime, TimeDelta};

use crate::{
    core::{
        candidate::{self, Candidate},
        cost::calculate_cost_for_duration,
        error::{InsufficientDataError, Reason},
        price::{PriceList, Vat},
        solution::Solution,
        time_window::{find_price_slot_for_time, next_time_of_day},
    },
    ops::Interval,
    prelude::*,
    quantity::cost::Cost,
};

/// Finds the cheapest time to run a constant one-unit load for a given duration.
///
/// Holds no state besides the rate selector, so the same instance may be shared freely.
/// All the `optimise*` methods resolve their window and funnel into
/// [`Optimiser::optimise_with_absolute_start_and_end_time`].
#[derive(Builder, Copy, Clone, Debug, Default)]
#[must_use]
pub struct Optimiser {
    #[builder(default)]
    vat: Vat,
}

impl Optimiser {
    /// Run within a recurring daily window.
    ///
    /// Both ends are resolved independently as the next occurrence of the time of day since `now`.
    pub fn optimise(
        self,
        duration: TimeDelta,
        start_time_of_day: NaiveTime,
        end_time_of_day: NaiveTime,
        now: DateTime<Local>,
        price_list: &PriceList,
    ) -> Result<Solution, InsufficientDataError> {
        let earliest_start = next_time_of_day(now, start_time_of_day)?;
        let latest_finish = next_time_of_day(now, end_time_of_day)?;
        self.optimise_with_absolute_start_and_end_time(
            duration,
            earliest_start,
            latest_finish,
            price_list,
        )
    }

    /// Start not earlier than the next occurrence of the time of day, finish before the prices end.
    pub fn optimise_with_recurring_start_time(
        self,
        duration: TimeDelta,
        start_time_of_day: NaiveTime,
        now: DateTime<Local>,
        price_list: &PriceList,
    ) -> Result<Solution, InsufficientDataError> {
        let earliest_start = next_time_of_day(now, start_time_of_day)?;
        self.optimise_with_absolute_start_time(duration, earliest_start, price_list)
    }

    /// Start not earlier than `earliest_start`, finish before the prices end.
    pub fn optimise_with_absolute_start_time(
        self,
        duration: TimeDelta,
        earliest_start: DateTime<Local>,
        price_list: &PriceList,
    ) -> Result<Solution, InsufficientDataError> {
        let coverage = price_list.coverage().ok_or(Reason::EmptyPriceList)?;
        self.optimise_with_absolute_start_and_end_time(
            duration,
            earliest_start,
            coverage.end,
            price_list,
        )
    }

    /// Start not earlier than the prices start, finish by the next occurrence of the time of day.
    pub fn optimise_with_recurring_end_time(
        self,
        duration: TimeDelta,
        end_time_of_day: NaiveTime,
        now: DateTime<Local>,
        price_list: &PriceList,
    ) -> Result<Solution, InsufficientDataError> {
        let coverage = price_list.coverage().ok_or(Reason::EmptyPriceList)?;
        let latest_finish = next_time_of_day(now, end_time_of_day)?;
        self.optimise_with_absolute_start_and_end_time(
            duration,
            coverage.start,
            latest_finish,
            price_list,
        )
    }

    /// Find the cheapest start within `earliest_start..=(latest_finish - duration)`.
    ///
    /// The duration is truncated to whole minutes. The window is clamped to the price list
    /// coverage. Ties are resolved in favour of the earliest start.
    #[instrument(
        skip_all,
        fields(
            duration = ?duration,
            earliest_start = ?earliest_start,
            latest_finish = ?latest_finish
        )
    )]
    pub fn optimise_with_absolute_start_and_end_time(
        self,
        duration: TimeDelta,
        earliest_start: DateTime<Local>,
        latest_finish: DateTime<Local>,
        price_list: &PriceList,
    ) -> Result<Solution, InsufficientDataError> {
        let duration = TimeDelta::minutes(duration.num_minutes());
        if duration <= TimeDelta::zero() {
            return Err(Reason::NonPositiveDuration.into());
        }

        let coverage = price_list.coverage().ok_or(Reason::EmptyPriceList)?;
        let slot_size = positive_slot_size(price_list)?;
        let window =
            Interval::new(earliest_start.max(coverage.start), latest_finish.min(coverage.end));
        match window.start.checked_add_signed(duration) {
            Some(end_time) if end_time <= window.end => {}
            _ => return Err(Reason::WindowTooNarrow.into()),
        }
        let first_index = find_price_slot_for_time(price_list, window.start)?;
        debug!(?window, ?slot_size, first_index, n_slots = price_list.len(), "searching…");

        let mut best: Option<(Candidate, Cost)> = None;
        for candidate in candidate::generate(price_list, first_index, window, duration, slot_size) {
            let cost =
                calculate_cost_for_duration(duration, candidate.start_time, price_list, self.vat)?;
            trace!(?candidate.kind, ?candidate.start_time, ?cost, "evaluated");
            if best.is_none_or(|(_, best_cost)| cost.undercuts(best_cost)) {
                best = Some((candidate, cost));
            }
        }
        let (candidate, total_cost) = best.ok_or(Reason::WindowTooNarrow)?;

        let n_slots = duration.as_seconds_f64() / slot_size.as_seconds_f64();
        let average_rate = total_cost.per_slot(n_slots).round_to_significant_digits(4);
        info!(%candidate.start_time, %candidate.kind, %total_cost, %average_rate, "optimised");

        Ok(Solution {
            start_time: candidate.start_time,
            kind: candidate.kind,
            duration,
            earliest_start,
            latest_finish,
            total_cost,
            average_rate,
            computed_at: Local::now(),
        })
    }
}

fn positive_slot_size(price_list: &PriceList) -> Result<TimeDelta, InsufficientDataError> {
    price_list
        .slot_size()
        .filter(|slot_size| slot_size.num_seconds() > 0)
        .ok_or_else(|| Reason::EmptySlot.into())
}

use chrono::{DateTime, Local, TimeDelta};

use crate::{
    core::{
        error::{InsufficientDataError, Reason},
        price::{PriceList, Vat},
    },
    ops::Interval,
    quantity::cost::Cost,
};

/// Cost of drawing one unit of power during the `duration` since the `start_time`.
///
/// A slot which is only partially covered contributes its rate pro rata.
/// The `duration` must be positive.
pub fn calculate_cost_for_duration(
    duration: TimeDelta,
    start_time: DateTime<Local>,
    price_list: &PriceList,
    vat: Vat,
) -> Result<Cost, InsufficientDataError> {
    if duration <= TimeDelta::zero() {
        return Err(Reason::NonPositiveDuration.into());
    }
    let coverage = price_list.coverage().ok_or(Reason::EmptyPriceList)?;
    let end_time = start_time.checked_add_signed(duration).ok_or(Reason::OutOfRange)?;
    if start_time < coverage.start || end_time > coverage.end {
        return Err(Reason::OutOfRange.into());
    }

    let run = Interval::new(start_time, end_time);
    Ok(price_list
        .iter()
        .filter_map(|slot| {
            let overlap = slot.interval.intersect(run)?;
            let share = overlap.len().as_seconds_f64() / slot.interval.len().as_seconds_f64();
            Some(slot.rate(vat).over_slots(share))
        })
        .sum())
}

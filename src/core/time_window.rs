use chrono::{DateTime, Local, MappedLocalTime, NaiveDate, NaiveTime};

use crate::core::{
    error::{InsufficientDataError, Reason},
    price::PriceList,
};

/// Next moment at the `time_of_day`, not earlier than the `reference` time.
///
/// The time of day is first put on the reference date. If that is already in the past,
/// it is moved to the next day.
pub fn next_time_of_day(
    reference: DateTime<Local>,
    time_of_day: NaiveTime,
) -> Result<DateTime<Local>, InsufficientDataError> {
    let date = reference.date_naive();
    let same_day = on_date(date, time_of_day)?;
    if same_day >= reference {
        return Ok(same_day);
    }
    on_date(date.succ_opt().ok_or(Reason::OutOfRange)?, time_of_day)
}

fn on_date(
    date: NaiveDate,
    time_of_day: NaiveTime,
) -> Result<DateTime<Local>, InsufficientDataError> {
    match date.and_time(time_of_day).and_local_timezone(Local) {
        MappedLocalTime::Single(time) | MappedLocalTime::Ambiguous(time, _) => Ok(time),
        MappedLocalTime::None => Err(Reason::NonexistentLocalTime.into()),
    }
}

/// Index of the slot which contains the `time`.
pub fn find_price_slot_for_time(
    price_list: &PriceList,
    time: DateTime<Local>,
) -> Result<usize, InsufficientDataError> {
    price_list
        .iter()
        .position(|slot| slot.interval.contains(time))
        .ok_or_else(|| Reason::OutOfRange.into())
}

#[cfg(test)]
mod tests {
    use chrono::TimeDelta;

    use super::*;
    use crate::core::price::tests::{at, hourly};

    fn time_of_day(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    #[test]
    fn test_next_time_of_day_later_today() {
        assert_eq!(next_time_of_day(at(8, 0), time_of_day(22, 0)), Ok(at(22, 0)));
    }

    #[test]
    fn test_next_time_of_day_rolls_over() {
        assert_eq!(next_time_of_day(at(23, 0), time_of_day(22, 0)), Ok(at(46, 0)));
    }

    #[test]
    fn test_next_time_of_day_now() {
        assert_eq!(next_time_of_day(at(22, 0), time_of_day(22, 0)), Ok(at(22, 0)));
        assert_eq!(
            next_time_of_day(at(22, 0) + TimeDelta::seconds(1), time_of_day(22, 0)),
            Ok(at(46, 0)),
        );
    }

    #[test]
    fn test_find_price_slot_for_time() {
        let price_list = hourly(&[1.0, 2.0, 3.0]);
        assert_eq!(find_price_slot_for_time(&price_list, at(0, 0)), Ok(0));
        assert_eq!(find_price_slot_for_time(&price_list, at(1, 59)), Ok(1));
        assert_eq!(find_price_slot_for_time(&price_list, at(2, 0)), Ok(2));
    }

    #[test]
    fn test_find_price_slot_for_time_out_of_range() {
        let price_list = hourly(&[1.0, 2.0, 3.0]);
        let error = Err(InsufficientDataError::from(Reason::OutOfRange));
        assert_eq!(find_price_slot_for_time(&price_list, at(-1, 0)), error);
        assert_eq!(find_price_slot_for_time(&price_list, at(3, 0)), error);
    }
}

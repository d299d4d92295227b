use chrono::{DateTime, Local, TimeDelta};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::{ops::Interval, quantity::rate::UnitRate};

/// Selects which of the two published rates is used.
#[derive(
    Copy, Clone, Debug, Default, Eq, Hash, PartialEq, clap::ValueEnum, Deserialize, Serialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Vat {
    /// Value-added tax included.
    #[default]
    Included,

    /// Value-added tax excluded.
    Excluded,
}

/// Fixed-size interval with its own energy price.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[must_use]
pub struct PriceSlot {
    pub interval: Interval,
    pub value_inc_vat: UnitRate,
    pub value_exc_vat: UnitRate,
}

impl PriceSlot {
    pub const fn new(interval: Interval, value_inc_vat: UnitRate, value_exc_vat: UnitRate) -> Self {
        Self { interval, value_inc_vat, value_exc_vat }
    }

    pub const fn rate(&self, vat: Vat) -> UnitRate {
        match vat {
            Vat::Included => self.value_inc_vat,
            Vat::Excluded => self.value_exc_vat,
        }
    }
}

/// Chronologically ordered price slots.
///
/// The slots are expected to be contiguous and of the same size. This is not enforced,
/// see [`PriceList::irregularities`].
#[derive(Clone, Debug, Default, derive_more::Deref, derive_more::IntoIterator)]
#[into_iterator(owned, ref)]
#[must_use]
pub struct PriceList(Vec<PriceSlot>);

impl PriceList {
    /// Wrap the slots that are already in chronological order.
    pub const fn new(slots: Vec<PriceSlot>) -> Self {
        Self(slots)
    }

    /// Sort the slots by their start time.
    pub fn from_unsorted(mut slots: Vec<PriceSlot>) -> Self {
        slots.sort_by_key(|slot| slot.interval.start);
        Self(slots)
    }

    /// Time range covered from the first slot start till the last slot end.
    #[must_use]
    pub fn coverage(&self) -> Option<Interval> {
        Some(Interval::new(self.first()?.interval.start, self.last()?.interval.end))
    }

    /// Size of the first slot, which all the others are supposed to share.
    #[must_use]
    pub fn slot_size(&self) -> Option<TimeDelta> {
        Some(self.first()?.interval.len())
    }

    /// Adjacent slots which are not contiguous or differ in size.
    pub fn irregularities(&self) -> impl Iterator<Item = Irregularity> {
        self.iter().tuple_windows().filter_map(|(previous, next)| {
            if previous.interval.end < next.interval.start {
                Some(Irregularity::Gap(Interval::new(previous.interval.end, next.interval.start)))
            } else if previous.interval.end > next.interval.start {
                Some(Irregularity::Overlap(Interval::new(
                    next.interval.start,
                    previous.interval.end,
                )))
            } else if previous.interval.len() != next.interval.len() {
                Some(Irregularity::SlotSize { at: next.interval.start, size: next.interval.len() })
            } else {
                None
            }
        })
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Irregularity {
    Gap(Interval),
    Overlap(Interval),
    SlotSize { at: DateTime<Local>, size: TimeDelta },
}

#[cfg(test)]
pub mod tests {
    use chrono::TimeZone;

    use super::*;

    pub fn midnight() -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 1, 15, 0, 0, 0).unwrap()
    }

    pub fn at(hour: i64, minute: i64) -> DateTime<Local> {
        midnight() + TimeDelta::hours(hour) + TimeDelta::minutes(minute)
    }

    /// Contiguous slots of `size` starting at midnight, the VAT-exclusive rate being one lower.
    pub fn price_list(size: TimeDelta, rates: &[f64]) -> PriceList {
        PriceList::new(
            rates
                .iter()
                .enumerate()
                .map(|(index, rate)| {
                    let start = midnight() + size * i32::try_from(index).unwrap();
                    PriceSlot::new(
                        Interval::new(start, start + size),
                        UnitRate::from(*rate),
                        UnitRate::from(*rate - 1.0),
                    )
                })
                .collect(),
        )
    }

    pub fn hourly(rates: &[f64]) -> PriceList {
        price_list(TimeDelta::hours(1), rates)
    }

    #[test]
    fn test_rate() {
        let slot = hourly(&[21.0])[0];
        assert_eq!(slot.rate(Vat::Included), UnitRate::from(21.0));
        assert_eq!(slot.rate(Vat::Excluded), UnitRate::from(20.0));
    }

    #[test]
    fn test_from_unsorted() {
        let mut slots = hourly(&[1.0, 2.0, 3.0]).0;
        slots.reverse();
        let price_list = PriceList::from_unsorted(slots);
        assert_eq!(price_list[0].value_inc_vat, UnitRate::from(1.0));
        assert_eq!(price_list[2].value_inc_vat, UnitRate::from(3.0));
    }

    #[test]
    fn test_coverage() {
        assert_eq!(hourly(&[1.0, 2.0]).coverage(), Some(Interval::new(at(0, 0), at(2, 0))));
        assert_eq!(PriceList::default().coverage(), None);
        assert_eq!(
            price_list(TimeDelta::minutes(30), &[1.0]).slot_size(),
            Some(TimeDelta::minutes(30)),
        );
    }

    #[test]
    fn test_irregularities() {
        assert_eq!(hourly(&[1.0, 2.0, 3.0]).irregularities().count(), 0);

        let mut slots = hourly(&[1.0, 2.0, 3.0, 4.0]).0;
        slots.remove(1);
        slots[2].interval = slots[2].interval.with_end(at(4, 30));
        let irregularities = PriceList::new(slots).irregularities().collect_vec();
        assert_eq!(
            irregularities,
            [
                Irregularity::Gap(Interval::new(at(1, 0), at(2, 0))),
                Irregularity::SlotSize { at: at(3, 0), size: TimeDelta::minutes(90) },
            ],
        );
    }
}

use std::iter::once;

use chrono::{DateTime, Local, TimeDelta};
use itertools::Itertools;
use serde::Serialize;

use crate::{core::price::PriceList, ops::Interval};

/// Why a start time is worth evaluating.
///
/// The run cost is piecewise-linear in the start time, with breakpoints where either end of
/// the run crosses a slot boundary. The minimum is therefore reached at one of these points
/// or at an edge of the window.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, derive_more::Display)]
#[serde(rename_all = "snake_case")]
pub enum CandidateKind {
    /// The earliest requested start.
    #[display("requested")]
    Requested,

    /// The run starts on a slot boundary.
    #[display("slot start")]
    SlotStart,

    /// The run ends on a slot boundary.
    #[display("slot end")]
    SlotEnd,

    /// The run ends exactly at the latest finish.
    #[display("latest start")]
    LatestStart,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[must_use]
pub struct Candidate {
    pub kind: CandidateKind,
    pub start_time: DateTime<Local>,
}

impl Candidate {
    const fn new(kind: CandidateKind, start_time: DateTime<Local>) -> Self {
        Self { kind, start_time }
    }
}

/// Generate the candidate start times in chronological order.
///
/// # Arguments
///
/// - `window`: already clamped to the price list coverage and able to fit the `duration`
/// - `first_index`: index of the slot containing the window start
///
/// The sequence stops as soon as a run would overshoot the window end: that is the normal
/// end of the search, not an error.
pub fn generate(
    price_list: &PriceList,
    first_index: usize,
    window: Interval,
    duration: TimeDelta,
    slot_size: TimeDelta,
) -> impl Iterator<Item = Candidate> {
    let leftover = TimeDelta::seconds(duration.num_seconds() % slot_size.num_seconds());
    let latest_start = window.end - duration;

    let requested = price_list
        .first()
        .filter(|first_slot| window.start > first_slot.interval.start)
        .map(|_| Candidate::new(CandidateKind::Requested, window.start));

    let aligned = price_list[first_index..].iter().flat_map(move |slot| {
        let slot_start = Candidate::new(CandidateKind::SlotStart, slot.interval.start);
        let slot_end = (!leftover.is_zero()).then(|| {
            Candidate::new(CandidateKind::SlotEnd, slot.interval.start + (slot_size - leftover))
        });
        once(slot_start).chain(slot_end)
    });

    requested
        .into_iter()
        .chain(aligned.filter(move |candidate| candidate.start_time >= window.start))
        .take_while(move |candidate| candidate.start_time <= latest_start)
        .chain(once(Candidate::new(CandidateKind::LatestStart, latest_start)))
        .dedup_by(|lhs, rhs| lhs.start_time == rhs.start_time)
}

use chrono::{DateTime, Local, TimeDelta};
use serde::Serialize;
use serde_with::{DurationSeconds, serde_as};

use crate::{
    core::candidate::CandidateKind,
    quantity::{cost::Cost, rate::UnitRate},
};

/// The cheapest start time along with the request it answers.
#[serde_as]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[must_use]
pub struct Solution {
    pub start_time: DateTime<Local>,

    /// Which candidate turned out to be the cheapest.
    pub kind: CandidateKind,

    /// Requested run time, truncated to whole minutes.
    #[serde_as(as = "DurationSeconds<i64>")]
    #[serde(rename = "duration_secs")]
    pub duration: TimeDelta,

    /// Requested earliest start, as resolved before clamping to the price list.
    pub earliest_start: DateTime<Local>,

    /// Requested latest finish, as resolved before clamping to the price list.
    pub latest_finish: DateTime<Local>,

    pub total_cost: Cost,

    /// Average rate over the run, rounded to 4 significant digits.
    pub average_rate: UnitRate,

    pub computed_at: DateTime<Local>,
}

impl Solution {
    #[must_use]
    pub fn end_time(&self) -> DateTime<Local> {
        self.start_time + self.duration
    }
}

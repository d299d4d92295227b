use derive_more::Display;

/// The price list and the requested window cannot jointly satisfy the request.
///
/// This is the only failure the optimiser reports. The caller may retry with a wider window,
/// a shorter duration, or a fresher price list.
#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("not enough data to satisfy the request: {reason}")]
#[must_use]
pub struct InsufficientDataError {
    pub reason: Reason,
}

#[derive(Copy, Clone, Debug, Display, Eq, PartialEq)]
pub enum Reason {
    #[display("the price list is empty")]
    EmptyPriceList,

    #[display("the duration is shorter than a minute")]
    NonPositiveDuration,

    #[display("the first price slot has no duration")]
    EmptySlot,

    #[display("the window cannot fit the duration")]
    WindowTooNarrow,

    #[display("the time is not covered by the price list")]
    OutOfRange,

    #[display("the time of day does not exist in the local time zone")]
    NonexistentLocalTime,
}

impl From<Reason> for InsufficientDataError {
    fn from(reason: Reason) -> Self {
        Self { reason }
    }
}

pub mod candidate;
pub mod cost;
pub mod error;
pub mod optimiser;
pub mod price;
pub mod solution;
pub mod time_window;

pub use self::{
    cost::calculate_cost_for_duration,
    error::{InsufficientDataError, Reason},
    optimiser::Optimiser,
    price::{PriceList, PriceSlot, Vat},
    solution::Solution,
    time_window::{find_price_slot_for_time, next_time_of_day},
};

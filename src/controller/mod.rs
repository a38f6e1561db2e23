//! Search controller and its state machine

pub mod search;
pub mod state;

pub use search::SearchController;
pub use state::{SearchState, SearchTicket};

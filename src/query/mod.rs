//! Shareable search state

pub mod codec;
pub mod link;
pub mod rison;

pub use codec::{decode, encode, SearchQuery};
pub use link::{share_link, token_from_link, QUERY_KEY};

//! Wire protocol for the ledger endpoint
//!
//! One endpoint, one method. Every request is a JSON object whose `action`
//! field selects the operation; every response carries a `status` string and
//! the result fields for that action.

pub mod request;
pub mod response;

pub use request::{Movement, Request};
pub use response::{Response, SUCCESS};

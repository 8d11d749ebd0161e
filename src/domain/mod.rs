//! Domain layer for the TGV Max plugin.
//!
//! Core types of the search pipeline, independent of Zellij APIs:
//!
//! - [`error`]: Error type and result alias
//! - [`trip`]: Trip record
//! - [`criteria`]: Search criteria submitted by the form
//! - [`network`]: Zone → stations lookup table
//! - [`result_set`]: Filter/sort/limit pass and its output
//!
//! # Examples
//!
//! ```
//! use tgvmax::domain::{FilterPolicy, Network, ResultSet, SearchCriteria};
//!
//! let set = ResultSet::build(&[], &SearchCriteria::default(), FilterPolicy::Ignore, Network::standard());
//! assert!(set.is_empty());
//! ```

pub mod criteria;
pub mod error;
pub mod network;
pub mod result_set;
pub mod trip;

pub use criteria::{DateRange, SearchCriteria};
pub use error::{Result, TgvMaxError};
pub use network::{Network, Station, Zone};
pub use result_set::{FilterPolicy, ResultSet, MAX_RESULTS};
pub use trip::Trip;

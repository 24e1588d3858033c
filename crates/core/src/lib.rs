//! Core building blocks for the `psearch` profile search panel.
//!
//! The crate is split along the seams of the panel: [`service`] and [`query`]
//! hold the domain types, [`clock`] and [`debounce`] implement the cancellable
//! timer that gates searches, [`store`] describes the state container the
//! panel dispatches into, and [`view_model`] ties them together. A reference
//! container backed by an in-memory [`directory`] lives in [`state`].

pub mod clock;
pub mod debounce;
pub mod directory;
mod error;
pub mod query;
pub mod service;
pub mod state;
pub mod store;
pub mod view_model;

pub use clock::{Clock, ManualClock, SystemClock};
pub use debounce::Debouncer;
pub use directory::{UserDirectory, UserRecord};
pub use error::{DirectoryError, ServiceParseError};
pub use query::{ResultDestination, SearchQuery, SearchResultId};
pub use service::Service;
pub use state::{AppState, Route};
pub use store::{Action, ResultEntry, Store};
pub use view_model::{DEFAULT_DEBOUNCE, DEFAULT_PLACEHOLDER, SearchProps, SearchViewModel};

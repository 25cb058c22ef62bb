//! Game hosting: session storage and the service facade
//!
//! The service is what a controller layer talks to. It checks guesses against
//! the dictionary, creates sessions per difficulty and keeps them until they
//! are deleted.

mod error;
mod game_service;
mod store;

pub use error::ServiceError;
pub use game_service::GameService;
pub use store::SessionStore;

//! HTTP request handlers (the controller layer).
//!
//! Each handler reads path, query and body, forwards them to the
//! [`TestService`](crate::service::TestService) and maps the result to a
//! status code:
//!
//! - [`create`] - Create a test (201)
//! - [`read`] - List tests and read one by id (200)
//! - [`update`] - Update a test by id (200)
//! - [`delete`] - Delete a test by id (204)
//! - [`health`] - Service self check
//! - [`fallback`] - 404 for everything else

pub mod create;
pub mod delete;
pub mod fallback;
pub mod health;
pub mod read;
pub mod update;

// Re-export handlers for convenience
pub use create::create_handler;
pub use delete::delete_handler;
pub use fallback::not_found_handler;
pub use health::health_handler;
pub use read::{read_handler, read_one_handler};
pub use update::update_handler;

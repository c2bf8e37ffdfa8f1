//! Contact API module.
//! REST endpoints for the marketing site's contact page.

pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod types;

pub use routes::create_router;
pub use types::*;

//! API module - HTTP routes, handlers, and models

pub mod analyzer_handlers;
pub mod chat_handlers;
pub mod handlers;
pub mod models;
pub mod persona_handlers;
pub mod place_handlers;
pub mod routes;

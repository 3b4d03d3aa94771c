//! HTTP handlers outside the GraphQL endpoint

pub mod health;
pub mod ui;

pub use health::health;
pub use ui::{graphiql, serve_app_js, serve_index};

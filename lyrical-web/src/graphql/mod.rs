//! GraphQL API for the song/lyric catalog
//!
//! Provides the typed API served at POST /graphql:
//! - [`QueryRoot`]: read operations (`songs`, `song(id)`)
//! - [`MutationRoot`]: write operations (`addSong`, `addLyricToSong`, `likeLyric`)
//!
//! The schema is injected with the entity store pool; resolvers translate
//! operations into `lyrical_common::db` store calls.

pub mod mutation;
pub mod query;
pub mod types;

use async_graphql::{EmptySubscription, ErrorExtensions, Schema};
use sqlx::SqlitePool;

pub use mutation::MutationRoot;
pub use query::QueryRoot;
pub use types::{Lyric, Song};

/// The full GraphQL schema type for Lyrical
pub type LyricalSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the GraphQL schema with the entity store pool injected
pub fn build_schema(pool: SqlitePool) -> LyricalSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(pool)
        .finish()
}

/// Map a store error onto a GraphQL error with a classification code
///
/// NotFound keeps its classification in the error extensions so callers can
/// distinguish a missing identifier from an internal failure.
pub(crate) fn store_error(err: lyrical_common::Error) -> async_graphql::Error {
    let code = if err.is_not_found() {
        "NOT_FOUND"
    } else {
        "INTERNAL"
    };
    async_graphql::Error::new(err.to_string()).extend_with(|_, ext| ext.set("code", code))
}

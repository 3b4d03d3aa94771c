//! Write operations
//!
//! Every mutation returns the affected entity (or the owning song, for
//! lyric creation) so the caller can refresh local state without a second
//! round trip. Each write touches exactly one row; store errors propagate
//! as GraphQL errors with a classification code.

use async_graphql::{Context, Object, Result, ID};
use lyrical_common::db;
use sqlx::SqlitePool;
use tracing::info;

use super::store_error;
use super::types::{Lyric, Song};

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Create a new song with the given title
    async fn add_song(&self, ctx: &Context<'_>, title: String) -> Result<Song> {
        let pool = ctx.data_unchecked::<SqlitePool>();
        let song = db::create_song(pool, &title).await.map_err(store_error)?;
        info!("Added song {}", song.id);
        Ok(Song::from(song))
    }

    /// Attach a lyric to an existing song; returns the owning song
    async fn add_lyric_to_song(
        &self,
        ctx: &Context<'_>,
        content: String,
        song_id: ID,
    ) -> Result<Song> {
        let pool = ctx.data_unchecked::<SqlitePool>();
        let lyric = db::create_lyric(pool, &content, &song_id)
            .await
            .map_err(store_error)?;
        info!("Added lyric {} to song {}", lyric.id, lyric.song_id);

        let song = db::get_song(pool, &song_id).await.map_err(store_error)?;
        Ok(Song::from(song))
    }

    /// Increment a lyric's like counter by 1
    async fn like_lyric(&self, ctx: &Context<'_>, id: ID) -> Result<Lyric> {
        let pool = ctx.data_unchecked::<SqlitePool>();
        let lyric = db::increment_likes(pool, &id).await.map_err(store_error)?;
        Ok(Lyric::from(lyric))
    }
}

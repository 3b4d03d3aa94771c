//! Read operations

use async_graphql::{Context, Object, Result, ID};
use lyrical_common::db;
use sqlx::SqlitePool;

use super::store_error;
use super::types::Song;

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// All songs in the catalog, without their lyrics
    async fn songs(&self, ctx: &Context<'_>) -> Result<Vec<Song>> {
        let pool = ctx.data_unchecked::<SqlitePool>();
        let songs = db::list_songs(pool).await.map_err(store_error)?;
        Ok(songs.into_iter().map(Song::from).collect())
    }

    /// One song with its lyric list
    async fn song(&self, ctx: &Context<'_>, id: ID) -> Result<Song> {
        let pool = ctx.data_unchecked::<SqlitePool>();
        let song = db::get_song(pool, &id).await.map_err(store_error)?;
        Ok(Song::from(song))
    }
}

//! GraphQL object types for songs and lyrics

use async_graphql::{Context, Object, Result, SimpleObject, ID};
use lyrical_common::db::{self, models};
use sqlx::SqlitePool;

use super::store_error;

/// A single lyric line with its like counter
#[derive(Debug, Clone, SimpleObject)]
pub struct Lyric {
    pub id: ID,
    pub content: String,
    pub likes: i64,
}

impl From<models::Lyric> for Lyric {
    fn from(lyric: models::Lyric) -> Self {
        Self {
            id: ID(lyric.id),
            content: lyric.content,
            likes: lyric.likes,
        }
    }
}

/// A song in the catalog
///
/// The lyric list is carried along when the song was fetched with its
/// lyrics (song detail, lyric creation); otherwise it is resolved from the
/// store on demand, so `songs` never loads lyrics it does not return.
#[derive(Debug, Clone)]
pub struct Song {
    pub id: String,
    pub title: String,
    lyrics: Option<Vec<Lyric>>,
}

#[Object]
impl Song {
    async fn id(&self) -> ID {
        ID(self.id.clone())
    }

    async fn title(&self) -> &str {
        &self.title
    }

    async fn lyrics(&self, ctx: &Context<'_>) -> Result<Vec<Lyric>> {
        if let Some(lyrics) = &self.lyrics {
            return Ok(lyrics.clone());
        }

        let pool = ctx.data_unchecked::<SqlitePool>();
        let lyrics = db::list_lyrics(pool, &self.id).await.map_err(store_error)?;
        Ok(lyrics.into_iter().map(Lyric::from).collect())
    }
}

impl From<models::Song> for Song {
    fn from(song: models::Song) -> Self {
        Self {
            id: song.id,
            title: song.title,
            lyrics: None,
        }
    }
}

impl From<models::SongWithLyrics> for Song {
    fn from(song: models::SongWithLyrics) -> Self {
        Self {
            id: song.id,
            title: song.title,
            lyrics: Some(song.lyrics.into_iter().map(Lyric::from).collect()),
        }
    }
}

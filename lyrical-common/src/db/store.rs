//! Entity store operations for songs and lyrics
//!
//! Every operation takes the pool by reference; the pool is owned by the
//! gateway and injected at startup. Each write touches exactly one row, so
//! the single UPDATE/INSERT statement is the only concurrency primitive.

use crate::db::models::{Lyric, Song, SongWithLyrics};
use crate::{Error, Result};
use sqlx::SqlitePool;
use tracing::debug;
use uuid::Uuid;

/// Create a new song with a fresh identifier
pub async fn create_song(pool: &SqlitePool, title: &str) -> Result<Song> {
    let id = Uuid::new_v4().to_string();

    sqlx::query("INSERT INTO songs (id, title) VALUES (?, ?)")
        .bind(&id)
        .bind(title)
        .execute(pool)
        .await?;

    debug!("Created song {} ({:?})", id, title);

    Ok(Song {
        id,
        title: title.to_string(),
    })
}

/// Attach a new lyric to an existing song
///
/// Fails with `NotFound` when `song_id` does not resolve; no lyric row is
/// created in that case.
pub async fn create_lyric(pool: &SqlitePool, content: &str, song_id: &str) -> Result<Lyric> {
    let song_exists: Option<i64> = sqlx::query_scalar("SELECT 1 FROM songs WHERE id = ?")
        .bind(song_id)
        .fetch_optional(pool)
        .await?;

    if song_exists.is_none() {
        return Err(Error::NotFound(format!("song {}", song_id)));
    }

    let id = Uuid::new_v4().to_string();

    sqlx::query("INSERT INTO lyrics (id, content, likes, song_id) VALUES (?, ?, 0, ?)")
        .bind(&id)
        .bind(content)
        .bind(song_id)
        .execute(pool)
        .await?;

    debug!("Created lyric {} on song {}", id, song_id);

    Ok(Lyric {
        id,
        content: content.to_string(),
        likes: 0,
        song_id: song_id.to_string(),
    })
}

/// Increment a lyric's like counter by exactly 1 and return the updated record
///
/// The increment and read-back are one RETURNING statement, so the returned
/// likes value is exactly this call's post-increment count even when other
/// clients are liking the same lyric concurrently. Fails with `NotFound`
/// when the lyric does not exist.
pub async fn increment_likes(pool: &SqlitePool, lyric_id: &str) -> Result<Lyric> {
    let lyric = sqlx::query_as::<_, Lyric>(
        "UPDATE lyrics SET likes = likes + 1 WHERE id = ? RETURNING id, content, likes, song_id",
    )
    .bind(lyric_id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| Error::NotFound(format!("lyric {}", lyric_id)))?;

    Ok(lyric)
}

/// List all songs, without their lyrics
pub async fn list_songs(pool: &SqlitePool) -> Result<Vec<Song>> {
    let songs = sqlx::query_as::<_, Song>("SELECT id, title FROM songs")
        .fetch_all(pool)
        .await?;

    Ok(songs)
}

/// Fetch one song with its full lyric list
///
/// Fails with `NotFound` when the song does not exist.
pub async fn get_song(pool: &SqlitePool, id: &str) -> Result<SongWithLyrics> {
    let song = sqlx::query_as::<_, Song>("SELECT id, title FROM songs WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| Error::NotFound(format!("song {}", id)))?;

    let lyrics = list_lyrics(pool, id).await?;

    Ok(SongWithLyrics {
        id: song.id,
        title: song.title,
        lyrics,
    })
}

/// List the lyrics belonging to a song
pub async fn list_lyrics(pool: &SqlitePool, song_id: &str) -> Result<Vec<Lyric>> {
    let lyrics = sqlx::query_as::<_, Lyric>(
        "SELECT id, content, likes, song_id FROM lyrics WHERE song_id = ?",
    )
    .bind(song_id)
    .fetch_all(pool)
    .await?;

    Ok(lyrics)
}

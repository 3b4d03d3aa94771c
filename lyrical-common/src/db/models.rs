//! Entity store models

use serde::{Deserialize, Serialize};

/// A song in the catalog. Owns a collection of lyrics.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Song {
    pub id: String,
    pub title: String,
}

/// A single lyric line, owned by exactly one song
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Lyric {
    pub id: String,
    pub content: String,
    /// Like counter, never negative; starts at 0
    pub likes: i64,
    pub song_id: String,
}

/// A song together with its full lyric list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SongWithLyrics {
    pub id: String,
    pub title: String,
    pub lyrics: Vec<Lyric>,
}

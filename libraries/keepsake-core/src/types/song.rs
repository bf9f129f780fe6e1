/// Song domain type
use crate::types::ItemId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A dedicated song
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    /// Unique song identifier
    pub id: ItemId,

    /// Song title
    pub title: String,

    /// Dedication text (may be empty)
    pub description: String,

    /// Audio resource URL
    pub audio_url: String,

    /// Dedication date
    pub date: NaiveDate,
}

/// Add-form submission for a new song
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SongDraft {
    pub title: String,
    pub description: String,
    pub audio_url: String,
    pub date: NaiveDate,
}

impl Song {
    /// Build a song from a draft and its assigned id
    pub fn from_draft(id: ItemId, draft: SongDraft) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
            audio_url: draft.audio_url,
            date: draft.date,
        }
    }

    /// Suggested file name when the song is downloaded
    pub fn download_name(&self) -> String {
        format!("{}.mp3", self.title)
    }
}

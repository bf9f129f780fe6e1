/// Poem domain type
use crate::types::ItemId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A poem, optionally illustrated
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Poem {
    /// Unique poem identifier
    pub id: ItemId,

    /// Poem title
    pub title: String,

    /// Poem body, lines separated by `\n`
    pub content: String,

    /// Date written
    pub date: NaiveDate,

    /// Illustration URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Add-form submission for a new poem
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoemDraft {
    pub title: String,
    pub content: String,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Poem {
    /// Build a poem from a draft and its assigned id
    pub fn from_draft(id: ItemId, draft: PoemDraft) -> Self {
        Self {
            id,
            title: draft.title,
            content: draft.content,
            date: draft.date,
            image_url: draft.image_url,
        }
    }

    /// Iterate over the lines of the poem
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.content.lines()
    }

    /// Suggested file name when the illustration is downloaded
    pub fn image_download_name(&self) -> Option<String> {
        self.image_url.as_ref().map(|_| format!("{}.png", self.title))
    }
}

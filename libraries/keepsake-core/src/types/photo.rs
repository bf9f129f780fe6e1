/// Photo domain type
use crate::types::ItemId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An album photo
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    /// Unique photo identifier
    pub id: ItemId,

    /// Image resource URL
    pub image_url: String,

    /// Caption shown under the photo
    pub caption: String,

    /// Date taken
    pub date: NaiveDate,
}

/// Add-form submission for a new photo
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoDraft {
    pub image_url: String,
    pub caption: String,
    pub date: NaiveDate,
}

impl Photo {
    /// Build a photo from a draft and its assigned id
    pub fn from_draft(id: ItemId, draft: PhotoDraft) -> Self {
        Self {
            id,
            image_url: draft.image_url,
            caption: draft.caption,
            date: draft.date,
        }
    }
}

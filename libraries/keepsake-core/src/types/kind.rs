/// Content kinds and kind-erased items
use crate::error::KeepsakeError;
use crate::types::{ItemId, Photo, PhotoDraft, Poem, PoemDraft, Song, SongDraft};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The three kinds of content a keepsake holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Songs,
    Poems,
    Photos,
}

impl ContentKind {
    /// All kinds, in tab order
    pub const ALL: [ContentKind; 3] = [ContentKind::Songs, ContentKind::Poems, ContentKind::Photos];

    /// Persistence key holding the user-added items of this kind
    pub fn storage_key(self) -> &'static str {
        match self {
            ContentKind::Songs => "customSongs",
            ContentKind::Poems => "customPoems",
            ContentKind::Photos => "customPhotos",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ContentKind::Songs => "songs",
            ContentKind::Poems => "poems",
            ContentKind::Photos => "photos",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentKind {
    type Err = KeepsakeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "songs" | "song" => Ok(ContentKind::Songs),
            "poems" | "poem" => Ok(ContentKind::Poems),
            "photos" | "photo" | "album" => Ok(ContentKind::Photos),
            other => Err(KeepsakeError::invalid_input(format!(
                "unknown content kind: {other}"
            ))),
        }
    }
}

/// An item of any kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Item {
    Song(Song),
    Poem(Poem),
    Photo(Photo),
}

impl Item {
    pub fn id(&self) -> ItemId {
        match self {
            Item::Song(song) => song.id,
            Item::Poem(poem) => poem.id,
            Item::Photo(photo) => photo.id,
        }
    }

    pub fn kind(&self) -> ContentKind {
        match self {
            Item::Song(_) => ContentKind::Songs,
            Item::Poem(_) => ContentKind::Poems,
            Item::Photo(_) => ContentKind::Photos,
        }
    }

    pub fn date(&self) -> NaiveDate {
        match self {
            Item::Song(song) => song.date,
            Item::Poem(poem) => poem.date,
            Item::Photo(photo) => photo.date,
        }
    }

    /// Title for songs and poems, caption for photos
    pub fn headline(&self) -> &str {
        match self {
            Item::Song(song) => &song.title,
            Item::Poem(poem) => &poem.title,
            Item::Photo(photo) => &photo.caption,
        }
    }

    /// What the item's download button saves; photos and poems without an
    /// illustration have none
    pub fn download(&self) -> Option<Download> {
        match self {
            Item::Song(song) => Some(Download {
                url: song.audio_url.clone(),
                file_name: song.download_name(),
            }),
            Item::Poem(poem) => Some(Download {
                url: poem.image_url.clone()?,
                file_name: poem.image_download_name()?,
            }),
            Item::Photo(_) => None,
        }
    }
}

/// A file offered for download, named after the item
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Download {
    pub url: String,
    pub file_name: String,
}

impl From<Song> for Item {
    fn from(song: Song) -> Self {
        Item::Song(song)
    }
}

impl From<Poem> for Item {
    fn from(poem: Poem) -> Self {
        Item::Poem(poem)
    }
}

impl From<Photo> for Item {
    fn from(photo: Photo) -> Self {
        Item::Photo(photo)
    }
}

/// An add-form submission of any kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Draft {
    Song(SongDraft),
    Poem(PoemDraft),
    Photo(PhotoDraft),
}

impl Draft {
    pub fn kind(&self) -> ContentKind {
        match self {
            Draft::Song(_) => ContentKind::Songs,
            Draft::Poem(_) => ContentKind::Poems,
            Draft::Photo(_) => ContentKind::Photos,
        }
    }
}

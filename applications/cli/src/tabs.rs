/// Section tabs of the keepsake page
use keepsake_core::ContentKind;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Songs,
    Poems,
    Album,
}

impl Tab {
    /// Tabs in display order
    pub const ALL: [Tab; 3] = [Tab::Songs, Tab::Poems, Tab::Album];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Songs => "Canciones",
            Tab::Poems => "Poemas",
            Tab::Album => "Nuestro Álbum",
        }
    }

    pub fn content_kind(self) -> ContentKind {
        match self {
            Tab::Songs => ContentKind::Songs,
            Tab::Poems => ContentKind::Poems,
            Tab::Album => ContentKind::Photos,
        }
    }
}

impl From<ContentKind> for Tab {
    fn from(kind: ContentKind) -> Self {
        match kind {
            ContentKind::Songs => Tab::Songs,
            ContentKind::Poems => Tab::Poems,
            ContentKind::Photos => Tab::Album,
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

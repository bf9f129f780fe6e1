mod ids;
mod kind;
mod photo;
mod poem;
mod song;

pub use ids::ItemId;
pub use kind::{ContentKind, Download, Draft, Item};
pub use photo::{Photo, PhotoDraft};
pub use poem::{Poem, PoemDraft};
pub use song::{Song, SongDraft};

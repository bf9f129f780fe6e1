//! The three content stores over one persistence port

use crate::assets::AssetResolver;
use crate::catalog;
use crate::storage::KeyValueStore;
use crate::store::ContentStore;
use crate::types::{
    ContentKind, Draft, Item, Photo, PhotoDraft, Poem, PoemDraft, Song, SongDraft,
};
use std::rc::Rc;

/// Songs, poems and photos of one keepsake
pub struct Library {
    songs: ContentStore<Song>,
    poems: ContentStore<Poem>,
    photos: ContentStore<Photo>,
}

impl Library {
    /// Open all stores with the built-in catalog resolved against `assets`
    pub fn open(storage: Rc<dyn KeyValueStore>, assets: &AssetResolver) -> Self {
        Self {
            songs: ContentStore::open(catalog::songs(assets), Rc::clone(&storage)),
            poems: ContentStore::open(catalog::poems(assets), Rc::clone(&storage)),
            photos: ContentStore::open(catalog::photos(assets), storage),
        }
    }

    pub fn songs(&self) -> &ContentStore<Song> {
        &self.songs
    }

    pub fn poems(&self) -> &ContentStore<Poem> {
        &self.poems
    }

    pub fn photos(&self) -> &ContentStore<Photo> {
        &self.photos
    }

    /// Re-read one kind from storage and return its effective set
    pub fn load(&mut self, kind: ContentKind) -> Vec<Item> {
        match kind {
            ContentKind::Songs => into_items(self.songs.load()),
            ContentKind::Poems => into_items(self.poems.load()),
            ContentKind::Photos => into_items(self.photos.load()),
        }
    }

    /// Effective set of one kind, without touching storage
    pub fn items(&self, kind: ContentKind) -> Vec<Item> {
        match kind {
            ContentKind::Songs => into_items(self.songs.items()),
            ContentKind::Poems => into_items(self.poems.items()),
            ContentKind::Photos => into_items(self.photos.items()),
        }
    }

    pub fn add(&mut self, draft: Draft) -> Item {
        match draft {
            Draft::Song(draft) => self.add_song(draft).into(),
            Draft::Poem(draft) => self.add_poem(draft).into(),
            Draft::Photo(draft) => self.add_photo(draft).into(),
        }
    }

    pub fn add_song(&mut self, draft: SongDraft) -> Song {
        self.songs.add(draft)
    }

    pub fn add_poem(&mut self, draft: PoemDraft) -> Poem {
        self.poems.add(draft)
    }

    pub fn add_photo(&mut self, draft: PhotoDraft) -> Photo {
        self.photos.add(draft)
    }
}

fn into_items<I: Into<Item>>(items: Vec<I>) -> Vec<Item> {
    items.into_iter().map(Into::into).collect()
}

//! One run of the keepsake shell
//!
//! Owns the content library and the developer-mode flag and drives the
//! playback coordinator for the `play` and `welcome` commands.

use crate::config::KeepsakeConfig;
use crate::output::{LogClips, LogTrack};
use keepsake_core::{
    ContentKind, DevMode, Download, Draft, Item, ItemId, KeepsakeError, KeyValueStore, Library,
    Result,
};
use keepsake_playback::{
    PlaybackCoordinator, PlaybackError, PlaybackEvent, SONGS_SLOT, WELCOME_SLOT,
};
use keepsake_storage::FileStore;
use std::rc::Rc;
use tracing::info;

pub type ShellPlayback = PlaybackCoordinator<LogClips, LogTrack>;

/// The welcome slot holds a single clip
const GREETING: ItemId = ItemId::FIRST;

pub struct Session {
    config: KeepsakeConfig,
    dev_mode: DevMode,
    library: Library,
}

impl Session {
    /// Open a session persisting to the configured file
    pub fn open(config: KeepsakeConfig, dev_mode: DevMode) -> Self {
        let storage = Rc::new(FileStore::new(config.storage.path.clone()));
        Self::with_storage(config, dev_mode, storage)
    }

    pub fn with_storage(
        config: KeepsakeConfig,
        dev_mode: DevMode,
        storage: Rc<dyn KeyValueStore>,
    ) -> Self {
        let library = Library::open(storage, &config.asset_resolver());
        let dev_mode = dev_mode.or(config.dev_mode());
        Self {
            config,
            dev_mode,
            library,
        }
    }

    pub fn dev_mode(&self) -> DevMode {
        self.dev_mode
    }

    pub fn library(&self) -> &Library {
        &self.library
    }

    /// Effective set of `kind`, re-read from storage
    pub fn list(&mut self, kind: ContentKind) -> Vec<Item> {
        self.library.load(kind)
    }

    /// Add an item; only allowed in developer mode
    pub fn add(&mut self, draft: Draft) -> Result<Item> {
        if !self.dev_mode.is_enabled() {
            return Err(KeepsakeError::invalid_input(
                "adding content requires developer mode (--dev or ?dev=true)",
            ));
        }

        let item = self.library.add(draft);
        info!(kind = %item.kind(), id = %item.id(), "Added item");
        Ok(item)
    }

    /// File behind an item's download button
    pub fn download(&mut self, kind: ContentKind, id: ItemId) -> Result<Download> {
        let item = self
            .list(kind)
            .into_iter()
            .find(|item| item.id() == id)
            .ok_or_else(|| KeepsakeError::invalid_input(format!("no {kind} with id {id}")))?;

        item.download().ok_or_else(|| {
            KeepsakeError::invalid_input(format!("{kind} {id} has nothing to download"))
        })
    }

    /// Build a coordinator wired to the logging backend
    pub fn playback(&self) -> ShellPlayback {
        let source = self.config.background_source();
        PlaybackCoordinator::new(
            &self.config.playback(),
            source.clone(),
            LogTrack::new(source),
            LogClips::new(SONGS_SLOT),
            LogClips::new(WELCOME_SLOT),
        )
    }

    /// Play `ids` one after another in the songs section
    ///
    /// Every start succeeds and the last song ends naturally. Unknown ids are
    /// rejected before anything plays.
    pub fn play_songs(
        &self,
        ids: &[ItemId],
    ) -> std::result::Result<ShellPlayback, PlaybackError> {
        if let Some(unknown) = ids.iter().find(|id| self.library.songs().get(**id).is_none()) {
            return Err(PlaybackError::UnknownItem(*unknown));
        }

        let mut playback = self.playback();
        playback.start();
        confirm_background(&playback);

        for id in ids {
            playback.songs_mut().try_play(*id)?;
        }
        if let Some(last) = ids.last() {
            playback.songs_mut().on_ended(*last);
            confirm_background(&playback);
        }

        Ok(playback)
    }

    /// Play the welcome greeting to its end
    ///
    /// The greeting does not duck the background track.
    pub fn play_welcome(&self) -> ShellPlayback {
        let mut playback = self.playback();
        playback.start();
        confirm_background(&playback);

        info!(source = %self.config.welcome_source(), "Playing welcome greeting");
        playback.welcome_mut().request_play(GREETING);
        playback.welcome_mut().on_ended(GREETING);
        playback
    }

    /// Events of a finished `play` run
    pub fn play_events(
        &self,
        ids: &[ItemId],
    ) -> std::result::Result<Vec<PlaybackEvent>, PlaybackError> {
        let mut playback = self.play_songs(ids)?;
        Ok(playback.take_events())
    }
}

fn confirm_background(playback: &ShellPlayback) {
    let mut track = playback.background().borrow_mut();
    if track.pending_start().is_some() {
        track.on_started();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use keepsake_core::{MemoryStore, SongDraft};
    use crate::output::ClipCall;
    use keepsake_playback::{BackgroundState, SlotState};

    fn session(dev_mode: DevMode) -> Session {
        Session::with_storage(
            KeepsakeConfig::default(),
            dev_mode,
            Rc::new(MemoryStore::new()),
        )
    }

    fn draft() -> Draft {
        Draft::Song(SongDraft {
            title: "Nuestra canción".to_string(),
            description: "La primera".to_string(),
            audio_url: "data:audio/mpeg;base64,AAAA".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 9, 1).unwrap(),
        })
    }

    fn id(n: u32) -> ItemId {
        ItemId::new(n).unwrap()
    }

    #[test]
    fn adding_requires_dev_mode() {
        let mut session = session(DevMode::DISABLED);

        let result = session.add(draft());

        assert!(matches!(result, Err(KeepsakeError::InvalidInput(_))));
        assert_eq!(session.list(ContentKind::Songs).len(), 3);
    }

    #[test]
    fn dev_mode_adds_after_built_ins() {
        let mut session = session(DevMode::ENABLED);

        let item = session.add(draft()).unwrap();

        assert_eq!(item.id(), id(4));
        assert_eq!(session.list(ContentKind::Songs).len(), 4);
    }

    #[test]
    fn config_enables_dev_mode() {
        let mut config = KeepsakeConfig::default();
        config.dev_mode = true;
        let session =
            Session::with_storage(config, DevMode::DISABLED, Rc::new(MemoryStore::new()));

        assert!(session.dev_mode().is_enabled());
    }

    #[test]
    fn play_ends_with_background_restored() {
        let session = session(DevMode::DISABLED);

        let playback = session.play_songs(&[id(1), id(2)]).unwrap();

        assert_eq!(playback.songs().state(), SlotState::Idle);
        assert_eq!(
            playback.songs().output().calls(),
            [
                ClipCall::Start(id(1)),
                ClipCall::Stop(id(1)),
                ClipCall::Start(id(2)),
            ]
        );
        let track = playback.background().borrow();
        assert_eq!(track.state(), BackgroundState::Playing);
        assert_eq!(track.output().starts(), 2);
        assert_eq!(track.output().stops(), 1);
    }

    #[test]
    fn play_rejects_unknown_song_before_starting() {
        let session = session(DevMode::DISABLED);

        let result = session.play_events(&[id(1), id(42)]);

        assert_eq!(result, Err(PlaybackError::UnknownItem(id(42))));
    }

    #[test]
    fn welcome_greeting_leaves_background_playing() {
        let session = session(DevMode::DISABLED);

        let playback = session.play_welcome();

        assert_eq!(playback.welcome().state(), SlotState::Idle);
        assert_eq!(playback.welcome().output().calls(), [ClipCall::Start(GREETING)]);
        assert!(playback.songs().output().calls().is_empty());
        let track = playback.background().borrow();
        assert_eq!(track.state(), BackgroundState::Playing);
        assert_eq!(track.output().stops(), 0);
    }

    #[test]
    fn download_names_songs_and_illustrated_poems() {
        let mut session = session(DevMode::DISABLED);

        let song = session.download(ContentKind::Songs, id(2)).unwrap();
        assert_eq!(song.url, "/assets/2.mp3");
        assert_eq!(song.file_name, "Eres tú.mp3");

        let poem = session.download(ContentKind::Poems, id(1)).unwrap();
        assert_eq!(poem.file_name, "Mi Amor.png");

        assert!(session.download(ContentKind::Photos, id(1)).is_err());
        assert!(session.download(ContentKind::Songs, id(9)).is_err());
    }
}

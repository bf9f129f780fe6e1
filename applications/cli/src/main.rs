/// Keepsake - terminal shell for the keepsake page
use anyhow::Context;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use keepsake_cli::{KeepsakeConfig, Session, Tab};
use keepsake_core::{
    ContentKind, DevMode, Draft, Item, ItemId, PhotoDraft, PoemDraft, SongDraft,
};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "keepsake")]
#[command(about = "Songs, poems and photos kept for someone special", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(long, global = true, env = "KEEPSAKE_CONFIG")]
    config: Option<PathBuf>,

    /// Enable developer mode
    #[arg(long, global = true)]
    dev: bool,

    /// Page query string, e.g. "dev=true"
    #[arg(long, global = true)]
    query: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List songs, poems or photos
    List {
        /// songs, poems or photos
        kind: ContentKind,
    },
    /// Add a song (developer mode)
    AddSong {
        #[arg(short, long)]
        title: String,
        #[arg(short, long, default_value = "")]
        description: String,
        /// Audio URL or data URL
        #[arg(short, long)]
        audio: String,
        /// Date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Add a poem (developer mode)
    AddPoem {
        #[arg(short, long)]
        title: String,
        /// Poem text; use \n for line breaks
        #[arg(short, long)]
        content: String,
        /// Optional image URL
        #[arg(short, long)]
        image: Option<String>,
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Add a photo to the album (developer mode)
    AddPhoto {
        /// Image URL or data URL
        #[arg(short, long)]
        image: String,
        #[arg(short, long, default_value = "")]
        caption: String,
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Show the file behind an item's download button
    Download {
        /// songs or poems
        kind: ContentKind,
        id: u32,
    },
    /// Show the section tabs
    Tabs,
    /// Play the welcome greeting
    Welcome,
    /// Play songs in order with the background track ducked
    Play {
        /// Song ids
        #[arg(required = true)]
        ids: Vec<u32>,
    },
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "keepsake=info,keepsake_cli=info,keepsake_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = KeepsakeConfig::load(cli.config.as_deref()).context("Failed to load config")?;
    config.validate()?;

    let dev_mode = DevMode::from(cli.dev).or(cli
        .query
        .as_deref()
        .map(DevMode::from_query)
        .unwrap_or_default());

    match cli.command {
        Commands::List { kind } => {
            let mut session = Session::open(config, dev_mode);
            for item in session.list(kind) {
                print_item(&item);
            }
        }
        Commands::AddSong {
            title,
            description,
            audio,
            date,
        } => {
            let draft = Draft::Song(SongDraft {
                title,
                description,
                audio_url: audio,
                date: date.unwrap_or_else(today),
            });
            add(config, dev_mode, draft)?;
        }
        Commands::AddPoem {
            title,
            content,
            image,
            date,
        } => {
            let draft = Draft::Poem(PoemDraft {
                title,
                content: content.replace("\\n", "\n"),
                date: date.unwrap_or_else(today),
                image_url: image,
            });
            add(config, dev_mode, draft)?;
        }
        Commands::AddPhoto {
            image,
            caption,
            date,
        } => {
            let draft = Draft::Photo(PhotoDraft {
                image_url: image,
                caption,
                date: date.unwrap_or_else(today),
            });
            add(config, dev_mode, draft)?;
        }
        Commands::Download { kind, id } => {
            let id = ItemId::new(id).context("Item ids start at 1")?;
            let mut session = Session::open(config, dev_mode);
            let download = session.download(kind, id)?;
            println!("{}\t{}", download.file_name, download.url);
        }
        Commands::Tabs => {
            for tab in Tab::ALL {
                let marker = if tab == Tab::default() { "*" } else { " " };
                println!("{marker} {:<8} {}", tab.content_kind().as_str(), tab.label());
            }
        }
        Commands::Welcome => {
            let session = Session::open(config, dev_mode);
            let mut playback = session.play_welcome();
            for event in playback.take_events() {
                println!("{}", serde_json::to_string(&event)?);
            }
        }
        Commands::Play { ids } => {
            let ids = ids
                .into_iter()
                .map(|n| ItemId::new(n).context("Song ids start at 1"))
                .collect::<anyhow::Result<Vec<_>>>()?;

            let session = Session::open(config, dev_mode);
            let mut playback = session.play_songs(&ids)?;
            for call in playback.songs().output().calls() {
                println!("{call}");
            }
            for event in playback.take_events() {
                println!("{}", serde_json::to_string(&event)?);
            }
        }
    }

    Ok(())
}

fn add(config: KeepsakeConfig, dev_mode: DevMode, draft: Draft) -> anyhow::Result<()> {
    let mut session = Session::open(config, dev_mode);
    let item = session.add(draft)?;
    print_item(&item);
    Ok(())
}

fn print_item(item: &Item) {
    println!("{:>3}  {}  {}", item.id().get(), item.date(), item.headline());
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

//! Built-in content
//!
//! The items shipped with the keepsake. Ids run 1..N in the order listed and
//! never change at runtime; asset names resolve through [`AssetResolver`].

use crate::assets::AssetResolver;
use crate::types::{ItemId, Photo, Poem, Song};
use chrono::NaiveDate;

// (title, description, asset, date)
const SONGS: [(&str, &str, &str, (i32, u32, u32)); 3] = [
    ("Tú Y Yo - La Misma Gente", "", "1.mp3", (2024, 1, 15)),
    ("Eres tú", "Dedicada a ti mi amor", "2.mp3", (2024, 2, 14)),
    ("Come Back Home", "Dedicada a ti mi amor", "3.mp3", (2024, 2, 14)),
];

const POEM_TITLE: &str = "Mi Amor";
const POEM_BODY: &str = "Me seguiré enamorando de ti cada día,
abrazaré tus temores sobre el futuro para
que disfrutes de este presente juntos.
Seré tu abrigo en medio de las dudas y
compañera en las noches inciertas.
No tengo todas las respuestas, pero tengo mis
manos, mi voz y este amor que no se
desgasta, que se reinventa en cada gesto
tuyo.";
const POEM_IMAGE: &str = "poema.png";
const POEM_DATE: (i32, u32, u32) = (2025, 8, 30);

// (asset, caption, date)
const PHOTOS: [(&str, &str, (i32, u32, u32)); 5] = [
    ("album-1.jpeg", "TE AMO!!!!", (2026, 2, 14)),
    ("album-2.jpeg", "Nuestro amor es infinito ❤️", (2026, 2, 14)),
    ("album-3.jpeg", "Cada dia me enamoro mas de ti", (2026, 2, 14)),
    ("album-4.jpeg", "No sabes cuanto te extraño", (2026, 2, 14)),
    ("album-5.jpeg", "Solo tu, eres la razon de mi existir", (2026, 2, 14)),
];

/// Name of the greeting clip played from the welcome screen
pub const WELCOME_GREETING: &str = "welcome.mp3";

pub fn songs(assets: &AssetResolver) -> Vec<Song> {
    numbered(&SONGS, |id, &(title, description, asset, ymd)| Song {
        id,
        title: title.to_string(),
        description: description.to_string(),
        audio_url: assets.resolve(asset),
        date: date(ymd),
    })
}

pub fn poems(assets: &AssetResolver) -> Vec<Poem> {
    vec![Poem {
        id: ItemId::FIRST,
        title: POEM_TITLE.to_string(),
        content: POEM_BODY.to_string(),
        date: date(POEM_DATE),
        image_url: Some(assets.resolve(POEM_IMAGE)),
    }]
}

pub fn photos(assets: &AssetResolver) -> Vec<Photo> {
    numbered(&PHOTOS, |id, &(asset, caption, ymd)| Photo {
        id,
        image_url: assets.resolve(asset),
        caption: caption.to_string(),
        date: date(ymd),
    })
}

fn numbered<E, T>(entries: &[E], mut build: impl FnMut(ItemId, &E) -> T) -> Vec<T> {
    (1..)
        .filter_map(ItemId::new)
        .zip(entries)
        .map(|(id, entry)| build(id, entry))
        .collect()
}

fn date((year, month, day): (i32, u32, u32)) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

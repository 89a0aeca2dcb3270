//! Static page content: the showcase catalog, gallery, feature grid and
//! footer links.
//!
//! Everything here is plain data defined at startup; only the track list can
//! be replaced through configuration.

use serde::{Deserialize, Serialize};

/// One playable catalog entry.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Track {
    pub name: String,
    pub artist: String,
    /// Nominal length shown in listings; never used for timing.
    #[serde(default)]
    pub duration_label: String,
    /// Local path, `file://` URI or remote URL.
    pub source: String,
}

impl Track {
    pub fn new(name: &str, artist: &str, duration_label: &str, source: &str) -> Self {
        Self {
            name: name.to_string(),
            artist: artist.to_string(),
            duration_label: duration_label.to_string(),
            source: source.to_string(),
        }
    }
}

const SHOWCASE_SOURCE: &str = "https://www.soundjay.com/misc/sounds/bell-ringing-05.wav";

/// The three tracks the page ships with.
pub fn showcase_tracks() -> Vec<Track> {
    vec![
        Track::new("Ethereal Waves", "Sound Designer", "3:42", SHOWCASE_SOURCE),
        Track::new("Digital Dreams", "Audio Artist", "4:15", SHOWCASE_SOURCE),
        Track::new("Sonic Landscape", "Music Producer", "5:23", SHOWCASE_SOURCE),
    ]
}

pub struct GalleryItem {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
}

pub const GALLERY: [GalleryItem; 3] = [
    GalleryItem {
        title: "Immersive Audio",
        description: "Experience sound in its purest form with cutting-edge audio technology",
        image: "https://images.pexels.com/photos/1190297/pexels-photo-1190297.jpeg",
    },
    GalleryItem {
        title: "Studio Quality",
        description: "Professional-grade equipment for creators and audiophiles",
        image: "https://images.pexels.com/photos/164938/pexels-photo-164938.jpeg",
    },
    GalleryItem {
        title: "Wireless Freedom",
        description: "Unleash your creativity without the constraints of cables",
        image: "https://images.pexels.com/photos/3394650/pexels-photo-3394650.jpeg",
    },
];

pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
}

pub const FEATURES: [Feature; 4] = [
    Feature {
        icon: "🎧",
        title: "Premium Audio",
    },
    Feature {
        icon: "🔊",
        title: "Spatial Sound",
    },
    Feature {
        icon: "🎙",
        title: "Studio Quality",
    },
    Feature {
        icon: "📻",
        title: "Wireless Tech",
    },
];

pub const SOCIAL_LINKS: [&str; 3] = ["Instagram", "Twitter", "YouTube"];

pub const TAGLINE: &str =
    "Dive into an immersive world where sound becomes art and technology meets creativity";
pub const FOOTER_TAGLINE: &str = "Exploring the infinite possibilities of sound and technology";
pub const COPYRIGHT: &str = "© 2024 Sonic Universe. Crafted with passion for audio excellence.";

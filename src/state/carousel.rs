//! Hero gallery rotation

use std::time::{Duration, Instant};

/// One gallery card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GalleryItem {
    pub title: &'static str,
    pub sub: &'static str,
    pub url: &'static str,
}

pub const GALLERY: &[GalleryItem] = &[
    GalleryItem {
        title: "Pure Organic",
        sub: "Carbon Enrichment",
        url: "https://images.pexels.com/photos/1483880/pexels-photo-1483880.jpeg",
    },
    GalleryItem {
        title: "Soil Health",
        sub: "Microbial Science",
        url: "https://images.pexels.com/photos/235925/pexels-photo-235925.jpeg",
    },
    GalleryItem {
        title: "Golden Yields",
        sub: "Farmer Prosperity",
        url: "https://images.pexels.com/photos/2165688/pexels-photo-2165688.jpeg",
    },
];

/// Rotates through [`GALLERY`] on a fixed interval
#[derive(Debug)]
pub struct CarouselState {
    pub active: usize,
    last_rotation: Instant,
}

impl CarouselState {
    pub const INTERVAL: Duration = Duration::from_secs(5);

    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    fn starting_at(now: Instant) -> Self {
        Self {
            active: 0,
            last_rotation: now,
        }
    }

    pub fn update(&mut self) {
        self.rotate_if_due(Instant::now());
    }

    /// Advance one slide per elapsed interval
    fn rotate_if_due(&mut self, now: Instant) {
        while now.saturating_duration_since(self.last_rotation) >= Self::INTERVAL {
            self.active = (self.active + 1) % GALLERY.len();
            self.last_rotation += Self::INTERVAL;
        }
    }

    pub fn current(&self) -> &'static GalleryItem {
        &GALLERY[self.active % GALLERY.len()]
    }
}

impl Default for CarouselState {
    fn default() -> Self {
        Self::new()
    }
}

use anyhow::{Context, Result};
use tracing::info;
use uuid::Uuid;

use super::media::{MediaBackend, MediaElement};

/// Owned playback resource for one stream.
///
/// Acquired when a session is selected. Dropping the handle stops the
/// element, so it is released on every exit path.
pub struct PlaybackHandle {
    id: Uuid,
    url: String,
    element: Box<dyn MediaElement>,
}

impl PlaybackHandle {
    /// Open a media element for `url` with the initial volume applied
    pub fn acquire(backend: &dyn MediaBackend, url: &str, volume: f32) -> Result<Self> {
        let mut element = backend
            .open(url)
            .with_context(|| format!("Failed to open media element for {}", url))?;
        element.set_volume(volume);

        let id = Uuid::new_v4();
        info!(
            "Acquired playback handle {} ({} element) for {}",
            id,
            element.name(),
            url
        );

        Ok(Self {
            id,
            url: url.to_string(),
            element,
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub async fn play(&mut self) -> Result<()> {
        self.element.play().await
    }

    pub fn pause(&mut self) {
        self.element.pause();
    }

    pub fn set_volume(&mut self, fraction: f32) {
        self.element.set_volume(fraction.clamp(0.0, 1.0));
    }
}

impl Drop for PlaybackHandle {
    fn drop(&mut self) {
        self.element.stop();
        info!("Released playback handle {} for {}", self.id, self.url);
    }
}

impl std::fmt::Debug for PlaybackHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlaybackHandle")
            .field("id", &self.id)
            .field("url", &self.url)
            .field("element", &self.element.name())
            .finish()
    }
}

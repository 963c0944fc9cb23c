use anyhow::Result;
use tracing::{debug, info};

/// Native media playback primitive
///
/// Decoding, buffering and transport all live behind this trait; the player
/// only ever hands it an opaque stream URL and a volume fraction.
///
/// Implementations:
/// - [`TracingMedia`]: logs every call (used by the CLI)
/// - Test doubles that record calls or fail on demand
#[async_trait::async_trait]
pub trait MediaElement: Send + Sync {
    /// Start or resume playback. May fail (codec, network).
    async fn play(&mut self) -> Result<()>;

    /// Pause playback, keeping the element usable
    fn pause(&mut self);

    /// Apply a volume fraction in [0, 1]
    fn set_volume(&mut self, fraction: f32);

    /// Stop playback and release whatever the element holds
    fn stop(&mut self);

    /// Get element name for logging
    fn name(&self) -> &str;
}

/// Opens media elements for stream URLs
pub trait MediaBackend: Send + Sync {
    fn open(&self, url: &str) -> Result<Box<dyn MediaElement>>;
}

/// Media element that only reports what it was asked to do
pub struct TracingMedia {
    url: String,
    playing: bool,
}

impl TracingMedia {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            playing: false,
        }
    }
}

#[async_trait::async_trait]
impl MediaElement for TracingMedia {
    async fn play(&mut self) -> Result<()> {
        self.playing = true;
        info!("▶ Playing {}", self.url);
        Ok(())
    }

    fn pause(&mut self) {
        if std::mem::take(&mut self.playing) {
            info!("⏸ Paused {}", self.url);
        }
    }

    fn set_volume(&mut self, fraction: f32) {
        debug!("Volume for {} set to {:.2}", self.url, fraction);
    }

    fn stop(&mut self) {
        self.playing = false;
        info!("⏹ Stopped {}", self.url);
    }

    fn name(&self) -> &str {
        "tracing"
    }
}

/// Backend producing [`TracingMedia`] elements
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingBackend;

impl MediaBackend for TracingBackend {
    fn open(&self, url: &str) -> Result<Box<dyn MediaElement>> {
        if url.trim().is_empty() {
            anyhow::bail!("Stream URL is empty");
        }
        Ok(Box::new(TracingMedia::new(url)))
    }
}

// Shared test doubles for the media layer
#![allow(dead_code)]

use anyhow::Result;
use livestream_scheduler::player::{MediaBackend, MediaElement};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Everything the recording media elements were asked to do
#[derive(Default)]
pub struct MediaLog {
    pub opened: AtomicUsize,
    pub plays: AtomicUsize,
    pub pauses: AtomicUsize,
    pub stops: AtomicUsize,
    pub volumes: Mutex<Vec<f32>>,
    pub urls: Mutex<Vec<String>>,
    /// Make every play() fail like a codec/network error
    pub fail_play: AtomicBool,
    /// Make every play() wait forever, like a stream that never buffers
    pub stall_play: AtomicBool,
}

impl MediaLog {
    pub fn opened(&self) -> usize {
        self.opened.load(Ordering::SeqCst)
    }

    pub fn plays(&self) -> usize {
        self.plays.load(Ordering::SeqCst)
    }

    pub fn pauses(&self) -> usize {
        self.pauses.load(Ordering::SeqCst)
    }

    pub fn stops(&self) -> usize {
        self.stops.load(Ordering::SeqCst)
    }

    /// Elements opened but not yet stopped
    pub fn live_handles(&self) -> usize {
        self.opened() - self.stops()
    }

    pub fn last_volume(&self) -> Option<f32> {
        self.volumes.lock().unwrap().last().copied()
    }
}

#[derive(Clone, Default)]
pub struct RecordingBackend {
    pub log: Arc<MediaLog>,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        let backend = Self::default();
        backend.log.fail_play.store(true, Ordering::SeqCst);
        backend
    }

    pub fn stalling() -> Self {
        let backend = Self::default();
        backend.log.stall_play.store(true, Ordering::SeqCst);
        backend
    }
}

impl MediaBackend for RecordingBackend {
    fn open(&self, url: &str) -> Result<Box<dyn MediaElement>> {
        self.log.opened.fetch_add(1, Ordering::SeqCst);
        self.log.urls.lock().unwrap().push(url.to_string());
        Ok(Box::new(RecordingElement {
            log: Arc::clone(&self.log),
        }))
    }
}

struct RecordingElement {
    log: Arc<MediaLog>,
}

#[async_trait::async_trait]
impl MediaElement for RecordingElement {
    async fn play(&mut self) -> Result<()> {
        self.log.plays.fetch_add(1, Ordering::SeqCst);
        if self.log.stall_play.load(Ordering::SeqCst) {
            std::future::pending::<()>().await;
        }
        if self.log.fail_play.load(Ordering::SeqCst) {
            anyhow::bail!("NotSupportedError: no supported source was found");
        }
        Ok(())
    }

    fn pause(&mut self) {
        self.log.pauses.fetch_add(1, Ordering::SeqCst);
    }

    fn set_volume(&mut self, fraction: f32) {
        self.log.volumes.lock().unwrap().push(fraction);
    }

    fn stop(&mut self) {
        self.log.stops.fetch_add(1, Ordering::SeqCst);
    }

    fn name(&self) -> &str {
        "recording"
    }
}

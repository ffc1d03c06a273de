#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use std::fs;

use enka_rs::{Cache, CacheValue, EnkaClient, EnkaClientBuilder, MemoryCache};
use httpmock::MockServer;
use url::Url;

pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures")
}

pub fn fixture(name: &str) -> String {
    fs::read_to_string(fixtures_dir().join(name)).unwrap()
}

pub fn base_url(server: &MockServer) -> Url {
    Url::parse(&format!("{}/api/", server.base_url())).unwrap()
}

/// Builder pointed at the mock server with short retry delays.
pub fn builder(server: &MockServer) -> EnkaClientBuilder {
    EnkaClient::builder()
        .base_url(base_url(server))
        .retry_delay(Duration::from_millis(10))
}

pub fn client(server: &MockServer) -> EnkaClient {
    builder(server).build().unwrap()
}

pub fn cached_client(server: &MockServer, cache: Arc<dyn Cache>) -> EnkaClient {
    builder(server).cache(cache).build().unwrap()
}

/// `MemoryCache` that records every call.
#[derive(Default)]
pub struct CountingCache {
    inner: MemoryCache,
    gets: AtomicUsize,
    sets: Mutex<Vec<(String, Duration)>>,
}

impl CountingCache {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn gets(&self) -> usize {
        self.gets.load(Ordering::SeqCst)
    }

    pub fn sets(&self) -> Vec<(String, Duration)> {
        self.sets.lock().unwrap().clone()
    }
}

impl Cache for CountingCache {
    fn get(&self, key: &str) -> Option<CacheValue> {
        self.gets.fetch_add(1, Ordering::SeqCst);
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: CacheValue, expiration: Duration) {
        self.sets
            .lock()
            .unwrap()
            .push((key.to_string(), expiration));
        self.inner.set(key, value, expiration);
    }
}

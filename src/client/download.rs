//! Session-local download handles
//!
//! A [`DownloadStore`] plays the part of the browser's object-URL registry:
//! it keeps translated bytes reachable under a `blob:` URL until the
//! [`DownloadHandle`] that owns them is dropped.

use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};

const URL_PREFIX: &str = "blob:lumina-translate/";

#[derive(Debug, Default)]
struct StoreInner {
    next_id: u64,
    buffers: HashMap<u64, Arc<[u8]>>,
}

/// Registry of live download buffers. Clones share the registry.
#[derive(Debug, Clone, Default)]
pub struct DownloadStore {
    inner: Arc<Mutex<StoreInner>>,
}

impl DownloadStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, StoreInner> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Register `bytes` and hand out the only handle to them
    pub fn create(&self, bytes: Vec<u8>, filename: impl Into<String>) -> DownloadHandle {
        let mut inner = self.lock();
        inner.next_id += 1;
        let id = inner.next_id;
        inner.buffers.insert(id, Arc::from(bytes));

        DownloadHandle {
            id,
            url: format!("{}{}", URL_PREFIX, id),
            filename: filename.into(),
            store: self.clone(),
        }
    }

    pub fn is_live(&self, id: u64) -> bool {
        self.lock().buffers.contains_key(&id)
    }

    pub fn live_count(&self) -> usize {
        self.lock().buffers.len()
    }

    /// Bytes behind a `blob:` URL, if it has not been released
    pub fn resolve(&self, url: &str) -> Option<Arc<[u8]>> {
        let id = url.strip_prefix(URL_PREFIX)?.parse::<u64>().ok()?;
        self.lock().buffers.get(&id).cloned()
    }

    fn release(&self, id: u64) {
        self.lock().buffers.remove(&id);
    }
}

/// Ephemeral reference to translated bytes; releases them when dropped
pub struct DownloadHandle {
    id: u64,
    url: String,
    filename: String,
    store: DownloadStore,
}

impl DownloadHandle {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Suggested save-as name, `translated_<original>`
    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn bytes(&self) -> Arc<[u8]> {
        // A live handle always has its buffer registered
        self.store.resolve(&self.url).unwrap_or_else(|| Arc::from(Vec::new()))
    }

    /// Write the bytes to `dir/<filename>` and return the full path
    pub fn save_in(&self, dir: &Path) -> std::io::Result<std::path::PathBuf> {
        let path = dir.join(&self.filename);
        std::fs::write(&path, self.bytes())?;
        Ok(path)
    }

    pub fn save_as(&self, path: &Path) -> std::io::Result<()> {
        std::fs::write(path, self.bytes())
    }
}

impl Drop for DownloadHandle {
    fn drop(&mut self) {
        self.store.release(self.id);
    }
}

impl PartialEq for DownloadHandle {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && Arc::ptr_eq(&self.store.inner, &other.store.inner)
    }
}

impl std::fmt::Debug for DownloadHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DownloadHandle")
            .field("id", &self.id)
            .field("url", &self.url)
            .field("filename", &self.filename)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_and_resolve() {
        let store = DownloadStore::new();
        let handle = store.create(b"Halo dunia".to_vec(), "translated_report.txt");

        assert_eq!(handle.filename(), "translated_report.txt");
        assert!(handle.url().starts_with("blob:"));
        assert_eq!(&*handle.bytes(), b"Halo dunia");
        assert_eq!(&*store.resolve(handle.url()).unwrap(), b"Halo dunia");
    }

    #[test]
    fn test_drop_releases_buffer() {
        let store = DownloadStore::new();
        let handle = store.create(b"x".to_vec(), "f.txt");
        let (id, url) = (handle.id(), handle.url().to_string());
        assert!(store.is_live(id));

        drop(handle);
        assert!(!store.is_live(id));
        assert!(store.resolve(&url).is_none());
        assert_eq!(store.live_count(), 0);
    }

    #[test]
    fn test_handles_are_distinct() {
        let store = DownloadStore::new();
        let first = store.create(b"a".to_vec(), "a.txt");
        let second = store.create(b"b".to_vec(), "b.txt");
        assert_ne!(first, second);
        assert_ne!(first.url(), second.url());
        assert_eq!(store.live_count(), 2);
    }

    #[test]
    fn test_resolve_rejects_foreign_urls() {
        let store = DownloadStore::new();
        assert!(store.resolve("https://example.com/1").is_none());
        assert!(store.resolve("blob:lumina-translate/not-a-number").is_none());
    }

    #[test]
    fn test_save_in_directory() {
        let store = DownloadStore::new();
        let handle = store.create(b"Halo dunia".to_vec(), "translated_lumina_test.txt");
        let dir = std::env::temp_dir();

        let path = handle.save_in(&dir).unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"Halo dunia");
        let _ = std::fs::remove_file(path);
    }
}

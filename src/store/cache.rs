//! Process-wide read cache for the loaded table pair.
//!
//! Reads within the freshness window reuse the cached tables; every save
//! and logout invalidates explicitly. The cache is keyed by workbook path
//! so overriding `--book` never serves another file's rows.

use crate::models::assignment::Assignment;
use crate::models::credential::Credential;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{Duration, Instant};

struct Entry {
    path: PathBuf,
    loaded_at: Instant,
    assignments: Vec<Assignment>,
    users: Vec<Credential>,
}

static CACHE: Mutex<Option<Entry>> = Mutex::new(None);

pub fn get(path: &Path, ttl: Duration) -> Option<(Vec<Assignment>, Vec<Credential>)> {
    let guard = CACHE.lock().ok()?;
    let entry = guard.as_ref()?;
    if entry.path != path || entry.loaded_at.elapsed() > ttl {
        return None;
    }
    Some((entry.assignments.clone(), entry.users.clone()))
}

pub fn put(path: &Path, assignments: &[Assignment], users: &[Credential]) {
    if let Ok(mut guard) = CACHE.lock() {
        *guard = Some(Entry {
            path: path.to_path_buf(),
            loaded_at: Instant::now(),
            assignments: assignments.to_vec(),
            users: users.to_vec(),
        });
    }
}

pub fn invalidate() {
    if let Ok(mut guard) = CACHE.lock() {
        *guard = None;
    }
}

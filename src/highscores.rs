//! Persistent high-score store
//!
//! One number survives between runs: the best score in seconds. The
//! store must tolerate a missing or corrupt value (treated as 0) and is
//! written at most once per session end.

use std::path::PathBuf;

/// Read/write access to the persisted best score
pub trait ScoreStore {
    /// Best prior score in seconds; 0 when absent or unparseable
    fn read(&self) -> f64;
    /// Persist a new best score
    fn write(&mut self, score: f64);
}

/// File-backed store: a plain decimal string in the user's home directory
#[derive(Debug, Clone)]
pub struct FileScoreStore {
    path: PathBuf,
}

impl FileScoreStore {
    /// Default location: `$HOME/.turret_rush_score`
    pub fn default_path() -> PathBuf {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        PathBuf::from(home).join(".turret_rush_score")
    }

    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl Default for FileScoreStore {
    fn default() -> Self {
        Self::new(Self::default_path())
    }
}

impl ScoreStore for FileScoreStore {
    fn read(&self) -> f64 {
        std::fs::read_to_string(&self.path)
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(0.0)
    }

    fn write(&mut self, score: f64) {
        if let Err(e) = std::fs::write(&self.path, score.to_string()) {
            log::warn!("Failed to save high score to {}: {}", self.path.display(), e);
        } else {
            log::info!("High score saved: {:.1}s", score);
        }
    }
}

/// In-memory store for tests and score-less runs
#[derive(Debug, Clone, Default)]
pub struct MemoryScoreStore {
    best: f64,
    /// Number of times `write` was called (used to verify
    /// at-most-once-per-session persistence)
    pub writes: u32,
}

impl MemoryScoreStore {
    pub fn with_best(best: f64) -> Self {
        Self { best, writes: 0 }
    }
}

impl ScoreStore for MemoryScoreStore {
    fn read(&self) -> f64 {
        self.best
    }

    fn write(&mut self, score: f64) {
        self.best = score;
        self.writes += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_reads_zero() {
        let store = FileScoreStore::new(PathBuf::from("/nonexistent/score"));
        assert_eq!(store.read(), 0.0);
    }

    #[test]
    fn corrupt_contents_read_zero() {
        let dir = std::env::temp_dir();
        let path = dir.join("turret_rush_corrupt_score_test");
        std::fs::write(&path, "not a number").unwrap();
        let store = FileScoreStore::new(path.clone());
        assert_eq!(store.read(), 0.0);
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn round_trip() {
        let dir = std::env::temp_dir();
        let path = dir.join("turret_rush_score_round_trip");
        let mut store = FileScoreStore::new(path.clone());
        store.write(42.5);
        assert_eq!(store.read(), 42.5);
        let _ = std::fs::remove_file(path);
    }
}

//! High score persistence
//!
//! A single best score, persisted to LocalStorage as a small versioned
//! JSON envelope. Earlier builds stored a bare integer string; loading
//! still tolerates that shape.

use serde::{Deserialize, Serialize};

/// The persisted best score
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct HighScore {
    /// Envelope version for future migrations
    #[serde(default = "HighScore::current_version")]
    pub version: u32,
    pub best: u64,
}

impl HighScore {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "schuss_highscore";

    const VERSION: u32 = 1;

    fn current_version() -> u32 {
        Self::VERSION
    }

    pub fn new() -> Self {
        Self {
            version: Self::VERSION,
            best: 0,
        }
    }

    /// True if `score` beats the stored best
    pub fn qualifies(&self, score: u64) -> bool {
        score > self.best
    }

    /// Record `score` if it qualifies; returns whether it did
    pub fn record(&mut self, score: u64) -> bool {
        if !self.qualifies(score) {
            return false;
        }
        self.best = score;
        true
    }

    /// Load the high score from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(raw)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(score) = serde_json::from_str::<HighScore>(&raw) {
                    log::info!("Loaded high score: {}", score.best);
                    return score;
                }
                // Legacy bare-integer format
                if let Ok(best) = raw.trim().parse::<u64>() {
                    log::info!("Migrated legacy high score: {}", best);
                    return Self {
                        version: Self::VERSION,
                        best,
                    };
                }
            }
        }

        log::info!("No high score found, starting fresh");
        Self::new()
    }

    /// Save the high score to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("High score saved: {}", self.best);
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::new()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_keeps_the_best() {
        let mut hs = HighScore::new();
        assert!(hs.record(100));
        assert!(!hs.record(50));
        assert!(!hs.record(100));
        assert!(hs.record(101));
        assert_eq!(hs.best, 101);
    }

    #[test]
    fn test_zero_never_qualifies_on_fresh_board() {
        let hs = HighScore::new();
        assert!(!hs.qualifies(0));
    }

    #[test]
    fn test_envelope_roundtrip() {
        let hs = HighScore {
            version: 1,
            best: 4242,
        };
        let json = serde_json::to_string(&hs).unwrap();
        let back: HighScore = serde_json::from_str(&json).unwrap();
        assert_eq!(back, hs);
    }

    #[test]
    fn test_envelope_without_version_defaults() {
        let back: HighScore = serde_json::from_str(r#"{"best":7}"#).unwrap();
        assert_eq!(back.best, 7);
        assert_eq!(back.version, 1);
    }
}

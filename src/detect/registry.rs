//! Name-keyed registry of shared detectors, used by the CLI to pick one.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::detect::{Detector, Lines, Whitespace};

/// Shared, thread-safe handle to a registered detector.
pub type SharedDetector = Arc<dyn Detector + Send + Sync>;

/// Metadata describing a registered detector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectorInfo {
    /// Key the detector is registered under.
    pub name: String,
    /// One-line summary shown by `segment detectors`.
    pub description: String,
}

struct DetectorEntry {
    detector: SharedDetector,
    description: String,
}

impl fmt::Debug for DetectorEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DetectorEntry")
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

/// Registry mapping names to available detectors.
#[derive(Debug, Default)]
pub struct DetectorRegistry {
    entries: HashMap<String, DetectorEntry>,
}

impl DetectorRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Registry preloaded with the reference detectors.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(
            "whitespace",
            "Runs of non-whitespace characters (UTF-8).",
            Whitespace,
        );
        registry.register("lines", "Non-empty lines without terminators.", Lines);
        registry
    }

    /// Register a detector under `name`, replacing any previous entry, and
    /// return a shared handle to it.
    pub fn register<D>(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        detector: D,
    ) -> SharedDetector
    where
        D: Detector + Send + Sync + 'static,
    {
        let shared: SharedDetector = Arc::new(detector);
        let name = name.into();
        tracing::debug!(detector = %name, "registering detector");
        self.entries.insert(
            name,
            DetectorEntry {
                detector: Arc::clone(&shared),
                description: description.into(),
            },
        );
        shared
    }

    /// Retrieve a detector by name.
    pub fn get(&self, name: &str) -> Option<SharedDetector> {
        self.entries
            .get(name)
            .map(|entry| Arc::clone(&entry.detector))
    }

    /// List all registered detectors, sorted by name.
    pub fn list(&self) -> Vec<DetectorInfo> {
        let mut infos: Vec<_> = self
            .entries
            .iter()
            .map(|(name, entry)| DetectorInfo {
                name: name.clone(),
                description: entry.description.clone(),
            })
            .collect();
        infos.sort_by(|a, b| a.name.cmp(&b.name));
        infos
    }
}

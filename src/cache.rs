use std::{collections::HashMap, sync::Arc};

use crate::analysis::EncroachmentAnalysis;

/// Cache key for one analysis request. The buffer distance is keyed in
/// whole millimetres so the key stays `Eq + Hash` without comparing floats.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AnalysisKey {
    place: String,
    road_name: String,
    buffer_distance_mm: u64,
}

impl AnalysisKey {
    pub fn new(
        place: impl Into<String>,
        road_name: impl Into<String>,
        buffer_distance_m: f64,
    ) -> Self {
        Self {
            place: place.into(),
            road_name: road_name.into(),
            buffer_distance_mm: (buffer_distance_m * 1000.0).round() as u64,
        }
    }
}

/// Caller-owned memo of finished analyses.
///
/// The pipeline itself is pure and cache-agnostic. A caller that re-requests
/// the same (place, road, buffer distance) owns this map and its lifetime;
/// there is no process-wide hidden state.
#[derive(Debug, Default)]
pub struct AnalysisCache {
    entries: HashMap<AnalysisKey, Arc<EncroachmentAnalysis>>,
}

impl AnalysisCache {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline] pub fn len(&self) -> usize { self.entries.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    pub fn get(&self, key: &AnalysisKey) -> Option<Arc<EncroachmentAnalysis>> {
        self.entries.get(key).cloned()
    }

    pub fn insert(
        &mut self,
        key: AnalysisKey,
        analysis: EncroachmentAnalysis,
    ) -> Arc<EncroachmentAnalysis> {
        let entry = Arc::new(analysis);
        self.entries.insert(key, Arc::clone(&entry));
        entry
    }

    /// Fetch, or run `compute` and remember its result. Errors are not
    /// cached; a failed computation leaves the entry absent.
    pub fn get_or_insert_with<E>(
        &mut self,
        key: AnalysisKey,
        compute: impl FnOnce() -> Result<EncroachmentAnalysis, E>,
    ) -> Result<Arc<EncroachmentAnalysis>, E> {
        if let Some(hit) = self.get(&key) {
            return Ok(hit);
        }
        Ok(self.insert(key, compute()?))
    }
}

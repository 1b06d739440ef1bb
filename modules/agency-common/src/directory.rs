use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::{info, warn};

use crate::error::AgencyError;
use crate::slug::slugify;
use crate::types::{ClientDataset, ClientRecord};

/// Linear reference lookup: first record (in dataset order) whose normalized
/// name equals `slug`. Normalizes every record on every call.
pub fn resolve_by_slug<'a>(records: &'a [ClientRecord], slug: &str) -> Option<&'a ClientRecord> {
    records.iter().find(|r| slugify(&r.name) == slug)
}

/// One slug per record, in dataset order. Colliding slugs appear once per record.
pub fn enumerate_slugs(records: &[ClientRecord]) -> Vec<String> {
    records.iter().map(|r| slugify(&r.name)).collect()
}

/// A slug claimed by more than one record. Only `ids[0]` is reachable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlugCollision {
    pub slug: String,
    pub ids: Vec<i64>,
}

/// Immutable, process-lifetime view over the client dataset.
///
/// Built once at startup and shared read-only. Slug lookups go through a
/// precomputed map that keeps the first record for each slug, so results match
/// [`resolve_by_slug`] exactly.
#[derive(Debug, Clone, Default)]
pub struct ClientDirectory {
    records: Vec<ClientRecord>,
    by_slug: HashMap<String, usize>,
}

impl ClientDirectory {
    pub fn new(records: Vec<ClientRecord>) -> Self {
        let mut by_slug = HashMap::with_capacity(records.len());
        for (idx, record) in records.iter().enumerate() {
            by_slug.entry(record.slug()).or_insert(idx);
        }
        Self { records, by_slug }
    }

    pub fn from_json_str(json: &str) -> Result<Self, AgencyError> {
        let dataset: ClientDataset = serde_json::from_str(json)?;
        Ok(Self::new(dataset.data))
    }

    /// Read and parse the dataset file. Logs any slug collisions so the
    /// dataset can be fixed upstream.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, AgencyError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| AgencyError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let directory = Self::from_json_str(&raw)?;

        for collision in directory.collisions() {
            warn!(
                slug = %collision.slug,
                ids = ?collision.ids,
                "Client names share a slug; only the first record is reachable"
            );
        }
        info!(clients = directory.len(), path = %path.display(), "Loaded client directory");

        Ok(directory)
    }

    pub fn records(&self) -> &[ClientRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record whose normalized name equals `slug`; `None` is an ordinary miss.
    pub fn resolve(&self, slug: &str) -> Option<&ClientRecord> {
        self.by_slug.get(slug).map(|&idx| &self.records[idx])
    }

    pub fn enumerate_slugs(&self) -> Vec<String> {
        enumerate_slugs(&self.records)
    }

    /// Slugs shared by two or more records, in order of first appearance.
    pub fn collisions(&self) -> Vec<SlugCollision> {
        let mut order: Vec<String> = Vec::new();
        let mut groups: HashMap<String, Vec<i64>> = HashMap::new();
        for record in &self.records {
            let slug = record.slug();
            let ids = groups.entry(slug.clone()).or_default();
            if ids.is_empty() {
                order.push(slug);
            }
            ids.push(record.id);
        }

        order
            .into_iter()
            .filter_map(|slug| {
                let ids = groups.remove(&slug)?;
                (ids.len() > 1).then_some(SlugCollision { slug, ids })
            })
            .collect()
    }
}

//! In-process publications store with the same ordering and id rules as SQLite.

use crate::error::AppError;
use crate::publication::{NewPublication, PublicationFile, PublicationSummary};
use crate::repository::PublicationRepository;
use async_trait::async_trait;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

#[derive(Default)]
struct Inner {
    last_id: i64,
    rows: BTreeMap<i64, NewPublication>,
}

#[derive(Clone, Default)]
pub struct InMemoryPublicationRepository {
    inner: Arc<RwLock<Inner>>,
}

impl InMemoryPublicationRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a row with arbitrary (possibly empty) content, bypassing upload validation.
    pub fn insert_raw(&self, publication: NewPublication) -> i64 {
        let mut inner = self.write();
        inner.last_id += 1;
        let id = inner.last_id;
        inner.rows.insert(id, publication);
        id
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(|e| e.into_inner())
    }
}

fn summary(id: i64, p: &NewPublication) -> PublicationSummary {
    PublicationSummary {
        id,
        title: p.title.clone(),
        date: p.date.clone(),
        summary: p.summary.clone(),
        filename: Some(p.filename.clone()),
    }
}

/// Dated rows before undated ones, later dates first, then higher ids first.
fn list_order(a: &PublicationSummary, b: &PublicationSummary) -> Ordering {
    match (&a.date, &b.date) {
        (Some(x), Some(y)) => y.cmp(x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
    .then_with(|| b.id.cmp(&a.id))
}

#[async_trait]
impl PublicationRepository for InMemoryPublicationRepository {
    async fn list(&self) -> Result<Vec<PublicationSummary>, AppError> {
        let mut rows: Vec<PublicationSummary> =
            self.read().rows.iter().map(|(id, p)| summary(*id, p)).collect();
        rows.sort_by(list_order);
        Ok(rows)
    }

    async fn get(&self, id: i64) -> Result<Option<PublicationSummary>, AppError> {
        Ok(self.read().rows.get(&id).map(|p| summary(id, p)))
    }

    async fn file(&self, id: i64) -> Result<Option<PublicationFile>, AppError> {
        Ok(self.read().rows.get(&id).map(|p| PublicationFile {
            filename: Some(p.filename.clone()),
            content: Some(p.content.clone()),
        }))
    }

    async fn create(&self, publication: NewPublication) -> Result<i64, AppError> {
        Ok(self.insert_raw(publication))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        Ok(self.write().rows.remove(&id).is_some())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

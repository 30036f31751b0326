//! Application state shared across handlers

use sqlx::PgPool;
use std::sync::Arc;

use crate::db::{CategoryRepo, QuestionRepo};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    pool: PgPool,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        Self {
            inner: Arc::new(AppStateInner { pool }),
        }
    }

    pub fn pool(&self) -> &PgPool {
        &self.inner.pool
    }

    /// Question repository bound to the shared pool.
    pub fn questions(&self) -> QuestionRepo<'_> {
        QuestionRepo::new(&self.inner.pool)
    }

    /// Category repository bound to the shared pool.
    pub fn categories(&self) -> CategoryRepo<'_> {
        CategoryRepo::new(&self.inner.pool)
    }
}

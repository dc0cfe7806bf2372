use anyhow::Result;
use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::{debug, info};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::cover_letter::StoredCoverLetter;
use crate::models::resume::{ResumeRow, StoredResume};

/// Creates and returns a PostgreSQL connection pool.
pub async fn create_pool(database_url: &str) -> Result<PgPool> {
    info!("Connecting to PostgreSQL...");

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await?;

    info!("PostgreSQL connection pool established");
    Ok(pool)
}

/// Read access to stored documents, always scoped to their owner.
///
/// `Ok(None)` covers both "no such id" and "not yours".
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn fetch_resume(&self, id: Uuid, owner: Uuid) -> Result<Option<StoredResume>, AppError>;

    async fn fetch_cover_letter(
        &self,
        id: Uuid,
        owner: Uuid,
    ) -> Result<Option<StoredCoverLetter>, AppError>;
}

#[derive(Clone)]
pub struct PgDocumentStore {
    pool: PgPool,
}

impl PgDocumentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const RESUME_QUERY: &str = r#"
SELECT r.id, r.user_id, r.title, r.template_key, r.schema_version, r.data,
       EXISTS (
           SELECT 1 FROM subscriptions s
           WHERE s.user_id = r.user_id
             AND s.status = 'active'
             AND (s.current_period_end IS NULL OR s.current_period_end > NOW())
       ) AS owner_has_premium,
       r.created_at, r.updated_at
FROM resumes r
WHERE r.id = $1 AND r.user_id = $2
"#;

const COVER_LETTER_QUERY: &str = r#"
SELECT id, user_id, title, job_title, company_name, content, created_at, updated_at
FROM cover_letters
WHERE id = $1 AND user_id = $2
"#;

#[async_trait]
impl DocumentStore for PgDocumentStore {
    async fn fetch_resume(&self, id: Uuid, owner: Uuid) -> Result<Option<StoredResume>, AppError> {
        let row = sqlx::query_as::<_, ResumeRow>(RESUME_QUERY)
            .bind(id)
            .bind(owner)
            .fetch_optional(&self.pool)
            .await?;

        debug!("Resume {id} lookup for {owner}: found={}", row.is_some());
        row.map(StoredResume::try_from).transpose()
    }

    async fn fetch_cover_letter(
        &self,
        id: Uuid,
        owner: Uuid,
    ) -> Result<Option<StoredCoverLetter>, AppError> {
        let letter = sqlx::query_as::<_, StoredCoverLetter>(COVER_LETTER_QUERY)
            .bind(id)
            .bind(owner)
            .fetch_optional(&self.pool)
            .await?;
        Ok(letter)
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A cover letter is a single free-form content blob; its structure is
/// inferred at render time.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct StoredCoverLetter {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub job_title: Option<String>,
    pub company_name: Option<String>,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl StoredCoverLetter {
    /// Name used for the exported file: the targeted job title when present,
    /// otherwise the letter's own title.
    pub fn export_title(&self) -> String {
        match (self.job_title.as_deref(), self.company_name.as_deref()) {
            (Some(job), Some(company)) if !job.trim().is_empty() && !company.trim().is_empty() => {
                format!("{} {}", job.trim(), company.trim())
            }
            (Some(job), _) if !job.trim().is_empty() => job.trim().to_string(),
            _ => self.title.clone(),
        }
    }
}

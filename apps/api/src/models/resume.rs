use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

use crate::customization::CustomizationOverride;
use crate::errors::AppError;

/// The only resume data schema this service understands.
pub const CURRENT_SCHEMA_VERSION: i16 = 1;

// ────────────────────────────────────────────────────────────────────────────
// Typed resume record (schema version 1)
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub linked_in: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    /// Profile photo as a `data:image/...` URI.
    #[serde(default)]
    pub photo: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkExperience {
    pub company: String,
    pub position: String,
    #[serde(default)]
    pub location: Option<String>,
    pub start_date: String,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub current: bool,
    #[serde(default)]
    pub description: Vec<String>,
}

impl WorkExperience {
    /// `current` wins over any stored end date.
    pub fn effective_end(&self) -> Option<&str> {
        if self.current {
            Some("Present")
        } else {
            self.end_date
                .as_deref()
                .map(str::trim)
                .filter(|end| !end.is_empty())
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub institution: String,
    pub degree: String,
    #[serde(default)]
    pub field: Option<String>,
    #[serde(default)]
    pub gpa: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillGroup {
    pub category: String,
    #[serde(default)]
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certification {
    pub name: String,
    pub issuer: String,
    pub date: String,
    #[serde(default)]
    pub expiry_date: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageSkill {
    pub language: String,
    pub proficiency: String,
}

/// Structured career data as the renderer consumes it.
///
/// Every collection may be empty; the renderer drops the matching section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeRecord {
    pub personal_info: PersonalInfo,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub work_experience: Vec<WorkExperience>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub skills: Vec<SkillGroup>,
    #[serde(default)]
    pub certifications: Vec<Certification>,
    #[serde(default)]
    pub languages: Vec<LanguageSkill>,
    #[serde(default)]
    pub customization: Option<CustomizationOverride>,
}

// ────────────────────────────────────────────────────────────────────────────
// Stored rows
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ResumeRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub template_key: String,
    pub schema_version: i16,
    pub data: Value,
    pub owner_has_premium: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A resume row whose JSON blob has been validated into a typed record.
#[derive(Debug, Clone)]
pub struct StoredResume {
    pub id: Uuid,
    pub owner: Uuid,
    pub title: String,
    pub template_key: String,
    pub owner_has_premium: bool,
    pub record: ResumeRecord,
}

impl TryFrom<ResumeRow> for StoredResume {
    type Error = AppError;

    fn try_from(row: ResumeRow) -> Result<Self, Self::Error> {
        let record = decode_record(row.schema_version, row.data)?;
        Ok(StoredResume {
            id: row.id,
            owner: row.user_id,
            title: row.title,
            template_key: row.template_key,
            owner_has_premium: row.owner_has_premium,
            record,
        })
    }
}

/// Decodes a stored resume blob according to its schema version.
pub fn decode_record(schema_version: i16, data: Value) -> Result<ResumeRecord, AppError> {
    match schema_version {
        CURRENT_SCHEMA_VERSION => serde_json::from_value(data)
            .map_err(|e| AppError::Validation(format!("Malformed resume data: {e}"))),
        other => Err(AppError::Validation(format!(
            "Unsupported resume schema version {other}"
        ))),
    }
}

use axum::{
    extract::{Path, Query, State},
    response::Response,
    Json,
};
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::export::artifact::html_response;
use crate::export::ExportArtifact;
use crate::models::cover_letter::StoredCoverLetter;
use crate::models::resume::{ResumeRecord, StoredResume};
use crate::pagination::ExportMode;
use crate::render::{render_cover_letter_to_html, render_resume_to_html, RenderedDocument};
use crate::state::AppState;
use crate::templates::{get_template_style_or_default, DEFAULT_TEMPLATE_KEY, TemplateDefinition};

#[derive(Deserialize)]
pub struct UserIdQuery {
    pub user_id: Uuid,
}

#[derive(Deserialize)]
pub struct ExportQuery {
    pub user_id: Uuid,
    pub mode: Option<String>,
}

impl ExportQuery {
    fn mode(&self) -> Result<ExportMode, AppError> {
        self.mode
            .as_deref()
            .unwrap_or_default()
            .parse()
            .map_err(AppError::Validation)
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewRequest {
    pub record: ResumeRecord,
    pub template_key: Option<String>,
}

/// POST /api/v1/preview
///
/// Renders an unsaved record. No entitlement check: nothing is exported.
pub async fn handle_preview_record(Json(req): Json<PreviewRequest>) -> Response {
    let key = req.template_key.as_deref().unwrap_or(DEFAULT_TEMPLATE_KEY);
    let template = get_template_style_or_default(key);
    html_response(&render_resume_to_html(&req.record, template))
}

/// GET /api/v1/resumes/:id/preview
pub async fn handle_resume_preview(
    State(state): State<AppState>,
    Path(resume_id): Path<Uuid>,
    Query(params): Query<UserIdQuery>,
) -> Result<Response, AppError> {
    let resume = load_resume(&state, resume_id, params.user_id).await?;
    let document = render_resume_to_html(&resume.record, entitled_template(&resume)?);
    Ok(html_response(&document))
}

/// GET /api/v1/resumes/:id/export
///
/// PDF when the browser or external stage succeeds, otherwise the HTML document.
pub async fn handle_resume_export(
    State(state): State<AppState>,
    Path(resume_id): Path<Uuid>,
    Query(params): Query<ExportQuery>,
) -> Result<ExportArtifact, AppError> {
    let mode = params.mode()?;
    let resume = load_resume(&state, resume_id, params.user_id).await?;
    let template = entitled_template(&resume)?;

    info!(
        "Exporting resume {resume_id} with template '{}' (mode={mode})",
        template.key
    );
    let document = render_resume_to_html(&resume.record, template);
    let output = state.exporter.export(&document, mode).await?;
    Ok(ExportArtifact::from_output(output, &resume.title, "resume", mode))
}

/// GET /api/v1/cover-letters/:id/preview
pub async fn handle_cover_letter_preview(
    State(state): State<AppState>,
    Path(letter_id): Path<Uuid>,
    Query(params): Query<UserIdQuery>,
) -> Result<Response, AppError> {
    let letter = load_cover_letter(&state, letter_id, params.user_id).await?;
    Ok(html_response(&render_cover_letter_to_html(&letter.content)))
}

/// GET /api/v1/cover-letters/:id/export
pub async fn handle_cover_letter_export(
    State(state): State<AppState>,
    Path(letter_id): Path<Uuid>,
    Query(params): Query<ExportQuery>,
) -> Result<ExportArtifact, AppError> {
    let mode = params.mode()?;
    let letter = load_cover_letter(&state, letter_id, params.user_id).await?;
    if letter.content.trim().is_empty() {
        return Err(AppError::Validation(format!(
            "Cover letter {letter_id} has no content to export"
        )));
    }

    info!("Exporting cover letter {letter_id} (mode={mode})");
    let document: RenderedDocument = render_cover_letter_to_html(&letter.content);
    let output = state.exporter.export(&document, mode).await?;
    Ok(ExportArtifact::from_output(
        output,
        &letter.export_title(),
        "cover-letter",
        mode,
    ))
}

async fn load_resume(state: &AppState, id: Uuid, owner: Uuid) -> Result<StoredResume, AppError> {
    state
        .store
        .fetch_resume(id, owner)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Resume {id} not found")))
}

async fn load_cover_letter(
    state: &AppState,
    id: Uuid,
    owner: Uuid,
) -> Result<StoredCoverLetter, AppError> {
    state
        .store
        .fetch_cover_letter(id, owner)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Cover letter {id} not found")))
}

/// The stored template, provided the owner may use it.
fn entitled_template(resume: &StoredResume) -> Result<&'static TemplateDefinition, AppError> {
    let template = get_template_style_or_default(&resume.template_key);
    if template.is_premium && !resume.owner_has_premium {
        return Err(AppError::PaymentRequired(format!(
            "The '{}' template requires a premium subscription",
            template.name
        )));
    }
    Ok(template)
}

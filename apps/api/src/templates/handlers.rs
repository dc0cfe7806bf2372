use axum::{extract::Query, Json};
use serde::Deserialize;

use crate::errors::AppError;
use crate::templates::{get_all_template_styles, get_templates_by_category, TemplateCategory, TemplateSummary};

#[derive(Deserialize)]
pub struct TemplateListQuery {
    pub category: Option<String>,
}

/// GET /api/v1/templates
pub async fn handle_list_templates(
    Query(params): Query<TemplateListQuery>,
) -> Result<Json<Vec<TemplateSummary>>, AppError> {
    let summaries = match params.category.as_deref().filter(|c| !c.trim().is_empty()) {
        Some(raw) => {
            let category: TemplateCategory = raw.parse().map_err(AppError::Validation)?;
            get_templates_by_category(category)
                .into_iter()
                .map(|t| t.summary())
                .collect()
        }
        None => get_all_template_styles().iter().map(|t| t.summary()).collect(),
    };
    Ok(Json(summaries))
}

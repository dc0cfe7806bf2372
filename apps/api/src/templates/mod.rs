//! Template style registry: a closed catalog of named resume styles.
//!
//! Each definition pairs a deterministic CSS-producing function with two
//! capability flags. The catalog is built once and never mutated, so lookups
//! from concurrent export requests need no synchronisation.
//!
//! Template CSS shares its class-name vocabulary with the renderer
//! (`.resume-header`, `.section-title`, `.experience-position`, `.photo-img`, ...)
//! and reads user customization through CSS custom properties with literal
//! fallbacks, e.g. `var(--primary-color, #2563eb)`.

pub mod handlers;

mod classic;
mod creative;
mod modern;
mod premium;

use std::collections::HashMap;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Key of the style used when a requested template is unknown.
pub const DEFAULT_TEMPLATE_KEY: &str = "modern";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateCategory {
    Modern,
    Classic,
    Creative,
    Premium,
}

impl std::str::FromStr for TemplateCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "modern" => Ok(TemplateCategory::Modern),
            "classic" => Ok(TemplateCategory::Classic),
            "creative" => Ok(TemplateCategory::Creative),
            "premium" => Ok(TemplateCategory::Premium),
            other => Err(format!("Unknown template category '{other}'")),
        }
    }
}

/// A named style definition. Identity is the `key`.
#[derive(Debug, Clone, Copy)]
pub struct TemplateDefinition {
    pub key: &'static str,
    pub name: &'static str,
    pub category: TemplateCategory,
    pub supports_photo: bool,
    pub is_premium: bool,
    pub style_fn: fn() -> String,
}

impl TemplateDefinition {
    pub fn css(&self) -> String {
        (self.style_fn)()
    }

    pub fn summary(&self) -> TemplateSummary {
        TemplateSummary {
            key: self.key,
            name: self.name,
            category: self.category,
            supports_photo: self.supports_photo,
            is_premium: self.is_premium,
        }
    }
}

/// Serializable template metadata, without the style function.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateSummary {
    pub key: &'static str,
    pub name: &'static str,
    pub category: TemplateCategory,
    pub supports_photo: bool,
    pub is_premium: bool,
}

static CATALOG: &[TemplateDefinition] = &[
    TemplateDefinition {
        key: "modern",
        name: "Modern",
        category: TemplateCategory::Modern,
        supports_photo: true,
        is_premium: false,
        style_fn: modern::modern_style,
    },
    TemplateDefinition {
        key: "minimalist",
        name: "Minimalist",
        category: TemplateCategory::Modern,
        supports_photo: false,
        is_premium: false,
        style_fn: modern::minimalist_style,
    },
    TemplateDefinition {
        key: "tech",
        name: "Tech",
        category: TemplateCategory::Modern,
        supports_photo: false,
        is_premium: false,
        style_fn: modern::tech_style,
    },
    TemplateDefinition {
        key: "classic",
        name: "Classic",
        category: TemplateCategory::Classic,
        supports_photo: false,
        is_premium: false,
        style_fn: classic::classic_style,
    },
    TemplateDefinition {
        key: "professional",
        name: "Professional",
        category: TemplateCategory::Classic,
        supports_photo: true,
        is_premium: false,
        style_fn: classic::professional_style,
    },
    TemplateDefinition {
        key: "academic",
        name: "Academic",
        category: TemplateCategory::Classic,
        supports_photo: false,
        is_premium: false,
        style_fn: classic::academic_style,
    },
    TemplateDefinition {
        key: "creative",
        name: "Creative",
        category: TemplateCategory::Creative,
        supports_photo: true,
        is_premium: false,
        style_fn: creative::creative_style,
    },
    TemplateDefinition {
        key: "bold",
        name: "Bold",
        category: TemplateCategory::Creative,
        supports_photo: true,
        is_premium: true,
        style_fn: creative::bold_style,
    },
    TemplateDefinition {
        key: "executive",
        name: "Executive",
        category: TemplateCategory::Premium,
        supports_photo: true,
        is_premium: true,
        style_fn: premium::executive_style,
    },
    TemplateDefinition {
        key: "elegant",
        name: "Elegant",
        category: TemplateCategory::Premium,
        supports_photo: true,
        is_premium: true,
        style_fn: premium::elegant_style,
    },
];

lazy_static! {
    static ref REGISTRY: HashMap<&'static str, &'static TemplateDefinition> =
        CATALOG.iter().map(|t| (t.key, t)).collect();
}

/// Looks up a template by key. Unknown keys yield `None`.
pub fn get_template_style(key: &str) -> Option<&'static TemplateDefinition> {
    REGISTRY.get(key).copied()
}

/// Looks up a template by key, falling back to the default style.
pub fn get_template_style_or_default(key: &str) -> &'static TemplateDefinition {
    match get_template_style(key) {
        Some(template) => template,
        None => {
            warn!("Unknown template '{key}', falling back to '{DEFAULT_TEMPLATE_KEY}'");
            default_template()
        }
    }
}

pub fn default_template() -> &'static TemplateDefinition {
    // The default key is part of CATALOG.
    CATALOG
        .iter()
        .find(|t| t.key == DEFAULT_TEMPLATE_KEY)
        .unwrap_or(&CATALOG[0])
}

/// All templates in catalog order.
pub fn get_all_template_styles() -> &'static [TemplateDefinition] {
    CATALOG
}

pub fn get_templates_by_category(category: TemplateCategory) -> Vec<&'static TemplateDefinition> {
    CATALOG.iter().filter(|t| t.category == category).collect()
}

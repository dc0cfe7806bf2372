//! Customization model: user-tunable style parameters layered over a template.
//!
//! A partial `CustomizationOverride` is shallow-merged over a full base
//! `Customization`. Every field is independently overridable; an unset or
//! unusable override value falls back to the base value, never to empty.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
    None,
}

impl BorderStyle {
    pub fn as_css(self) -> &'static str {
        match self {
            BorderStyle::Solid => "solid",
            BorderStyle::Dashed => "dashed",
            BorderStyle::Dotted => "dotted",
            BorderStyle::None => "none",
        }
    }
}

/// A fully-populated set of style parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customization {
    pub primary_color: String,
    pub secondary_color: String,
    pub text_color: String,
    pub background_color: String,
    pub font_family: String,
    pub heading_font: String,
    /// Body font size in points.
    pub font_size: f32,
    /// Vertical gap between sections in pixels.
    pub section_spacing: f32,
    /// Line-height multiplier.
    pub line_height: f32,
    pub border_style: BorderStyle,
    pub border_width: f32,
    pub border_radius: f32,
}

impl Default for Customization {
    fn default() -> Self {
        Customization {
            primary_color: "#2563eb".to_string(),
            secondary_color: "#1e40af".to_string(),
            text_color: "#1f2937".to_string(),
            background_color: "#ffffff".to_string(),
            font_family: "'Inter', 'Helvetica Neue', Arial, sans-serif".to_string(),
            heading_font: "'Inter', 'Helvetica Neue', Arial, sans-serif".to_string(),
            font_size: 11.0,
            section_spacing: 24.0,
            line_height: 1.5,
            border_style: BorderStyle::Solid,
            border_width: 2.0,
            border_radius: 4.0,
        }
    }
}

/// A partial customization as stored on a resume record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomizationOverride {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading_font: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section_spacing: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_height: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_style: Option<BorderStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_width: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<f32>,
}

// Accepted numeric ranges. Values outside fall back to the base.
const FONT_SIZE_RANGE: (f32, f32) = (6.0, 24.0);
const SECTION_SPACING_RANGE: (f32, f32) = (0.0, 96.0);
const LINE_HEIGHT_RANGE: (f32, f32) = (0.8, 3.0);
const BORDER_WIDTH_RANGE: (f32, f32) = (0.0, 12.0);
const BORDER_RADIUS_RANGE: (f32, f32) = (0.0, 48.0);

impl Customization {
    /// Field-wise overlay of `over` onto `base`.
    pub fn merge(base: &Customization, over: &CustomizationOverride) -> Customization {
        Customization {
            primary_color: css_token(&over.primary_color, &base.primary_color),
            secondary_color: css_token(&over.secondary_color, &base.secondary_color),
            text_color: css_token(&over.text_color, &base.text_color),
            background_color: css_token(&over.background_color, &base.background_color),
            font_family: css_token(&over.font_family, &base.font_family),
            heading_font: css_token(&over.heading_font, &base.heading_font),
            font_size: bounded(over.font_size, base.font_size, FONT_SIZE_RANGE),
            section_spacing: bounded(
                over.section_spacing,
                base.section_spacing,
                SECTION_SPACING_RANGE,
            ),
            line_height: bounded(over.line_height, base.line_height, LINE_HEIGHT_RANGE),
            border_style: over.border_style.unwrap_or(base.border_style),
            border_width: bounded(over.border_width, base.border_width, BORDER_WIDTH_RANGE),
            border_radius: bounded(over.border_radius, base.border_radius, BORDER_RADIUS_RANGE),
        }
    }

    /// Overlay onto the documented default instance.
    pub fn from_override(over: &CustomizationOverride) -> Customization {
        Customization::merge(&Customization::default(), over)
    }

    /// Emits the custom-property block followed by the rules derived from it.
    ///
    /// Color-derived rules carry literal values so a color change never touches
    /// the font or spacing rules.
    pub fn to_css_variables(&self) -> String {
        let mut css = String::with_capacity(1536);

        css.push_str(":root {\n");
        let vars: [(&str, String); 12] = [
            ("--primary-color", self.primary_color.clone()),
            ("--secondary-color", self.secondary_color.clone()),
            ("--text-color", self.text_color.clone()),
            ("--background-color", self.background_color.clone()),
            ("--font-family", self.font_family.clone()),
            ("--heading-font", self.heading_font.clone()),
            ("--font-size", format!("{}pt", num(self.font_size))),
            ("--section-spacing", format!("{}px", num(self.section_spacing))),
            ("--line-height", num(self.line_height)),
            ("--border-style", self.border_style.as_css().to_string()),
            ("--border-width", format!("{}px", num(self.border_width))),
            ("--border-radius", format!("{}px", num(self.border_radius))),
        ];
        for (name, value) in vars {
            let _ = writeln!(css, "  {name}: {value};");
        }
        css.push_str("}\n");

        // Typography and spacing
        let _ = writeln!(
            css,
            ".resume-container {{ font-family: {}; font-size: {}pt; line-height: {}; }}",
            self.font_family,
            num(self.font_size),
            num(self.line_height)
        );
        let _ = writeln!(
            css,
            ".resume-name, .section-title {{ font-family: {}; }}",
            self.heading_font
        );
        let _ = writeln!(
            css,
            ".resume-section {{ margin-bottom: {}px; }}",
            num(self.section_spacing)
        );
        let _ = writeln!(
            css,
            ".skill-tag {{ border-radius: {}px; }}",
            num(self.border_radius)
        );

        // Color-derived
        let _ = writeln!(
            css,
            ".resume-container {{ color: {}; background-color: {}; }}",
            self.text_color, self.background_color
        );
        let _ = writeln!(
            css,
            ".resume-header {{ background: linear-gradient(135deg, {} 0%, {} 100%); }}",
            self.primary_color, self.secondary_color
        );
        let _ = writeln!(
            css,
            ".section-title {{ color: {}; border-bottom: {}px {} {}; }}",
            self.primary_color,
            num(self.border_width),
            self.border_style.as_css(),
            self.primary_color
        );
        let _ = writeln!(
            css,
            ".experience-position, .education-degree, .certification-name {{ color: {}; }}",
            self.secondary_color
        );

        css
    }
}

/// Accepts an override only if it is a non-empty value that cannot break out of
/// a declaration.
fn css_token(candidate: &Option<String>, fallback: &str) -> String {
    match candidate.as_deref().map(str::trim) {
        Some(value) if is_safe_css_value(value) => value.to_string(),
        _ => fallback.to_string(),
    }
}

fn is_safe_css_value(value: &str) -> bool {
    !value.is_empty()
        && value.len() <= 200
        && !value
            .chars()
            .any(|c| matches!(c, ';' | '{' | '}' | '<' | '>' | '\\') || c.is_control())
}

fn bounded(candidate: Option<f32>, fallback: f32, (min, max): (f32, f32)) -> f32 {
    match candidate {
        Some(v) if v.is_finite() && (min..=max).contains(&v) => v,
        _ => fallback,
    }
}

/// Formats a number without trailing zeros (`11` rather than `11.0`).
fn num(value: f32) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded.fract() == 0.0 {
        format!("{}", rounded as i64)
    } else {
        format!("{rounded}")
    }
}

use serde::{Deserialize, Serialize};

use crate::pagination::geometry::PageGeometry;

/// How an exported document is laid out on paper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ExportMode {
    /// Fixed A4 pages; atomic blocks never straddle a page boundary.
    #[default]
    #[serde(rename = "a4")]
    A4,
    /// One page sized to fit all measured content, no internal breaks.
    #[serde(rename = "long-scroll")]
    LongScroll,
}

impl ExportMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ExportMode::A4 => "a4",
            ExportMode::LongScroll => "long-scroll",
        }
    }

    pub fn is_continuous(self) -> bool {
        matches!(self, ExportMode::LongScroll)
    }

    /// CSS block injected right before `</head>` when the browser loads the
    /// document for capture.
    pub fn override_css(self) -> String {
        match self {
            ExportMode::A4 => format!("{}{PAGINATED_RULES}", PageGeometry::a4().page_css()),
            // The @page size for this mode is injected only after measurement.
            ExportMode::LongScroll => CONTINUOUS_RULES.to_string(),
        }
    }
}

impl std::str::FromStr for ExportMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "a4" | "paginated" => Ok(ExportMode::A4),
            "long-scroll" | "longscroll" | "long_scroll" | "continuous" => {
                Ok(ExportMode::LongScroll)
            }
            other => Err(format!("Unknown export mode '{other}'")),
        }
    }
}

impl std::fmt::Display for ExportMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Atomic blocks stay whole; a section title never ends a page.
const PAGINATED_RULES: &str = r#"
html, body { -webkit-print-color-adjust: exact !important; print-color-adjust: exact !important; }
.experience-item, .education-item, .certification-item, .language-item, .skill-category,
.cover-letter-header, .cover-letter-recipient, .cover-letter-footer, li {
  page-break-inside: avoid !important;
  break-inside: avoid !important;
}
.section-title {
  page-break-after: avoid !important;
  break-after: avoid !important;
}
.section-title + * {
  page-break-before: avoid !important;
  break-before: avoid !important;
}
p { orphans: 3; widows: 3; }
"#;

/// Every element refuses to break; the page is tall enough to hold them all.
const CONTINUOUS_RULES: &str = r#"
html, body {
  height: auto !important;
  min-height: 0 !important;
  overflow: visible !important;
  -webkit-print-color-adjust: exact !important;
  print-color-adjust: exact !important;
}
*, *::before, *::after {
  page-break-before: avoid !important;
  page-break-after: avoid !important;
  page-break-inside: avoid !important;
  break-before: avoid !important;
  break-after: avoid !important;
  break-inside: avoid !important;
}
"#;

/// Simplified "never break" override sent to the external rendering service.
pub const NEVER_BREAK_CSS: &str = r#"
html, body { -webkit-print-color-adjust: exact !important; print-color-adjust: exact !important; }
* { page-break-inside: avoid !important; break-inside: avoid !important; }
"#;

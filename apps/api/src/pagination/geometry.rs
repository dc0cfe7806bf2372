use serde::{Deserialize, Serialize};

/// CSS px → PDF points (96 dpi → 72 dpi).
pub const PX_TO_PT: f64 = 0.75;
const PT_PER_INCH: f64 = 72.0;

pub const A4_WIDTH_PT: f64 = 595.28;
pub const A4_HEIGHT_PT: f64 = 841.89;
pub const A4_MARGIN_PT: f64 = 40.0;
pub const CONTINUOUS_MARGIN_PT: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margins {
    pub fn uniform(pt: f64) -> Self {
        Margins {
            top: pt,
            right: pt,
            bottom: pt,
            left: pt,
        }
    }
}

/// Physical page description handed to PDF capture. All values in points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageGeometry {
    pub width: f64,
    pub height: f64,
    pub margins: Margins,
}

impl PageGeometry {
    /// Fixed A4 page, independent of content length.
    pub fn a4() -> Self {
        PageGeometry {
            width: A4_WIDTH_PT,
            height: A4_HEIGHT_PT,
            margins: Margins::uniform(A4_MARGIN_PT),
        }
    }

    /// A single page of A4 width tall enough for `content_height_px` of layout.
    pub fn continuous(content_height_px: f64) -> Self {
        let margins = Margins::uniform(CONTINUOUS_MARGIN_PT);
        PageGeometry {
            width: A4_WIDTH_PT,
            height: content_height_px * PX_TO_PT + margins.top + margins.bottom,
            margins,
        }
    }

    /// Printable width in CSS px; the browser viewport is set to this before
    /// measuring so measured and printed layouts wrap identically.
    pub fn printable_width_px(&self) -> u32 {
        ((self.width - self.margins.left - self.margins.right) / PX_TO_PT).round() as u32
    }

    pub fn printable_height_px(&self) -> u32 {
        ((self.height - self.margins.top - self.margins.bottom) / PX_TO_PT).ceil() as u32
    }

    pub fn width_in(&self) -> f64 {
        self.width / PT_PER_INCH
    }

    pub fn height_in(&self) -> f64 {
        self.height / PT_PER_INCH
    }

    /// Margins in inches as (top, right, bottom, left).
    pub fn margins_in(&self) -> (f64, f64, f64, f64) {
        (
            self.margins.top / PT_PER_INCH,
            self.margins.right / PT_PER_INCH,
            self.margins.bottom / PT_PER_INCH,
            self.margins.left / PT_PER_INCH,
        )
    }

    /// `@page` rule matching this geometry.
    pub fn page_css(&self) -> String {
        format!(
            "@page {{ size: {}pt {}pt; margin: {}pt {}pt {}pt {}pt; }}\n",
            fmt_pt(self.width),
            fmt_pt(self.height),
            fmt_pt(self.margins.top),
            fmt_pt(self.margins.right),
            fmt_pt(self.margins.bottom),
            fmt_pt(self.margins.left),
        )
    }
}

fn fmt_pt(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded.fract() == 0.0 {
        format!("{}", rounded as i64)
    } else {
        format!("{rounded}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_continuous_height_from_measurement() {
        let geometry = PageGeometry::continuous(4000.0);
        assert_eq!(
            geometry.height,
            4000.0 * 0.75 + geometry.margins.top + geometry.margins.bottom
        );
        assert_eq!(geometry.height, 3040.0);
        assert_eq!(geometry.width, A4_WIDTH_PT);
    }

    #[test]
    fn test_a4_is_fixed() {
        let geometry = PageGeometry::a4();
        assert_eq!(geometry.height, A4_HEIGHT_PT);
        assert_eq!(geometry.margins, Margins::uniform(40.0));
    }

    #[test]
    fn test_printable_width_matches_side_margins() {
        // (595.28 - 40) / 0.75 ≈ 740.4
        assert_eq!(PageGeometry::continuous(100.0).printable_width_px(), 740);
        // (595.28 - 80) / 0.75 ≈ 687.0
        assert_eq!(PageGeometry::a4().printable_width_px(), 687);
    }

    #[test]
    fn test_inch_conversion() {
        let geometry = PageGeometry::a4();
        assert!((geometry.width_in() - 8.2678).abs() < 0.001);
        assert!((geometry.height_in() - 11.6929).abs() < 0.001);
        let (top, _, _, _) = geometry.margins_in();
        assert!((top - 0.5556).abs() < 0.001);
    }

    #[test]
    fn test_page_css() {
        assert_eq!(
            PageGeometry::continuous(4000.0).page_css(),
            "@page { size: 595.28pt 3040pt; margin: 20pt 20pt 20pt 20pt; }\n"
        );
    }
}

// Layout / pagination policy for the two export modes.
// Paginated geometry is static; continuous geometry needs a live measurement.

pub mod geometry;
pub mod measure;
pub mod mode;

pub use geometry::PageGeometry;
pub use measure::HeightCandidates;
pub use mode::{ExportMode, NEVER_BREAK_CSS};

use crate::export::error::RenderError;

/// Resolves the capture geometry for `mode`.
///
/// Paginated mode ignores any measurement. Continuous mode requires one and
/// fails when nothing measurable was rendered.
pub fn page_geometry(
    mode: ExportMode,
    measured: Option<&HeightCandidates>,
) -> Result<PageGeometry, RenderError> {
    match mode {
        ExportMode::A4 => Ok(PageGeometry::a4()),
        ExportMode::LongScroll => {
            let candidates = measured.ok_or_else(|| {
                RenderError::Measurement("continuous export requires a measurement".to_string())
            })?;
            let height_px = candidates.resolved_height_px().ok_or_else(|| {
                RenderError::Measurement(format!(
                    "no positive height candidate in {candidates:?}"
                ))
            })?;
            Ok(PageGeometry::continuous(height_px))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paginated_height_is_fixed_regardless_of_content() {
        let short = HeightCandidates {
            body_scroll_height: 200.0,
            ..Default::default()
        };
        let long = HeightCandidates {
            body_scroll_height: 20_000.0,
            ..Default::default()
        };
        let a = page_geometry(ExportMode::A4, Some(&short)).unwrap();
        let b = page_geometry(ExportMode::A4, Some(&long)).unwrap();
        let c = page_geometry(ExportMode::A4, None).unwrap();
        assert_eq!(a, b);
        assert_eq!(b, c);
    }

    #[test]
    fn test_continuous_tracks_measurement() {
        let measured = HeightCandidates {
            container_scroll_height: 2500.0,
            ..Default::default()
        };
        let geometry = page_geometry(ExportMode::LongScroll, Some(&measured)).unwrap();
        assert!(geometry.height >= 2500.0 * geometry::PX_TO_PT);
    }

    #[test]
    fn test_continuous_without_measurement_fails() {
        assert!(matches!(
            page_geometry(ExportMode::LongScroll, None),
            Err(RenderError::Measurement(_))
        ));
        assert!(matches!(
            page_geometry(ExportMode::LongScroll, Some(&HeightCandidates::default())),
            Err(RenderError::Measurement(_))
        ));
    }
}

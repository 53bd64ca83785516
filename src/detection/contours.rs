use image::GrayImage;
use imageproc::contours::{BorderType, find_contours};

use crate::models::Contour;

/// Trace the external contours of a binary mask.
///
/// Only top-level outer borders are kept, so holes inside a region and
/// anything nested within another region never become candidates.
pub fn find_page_contours(mask: &GrayImage) -> Vec<Contour> {
    find_contours::<u32>(mask)
        .into_iter()
        .filter(|contour| contour.border_type == BorderType::Outer && contour.parent.is_none())
        .filter_map(|contour| Contour::from_points(contour.points))
        .collect()
}

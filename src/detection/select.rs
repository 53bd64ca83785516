use std::cmp::Ordering;

use crate::config::SelectMethod;
use crate::models::Contour;

/// How many of the largest contours stay in the running. Keeping two
/// lets the ratio test reject an elongated artifact (such as a color
/// calibration strip) that out-measures the page itself.
const CANDIDATE_COUNT: usize = 2;

/// The largest contours in descending-area order, at most
/// [`CANDIDATE_COUNT`] of them.
pub fn rank_candidates(contours: &[Contour]) -> Vec<&Contour> {
    let mut ordered: Vec<&Contour> = contours.iter().collect();
    ordered.sort_by(|a, b| {
        b.area()
            .partial_cmp(&a.area())
            .unwrap_or(Ordering::Equal)
    });
    ordered.truncate(CANDIDATE_COUNT);
    ordered
}

/// Pick the page contour from ranked candidates.
///
/// `Squarest` takes the candidate whose bounding-box side ratio is
/// closest to 1, ties going to the earlier (larger-area) candidate.
/// `Largest` always takes the first. Returns `None` when `candidates`
/// is empty.
pub fn pick<'a>(candidates: &[&'a Contour], method: SelectMethod) -> Option<&'a Contour> {
    match method {
        SelectMethod::Largest => candidates.first().copied(),
        SelectMethod::Squarest => candidates
            .iter()
            .min_by(|a, b| {
                a.elongation()
                    .partial_cmp(&b.elongation())
                    .unwrap_or(Ordering::Equal)
            })
            .copied(),
    }
}

/// Rank and pick in one step.
pub fn select_candidate(contours: &[Contour], method: SelectMethod) -> Option<Contour> {
    pick(&rank_candidates(contours), method).cloned()
}

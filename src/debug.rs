//! Stage observation for visual inspection of the pipeline.
//!
//! The detector produces identical results whether or not an observer is
//! attached; overlay images are only rendered when one declares
//! interest.

use std::path::PathBuf;

use image::{DynamicImage, Rgb, RgbImage};
use imageproc::drawing::{draw_hollow_rect_mut, draw_line_segment_mut};
use imageproc::rect::Rect;
use tracing::warn;

use crate::models::{BoundingBox, Contour};

/// Pipeline stage identifiers, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Border-extended input
    Extended,
    /// Grayscale conversion of the extended image
    Grayscale,
    /// After morphological closing
    Closed,
    /// Binary mask fed to contour tracing
    Binary,
    /// All traced contours on a black canvas
    Contours,
    /// Candidate rectangles (green) and the chosen one (red) on the
    /// extended image
    Candidates,
    /// Final crop of the original input
    Cropped,
}

impl Stage {
    /// File-name-friendly stage label
    pub fn label(&self) -> &'static str {
        match self {
            Stage::Extended => "extended",
            Stage::Grayscale => "grayscale",
            Stage::Closed => "closed",
            Stage::Binary => "binary",
            Stage::Contours => "contours",
            Stage::Candidates => "candidates",
            Stage::Cropped => "cropped",
        }
    }
}

/// Receives intermediate images at each stage boundary.
pub trait StageObserver {
    /// Whether stage images should be produced at all. Overlay rendering
    /// is skipped entirely when this returns false.
    fn interested(&self) -> bool {
        true
    }

    /// Called once per stage with the image produced at that boundary.
    fn stage(&mut self, stage: Stage, image: &DynamicImage);
}

/// Observer used by the plain crop path.
pub(crate) struct NoOp;

impl StageObserver for NoOp {
    fn interested(&self) -> bool {
        false
    }

    fn stage(&mut self, _stage: Stage, _image: &DynamicImage) {}
}

/// Writes each stage image as a numbered PNG into a directory.
///
/// Write failures are logged and swallowed; debug output never affects
/// the detection result.
pub struct StageDump {
    dir: PathBuf,
    counter: usize,
}

impl StageDump {
    /// The directory must already exist.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            counter: 0,
        }
    }
}

impl StageObserver for StageDump {
    fn stage(&mut self, stage: Stage, image: &DynamicImage) {
        self.counter += 1;
        let path = self
            .dir
            .join(format!("{:02}_{}.png", self.counter, stage.label()));
        if let Err(error) = image.save(&path) {
            warn!(stage = stage.label(), path = %path.display(), %error, "failed to write stage image");
        }
    }
}

/// All contours as green polylines on a black canvas.
pub(crate) fn contour_overlay(width: u32, height: u32, contours: &[Contour]) -> DynamicImage {
    let mut canvas = RgbImage::new(width, height);
    for contour in contours {
        let points = contour.points();
        for i in 0..points.len() {
            let a = points[i];
            let b = points[(i + 1) % points.len()];
            draw_line_segment_mut(
                &mut canvas,
                (a.x as f32, a.y as f32),
                (b.x as f32, b.y as f32),
                Rgb([0, 255, 0]),
            );
        }
    }
    DynamicImage::ImageRgb8(canvas)
}

/// Candidate rectangles in green with the chosen rectangle drawn over
/// them in red.
pub(crate) fn candidate_overlay(
    base: &RgbImage,
    candidates: &[BoundingBox],
    chosen: &BoundingBox,
) -> DynamicImage {
    let mut canvas = base.clone();
    for rect in candidates {
        draw_hollow_rect_mut(&mut canvas, to_rect(rect), Rgb([0, 255, 0]));
    }
    draw_hollow_rect_mut(&mut canvas, to_rect(chosen), Rgb([255, 0, 0]));
    DynamicImage::ImageRgb8(canvas)
}

fn to_rect(rect: &BoundingBox) -> Rect {
    Rect::at(rect.x as i32, rect.y as i32).of_size(rect.width, rect.height)
}

pub mod contours;
pub mod polarity;
pub mod preprocessing;
pub mod select;

use image::{DynamicImage, GenericImageView};
use tracing::{debug, instrument};

use crate::config::{CropConfig, InvertMode, PreprocessMethod};
use crate::debug::{self, NoOp, Stage, StageObserver};
use crate::error::{DetectError, Result};
use crate::models::BoundingBox;
use polarity::{CornerProbe, PolarityClassifier};

/// Detects the page region in a photographed document.
///
/// The pipeline: extend the borders, convert to grayscale, close small
/// gaps, binarize, trace external contours, pick the page candidate,
/// and map its bounding rectangle back into the original frame.
///
/// A detector owns only the polarity strategies; everything else about a
/// run comes from the [`CropConfig`] passed per call, so one instance
/// can serve concurrent callers.
pub struct PageDetector {
    closing_polarity: Box<dyn PolarityClassifier>,
    threshold_polarity: Box<dyn PolarityClassifier>,
}

impl Default for PageDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl PageDetector {
    /// Detector with the default corner-probe polarity strategies.
    pub fn new() -> Self {
        Self {
            closing_polarity: Box::new(CornerProbe::for_closing()),
            threshold_polarity: Box::new(CornerProbe::for_thresholding()),
        }
    }

    /// Detector with custom polarity strategies for the closing and
    /// thresholding stages.
    pub fn with_polarity(
        closing: Box<dyn PolarityClassifier>,
        threshold: Box<dyn PolarityClassifier>,
    ) -> Self {
        Self {
            closing_polarity: closing,
            threshold_polarity: threshold,
        }
    }

    /// Locate the page region and return its bounding rectangle in the
    /// coordinate space of `image`.
    ///
    /// # Errors
    ///
    /// [`DetectError::ImageTooSmall`] when a side of the input cannot
    /// survive border extension, [`DetectError::NoRegionDetected`] when
    /// binarization leaves nothing to trace.
    pub fn crop(&self, image: &DynamicImage, config: &CropConfig) -> Result<BoundingBox> {
        self.crop_with_observer(image, config, &mut NoOp)
    }

    /// Like [`Self::crop`], additionally feeding each intermediate image
    /// to `observer`. The observer cannot influence the result.
    #[instrument(skip_all, fields(width = image.width(), height = image.height()))]
    pub fn crop_with_observer(
        &self,
        image: &DynamicImage,
        config: &CropConfig,
        observer: &mut dyn StageObserver,
    ) -> Result<BoundingBox> {
        let (width, height) = image.dimensions();
        validate_input(width, height, config.extension)?;

        let extended = preprocessing::extend_border(image, config.extension);
        if observer.interested() {
            observer.stage(Stage::Extended, &DynamicImage::ImageRgb8(extended.clone()));
        }

        let gray = preprocessing::to_grayscale(&extended);
        if observer.interested() {
            observer.stage(Stage::Grayscale, &DynamicImage::ImageLuma8(gray.clone()));
        }

        let closed = preprocessing::close_gaps(&gray, self.closing_polarity.as_ref());
        if observer.interested() {
            observer.stage(Stage::Closed, &DynamicImage::ImageLuma8(closed.clone()));
        }

        let binary = match config.preprocess {
            PreprocessMethod::Canny => preprocessing::detect_edges(&closed),
            PreprocessMethod::Threshold => {
                let invert = match config.invert {
                    InvertMode::Auto => self.threshold_polarity.background_is_bright(&closed),
                    InvertMode::ForceInverted => true,
                    InvertMode::ForceNormal => false,
                };
                debug!(invert, "binarizing");
                preprocessing::binarize_otsu(&closed, invert)
            }
        };
        if observer.interested() {
            observer.stage(Stage::Binary, &DynamicImage::ImageLuma8(binary.clone()));
        }

        let traced = contours::find_page_contours(&binary);
        debug!(count = traced.len(), "contours traced");
        if traced.is_empty() {
            return Err(DetectError::NoRegionDetected);
        }
        if observer.interested() {
            observer.stage(
                Stage::Contours,
                &debug::contour_overlay(binary.width(), binary.height(), &traced),
            );
        }

        let candidates = select::rank_candidates(&traced);
        let chosen = select::pick(&candidates, config.select).ok_or(DetectError::NoRegionDetected)?;
        if observer.interested() {
            let rects: Vec<BoundingBox> = candidates.iter().map(|c| c.bounding_box()).collect();
            observer.stage(
                Stage::Candidates,
                &debug::candidate_overlay(&extended, &rects, &chosen.bounding_box()),
            );
        }

        let region = correct_coordinates(&chosen.bounding_box(), config.extension, width, height);
        if region.width == 0 || region.height == 0 {
            // The candidate sat entirely inside the padding band.
            return Err(DetectError::NoRegionDetected);
        }
        debug!(
            x = region.x,
            y = region.y,
            width = region.width,
            height = region.height,
            "page region detected"
        );
        if observer.interested() {
            let cropped = image.crop_imm(region.x, region.y, region.width, region.height);
            observer.stage(Stage::Cropped, &cropped);
        }

        Ok(region)
    }

    /// Convenience: crop and return the page sub-image itself.
    pub fn crop_image(&self, image: &DynamicImage, config: &CropConfig) -> Result<DynamicImage> {
        let region = self.crop(image, config)?;
        Ok(image.crop_imm(region.x, region.y, region.width, region.height))
    }
}

fn validate_input(width: u32, height: u32, extension: u32) -> Result<()> {
    let min_side = extension.max(2);
    if width < min_side || height < min_side {
        return Err(DetectError::ImageTooSmall {
            width,
            height,
            min_side,
        });
    }
    Ok(())
}

/// Map a rectangle from extended-image coordinates back to the original
/// frame: shift by the extension (clamping the origin at zero), carry
/// the rectangle's own size forward, then clip the far corner to the
/// image bounds.
fn correct_coordinates(
    rect: &BoundingBox,
    extension: u32,
    image_width: u32,
    image_height: u32,
) -> BoundingBox {
    let x0 = rect.x.saturating_sub(extension).min(image_width);
    let y0 = rect.y.saturating_sub(extension).min(image_height);
    let x1 = (x0 + rect.width).min(image_width);
    let y1 = (y0 + rect.height).min(image_height);
    BoundingBox {
        x: x0,
        y: y0,
        width: x1 - x0,
        height: y1 - y0,
    }
}

use image::GrayImage;

/// Intensity above which a sample reads as "bright"
const MID_INTENSITY: u8 = 127;

/// Decides which side of the intensity range the page background sits on.
///
/// Both the closing and the thresholding stage need to know whether the
/// content they should treat as foreground is bright-on-dark or
/// dark-on-bright. Implementations encode different ways of guessing
/// that from image content.
pub trait PolarityClassifier: Send + Sync {
    fn background_is_bright(&self, image: &GrayImage) -> bool;
}

/// Image corner a [`CornerProbe`] samples from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    BottomLeft,
    BottomRight,
}

/// Samples a single pixel inset from one corner and compares it to the
/// mid-range intensity. Assumes the sampled corner shows page background
/// rather than content; photographs framed with the page filling the
/// whole frame can defeat it, which is why the strategy is swappable.
#[derive(Debug, Clone)]
pub struct CornerProbe {
    corner: Corner,
    inset: u32,
}

impl CornerProbe {
    pub fn new(corner: Corner, inset: u32) -> Self {
        Self { corner, inset }
    }

    /// Probe consulted before the closing stage.
    ///
    /// The closing and thresholding probes intentionally sample
    /// different corners; each reproduces the sampling point its stage
    /// was tuned with.
    pub fn for_closing() -> Self {
        Self::new(Corner::BottomLeft, 15)
    }

    /// Probe consulted before the thresholding stage.
    pub fn for_thresholding() -> Self {
        Self::new(Corner::BottomRight, 5)
    }
}

impl PolarityClassifier for CornerProbe {
    fn background_is_bright(&self, image: &GrayImage) -> bool {
        let (width, height) = image.dimensions();
        if width == 0 || height == 0 {
            return false;
        }
        let x = match self.corner {
            Corner::BottomLeft => self.inset.min(width - 1),
            Corner::BottomRight => width.saturating_sub(self.inset).min(width - 1),
        };
        let y = height.saturating_sub(self.inset).min(height - 1);
        image.get_pixel(x, y)[0] > MID_INTENSITY
    }
}

/// Classifies polarity from the median of the intensity histogram.
///
/// Insensitive to where the page sits in the frame, under the assumption
/// that background covers at least half the pixels.
#[derive(Debug, Clone, Copy, Default)]
pub struct MedianIntensity;

impl PolarityClassifier for MedianIntensity {
    fn background_is_bright(&self, image: &GrayImage) -> bool {
        let total = image.width() as u64 * image.height() as u64;
        if total == 0 {
            return false;
        }
        let mut histogram = [0u64; 256];
        for pixel in image.pixels() {
            histogram[pixel[0] as usize] += 1;
        }
        let mut seen = 0u64;
        for (value, &count) in histogram.iter().enumerate() {
            seen += count;
            if seen * 2 >= total {
                return value as u8 > MID_INTENSITY;
            }
        }
        false
    }
}

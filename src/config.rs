use serde::{Deserialize, Serialize};

/// Default border extension in pixels, applied symmetrically to all four
/// sides and subtracted again during coordinate correction.
pub const DEFAULT_EXTENSION: u32 = 50;

/// Whether thresholding should invert the image before Otsu binarization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvertMode {
    /// Decide from the polarity classifier's corner sample
    Auto,
    /// Always use inverted Otsu thresholding
    ForceInverted,
    /// Always use normal Otsu thresholding
    ForceNormal,
}

/// How the smeared grayscale image is turned into a binary mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PreprocessMethod {
    /// Otsu thresholding with the inversion heuristic
    Threshold,
    /// Canny edge detection with fixed thresholds
    Canny,
}

/// How the page contour is picked from the largest candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectMethod {
    /// Bounding box closest to square; rejects elongated artifacts such
    /// as calibration strips
    Squarest,
    /// Largest area, no shape preference
    Largest,
}

/// Per-call settings for one detection run.
///
/// The config is an immutable value passed to each call rather than
/// detector state, so one [`crate::PageDetector`] can serve concurrent
/// callers with different settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CropConfig {
    pub invert: InvertMode,
    pub preprocess: PreprocessMethod,
    pub select: SelectMethod,
    /// Border extension in pixels
    pub extension: u32,
}

impl Default for CropConfig {
    fn default() -> Self {
        Self {
            invert: InvertMode::Auto,
            preprocess: PreprocessMethod::Threshold,
            select: SelectMethod::Squarest,
            extension: DEFAULT_EXTENSION,
        }
    }
}

impl CropConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_invert(mut self, invert: InvertMode) -> Self {
        self.invert = invert;
        self
    }

    pub fn with_preprocess(mut self, preprocess: PreprocessMethod) -> Self {
        self.preprocess = preprocess;
        self
    }

    pub fn with_select(mut self, select: SelectMethod) -> Self {
        self.select = select;
        self
    }

    pub fn with_extension(mut self, extension: u32) -> Self {
        self.extension = extension;
        self
    }
}

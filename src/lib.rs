//! # pagecrop
//!
//! Detects and crops the page region in photographed documents using
//! classical image-processing heuristics.
//!
//! The pipeline extends the image borders, converts to grayscale,
//! closes small gaps with a horizontal-bias morphological kernel,
//! binarizes (Otsu with an inversion heuristic, or Canny edges), traces
//! external contours, and picks the page among the largest candidates:
//! either the largest outright or the one closest to square, which
//! rejects elongated artifacts such as color calibration strips. The
//! returned rectangle is expressed in the original image's coordinates.
//!
//! ## Example
//!
//! ```rust,no_run
//! use pagecrop::{CropConfig, crop_page};
//!
//! # fn main() -> anyhow::Result<()> {
//! let photo = image::open("photo.jpg")?;
//! let region = crop_page(&photo, &CropConfig::default())?;
//! println!(
//!     "page at ({}, {}), {}x{}",
//!     region.x, region.y, region.width, region.height
//! );
//! # Ok(())
//! # }
//! ```
//!
//! Detection is deterministic and side-effect free; a single
//! [`PageDetector`] can serve concurrent callers. Intermediate stages
//! can be inspected through the [`debug::StageObserver`] interface
//! without affecting results.

use image::DynamicImage;

pub mod config;
pub mod debug;
pub mod detection;
pub mod error;
pub mod models;

pub use config::{CropConfig, InvertMode, PreprocessMethod, SelectMethod};
pub use debug::{Stage, StageDump, StageObserver};
pub use detection::PageDetector;
pub use error::{DetectError, Result};
pub use models::{BoundingBox, Contour};

/// Detect the page region with a default [`PageDetector`].
pub fn crop_page(image: &DynamicImage, config: &CropConfig) -> Result<BoundingBox> {
    PageDetector::new().crop(image, config)
}

use image::{DynamicImage, GrayImage, Luma, RgbImage};
use imageproc::contrast::otsu_level;
use imageproc::distance_transform::Norm;
use imageproc::edges::canny;
use imageproc::filter::gaussian_blur_f32;

use super::polarity::PolarityClassifier;

/// Fixed Canny thresholds for the edge-based binarization path
const CANNY_LOW: f32 = 10.0;
const CANNY_HIGH: f32 = 120.0;

/// Closing kernel: wide and short, smearing content horizontally
const CLOSE_KERNEL_WIDTH: u32 = 10;
const CLOSE_KERNEL_HEIGHT: u32 = 2;

/// Pad the image on all four sides by replicating its border pixels.
///
/// A document edge flush with the photo boundary stays enclosed by a
/// traceable contour instead of being clipped by the frame.
pub fn extend_border(image: &DynamicImage, extension: u32) -> RgbImage {
    let source = image.to_rgb8();
    let (width, height) = source.dimensions();
    let mut extended = RgbImage::new(width + 2 * extension, height + 2 * extension);
    for (x, y, pixel) in extended.enumerate_pixels_mut() {
        let src_x = x.saturating_sub(extension).min(width - 1);
        let src_y = y.saturating_sub(extension).min(height - 1);
        *pixel = *source.get_pixel(src_x, src_y);
    }
    extended
}

/// Convert to single-channel intensity
pub fn to_grayscale(image: &RgbImage) -> GrayImage {
    image::imageops::grayscale(image)
}

/// Close small gaps (e.g. between text strokes) into solid regions: one
/// dilation followed by one erosion with the 2x10 structuring element.
///
/// The kernel merges *bright* regions, so when the probe reads the
/// background as bright the closing runs on the intensity-inverted image
/// instead. The result is returned still inverted; the thresholding
/// stage probes its own sample on the closed image and self-corrects.
pub fn close_gaps(image: &GrayImage, probe: &dyn PolarityClassifier) -> GrayImage {
    let source = if probe.background_is_bright(image) {
        let mut inverted = image.clone();
        image::imageops::invert(&mut inverted);
        inverted
    } else {
        image.clone()
    };
    let dilated = dilate_rect(&source, CLOSE_KERNEL_WIDTH, CLOSE_KERNEL_HEIGHT);
    erode_rect(&dilated, CLOSE_KERNEL_WIDTH, CLOSE_KERNEL_HEIGHT)
}

/// Binarize via Otsu's method. `invert` selects which side of the
/// computed cutoff becomes foreground (white).
pub fn binarize_otsu(image: &GrayImage, invert: bool) -> GrayImage {
    let level = otsu_level(image);
    let mut binary = image.clone();
    for pixel in binary.pixels_mut() {
        let foreground = if invert {
            pixel[0] <= level
        } else {
            pixel[0] > level
        };
        pixel[0] = if foreground { 255 } else { 0 };
    }
    binary
}

/// Edge-based alternative to thresholding.
pub fn detect_edges(image: &GrayImage) -> GrayImage {
    canny(image, CANNY_LOW, CANNY_HIGH)
}

/// Gaussian smoothing, for callers that want to knock detail out of an
/// image before tracing it. Not part of the default crop path.
pub fn blur(image: &GrayImage, sigma: f32) -> GrayImage {
    gaussian_blur_f32(image, sigma)
}

/// Erode a binary mask with a 5x5-equivalent square element, repeated
/// `iterations` times. Not part of the default crop path.
pub fn erode(mask: &GrayImage, iterations: u32) -> GrayImage {
    let mut eroded = mask.clone();
    for _ in 0..iterations {
        eroded = imageproc::morphology::erode(&eroded, Norm::LInf, 2);
    }
    eroded
}

/// Grayscale dilation with a rectangular window.
///
/// `imageproc`'s distance-transform morphology is isotropic, so the
/// asymmetric kernel is an explicit max filter. Windows are clamped at
/// the image edge, which matches replicate-border morphology.
fn dilate_rect(image: &GrayImage, kernel_width: u32, kernel_height: u32) -> GrayImage {
    window_filter(image, kernel_width, kernel_height, u8::max)
}

/// Grayscale erosion with a rectangular window.
fn erode_rect(image: &GrayImage, kernel_width: u32, kernel_height: u32) -> GrayImage {
    window_filter(image, kernel_width, kernel_height, u8::min)
}

fn window_filter(
    image: &GrayImage,
    kernel_width: u32,
    kernel_height: u32,
    fold: impl Fn(u8, u8) -> u8,
) -> GrayImage {
    let (width, height) = image.dimensions();
    let anchor_x = kernel_width / 2;
    let anchor_y = kernel_height / 2;
    let mut output = GrayImage::new(width, height);
    for (x, y, pixel) in output.enumerate_pixels_mut() {
        let x0 = x.saturating_sub(anchor_x);
        let y0 = y.saturating_sub(anchor_y);
        let x1 = (x + kernel_width - 1 - anchor_x).min(width - 1);
        let y1 = (y + kernel_height - 1 - anchor_y).min(height - 1);
        let mut value = image.get_pixel(x0, y0)[0];
        for sy in y0..=y1 {
            for sx in x0..=x1 {
                value = fold(value, image.get_pixel(sx, sy)[0]);
            }
        }
        *pixel = Luma([value]);
    }
    output
}

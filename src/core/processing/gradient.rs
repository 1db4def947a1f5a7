use image::DynamicImage;
use imageproc::gradients::{horizontal_sobel, vertical_sobel};
use ndarray::Array2;
use tracing::info;

use crate::core::processing::resize::{calculate_fit_dimensions, resize_image};
use crate::error::{Error, Result};

/// Per-pixel edge-strength map, indexed as `[[row, col]]`. Dimensions match
/// the image it was computed from.
pub type GradientMap = Array2<f32>;

/// Validate the crop size against the source image and optionally fit-resize.
///
/// The dimension check runs before any resizing. With `fit` set, the image is
/// scaled down, aspect-preserving, so the axis with the least slack relative
/// to the crop size lands exactly on the crop size.
pub fn prepare_image(
    img: DynamicImage,
    crop_width: u32,
    crop_height: u32,
    fit: bool,
) -> Result<DynamicImage> {
    let (image_width, image_height) = (img.width(), img.height());
    if crop_width > image_width || crop_height > image_height {
        return Err(Error::InvalidDimensions {
            crop_width,
            crop_height,
            image_width,
            image_height,
        });
    }

    if !fit {
        return Ok(img);
    }

    let (new_cols, new_rows) =
        calculate_fit_dimensions(image_width, image_height, crop_width, crop_height);
    if (new_cols, new_rows) == (image_width, image_height) {
        return Ok(img);
    }

    resize_image(&img, new_cols, new_rows)
}

/// Sobel gradient-magnitude map of the image, one scalar per pixel.
/// Channels are collapsed through the 8-bit grayscale conversion first.
pub fn build_gradient_map(img: &DynamicImage) -> GradientMap {
    let luma = img.to_luma8();
    let gx = horizontal_sobel(&luma);
    let gy = vertical_sobel(&luma);
    let (cols, rows) = luma.dimensions();

    let mut map = Array2::<f32>::zeros((rows as usize, cols as usize));
    for y in 0..rows {
        for x in 0..cols {
            let sx = gx.get_pixel(x, y).0[0] as f32;
            let sy = gy.get_pixel(x, y).0[0] as f32;
            map[[y as usize, x as usize]] = (sx * sx + sy * sy).sqrt();
        }
    }

    info!("Gradient map built: {}x{}", cols, rows);
    map
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbImage;

    fn solid(width: u32, height: u32) -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, image::Rgb([90, 90, 90])))
    }

    #[test]
    fn oversized_crop_is_rejected_before_resizing() {
        let err = prepare_image(solid(100, 100), 200, 50, true).unwrap_err();
        assert!(matches!(err, Error::InvalidDimensions { .. }));
    }

    #[test]
    fn fit_resizes_down_to_the_crop_axis() {
        let prepared = prepare_image(solid(400, 300), 100, 100, true).unwrap();
        assert_eq!((prepared.width(), prepared.height()), (133, 100));
    }

    #[test]
    fn without_fit_the_image_is_untouched() {
        let prepared = prepare_image(solid(400, 300), 100, 100, false).unwrap();
        assert_eq!((prepared.width(), prepared.height()), (400, 300));
    }

    #[test]
    fn uniform_image_has_zero_gradient_everywhere() {
        let map = build_gradient_map(&solid(32, 24));
        assert_eq!(map.dim(), (24, 32));
        assert!(map.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn vertical_edge_produces_energy_at_the_boundary() {
        let img = DynamicImage::ImageRgb8(RgbImage::from_fn(32, 16, |x, _| {
            if x < 16 {
                image::Rgb([0, 0, 0])
            } else {
                image::Rgb([255, 255, 255])
            }
        }));
        let map = build_gradient_map(&img);
        assert!(map[[8, 16]] > 0.0);
        assert_eq!(map[[8, 4]], 0.0);
    }
}

use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer, images::Image};
use image::DynamicImage;
use tracing::info;

use crate::error::{Error, Result};

/// Dimensions for fitting an image around a crop window: scale down,
/// preserving aspect ratio, so that the axis with the least slack lands
/// exactly on the crop size. Both result dimensions stay >= the crop size.
pub fn calculate_fit_dimensions(
    original_cols: u32,
    original_rows: u32,
    crop_width: u32,
    crop_height: u32,
) -> (u32, u32) {
    let scale_x = crop_width as f64 / original_cols as f64;
    let scale_y = crop_height as f64 / original_rows as f64;
    let scale_factor = scale_x.max(scale_y);

    if scale_factor >= 1.0 {
        return (original_cols, original_rows);
    }

    let new_cols = ((original_cols as f64 * scale_factor).round() as u32).max(crop_width);
    let new_rows = ((original_rows as f64 * scale_factor).round() as u32).max(crop_height);
    (new_cols, new_rows)
}

/// Target dimensions for a page capped at `resolution` horizontally.
///
/// Pages relatively taller than the 2:3 reference aspect get a height
/// quantized up to the nearest multiple of `resolution / 4`; everything else
/// scales the width to `resolution` directly, aspect-preserving. The caller
/// decides whether the resize actually happens (images are only scaled down).
pub fn calculate_page_dimensions(
    original_cols: u32,
    original_rows: u32,
    resolution: u32,
) -> (u32, u32) {
    let natural_height = original_rows as f64 * resolution as f64 / original_cols as f64;

    // Narrower than 2:3 means the height/width ratio exceeds 3/2.
    if original_rows as f64 / original_cols as f64 > 1.5 {
        let step = resolution as f64 / 4.0;
        let quantized_height = (natural_height / step).ceil() * step;
        (resolution, quantized_height.round() as u32)
    } else {
        (resolution, natural_height.round() as u32)
    }
}

fn resize_plane(
    data: Vec<u8>,
    original_cols: u32,
    original_rows: u32,
    target_cols: u32,
    target_rows: u32,
    pixel_type: PixelType,
) -> Result<Vec<u8>> {
    let resize_options =
        ResizeOptions::new().resize_alg(ResizeAlg::Convolution(FilterType::Lanczos3));
    let mut resizer = Resizer::new();

    let src_image = Image::from_vec_u8(original_cols, original_rows, data, pixel_type)
        .map_err(Error::external)?;
    let mut dst_image = Image::new(target_cols, target_rows, pixel_type);
    resizer
        .resize(&src_image, &mut dst_image, &resize_options)
        .map_err(Error::external)?;

    Ok(dst_image.into_vec())
}

/// Lanczos3 resize preserving the pixel layout of the source where possible.
/// Exotic layouts are widened to RGBA8 before resampling.
pub fn resize_image(
    img: &DynamicImage,
    target_cols: u32,
    target_rows: u32,
) -> Result<DynamicImage> {
    let (original_cols, original_rows) = (img.width(), img.height());
    info!(
        "Resizing image: {}x{} -> {}x{}",
        original_cols, original_rows, target_cols, target_rows
    );

    match img {
        DynamicImage::ImageLuma8(gray) => {
            let data = resize_plane(
                gray.as_raw().clone(),
                original_cols,
                original_rows,
                target_cols,
                target_rows,
                PixelType::U8,
            )?;
            image::GrayImage::from_raw(target_cols, target_rows, data)
                .map(DynamicImage::ImageLuma8)
                .ok_or_else(|| Error::External("resize produced short buffer".to_string()))
        }
        DynamicImage::ImageRgb8(rgb) => {
            let data = resize_plane(
                rgb.as_raw().clone(),
                original_cols,
                original_rows,
                target_cols,
                target_rows,
                PixelType::U8x3,
            )?;
            image::RgbImage::from_raw(target_cols, target_rows, data)
                .map(DynamicImage::ImageRgb8)
                .ok_or_else(|| Error::External("resize produced short buffer".to_string()))
        }
        other => {
            let rgba = other.to_rgba8();
            let data = resize_plane(
                rgba.into_raw(),
                original_cols,
                original_rows,
                target_cols,
                target_rows,
                PixelType::U8x4,
            )?;
            image::RgbaImage::from_raw(target_cols, target_rows, data)
                .map(DynamicImage::ImageRgba8)
                .ok_or_else(|| Error::External("resize produced short buffer".to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_shrinks_to_the_tighter_axis() {
        // 400x300 fitted around a 100x100 window: the vertical axis has the
        // least slack, so the height lands exactly on 100.
        let (cols, rows) = calculate_fit_dimensions(400, 300, 100, 100);
        assert_eq!(rows, 100);
        assert_eq!(cols, 133);
    }

    #[test]
    fn fit_keeps_dimensions_when_window_matches_image() {
        assert_eq!(calculate_fit_dimensions(640, 480, 640, 480), (640, 480));
    }

    #[test]
    fn fit_never_undershoots_the_window() {
        // Rounding must not push a dimension below the crop size.
        let (cols, rows) = calculate_fit_dimensions(1001, 999, 500, 998);
        assert!(cols >= 500);
        assert!(rows >= 998);
    }

    #[test]
    fn page_dimensions_quantize_tall_pages() {
        // 600x1000 is narrower than 2:3; natural height at width 1000 is
        // 1666.67, quantized up to the next multiple of 250.
        assert_eq!(calculate_page_dimensions(600, 1000, 1000), (1000, 1750));
    }

    #[test]
    fn page_dimensions_keep_exact_multiples() {
        // 800x1600 at width 1000 lands on 2000, already a multiple of 250.
        assert_eq!(calculate_page_dimensions(800, 1600, 1000), (1000, 2000));
    }

    #[test]
    fn page_dimensions_scale_regular_pages_directly() {
        // 1000x1300 is wider than 2:3, so the height follows the aspect ratio.
        assert_eq!(calculate_page_dimensions(1000, 1300, 500), (500, 650));
    }

    #[test]
    fn resize_image_keeps_rgb_layout() {
        let src = DynamicImage::ImageRgb8(image::RgbImage::from_pixel(
            40,
            30,
            image::Rgb([10, 20, 30]),
        ));
        let resized = resize_image(&src, 20, 15).unwrap();
        assert_eq!((resized.width(), resized.height()), (20, 15));
        assert!(matches!(resized, DynamicImage::ImageRgb8(_)));
    }
}

use image::DynamicImage;
use tracing::info;

use crate::core::params::CbzParams;
use crate::core::processing::resize::{calculate_page_dimensions, resize_image};
use crate::error::{Error, Result};
use crate::io::writers::jpeg::encode_rgb_jpeg;
use crate::io::writers::png::encode_png;
use crate::types::{SourceFormat, TargetFormat};

pub const DEFAULT_JPEG_QUALITY: u8 = 95;
pub const DEFAULT_PNG_COMPRESSION: u8 = 6;

/// A transcoded page ready for packing: encoded bytes plus the extension the
/// archive entry should carry.
pub struct TranscodedPage {
    pub bytes: Vec<u8>,
    pub extension: &'static str,
}

/// Validate the quality argument against the target format's encoder range:
/// 0-100 for JPEG, compression levels 0-9 for PNG. Must be called before any
/// file is written. With `Keep`, the value applies to JPEG re-encodes and is
/// checked against the JPEG range.
pub fn validate_quality(format: TargetFormat, quality: Option<i64>) -> Result<()> {
    let Some(value) = quality else {
        return Ok(());
    };

    let (name, min, max) = match format {
        TargetFormat::Png => ("PNG", 0i64, 9i64),
        TargetFormat::Jpeg | TargetFormat::Keep => ("JPEG", 0i64, 100i64),
    };

    if value < min || value > max {
        return Err(Error::InvalidQuality {
            format: name,
            value,
            min,
            max,
        });
    }
    Ok(())
}

/// Composite an image with alpha over a black background. JPEG carries no
/// alpha channel, so transparent pixels must be flattened before encoding.
pub fn flatten_alpha(img: &DynamicImage) -> image::RgbImage {
    match img {
        DynamicImage::ImageRgb8(rgb) => rgb.clone(),
        DynamicImage::ImageLuma8(_) | DynamicImage::ImageLuma16(_) => img.to_rgb8(),
        other => {
            let rgba = other.to_rgba8();
            let mut rgb = image::RgbImage::new(rgba.width(), rgba.height());
            for (dst, src) in rgb.pixels_mut().zip(rgba.pixels()) {
                let alpha = src[3] as u16;
                dst.0 = [
                    ((src[0] as u16 * alpha) / 255) as u8,
                    ((src[1] as u16 * alpha) / 255) as u8,
                    ((src[2] as u16 * alpha) / 255) as u8,
                ];
            }
            rgb
        }
    }
}

fn encode_as_jpeg(img: &DynamicImage, quality: Option<i64>) -> Result<TranscodedPage> {
    let quality = quality.map(|q| q as u8).unwrap_or(DEFAULT_JPEG_QUALITY);
    let rgb = flatten_alpha(img);
    let bytes = encode_rgb_jpeg(rgb.width(), rgb.height(), rgb.as_raw(), quality)?;
    Ok(TranscodedPage {
        bytes,
        extension: "jpg",
    })
}

fn encode_as_png(img: &DynamicImage, quality: Option<i64>) -> Result<TranscodedPage> {
    let compression = quality.map(|q| q as u8).unwrap_or(DEFAULT_PNG_COMPRESSION);
    let bytes = encode_png(img, compression)?;
    Ok(TranscodedPage {
        bytes,
        extension: "png",
    })
}

/// Transcode one validated image per the batch parameters.
///
/// A max resolution triggers the quantized page rescale; images are only ever
/// scaled down. When the target keeps the source format and no rescale is
/// needed, the original file bytes pass through untouched.
pub fn transcode_image(
    img: &DynamicImage,
    source_bytes: &[u8],
    source_format: SourceFormat,
    params: &CbzParams,
) -> Result<TranscodedPage> {
    let scaled = match params.max_resolution {
        Some(resolution) => {
            let (target_cols, target_rows) =
                calculate_page_dimensions(img.width(), img.height(), resolution);
            if img.height() > target_rows {
                Some(resize_image(img, target_cols, target_rows)?)
            } else {
                None
            }
        }
        None => None,
    };

    match params.format {
        TargetFormat::Jpeg => encode_as_jpeg(scaled.as_ref().unwrap_or(img), params.quality),
        TargetFormat::Png => encode_as_png(scaled.as_ref().unwrap_or(img), params.quality),
        TargetFormat::Keep => match (scaled, source_format) {
            (None, _) => Ok(TranscodedPage {
                bytes: source_bytes.to_vec(),
                extension: source_format.extension(),
            }),
            (Some(resized), SourceFormat::Jpeg) => encode_as_jpeg(&resized, params.quality),
            (Some(resized), SourceFormat::Png) => encode_as_png(&resized, None),
            (Some(resized), format) => {
                // GIF/WEBP rescales go through the generic encoder, which
                // wants RGB(A) input.
                let resized = match resized {
                    DynamicImage::ImageRgb8(_) | DynamicImage::ImageRgba8(_) => resized,
                    other => DynamicImage::ImageRgb8(other.to_rgb8()),
                };
                info!("Re-encoding rescaled {} page", format);
                let mut cursor = std::io::Cursor::new(Vec::new());
                resized.write_to(&mut cursor, format.to_image_format())?;
                Ok(TranscodedPage {
                    bytes: cursor.into_inner(),
                    extension: format.extension(),
                })
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage, Rgba, RgbaImage};

    fn params(format: TargetFormat) -> CbzParams {
        CbzParams {
            format,
            ..CbzParams::default()
        }
    }

    #[test]
    fn out_of_range_jpeg_quality_is_rejected() {
        let err = validate_quality(TargetFormat::Jpeg, Some(150)).unwrap_err();
        assert!(matches!(err, Error::InvalidQuality { value: 150, .. }));
    }

    #[test]
    fn png_compression_range_is_zero_to_nine() {
        assert!(validate_quality(TargetFormat::Png, Some(9)).is_ok());
        assert!(validate_quality(TargetFormat::Png, Some(10)).is_err());
    }

    #[test]
    fn missing_quality_is_always_valid() {
        assert!(validate_quality(TargetFormat::Jpeg, None).is_ok());
        assert!(validate_quality(TargetFormat::Png, None).is_ok());
        assert!(validate_quality(TargetFormat::Keep, None).is_ok());
    }

    #[test]
    fn flatten_composites_over_black() {
        let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(
            2,
            2,
            Rgba([255, 255, 255, 128]),
        ));
        let rgb = flatten_alpha(&img);
        assert_eq!(rgb.get_pixel(0, 0).0, [128, 128, 128]);
    }

    #[test]
    fn keep_without_rescale_passes_source_bytes_through() {
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(10, 10, Rgb([1, 2, 3])));
        let source = vec![0xAA, 0xBB, 0xCC];
        let page =
            transcode_image(&img, &source, SourceFormat::Png, &params(TargetFormat::Keep)).unwrap();
        assert_eq!(page.bytes, source);
        assert_eq!(page.extension, "png");
    }

    #[test]
    fn jpeg_target_re_encodes_and_renames_extension() {
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(10, 10, Rgb([1, 2, 3])));
        let page =
            transcode_image(&img, &[], SourceFormat::Png, &params(TargetFormat::Jpeg)).unwrap();
        assert_eq!(page.extension, "jpg");
        // JPEG SOI marker
        assert_eq!(&page.bytes[..2], &[0xFF, 0xD8]);
    }

    #[test]
    fn max_resolution_rescales_tall_pages() {
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(400, 820, Rgb([5, 5, 5])));
        let cbz_params = CbzParams {
            format: TargetFormat::Png,
            max_resolution: Some(200),
            ..CbzParams::default()
        };
        let page = transcode_image(&img, &[], SourceFormat::Png, &cbz_params).unwrap();
        let decoded = image::load_from_memory(&page.bytes).unwrap();
        // Natural height 410 quantized up to the next multiple of 50.
        assert_eq!((decoded.width(), decoded.height()), (200, 450));
    }

    #[test]
    fn small_images_are_never_upscaled() {
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(100, 120, Rgb([5, 5, 5])));
        let cbz_params = CbzParams {
            format: TargetFormat::Png,
            max_resolution: Some(1000),
            ..CbzParams::default()
        };
        let page = transcode_image(&img, &[], SourceFormat::Png, &cbz_params).unwrap();
        let decoded = image::load_from_memory(&page.bytes).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (100, 120));
    }
}

use image::{imageops::FilterType, DynamicImage, Rgb, Rgb32FImage};
use ndarray::{s, Array3, ArrayView3};

use crate::error::{Error, Result};

use super::config::PreprocessConfig;
use super::util::image_to_array;

/// Turn a decoded (H, W, C) image array into the classifier input tensor:
/// center square crop, resize to `target_size`, scale by `scale`, RGB->BGR,
/// HWC->CHW. Channels beyond the first 3 are dropped; fewer than 3 is an
/// error.
pub fn preprocess(image: &ArrayView3<f32>, config: &PreprocessConfig) -> Result<Array3<f32>> {
    println!("{}", shape_line(image.dim()));

    let (_, _, channels) = image.dim();
    if channels < 3 {
        return Err(Error::ChannelCount(channels));
    }
    let rgb = image.slice(s![.., .., ..3]);

    let cropped = center_crop(&rgb);
    let unit = to_unit_range(&cropped.view());
    let resized = resize_square(&unit.view(), config.target_size)?;

    Ok(to_bgr_chw(&resized.view(), config.scale))
}

/// Convenience entry point over a decoded image.
pub fn preprocess_image(image: &DynamicImage, config: &PreprocessConfig) -> Result<Array3<f32>> {
    let array = image_to_array(image);
    preprocess(&array.view(), config)
}

fn shape_line((height, width, channels): (usize, usize, usize)) -> String {
    format!(
        "Original image shape: ({}, {}, {})",
        height, width, channels
    )
}

/// Extract the largest centered square from an (H, W, C) array.
pub fn center_crop(image: &ArrayView3<f32>) -> Array3<f32> {
    let (height, width, _) = image.dim();
    let short_edge = height.min(width);
    let yy = (height - short_edge) / 2;
    let xx = (width - short_edge) / 2;

    image
        .slice(s![yy..yy + short_edge, xx..xx + short_edge, ..])
        .to_owned()
}

/// Bring intensities into [0, 1] ahead of the resize. Inputs already in
/// [0, 1] pass through; anything above 1.0 is treated as [0, 255].
pub fn to_unit_range(image: &ArrayView3<f32>) -> Array3<f32> {
    let max = image.fold(0.0f32, |acc, &x| acc.max(x));
    if max > 1.0 {
        image.map(|&x| x / 255.0)
    } else {
        image.to_owned()
    }
}

/// Anti-aliased resize of an (H, W, 3) unit-range array to (target, target, 3).
pub fn resize_square(image: &ArrayView3<f32>, target: usize) -> Result<Array3<f32>> {
    let (height, width, _) = image.dim();

    let mut buffer = Rgb32FImage::new(width as u32, height as u32);
    for (x, y, pixel) in buffer.enumerate_pixels_mut() {
        *pixel = Rgb([
            image[[y as usize, x as usize, 0]],
            image[[y as usize, x as usize, 1]],
            image[[y as usize, x as usize, 2]],
        ]);
    }

    let resized = DynamicImage::ImageRgb32F(buffer)
        .resize_exact(target as u32, target as u32, FilterType::Triangle)
        .to_rgb32f();

    // The raw buffer is row-major (y, x, c); the element count is checked
    // instead of silently reinterpreting memory.
    Ok(Array3::from_shape_vec(
        (target, target, 3),
        resized.into_raw(),
    )?)
}

/// Scale, reorder channels [0,1,2] -> [2,1,0], and transpose (H, W, 3)
/// to (3, H, W) in one pass.
pub fn to_bgr_chw(image: &ArrayView3<f32>, scale: f32) -> Array3<f32> {
    let (height, width, _) = image.dim();

    Array3::from_shape_fn((3, height, width), |(c, y, x)| image[[y, x, 2 - c]] * scale)
}

use image::DynamicImage;
use ndarray::Array3;

/// Convert a decoded image to an (H, W, C) f32 array in [0, 1], RGB order.
pub fn image_to_array(image: &DynamicImage) -> Array3<f32> {
    let rgb_image = image.to_rgb8();
    let (width, height) = rgb_image.dimensions();

    Array3::from_shape_fn((height as usize, width as usize, 3), |(y, x, c)| {
        rgb_image.get_pixel(x as u32, y as u32)[c] as f32 / 255.0
    })
}

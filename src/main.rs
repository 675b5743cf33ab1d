use std::path::Path;

use imagenet_preprocess::imagenet::{config::PreprocessConfig, preprocess::preprocess_image};

fn main() {
    let path = std::env::args()
        .nth(1)
        .expect("Usage: imagenet-preprocess <image>");

    let config_path = Path::new("config.json");
    let config = if config_path.exists() {
        PreprocessConfig::from_file(config_path).expect("Invalid config.json")
    } else {
        PreprocessConfig::default()
    };

    let image = image::open(&path).expect("Failed to load image");
    let tensor = preprocess_image(&image, &config).expect("Preprocessing failed");

    println!("Tensor shape: {:?}", tensor.dim());
    println!(
        "Intensity mean: {:.3}, max: {:.3}",
        tensor.mean().unwrap_or(0.0),
        tensor.fold(f32::NEG_INFINITY, |acc, &x| acc.max(x))
    );
}

use crate::color::{Brightness, rgb_to_grayscale};
use crate::config::HIGHLIGHT_COLOR;
use image::{GrayImage, Luma, Rgb, RgbImage};
use std::{error::Error, path::Path};

pub fn load_image<P: AsRef<Path>>(path: P) -> Result<RgbImage, Box<dyn Error>> {
    let path = path.as_ref();
    let decoded = image::open(path)?;

    println!(
        "Image info: {}\n  ├ Dimensions: {}x{}\n  └ Color: {:?}",
        path.display(),
        decoded.width(),
        decoded.height(),
        decoded.color()
    );

    Ok(decoded.to_rgb8())
}

pub fn save_image<P: AsRef<Path>>(img: &RgbImage, path: P) -> Result<(), Box<dyn Error>> {
    let path = path.as_ref();
    img.save(path)?;
    println!("Highlighted image saved to {}", path.display());
    Ok(())
}

pub fn highlight_bright_points(img: &RgbImage, threshold: f64) -> (RgbImage, usize) {
    highlight_bright_points_by(img, threshold, Brightness::Lightness)
}

pub fn highlight_bright_points_by(
    img: &RgbImage,
    threshold: f64,
    metric: Brightness,
) -> (RgbImage, usize) {
    let mut highlighted = img.clone();
    let mut count = 0;

    for pixel in highlighted.pixels_mut() {
        let Rgb([r, g, b]) = *pixel;

        if metric.measure(r, g, b) > threshold {
            *pixel = Rgb(HIGHLIGHT_COLOR);
            count += 1;
        }
    }

    (highlighted, count)
}

pub fn to_grayscale(img: &RgbImage) -> GrayImage {
    GrayImage::from_fn(img.width(), img.height(), |x, y| {
        let Rgb([r, g, b]) = *img.get_pixel(x, y);
        Luma([rgb_to_grayscale(r, g, b)])
    })
}

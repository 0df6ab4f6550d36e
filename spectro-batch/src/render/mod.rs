//! Spectrogram rasterisation and PNG output
//!
//! The image has no axes, margins or padding: every pixel belongs to the
//! spectrogram. The lowest Mel band is drawn at the bottom row. Each cell of
//! the dB matrix is stretched over the canvas with nearest-cell sampling, and
//! colours span the matrix's own `[min, max]` range.

pub mod colormap;

pub use colormap::Colormap;

use crate::error::{ExtractError, ExtractResult};
use image::{ImageFormat, Rgb, RgbImage};
use ndarray::Array2;
use spectro_common::params::RenderOptions;
use std::path::Path;

/// Render a `(bands, frames)` matrix to an RGB image
pub fn render_spectrogram(
    data: &Array2<f32>,
    colormap: &Colormap,
    options: RenderOptions,
) -> ExtractResult<RgbImage> {
    let (n_rows, n_cols) = data.dim();
    if n_rows == 0 || n_cols == 0 {
        return Err(ExtractError::Render(format!(
            "Cannot render empty spectrogram ({}x{})",
            n_rows, n_cols
        )));
    }
    if options.width == 0 || options.height == 0 {
        return Err(ExtractError::Render(format!(
            "Invalid canvas size {}x{}",
            options.width, options.height
        )));
    }

    let min = data.iter().fold(f32::INFINITY, |a, &b| a.min(b));
    let max = data.iter().fold(f32::NEG_INFINITY, |a, &b| a.max(b));
    let span = max - min;

    let (width, height) = (options.width, options.height);

    let col_for_x: Vec<usize> = (0..width as u64)
        .map(|x| (x * n_cols as u64 / width as u64) as usize)
        .collect();
    // Row 0 of the image is the highest band
    let row_for_y: Vec<usize> = (0..height as u64)
        .map(|y| ((height as u64 - 1 - y) * n_rows as u64 / height as u64) as usize)
        .collect();

    let mut img = RgbImage::new(width, height);
    for (y, &row) in row_for_y.iter().enumerate() {
        for (x, &col) in col_for_x.iter().enumerate() {
            let value = data[[row, col]];
            let t = if span > 0.0 { (value - min) / span } else { 0.0 };
            img.put_pixel(x as u32, y as u32, Rgb(colormap.map(t)));
        }
    }

    Ok(img)
}

/// Write a PNG, creating parent directories as needed and overwriting any existing file
pub fn write_png(img: &RgbImage, path: &Path) -> ExtractResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    img.save_with_format(path, ImageFormat::Png)
        .map_err(|e| ExtractError::Render(format!("Failed to write {}: {}", path.display(), e)))
}

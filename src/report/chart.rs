//! Ideal-vs-actual comparison chart.
//!
//! Renders a grouped bar chart (two bars per nutrient label) to in-memory
//! PNG bytes. Bars are scaled against the largest value in either series;
//! the ideal series is drawn first in each group.

use std::io::Cursor;

use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use thiserror::Error;

pub const WIDTH: u32 = 800;
pub const HEIGHT: u32 = 600;

const MARGIN_LEFT: u32 = 60;
const MARGIN_RIGHT: u32 = 20;
const MARGIN_TOP: u32 = 40;
const MARGIN_BOTTOM: u32 = 60;

const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);
const AXIS: Rgb<u8> = Rgb([60, 60, 60]);
const GRID: Rgb<u8> = Rgb([225, 225, 225]);
const IDEAL_COLOR: Rgb<u8> = Rgb([66, 133, 244]);
const ACTUAL_COLOR: Rgb<u8> = Rgb([244, 160, 66]);

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("failed to encode chart image: {0}")]
    Encode(#[from] image::ImageError),
}

/// Render one `(ideal, actual)` bar pair per label group.
pub fn render(pairs: &[(f64, f64)]) -> Result<Vec<u8>, ChartError> {
    let mut img = RgbImage::from_pixel(WIDTH, HEIGHT, BACKGROUND);

    let plot_width = WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_height = HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
    let baseline = HEIGHT - MARGIN_BOTTOM;

    let max_value = pairs
        .iter()
        .flat_map(|(ideal, actual)| [*ideal, *actual])
        .fold(0.0_f64, f64::max)
        .max(1.0);

    // Horizontal quarter gridlines
    for quarter in 1..=3 {
        let y = baseline - plot_height * quarter / 4;
        fill_rect(&mut img, MARGIN_LEFT, y, plot_width, 1, GRID);
    }

    if !pairs.is_empty() {
        let group_width = plot_width / pairs.len() as u32;
        let pad = group_width / 8;
        let bar_width = (group_width - 3 * pad) / 2;

        for (index, (ideal, actual)) in pairs.iter().enumerate() {
            let group_x = MARGIN_LEFT + index as u32 * group_width;

            let ideal_height = bar_height(*ideal, max_value, plot_height);
            fill_rect(
                &mut img,
                group_x + pad,
                baseline - ideal_height,
                bar_width,
                ideal_height,
                IDEAL_COLOR,
            );

            let actual_height = bar_height(*actual, max_value, plot_height);
            fill_rect(
                &mut img,
                group_x + 2 * pad + bar_width,
                baseline - actual_height,
                bar_width,
                actual_height,
                ACTUAL_COLOR,
            );
        }
    }

    // Axes
    fill_rect(&mut img, MARGIN_LEFT - 2, MARGIN_TOP, 2, plot_height, AXIS);
    fill_rect(&mut img, MARGIN_LEFT - 2, baseline, plot_width + 2, 2, AXIS);

    let mut buffer = Vec::new();
    DynamicImage::ImageRgb8(img).write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)?;
    Ok(buffer)
}

/// Bar height in pixels, scaled so `max_value` fills the plot.
fn bar_height(value: f64, max_value: f64, plot_height: u32) -> u32 {
    if value <= 0.0 {
        return 0;
    }
    let scaled = (value / max_value * plot_height as f64).round() as u32;
    scaled.min(plot_height)
}

fn fill_rect(img: &mut RgbImage, x: u32, y: u32, width: u32, height: u32, color: Rgb<u8>) {
    for px in x..(x + width).min(WIDTH) {
        for py in y..(y + height).min(HEIGHT) {
            img.put_pixel(px, py, color);
        }
    }
}

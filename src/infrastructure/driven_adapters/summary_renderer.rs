//! Raster Summary Renderer
//!
//! Draws the summary snapshot onto a fixed 600x400 white canvas and
//! encodes it as PNG. Text uses embedded-graphics' bundled bitmap fonts,
//! so rendering never depends on font files being installed.

use std::io::Cursor;

use embedded_graphics::mono_font::ascii::{FONT_10X20, FONT_9X15};
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Baseline, Text};
use image::{ImageFormat, Rgb, RgbImage};

use crate::domain::gateways::SummaryRenderer;
use crate::domain::models::summary::SummarySnapshot;
use crate::shared::errors::RenderError;

const CANVAS_WIDTH: u32 = 600;
const CANVAS_HEIGHT: u32 = 400;

const BLACK: Rgb888 = Rgb888::new(0, 0, 0);
const GRAY: Rgb888 = Rgb888::new(128, 128, 128);

/// Draw target backed by an RGB image buffer
struct Canvas {
    image: RgbImage,
}

impl OriginDimensions for Canvas {
    fn size(&self) -> Size {
        Size::new(self.image.width(), self.image.height())
    }
}

impl DrawTarget for Canvas {
    type Color = Rgb888;
    type Error = std::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let width = self.image.width() as i32;
        let height = self.image.height() as i32;
        for Pixel(point, color) in pixels {
            if (0..width).contains(&point.x) && (0..height).contains(&point.y) {
                self.image.put_pixel(
                    point.x as u32,
                    point.y as u32,
                    Rgb([color.r(), color.g(), color.b()]),
                );
            }
        }
        Ok(())
    }
}

fn draw_line(canvas: &mut Canvas, text: &str, position: Point, style: MonoTextStyle<'_, Rgb888>) {
    // drawing onto the canvas is infallible
    let _ = Text::with_baseline(text, position, style, Baseline::Top).draw(canvas);
}

/// Format a dollar amount with thousands separators and two decimals
fn format_amount(value: f64) -> String {
    if !value.is_finite() {
        return "N/A".to_string();
    }
    let fixed = format!("{value:.2}");
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (index, digit) in int_part.chars().enumerate() {
        if index > 0 && (int_part.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    format!("{grouped}.{frac_part}")
}

/// Renders the summary snapshot as a PNG
#[derive(Debug, Default)]
pub struct RasterSummaryRenderer;

impl SummaryRenderer for RasterSummaryRenderer {
    fn render(&self, snapshot: &SummarySnapshot) -> Result<Vec<u8>, RenderError> {
        let mut canvas = Canvas {
            image: RgbImage::from_pixel(CANVAS_WIDTH, CANVAS_HEIGHT, Rgb([255, 255, 255])),
        };

        let title_style = MonoTextStyle::new(&FONT_10X20, BLACK);
        let body_style = MonoTextStyle::new(&FONT_9X15, BLACK);
        let muted_style = MonoTextStyle::new(&FONT_9X15, GRAY);

        draw_line(&mut canvas, "Countries Summary", Point::new(50, 30), title_style);
        draw_line(
            &mut canvas,
            &format!("Total Countries: {}", snapshot.total_countries),
            Point::new(50, 80),
            body_style,
        );
        draw_line(
            &mut canvas,
            "Top 5 Countries by GDP:",
            Point::new(50, 120),
            body_style,
        );

        let mut y = 150;
        for (rank, entry) in snapshot.top_by_gdp.iter().enumerate() {
            let line = format!(
                "{}. {}: ${}",
                rank + 1,
                entry.name,
                format_amount(entry.estimated_gdp)
            );
            draw_line(&mut canvas, &line, Point::new(70, y), body_style);
            y += 30;
        }

        let timestamp = snapshot
            .last_refreshed_at
            .map_or_else(|| "Never".to_string(), |ts| ts.to_rfc3339());
        draw_line(
            &mut canvas,
            &format!("Last Updated: {timestamp}"),
            Point::new(50, 300),
            muted_style,
        );

        let mut bytes = Vec::new();
        canvas
            .image
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
        Ok(bytes)
    }
}

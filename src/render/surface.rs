// The drawing capability every painter is handed

use super::types::{FontSpec, Paint, Point, Rect, Shape, TextStyle};
use crate::images::Picture;

/// A mutable 2D drawing surface.
///
/// Painters only ever talk to the canvas through this trait, so the same
/// render pass can target a real pixmap or a recorder in tests.
pub trait Surface {
    /// Wipe the whole surface to transparent
    fn clear(&mut self);

    fn fill(&mut self, shape: &Shape, paint: &Paint);

    fn stroke(&mut self, shape: &Shape, paint: &Paint, width: f32);

    /// Draw a picture scaled into `rect`, clipped to rounded corners when
    /// `corner_radius` is positive
    fn draw_image(&mut self, picture: &Picture, rect: Rect, corner_radius: f32);

    /// Advance width of `text` set in `font`
    fn measure_text(&self, text: &str, font: &FontSpec) -> f32;

    /// Draw one run of text. `anchor.y` is the vertical middle of the line.
    fn fill_text(&mut self, text: &str, anchor: Point, style: &TextStyle);
}

// A Surface that remembers what was drawn instead of drawing it

use super::surface::Surface;
use super::types::{FontSpec, Paint, Point, Rect, Shape, TextStyle};
use crate::images::Picture;

/// Advance of one character, as a fraction of the font size
pub const RECORDED_CHAR_WIDTH: f32 = 0.5;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Clear,
    Fill {
        shape: Shape,
        paint: Paint,
    },
    Stroke {
        shape: Shape,
        paint: Paint,
        width: f32,
    },
    Image {
        /// Natural size of the picture drawn
        size: (u32, u32),
        rect: Rect,
        corner_radius: f32,
    },
    Text {
        text: String,
        anchor: Point,
        style: TextStyle,
    },
}

/// Records every call in order. Text is measured with a fixed advance per
/// character so layouts are reproducible without any fonts installed.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every text run drawn, in order
    pub fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn text_ops(&self) -> impl Iterator<Item = (&str, &Point, &TextStyle)> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text {
                text,
                anchor,
                style,
            } => Some((text.as_str(), anchor, style)),
            _ => None,
        })
    }

    pub fn images(&self) -> Vec<&DrawOp> {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Image { .. }))
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self) {
        self.ops.push(DrawOp::Clear);
    }

    fn fill(&mut self, shape: &Shape, paint: &Paint) {
        self.ops.push(DrawOp::Fill {
            shape: shape.clone(),
            paint: paint.clone(),
        });
    }

    fn stroke(&mut self, shape: &Shape, paint: &Paint, width: f32) {
        self.ops.push(DrawOp::Stroke {
            shape: shape.clone(),
            paint: paint.clone(),
            width,
        });
    }

    fn draw_image(&mut self, picture: &Picture, rect: Rect, corner_radius: f32) {
        self.ops.push(DrawOp::Image {
            size: (picture.width(), picture.height()),
            rect,
            corner_radius,
        });
    }

    fn measure_text(&self, text: &str, font: &FontSpec) -> f32 {
        text.chars().count() as f32 * font.size * RECORDED_CHAR_WIDTH
    }

    fn fill_text(&mut self, text: &str, anchor: Point, style: &TextStyle) {
        self.ops.push(DrawOp::Text {
            text: text.to_string(),
            anchor,
            style: *style,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::types::{FontWeight, RenderColor};

    #[test]
    fn test_measure_is_per_char() {
        let surface = RecordingSurface::new();
        let font = FontSpec::body(FontWeight::SemiBold, 20.0);
        assert_eq!(surface.measure_text("CASA", &font), 40.0);
        assert_eq!(surface.measure_text("ção", &font), 30.0);
    }

    #[test]
    fn test_records_in_order() {
        let mut surface = RecordingSurface::new();
        surface.clear();
        let style = TextStyle::new(FontSpec::body(FontWeight::Normal, 10.0), RenderColor::white());
        surface.fill_text("hi", Point::new(1.0, 2.0), &style);
        assert_eq!(surface.ops[0], DrawOp::Clear);
        assert_eq!(surface.texts(), vec!["hi"]);
    }
}

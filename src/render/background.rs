// Base layer: a cover-fit picture, or the theme gradient with a soft glow

use super::surface::Surface;
use super::types::{GradientStop, Paint, Point, Rect, RenderColor, RenderDimensions, Shape};
use crate::images::Picture;
use crate::theme::Theme;

/// Scale a picture so it covers the whole target, centered, cropping the
/// overflow. Returns the rect to draw the full picture into.
pub fn cover_rect(picture: &Picture, dimensions: &RenderDimensions) -> Rect {
    let image_width = picture.width().max(1) as f32;
    let image_height = picture.height().max(1) as f32;
    let scale = (dimensions.width / image_width).max(dimensions.height / image_height);
    let width = image_width * scale;
    let height = image_height * scale;
    Rect::new(
        (dimensions.width - width) / 2.0,
        (dimensions.height - height) / 2.0,
        width,
        height,
    )
}

pub fn draw_background<S: Surface>(
    surface: &mut S,
    dimensions: &RenderDimensions,
    theme: &Theme,
    picture: Option<&Picture>,
) {
    let full = Shape::Rect(Rect::new(0.0, 0.0, dimensions.width, dimensions.height));

    if let Some(picture) = picture {
        // The artwork is expected to be dark enough already
        surface.draw_image(picture, cover_rect(picture, dimensions), 0.0);
        return;
    }

    let gradient = Paint::LinearGradient {
        start: Point::new(0.0, 0.0),
        end: Point::new(dimensions.width * 0.3, dimensions.height),
        stops: vec![
            GradientStop::new(0.0, theme.gradient[0]),
            GradientStop::new(0.5, theme.gradient[1]),
            GradientStop::new(1.0, theme.gradient[2]),
        ],
    };
    surface.fill(&full, &gradient);

    let glow = Paint::RadialGradient {
        center: Point::new(dimensions.width / 2.0, dimensions.height * 0.2),
        radius: dimensions.width,
        stops: vec![
            GradientStop::new(0.0, theme.glow),
            GradientStop::new(1.0, RenderColor::transparent()),
        ],
    };
    surface.fill(&full, &glow);
}

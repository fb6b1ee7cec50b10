// Shown instead of cards when there are no matches yet

use super::surface::Surface;
use super::types::{
    FontSpec, FontWeight, Paint, PathSegment, Point, RenderColor, RenderDimensions, Shape,
    TextStyle,
};

pub const EMPTY_MESSAGE: &str = "Adicione jogos para gerar a arte";

const ICON_SIZE: f32 = 60.0;
const ICON_OFFSET: f32 = 40.0;
const MESSAGE_OFFSET: f32 = 40.0;

pub fn draw_empty_state<S: Surface>(surface: &mut S, dimensions: &RenderDimensions) {
    let center_x = dimensions.width / 2.0;
    let center_y = dimensions.height / 2.0;

    let icon = RenderColor::white().with_alpha(0.1);
    draw_ball(surface, Point::new(center_x, center_y - ICON_OFFSET), ICON_SIZE, icon);

    let style = TextStyle::new(
        FontSpec::body(FontWeight::Medium, 24.0),
        RenderColor::white().with_alpha(0.15),
    )
    .centered();
    surface.fill_text(
        EMPTY_MESSAGE,
        Point::new(center_x, center_y + MESSAGE_OFFSET),
        &style,
    );
}

/// A football: outlined circle with a pentagon patch in the middle
fn draw_ball<S: Surface>(surface: &mut S, center: Point, size: f32, color: RenderColor) {
    let radius = size / 2.0;
    surface.stroke(
        &Shape::Circle { center, radius },
        &Paint::Solid(color),
        size * 0.06,
    );
    surface.fill(&pentagon(center, radius * 0.4), &Paint::Solid(color));
}

fn pentagon(center: Point, radius: f32) -> Shape {
    let mut segments: Vec<PathSegment> = (0..5)
        .map(|i| {
            let angle = -std::f32::consts::FRAC_PI_2 + i as f32 * std::f32::consts::TAU / 5.0;
            let point = Point::new(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
            );
            if i == 0 {
                PathSegment::MoveTo(point)
            } else {
                PathSegment::LineTo(point)
            }
        })
        .collect();
    segments.push(PathSegment::Close);
    Shape::Path(segments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::recording::{DrawOp, RecordingSurface};

    #[test]
    fn test_icon_above_message() {
        let mut surface = RecordingSurface::new();
        draw_empty_state(&mut surface, &RenderDimensions::default());

        assert!(matches!(
            surface.ops[0],
            DrawOp::Stroke {
                shape: Shape::Circle { center, radius },
                ..
            } if center == Point::new(540.0, 920.0) && radius == 30.0
        ));

        let (text, anchor, style) = surface.text_ops().next().unwrap();
        assert_eq!(text, EMPTY_MESSAGE);
        assert_eq!(*anchor, Point::new(540.0, 1000.0));
        assert_eq!(style.color.a, 0.15);
    }
}

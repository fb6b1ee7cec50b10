// Renderer-agnostic types shared by the painters and every Surface backend

/// A color represented as RGBA values (0.0 to 1.0)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl RenderColor {
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Build a color from 8-bit channels, the way theme tables are written
    pub fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::rgb(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }

    pub fn white() -> Self {
        Self::rgb(1.0, 1.0, 1.0)
    }

    pub fn black() -> Self {
        Self::rgb(0.0, 0.0, 0.0)
    }

    pub fn transparent() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    /// Same color with its alpha replaced
    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Same color with its alpha scaled, like a canvas global alpha
    pub fn fade(self, opacity: f32) -> Self {
        Self {
            a: self.a * opacity,
            ..self
        }
    }

    /// Channels as 8-bit values, clamped
    pub fn to_rgba8(&self) -> [u8; 4] {
        let q = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }
}

impl Default for RenderColor {
    fn default() -> Self {
        Self::white()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }
}

/// Dimensions for rendering
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderDimensions {
    pub width: f32,
    pub height: f32,
}

impl Default for RenderDimensions {
    /// The one canvas every card is drawn on: 1080x1920 portrait
    fn default() -> Self {
        Self {
            width: 1080.0,
            height: 1920.0,
        }
    }
}

/// Text alignment relative to the anchor x coordinate
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
}

/// Font weight, named after the CSS numeric weights the card design uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontWeight {
    #[default]
    Normal,
    Medium,
    SemiBold,
    ExtraBold,
    Black,
}

impl FontWeight {
    pub fn numeric(&self) -> u16 {
        match self {
            FontWeight::Normal => 400,
            FontWeight::Medium => 500,
            FontWeight::SemiBold => 600,
            FontWeight::ExtraBold => 800,
            FontWeight::Black => 900,
        }
    }
}

/// Which of the two typefaces a run of text is set in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontFace {
    /// Condensed display face for titles, team names and odds
    Display,
    /// Plain face for labels and small print
    #[default]
    Body,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontSpec {
    pub face: FontFace,
    pub weight: FontWeight,
    pub size: f32,
}

impl FontSpec {
    pub fn display(weight: FontWeight, size: f32) -> Self {
        Self {
            face: FontFace::Display,
            weight,
            size,
        }
    }

    pub fn body(weight: FontWeight, size: f32) -> Self {
        Self {
            face: FontFace::Body,
            weight,
            size,
        }
    }
}

/// Soft colored halo drawn behind text
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glow {
    pub color: RenderColor,
    pub blur: f32,
}

/// Everything needed to place one run of text.
/// The anchor y is the vertical middle of the em box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub font: FontSpec,
    pub color: RenderColor,
    pub align: TextAlign,
    pub glow: Option<Glow>,
}

impl TextStyle {
    pub fn new(font: FontSpec, color: RenderColor) -> Self {
        Self {
            font,
            color,
            align: TextAlign::Left,
            glow: None,
        }
    }

    pub fn centered(self) -> Self {
        Self {
            align: TextAlign::Center,
            ..self
        }
    }

    pub fn with_glow(self, color: RenderColor, blur: f32) -> Self {
        Self {
            glow: Some(Glow { color, blur }),
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    pub offset: f32,
    pub color: RenderColor,
}

impl GradientStop {
    pub fn new(offset: f32, color: RenderColor) -> Self {
        Self { offset, color }
    }
}

/// How a shape is filled or stroked
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(RenderColor),
    LinearGradient {
        start: Point,
        end: Point,
        stops: Vec<GradientStop>,
    },
    RadialGradient {
        center: Point,
        radius: f32,
        stops: Vec<GradientStop>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathSegment {
    MoveTo(Point),
    LineTo(Point),
    QuadTo(Point, Point),
    Close,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Rect(Rect),
    RoundedRect { rect: Rect, radius: f32 },
    Circle { center: Point, radius: f32 },
    Path(Vec<PathSegment>),
}

impl Shape {
    /// Open polyline through the given points
    pub fn polyline(points: &[Point]) -> Self {
        let segments = points
            .iter()
            .enumerate()
            .map(|(i, p)| {
                if i == 0 {
                    PathSegment::MoveTo(*p)
                } else {
                    PathSegment::LineTo(*p)
                }
            })
            .collect();
        Shape::Path(segments)
    }

    pub fn line(from: Point, to: Point) -> Self {
        Self::polyline(&[from, to])
    }
}

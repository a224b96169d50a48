//! Pixel geometry and colour primitives shared by the gutters.
//!
//! All coordinates are logical pixels relative to the widget that receives the
//! event or paint request. Rectangles are half-open: `bottom()` is the first
//! row below the rectangle.

/// A point in widget space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle in widget space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn top_left(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn bottom_right(&self) -> Point {
        Point::new(self.right(), self.bottom())
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    pub fn contains_point(&self, point: Point) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }

    /// True when `other` lies entirely inside `self`.
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Whether the vertical band `[top, bottom)` overlaps this rectangle's rows.
    pub fn intersects_rows(&self, top: f32, bottom: f32) -> bool {
        top < self.bottom() && bottom > self.y
    }

    /// The same rectangle with its origin moved to `(0, 0)`.
    pub fn at_origin(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }
}

/// An 8-bit RGBA colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Build an opaque colour from `0xRRGGBB`.
    pub const fn from_hex(hex: u32) -> Self {
        Self::rgb((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
    }

    pub fn to_hex(self) -> u32 {
        (u32::from(self.r) << 16) | (u32::from(self.g) << 8) | u32::from(self.b)
    }

    /// Brighten by `factor` percent in HSV space (`150` is 50% brighter).
    ///
    /// When the scaled value overflows the channel range the excess is taken
    /// out of the saturation instead, so very bright colours fade towards white.
    pub fn lighter(self, factor: u32) -> Self {
        if factor == 0 {
            return self;
        }
        if factor < 100 {
            return self.darker(10_000 / factor);
        }
        let (h, mut s, v) = self.to_hsv();
        let mut v = v * factor as f32 / 100.0;
        if v > 255.0 {
            s = (s - (v - 255.0)).max(0.0);
            v = 255.0;
        }
        Self::from_hsv(h, s, v, self.a)
    }

    /// Darken by `factor` percent in HSV space (`200` halves the value).
    pub fn darker(self, factor: u32) -> Self {
        if factor == 0 {
            return self;
        }
        if factor < 100 {
            return self.lighter(10_000 / factor);
        }
        let (h, s, v) = self.to_hsv();
        Self::from_hsv(h, s, v * 100.0 / factor as f32, self.a)
    }

    /// Hue in degrees, saturation and value on the 0..=255 scale.
    fn to_hsv(self) -> (f32, f32, f32) {
        let r = f32::from(self.r);
        let g = f32::from(self.g);
        let b = f32::from(self.b);
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let s = if max == 0.0 { 0.0 } else { delta * 255.0 / max };
        let h = if delta == 0.0 {
            0.0
        } else if max == r {
            60.0 * (((g - b) / delta).rem_euclid(6.0))
        } else if max == g {
            60.0 * ((b - r) / delta + 2.0)
        } else {
            60.0 * ((r - g) / delta + 4.0)
        };
        (h, s, max)
    }

    fn from_hsv(h: f32, s: f32, v: f32, a: u8) -> Self {
        let v = v.clamp(0.0, 255.0);
        let s = (s / 255.0).clamp(0.0, 1.0);
        let c = v * s;
        let sector = (h / 60.0).rem_euclid(6.0);
        let x = c * (1.0 - (sector.rem_euclid(2.0) - 1.0).abs());
        let m = v - c;
        let (r, g, b) = match sector as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };
        Self {
            r: (r + m).round() as u8,
            g: (g + m).round() as u8,
            b: (b + m).round() as u8,
            a,
        }
    }
}

/// A two-point linear gradient with ordered colour stops in `0.0..=1.0`.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    pub start: Point,
    pub end: Point,
    pub stops: Vec<(f32, Color)>,
}

impl LinearGradient {
    pub fn new(start: Point, end: Point) -> Self {
        Self {
            start,
            end,
            stops: Vec::new(),
        }
    }

    pub fn with_stop(mut self, position: f32, color: Color) -> Self {
        self.stops.push((position.clamp(0.0, 1.0), color));
        self.stops.sort_by(|a, b| a.0.total_cmp(&b.0));
        self
    }
}

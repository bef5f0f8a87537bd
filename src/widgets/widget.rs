#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);
}

impl Default for Color {
    fn default() -> Self {
        Self::TRANSPARENT
    }
}

/// A point in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
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

    /// A rect of the given size at the origin.
    pub fn from_size(width: f32, height: f32) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// The same size, moved to the origin. Used for local coordinate space.
    pub fn local(&self) -> Self {
        Self::from_size(self.width, self.height)
    }

    /// Half-open hit test, as used for pointer hit testing.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }

    /// Closed test: points on the right and bottom edges count as inside.
    pub fn contains_inclusive(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }

    /// Length of the diagonal.
    pub fn diagonal(&self) -> f32 {
        (self.width * self.width + self.height * self.height).sqrt()
    }

    /// Convert a point in parent coordinates into this rect's local space.
    pub fn to_local(&self, x: f32, y: f32) -> Point {
        Point::new(x - self.x, y - self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// One finger sample carried by a touch event, in parent coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Touch {
    /// Host-assigned identifier, stable for the lifetime of the finger
    pub id: i32,
    pub x: f32,
    pub y: f32,
}

impl Touch {
    pub fn new(id: i32, x: f32, y: f32) -> Self {
        Self { id, x, y }
    }
}

#[derive(Debug, Clone)]
pub enum Event {
    /// Mouse/pointer moved
    MouseMove { x: f32, y: f32 },
    /// Mouse button pressed
    MouseDown { x: f32, y: f32, button: MouseButton },
    /// Mouse button released
    MouseUp { x: f32, y: f32, button: MouseButton },
    /// Mouse/pointer left the surface
    MouseLeave,
    /// One or more fingers went down
    TouchBegin { touches: Vec<Touch> },
    /// One or more fingers moved
    TouchMove { touches: Vec<Touch> },
    /// One or more fingers lifted
    TouchEnd { touches: Vec<Touch> },
    /// The host took the gesture away (system gesture, interruption)
    TouchCancel { touches: Vec<Touch> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResponse {
    Ignored,
    Handled,
}

impl Event {
    /// Get the coordinates from this event, if any.
    ///
    /// Touch events report their first sample.
    pub fn coords(&self) -> Option<(f32, f32)> {
        match self {
            Event::MouseMove { x, y } => Some((*x, *y)),
            Event::MouseDown { x, y, .. } => Some((*x, *y)),
            Event::MouseUp { x, y, .. } => Some((*x, *y)),
            Event::TouchBegin { touches }
            | Event::TouchMove { touches }
            | Event::TouchEnd { touches }
            | Event::TouchCancel { touches } => touches.first().map(|t| (t.x, t.y)),
            Event::MouseLeave => None,
        }
    }
}

/// A widget placed in its parent's coordinate space that consumes input.
///
/// Painting is left to the compositor the widget drives, so the trait only
/// covers placement and event delivery.
pub trait Widget {
    /// Bounds in parent coordinates.
    fn bounds(&self) -> Rect;

    fn set_bounds(&mut self, bounds: Rect);

    fn event(&mut self, event: &Event) -> EventResponse {
        let _ = event;
        EventResponse::Ignored
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_rgba() {
        let color = Color::rgba(0.1, 0.2, 0.3, 0.5);
        assert_eq!(color.r, 0.1);
        assert_eq!(color.g, 0.2);
        assert_eq!(color.b, 0.3);
        assert_eq!(color.a, 0.5);
    }

    #[test]
    fn test_rect_contains_is_half_open() {
        let rect = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert!(rect.contains(10.0, 20.0));
        assert!(!rect.contains(110.0, 70.0));
        assert!(!rect.contains(5.0, 40.0));
    }

    #[test]
    fn test_rect_contains_inclusive_accepts_far_edges() {
        let rect = Rect::from_size(100.0, 100.0);
        assert!(rect.contains_inclusive(Point::new(0.0, 0.0)));
        assert!(rect.contains_inclusive(Point::new(100.0, 100.0)));
        assert!(!rect.contains_inclusive(Point::new(100.5, 50.0)));
        assert!(!rect.contains_inclusive(Point::new(50.0, -0.5)));
    }

    #[test]
    fn test_rect_diagonal() {
        assert_eq!(Rect::from_size(3.0, 4.0).diagonal(), 5.0);
        assert!((Rect::from_size(100.0, 100.0).diagonal() - 141.42136).abs() < 1e-3);
    }

    #[test]
    fn test_rect_to_local() {
        let rect = Rect::new(20.0, 30.0, 100.0, 40.0);
        assert_eq!(rect.to_local(25.0, 35.0), Point::new(5.0, 5.0));
        assert_eq!(rect.local(), Rect::from_size(100.0, 40.0));
    }

    #[test]
    fn test_touch_coords_use_first_sample() {
        let event = Event::TouchMove {
            touches: vec![Touch::new(1, 4.0, 5.0), Touch::new(2, 9.0, 9.0)],
        };
        assert_eq!(event.coords(), Some((4.0, 5.0)));
        assert_eq!(Event::TouchEnd { touches: vec![] }.coords(), None);
        assert_eq!(Event::MouseLeave.coords(), None);
    }
}

use crate::animation::Transition;
use crate::widgets::Color;

/// Opacity of a fully revealed ripple.
pub const RIPPLE_VISIBLE_OPACITY: f32 = 0.35;

/// Corner radius applied to the button's own layer.
pub const BUTTON_CORNER_RADIUS: f32 = 10.0;

/// Configuration for the ripple effect.
#[derive(Clone, Debug, PartialEq)]
pub struct RippleConfig {
    /// Fill color of the ripple circle; its alpha is left to `visible_opacity`
    pub color: Color,
    /// Layer opacity while the ripple is revealed
    pub visible_opacity: f32,
    /// Duration of the scale-in and of every zone transition
    pub transition: Transition,
    /// Mask frame size relative to the foreground image size
    pub mask_scale: f32,
    /// Corner radius of the button layer
    pub corner_radius: f32,
}

impl Default for RippleConfig {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            visible_opacity: RIPPLE_VISIBLE_OPACITY,
            transition: Transition::default(),
            mask_scale: 1.0,
            corner_radius: BUTTON_CORNER_RADIUS,
        }
    }
}

impl RippleConfig {
    /// Create a new ripple config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a ripple config with a custom color.
    pub fn with_color(color: Color) -> Self {
        Self {
            color,
            ..Default::default()
        }
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Set the revealed opacity, clamped to [0, 1].
    pub fn visible_opacity(mut self, opacity: f32) -> Self {
        self.visible_opacity = opacity.clamp(0.0, 1.0);
        self
    }

    pub fn transition(mut self, transition: Transition) -> Self {
        self.transition = transition;
        self
    }

    /// Shorthand for changing only the transition duration.
    pub fn duration(mut self, duration_ms: f32) -> Self {
        self.transition = self.transition.duration(duration_ms);
        self
    }

    pub fn mask_scale(mut self, scale: f32) -> Self {
        self.mask_scale = scale.max(0.0);
        self
    }

    pub fn corner_radius(mut self, radius: f32) -> Self {
        self.corner_radius = radius.max(0.0);
        self
    }
}

use crate::animation::{AnimationGroup, PropertyAnimation};
use crate::renderer::{Compositor, LayerId, LayerProps};
use crate::widgets::{Color, Point, Rect};

use super::config::RippleConfig;

/// Animation key of the initial scale-in.
pub const ZOOM_ANIMATION_KEY: &str = "zoom";

/// Animation key of zone transitions.
pub const TRANSITION_ANIMATION_KEY: &str = "animation";

/// Where the active touch sits relative to the button bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TouchZoneState {
    #[default]
    Inside,
    Outside,
}

impl TouchZoneState {
    /// Classify a local point against local bounds; edges count as inside.
    pub fn classify(bounds: Rect, point: Point) -> Self {
        if bounds.contains_inclusive(point) {
            TouchZoneState::Inside
        } else {
            TouchZoneState::Outside
        }
    }

    /// Model opacity of a ripple that has settled in this zone.
    pub fn target_opacity(&self, visible_opacity: f32) -> f32 {
        match self {
            TouchZoneState::Inside => visible_opacity,
            TouchZoneState::Outside => 0.0,
        }
    }

    /// Tracks played when the touch enters this zone.
    ///
    /// Entering `Inside` grows and reveals; entering `Outside` is the exact
    /// mirror.
    pub fn entry_tracks(&self, visible_opacity: f32) -> Vec<PropertyAnimation> {
        match self {
            TouchZoneState::Inside => vec![
                PropertyAnimation::scale(0.0, 1.0),
                PropertyAnimation::opacity(0.0, visible_opacity),
            ],
            TouchZoneState::Outside => vec![
                PropertyAnimation::scale(1.0, 0.0),
                PropertyAnimation::opacity(visible_opacity, 0.0),
            ],
        }
    }
}

/// The live ripple circle of the current gesture.
#[derive(Debug, Clone, PartialEq)]
pub struct RippleLayer {
    id: LayerId,
    center: Point,
    radius: f32,
    opacity: f32,
    color: Color,
}

impl RippleLayer {
    /// Attach a new ripple centered on `point` and start its scale-in.
    ///
    /// The radius is the diagonal of `bounds`, enough to cover the whole
    /// button from any point inside it.
    pub fn spawn<C: Compositor>(
        compositor: &mut C,
        bounds: Rect,
        point: Point,
        config: &RippleConfig,
    ) -> Self {
        let radius = bounds.diagonal();
        let opacity = config.visible_opacity;
        let id = compositor.add_layer(LayerProps::circle(radius, point, config.color, opacity));

        compositor.add_animation(
            id,
            ZOOM_ANIMATION_KEY,
            AnimationGroup::single(PropertyAnimation::scale(0.0, 1.0), config.transition),
        );

        Self {
            id,
            center: point,
            radius,
            opacity,
            color: config.color,
        }
    }

    /// Move to `point` and play the entry animation of `zone`.
    pub fn transition<C: Compositor>(
        &mut self,
        compositor: &mut C,
        point: Point,
        zone: TouchZoneState,
        config: &RippleConfig,
    ) {
        self.center = point;
        self.opacity = zone.target_opacity(config.visible_opacity);

        compositor.set_layer_position(self.id, self.center);
        compositor.set_layer_opacity(self.id, self.opacity);
        compositor.add_animation(
            self.id,
            TRANSITION_ANIMATION_KEY,
            AnimationGroup::new(
                zone.entry_tracks(config.visible_opacity),
                config.transition,
            ),
        );
    }

    /// Detach from the render tree, cutting any running animation.
    pub fn remove<C: Compositor>(self, compositor: &mut C) {
        compositor.remove_layer(self.id);
    }

    pub fn id(&self) -> LayerId {
        self.id
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    pub fn color(&self) -> Color {
        self.color
    }
}

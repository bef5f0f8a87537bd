//! Boundary to the host compositing layer.
//!
//! Widgets do not draw. They create layers, set their model values, attach
//! animation requests and clip masks through a [`Compositor`], and the host
//! interpolates and composites on its own timeline. Every call returns
//! immediately.

pub mod commands;

pub use commands::{CommandRecorder, RenderCommand};

use crate::animation::AnimationGroup;
use crate::widgets::{Color, Point, Rect, SelectionMask};

/// Opaque handle to a layer created by a compositor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LayerId(pub u64);

/// Initial model values of a new layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerProps {
    /// Fill color
    pub background: Color,
    /// Opacity in [0, 1]
    pub opacity: f32,
    /// Frame; only its size matters once `position` is applied
    pub frame: Rect,
    /// Corner radius in logical pixels
    pub corner_radius: f32,
    /// Center point in the parent's coordinates
    pub position: Point,
}

impl LayerProps {
    /// A filled circle of `radius` centered on `position`.
    pub fn circle(radius: f32, position: Point, background: Color, opacity: f32) -> Self {
        Self {
            background,
            opacity,
            frame: Rect::from_size(radius * 2.0, radius * 2.0),
            corner_radius: radius,
            position,
        }
    }
}

/// Primitives a host rendering environment exposes to a widget.
pub trait Compositor {
    /// Create a layer and attach it on top of the widget's own layer.
    fn add_layer(&mut self, props: LayerProps) -> LayerId;

    /// Update the model position of a layer.
    fn set_layer_position(&mut self, id: LayerId, position: Point);

    /// Update the model opacity of a layer.
    fn set_layer_opacity(&mut self, id: LayerId, opacity: f32);

    /// Attach an animation to a layer under `key`, replacing any animation
    /// already running under the same key.
    fn add_animation(&mut self, id: LayerId, key: &str, animation: AnimationGroup);

    /// Detach a layer from the render tree. Running animations stop with it.
    fn remove_layer(&mut self, id: LayerId);

    /// Clip the widget's own layer (and everything on it) to `mask`, or
    /// remove the clip with `None`.
    fn set_mask(&mut self, mask: Option<SelectionMask>);

    /// Corner radius of the widget's own layer.
    fn set_corner_radius(&mut self, radius: f32);
}

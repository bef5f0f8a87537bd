//! A pressable button with a material-style ripple.
//!
//! The button turns host touch events into declarative requests against a
//! [`Compositor`](renderer::Compositor): create a circle layer, move it,
//! animate its scale and opacity, remove it, and clip everything to the
//! foreground image's silhouette. Interpolation and drawing stay with the
//! host.

pub mod animation;
pub mod renderer;
pub mod widgets;

pub mod prelude {
    pub use crate::animation::{AnimatedProperty, AnimationGroup, PropertyAnimation, Transition};
    pub use crate::renderer::{CommandRecorder, Compositor, LayerId, LayerProps, RenderCommand};
    pub use crate::widgets::{
        ripple_button, Color, Control, ControlState, Event, EventResponse, ForegroundImage,
        ImageSource, MouseButton, Point, Rect, RippleButton, RippleConfig, RippleLayer,
        SelectionMask, Touch, TouchHandler, TouchZoneState, Widget, TRANSITION_ANIMATION_KEY,
        ZOOM_ANIMATION_KEY,
    };
}

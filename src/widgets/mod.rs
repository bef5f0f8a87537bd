pub mod button;
pub mod control;
pub mod image;
pub mod widget;

pub use button::{
    RippleButton, RippleConfig, RippleLayer, SelectionMask, TouchZoneState,
    TRANSITION_ANIMATION_KEY, ZOOM_ANIMATION_KEY,
};
pub use control::{ClickCallback, Control, ControlState, TouchHandler};
pub use image::{ForegroundImage, ImageSource};
pub use widget::{Color, Event, EventResponse, MouseButton, Point, Rect, Touch, Widget};

/// Create a ripple button at `bounds` driving `compositor`.
pub fn ripple_button<C: crate::renderer::Compositor>(
    bounds: Rect,
    compositor: C,
) -> RippleButton<C> {
    RippleButton::new(bounds, compositor)
}

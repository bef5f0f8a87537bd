//! Generic pressable control.
//!
//! [`Control`] owns what every button has regardless of its visual effect:
//! bounds, per-state images, the highlighted state while a finger is down,
//! and the click callback. Widgets with custom feedback wrap a `Control`
//! and forward their touch entry points to it before doing their own work.

use bitflags::bitflags;

use super::image::ForegroundImage;
use super::widget::{Point, Rect};

bitflags! {
    /// Visual state of a control. The empty set is the normal state.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ControlState: u8 {
        const HIGHLIGHTED = 1 << 0;
        const DISABLED = 1 << 1;
    }
}

impl ControlState {
    pub const NORMAL: ControlState = ControlState::empty();
}

/// The four touch entry points a host drives.
///
/// Points are in the receiver's local coordinate space.
pub trait TouchHandler {
    fn touch_began(&mut self, point: Point);
    fn touch_moved(&mut self, point: Point);
    fn touch_ended(&mut self, point: Point);
    fn touch_cancelled(&mut self, point: Point);
}

/// Callback invoked when a touch lifts inside the control.
pub type ClickCallback = Box<dyn Fn()>;

pub struct Control {
    bounds: Rect,
    images: Vec<(ControlState, ForegroundImage)>,
    enabled: bool,
    tracking: bool,
    highlighted: bool,
    on_click: Option<ClickCallback>,
}

impl Control {
    pub fn new(bounds: Rect) -> Self {
        Self {
            bounds,
            images: Vec::new(),
            enabled: true,
            tracking: false,
            highlighted: false,
            on_click: None,
        }
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    /// Assign the image shown in `state`. `None` removes it.
    pub fn set_image(&mut self, image: Option<ForegroundImage>, state: ControlState) {
        self.images.retain(|(s, _)| *s != state);
        if let Some(image) = image {
            self.images.push((state, image));
        }
    }

    /// The image for `state`, falling back to the normal image.
    pub fn image_for(&self, state: ControlState) -> Option<&ForegroundImage> {
        self.exact_image(state)
            .or_else(|| self.exact_image(ControlState::NORMAL))
    }

    fn exact_image(&self, state: ControlState) -> Option<&ForegroundImage> {
        self.images
            .iter()
            .find(|(s, _)| *s == state)
            .map(|(_, image)| image)
    }

    /// Combined state flags right now.
    pub fn state(&self) -> ControlState {
        let mut state = ControlState::NORMAL;
        state.set(ControlState::HIGHLIGHTED, self.highlighted);
        state.set(ControlState::DISABLED, !self.enabled);
        state
    }

    /// The image to show for the current state.
    pub fn current_image(&self) -> Option<&ForegroundImage> {
        self.image_for(self.state())
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.tracking = false;
            self.highlighted = false;
        }
    }

    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }

    /// Whether a gesture is in progress.
    pub fn is_tracking(&self) -> bool {
        self.tracking
    }

    pub fn set_on_click<F: Fn() + 'static>(&mut self, callback: F) {
        self.on_click = Some(Box::new(callback));
    }

    fn local_bounds(&self) -> Rect {
        self.bounds.local()
    }
}

impl TouchHandler for Control {
    fn touch_began(&mut self, _point: Point) {
        if !self.enabled {
            return;
        }
        self.tracking = true;
        self.highlighted = true;
    }

    fn touch_moved(&mut self, point: Point) {
        if self.tracking {
            self.highlighted = self.local_bounds().contains_inclusive(point);
        }
    }

    fn touch_ended(&mut self, point: Point) {
        let was_tracking = self.tracking;
        self.tracking = false;
        self.highlighted = false;

        if was_tracking && self.local_bounds().contains_inclusive(point) {
            if let Some(ref callback) = self.on_click {
                callback();
            }
        }
    }

    fn touch_cancelled(&mut self, _point: Point) {
        self.tracking = false;
        self.highlighted = false;
    }
}

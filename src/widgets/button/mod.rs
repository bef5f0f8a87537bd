//! Button with a touch-driven ripple reveal.
//!
//! A [`RippleButton`] wraps a [`Control`] and drives a [`Compositor`]:
//!
//! - touch down spawns a ripple circle at the finger that scales in;
//! - crossing the bounds while the finger is down shrinks and fades the
//!   ripple (leaving) or grows and reveals it again (re-entering);
//! - touch up or cancel detaches the ripple immediately.
//!
//! Movement that stays on the same side of the bounds issues nothing.
//! The button layer is clipped to a mask cut from the normal-state image, so
//! the ripple only shows over the image's silhouette.
//!
//! # Example
//! ```ignore
//! let mut button = RippleButton::new(Rect::new(0.0, 0.0, 100.0, 100.0), CommandRecorder::new())
//!     .on_click(|| println!("clicked"));
//! button.set_foreground_image(ForegroundImage::load(&"icon.png".into()), ControlState::NORMAL);
//! button.touch_began(Point::new(50.0, 50.0));
//! ```

mod config;
mod mask;
mod ripple;

pub use config::{RippleConfig, BUTTON_CORNER_RADIUS, RIPPLE_VISIBLE_OPACITY};
pub use mask::SelectionMask;
pub use ripple::{RippleLayer, TouchZoneState, TRANSITION_ANIMATION_KEY, ZOOM_ANIMATION_KEY};

use crate::renderer::Compositor;

use super::control::{Control, ControlState, TouchHandler};
use super::image::ForegroundImage;
use super::widget::{Event, EventResponse, MouseButton, Point, Rect, Widget};

pub struct RippleButton<C: Compositor> {
    control: Control,
    compositor: C,
    config: RippleConfig,
    zone: TouchZoneState,
    ripple: Option<RippleLayer>,
    mask: Option<SelectionMask>,
}

impl<C: Compositor> RippleButton<C> {
    pub fn new(bounds: Rect, compositor: C) -> Self {
        Self::with_config(bounds, compositor, RippleConfig::default())
    }

    pub fn with_config(bounds: Rect, mut compositor: C, config: RippleConfig) -> Self {
        compositor.set_corner_radius(config.corner_radius);
        Self {
            control: Control::new(bounds),
            compositor,
            config,
            zone: TouchZoneState::default(),
            ripple: None,
            mask: None,
        }
    }

    /// Set a callback fired when a touch lifts inside the button.
    pub fn on_click<F: Fn() + 'static>(mut self, callback: F) -> Self {
        self.control.set_on_click(callback);
        self
    }

    /// Assign the image shown in `state`.
    ///
    /// The normal-state image is also used for the highlighted state, so the
    /// control never dims under the ripple, and it regenerates the selection
    /// mask. Clearing the normal image clears the mask.
    pub fn set_foreground_image(&mut self, image: Option<ForegroundImage>, state: ControlState) {
        self.control.set_image(image.clone(), state);
        if state != ControlState::NORMAL {
            return;
        }

        self.control.set_image(image.clone(), ControlState::HIGHLIGHTED);

        self.mask = image.map(|image| SelectionMask::from_image(&image, self.config.mask_scale));
        match self.mask {
            Some(ref mask) => log::debug!("Selection mask set to {:?}", mask.frame()),
            None => log::debug!("Selection mask cleared"),
        }
        self.compositor.set_mask(self.mask.clone());
    }

    /// Enable or disable the button. Disabling ends any gesture in progress
    /// and detaches its ripple.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.control.set_enabled(enabled);
        if !enabled {
            self.remove_ripple();
        }
    }

    pub fn control(&self) -> &Control {
        &self.control
    }

    pub fn compositor(&self) -> &C {
        &self.compositor
    }

    pub fn compositor_mut(&mut self) -> &mut C {
        &mut self.compositor
    }

    pub fn config(&self) -> &RippleConfig {
        &self.config
    }

    /// Zone of the most recently processed touch.
    pub fn zone(&self) -> TouchZoneState {
        self.zone
    }

    /// The live ripple, if a gesture is in progress.
    pub fn ripple(&self) -> Option<&RippleLayer> {
        self.ripple.as_ref()
    }

    pub fn mask(&self) -> Option<&SelectionMask> {
        self.mask.as_ref()
    }

    fn remove_ripple(&mut self) {
        if let Some(ripple) = self.ripple.take() {
            log::debug!("Removing ripple {:?}", ripple.id());
            ripple.remove(&mut self.compositor);
        }
    }
}

impl<C: Compositor> TouchHandler for RippleButton<C> {
    fn touch_began(&mut self, point: Point) {
        self.control.touch_began(point);
        self.zone = TouchZoneState::Inside;

        self.remove_ripple();
        let bounds = self.control.bounds().local();
        let ripple = RippleLayer::spawn(&mut self.compositor, bounds, point, &self.config);
        log::debug!(
            "Ripple {:?} spawned at ({}, {}) with radius {}",
            ripple.id(),
            point.x,
            point.y,
            ripple.radius()
        );
        self.ripple = Some(ripple);
    }

    fn touch_moved(&mut self, point: Point) {
        self.control.touch_moved(point);

        let zone = TouchZoneState::classify(self.control.bounds().local(), point);
        if zone == self.zone {
            log::trace!("Touch moved within {:?}", zone);
            return;
        }
        self.zone = zone;

        match self.ripple.as_mut() {
            Some(ripple) => {
                log::debug!("Touch crossed bounds, now {:?}", zone);
                ripple.transition(&mut self.compositor, point, zone, &self.config);
            }
            None => log::warn!("Zone changed to {:?} with no active ripple", zone),
        }
    }

    fn touch_ended(&mut self, point: Point) {
        self.control.touch_ended(point);
        self.remove_ripple();
    }

    fn touch_cancelled(&mut self, point: Point) {
        self.control.touch_cancelled(point);
        self.remove_ripple();
    }
}

impl<C: Compositor> Widget for RippleButton<C> {
    fn bounds(&self) -> Rect {
        self.control.bounds()
    }

    fn set_bounds(&mut self, bounds: Rect) {
        self.control.set_bounds(bounds);
    }

    fn event(&mut self, event: &Event) -> EventResponse {
        let bounds = self.control.bounds();
        // A ripple can outlive tracking when `touch_began` is called directly
        // on a disabled control; its end and cancel must still land.
        let active = self.control.is_tracking() || self.ripple.is_some();

        match event {
            Event::TouchBegin { .. } | Event::MouseDown { .. } => {
                if let Event::MouseDown { button, .. } = event {
                    if *button != MouseButton::Left {
                        return EventResponse::Ignored;
                    }
                }
                let Some((x, y)) = event.coords() else {
                    return EventResponse::Ignored;
                };
                if !self.control.is_enabled() || !bounds.contains(x, y) {
                    return EventResponse::Ignored;
                }
                self.touch_began(bounds.to_local(x, y));
            }
            Event::TouchMove { .. } | Event::MouseMove { .. } if active => {
                let Some((x, y)) = event.coords() else {
                    return EventResponse::Ignored;
                };
                self.touch_moved(bounds.to_local(x, y));
            }
            Event::TouchEnd { .. } | Event::MouseUp { .. } if active => {
                if let Event::MouseUp { button, .. } = event {
                    if *button != MouseButton::Left {
                        return EventResponse::Ignored;
                    }
                }
                let Some((x, y)) = event.coords() else {
                    return EventResponse::Ignored;
                };
                self.touch_ended(bounds.to_local(x, y));
            }
            Event::TouchCancel { .. } | Event::MouseLeave if active => {
                let point = match event.coords() {
                    Some((x, y)) => bounds.to_local(x, y),
                    None => Point::ORIGIN,
                };
                self.touch_cancelled(point);
            }
            _ => return EventResponse::Ignored,
        }

        EventResponse::Handled
    }
}

//! Drives a ripple button through a touch that leaves and re-enters the
//! button, printing every command a host compositor would receive.
//!
//! Run with `RUST_LOG=debug` to also see the gesture log.

use image::{Rgba, RgbaImage};
use ripple_button::prelude::*;

fn main() {
    env_logger::init();

    let mut button = ripple_button(Rect::new(20.0, 20.0, 100.0, 100.0), CommandRecorder::new())
        .on_click(|| println!("clicked"));

    let icon = ForegroundImage::from_rgba(RgbaImage::from_pixel(100, 100, Rgba([30, 30, 30, 255])));
    button.set_foreground_image(Some(icon), ControlState::NORMAL);

    let touches = |x: f32, y: f32| vec![Touch::new(0, x, y)];
    let events = [
        Event::TouchBegin {
            touches: touches(70.0, 70.0),
        },
        Event::TouchMove {
            touches: touches(90.0, 70.0),
        },
        Event::TouchMove {
            touches: touches(170.0, 70.0),
        },
        Event::TouchMove {
            touches: touches(70.0, 70.0),
        },
        Event::TouchEnd {
            touches: touches(70.0, 70.0),
        },
    ];

    for event in &events {
        let response = button.event(event);
        println!("{:?} -> {:?}", event, response);
        for command in button.compositor_mut().take_commands() {
            println!("    {:?}", command);
        }
    }
}

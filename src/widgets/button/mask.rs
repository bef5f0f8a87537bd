use crate::widgets::image::ForegroundImage;
use crate::widgets::{Point, Rect};

/// Clip mask cut from a foreground image's silhouette.
///
/// The frame sits at the button's local origin. Coverage is the image's
/// alpha channel stretched over the frame.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionMask {
    frame: Rect,
    image: ForegroundImage,
}

impl SelectionMask {
    /// Build a mask from `image`, its frame scaled by `scale`.
    pub fn from_image(image: &ForegroundImage, scale: f32) -> Self {
        let (width, height) = image.size();
        Self {
            frame: Rect::from_size(width * scale, height * scale),
            image: image.clone(),
        }
    }

    pub fn frame(&self) -> Rect {
        self.frame
    }

    pub fn image(&self) -> &ForegroundImage {
        &self.image
    }

    /// Whether drawing at `point` (local coordinates) survives the clip.
    pub fn covers(&self, point: Point) -> bool {
        // An empty frame clips everything.
        if !self.frame.contains(point.x, point.y) {
            return false;
        }

        let (width, height) = self.image.size();
        let px = (point.x / self.frame.width * width) as u32;
        let py = (point.y / self.frame.height * height) as u32;
        self.image.alpha_at(px, py) > 0
    }
}

#[cfg(test)]
mod tests {
    use image::{Rgba, RgbaImage};

    use super::*;

    /// 4x4 image, opaque only in the top-left 2x2 quadrant.
    fn quadrant_image() -> ForegroundImage {
        let mut pixels = RgbaImage::new(4, 4);
        for x in 0..2 {
            for y in 0..2 {
                pixels.put_pixel(x, y, Rgba([0, 0, 0, 255]));
            }
        }
        ForegroundImage::from_rgba(pixels)
    }

    #[test]
    fn test_frame_matches_image() {
        let mask = SelectionMask::from_image(&quadrant_image(), 1.0);
        assert_eq!(mask.frame(), Rect::from_size(4.0, 4.0));
    }

    #[test]
    fn test_frame_scales() {
        let mask = SelectionMask::from_image(&quadrant_image(), 0.5);
        assert_eq!(mask.frame(), Rect::from_size(2.0, 2.0));
    }

    #[test]
    fn test_covers_follows_alpha() {
        let mask = SelectionMask::from_image(&quadrant_image(), 1.0);
        assert!(mask.covers(Point::new(0.5, 0.5)));
        assert!(mask.covers(Point::new(1.9, 1.9)));
        assert!(!mask.covers(Point::new(3.0, 3.0)));
        assert!(!mask.covers(Point::new(-1.0, 0.5)));
        assert!(!mask.covers(Point::new(4.0, 0.5)));
    }

    #[test]
    fn test_covers_stretches_alpha_over_frame() {
        let mask = SelectionMask::from_image(&quadrant_image(), 0.5);
        assert!(mask.covers(Point::new(0.9, 0.9)));
        assert!(!mask.covers(Point::new(1.5, 1.5)));
    }
}

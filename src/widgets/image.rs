//! Foreground images for buttons.
//!
//! Supports PNG, JPEG, GIF, WebP raster formats and SVG vector graphics.
//! Images are decoded once into RGBA pixels so the button can derive its
//! selection mask from the alpha channel.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use image::RgbaImage;

/// Source for an image - can be a file path or in-memory bytes.
#[derive(Debug, Clone, PartialEq)]
pub enum ImageSource {
    /// Raster image from a file path (PNG, JPEG, GIF, WebP)
    Path(PathBuf),
    /// Raster image from in-memory bytes
    Bytes(Arc<[u8]>),
    /// SVG from a file path
    SvgPath(PathBuf),
    /// SVG from in-memory bytes
    SvgBytes(Arc<[u8]>),
}

impl ImageSource {
    /// Check if this is an SVG source
    pub fn is_svg(&self) -> bool {
        matches!(self, ImageSource::SvgPath(_) | ImageSource::SvgBytes(_))
    }
}

impl From<&str> for ImageSource {
    fn from(path: &str) -> Self {
        ImageSource::from(PathBuf::from(path))
    }
}

impl From<PathBuf> for ImageSource {
    fn from(path: PathBuf) -> Self {
        if path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"))
        {
            ImageSource::SvgPath(path)
        } else {
            ImageSource::Path(path)
        }
    }
}

/// A decoded image assigned to a button state.
///
/// Cloning is cheap: pixels are shared.
#[derive(Debug, Clone)]
pub struct ForegroundImage {
    pixels: Arc<RgbaImage>,
}

impl PartialEq for ForegroundImage {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.pixels, &other.pixels) || *self.pixels == *other.pixels
    }
}

impl ForegroundImage {
    /// Wrap already decoded pixels.
    pub fn from_rgba(pixels: RgbaImage) -> Self {
        Self {
            pixels: Arc::new(pixels),
        }
    }

    /// Decode an image source.
    ///
    /// Returns `None` if the image cannot be read or parsed.
    pub fn load(source: &ImageSource) -> Option<Self> {
        let decoded = match source {
            ImageSource::Path(path) => image::open(path).ok().map(|img| img.to_rgba8()),
            ImageSource::Bytes(bytes) => image::load_from_memory(bytes)
                .ok()
                .map(|img| img.to_rgba8()),
            ImageSource::SvgPath(path) => rasterize_svg_file(path),
            ImageSource::SvgBytes(bytes) => rasterize_svg(bytes),
        };

        if decoded.is_none() {
            log::warn!("Failed to decode foreground image {:?}", source);
        }
        decoded.map(Self::from_rgba)
    }

    /// Intrinsic size in logical pixels.
    pub fn size(&self) -> (f32, f32) {
        (self.pixels.width() as f32, self.pixels.height() as f32)
    }

    /// Alpha at a pixel position, or 0 outside the image.
    pub fn alpha_at(&self, x: u32, y: u32) -> u8 {
        self.pixels.get_pixel_checked(x, y).map_or(0, |p| p.0[3])
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }
}

fn rasterize_svg_file(path: &Path) -> Option<RgbaImage> {
    let data = std::fs::read(path).ok()?;
    rasterize_svg(&data)
}

/// Render an SVG at its intrinsic size.
fn rasterize_svg(bytes: &[u8]) -> Option<RgbaImage> {
    let tree = resvg::usvg::Tree::from_data(bytes, &resvg::usvg::Options::default()).ok()?;
    let size = tree.size();

    let width = size.width().ceil() as u32;
    let height = size.height().ceil() as u32;
    if width == 0 || height == 0 {
        return None;
    }

    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)?;
    resvg::render(
        &tree,
        resvg::tiny_skia::Transform::default(),
        &mut pixmap.as_mut(),
    );

    // Premultiplied, but alpha is all the mask needs.
    RgbaImage::from_raw(width, height, pixmap.take())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_from_path_detects_svg() {
        assert!(ImageSource::from("icon.SVG").is_svg());
        assert!(!ImageSource::from("photo.png").is_svg());
    }

    #[test]
    fn test_size_and_alpha() {
        let mut pixels = RgbaImage::new(4, 2);
        pixels.put_pixel(1, 1, image::Rgba([0, 0, 0, 200]));
        let image = ForegroundImage::from_rgba(pixels);

        assert_eq!(image.size(), (4.0, 2.0));
        assert_eq!(image.alpha_at(1, 1), 200);
        assert_eq!(image.alpha_at(0, 0), 0);
        assert_eq!(image.alpha_at(10, 10), 0);
    }

    #[test]
    fn test_load_rejects_garbage() {
        let source = ImageSource::Bytes(Arc::from(&b"not an image"[..]));
        assert!(ForegroundImage::load(&source).is_none());
    }

    #[test]
    fn test_load_svg_bytes() {
        let svg = br#"<svg xmlns="http://www.w3.org/2000/svg" width="8" height="6">
            <rect width="8" height="6" fill="black"/></svg>"#;
        let image = ForegroundImage::load(&ImageSource::SvgBytes(Arc::from(&svg[..])))
            .expect("svg should rasterize");
        assert_eq!(image.size(), (8.0, 6.0));
        assert_eq!(image.alpha_at(4, 3), 255);
    }

    #[test]
    fn test_clones_compare_equal() {
        let image = ForegroundImage::from_rgba(RgbaImage::new(2, 2));
        assert_eq!(image.clone(), image);
    }
}

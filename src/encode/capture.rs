use std::path::Path;

use anyhow::Context as _;

use crate::element::model::ShapeKind;
use crate::foundation::core::{Point, Rgba};
use crate::foundation::error::{ReelError, ReelResult};
use crate::scene::tree::{SceneTree, WorldVisual};

/// Writes the current state of a scene to an image file.
///
/// Called once per exported frame, after every element has been applied for that frame's time.
pub trait FrameCapture<S: ?Sized> {
    /// Capture `scene` into `path`; `index` is zero-based and `padding` is the digit count used in
    /// the file name.
    fn capture_frame(&mut self, scene: &S, path: &Path, index: u64, padding: usize) -> ReelResult<()>;
}

/// Digits needed for the largest frame index: `1 + floor(log10(total_frames))`, `1` for none.
pub fn padding_digits(total_frames: u64) -> usize {
    match total_frames.checked_ilog10() {
        Some(d) => d as usize + 1,
        None => 1,
    }
}

/// `<name><zero-padded index>.png`
pub fn frame_file_name(name: &str, index: u64, padding: usize) -> String {
    format!("{name}{index:0padding$}.png")
}

/// Encoder input pattern matching [`frame_file_name`], e.g. `frame%03d.png`.
pub fn frame_pattern(name: &str, padding: usize) -> String {
    format!("{name}%0{padding}d.png")
}

/// Delete the `count` frame files an export wrote; returns how many existed.
pub fn remove_frame_files(dir: &Path, name: &str, count: u64, padding: usize) -> ReelResult<u64> {
    let mut removed = 0;
    for index in 0..count {
        let path = dir.join(frame_file_name(name, index, padding));
        if path.is_file() {
            std::fs::remove_file(&path)
                .with_context(|| format!("failed to remove frame '{}'", path.display()))?;
            removed += 1;
        }
    }
    Ok(removed)
}

/// Delete every file in `dir` except `.mp4` videos; returns how many were removed.
pub fn clear_frames(dir: &Path) -> ReelResult<u64> {
    remove_files_where(dir, |p| !is_mp4(p))
}

/// Delete every `.mp4` file in `dir`; returns how many were removed.
pub fn clear_videos(dir: &Path) -> ReelResult<u64> {
    remove_files_where(dir, is_mp4)
}

fn is_mp4(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("mp4"))
}

fn remove_files_where(dir: &Path, keep_going: impl Fn(&Path) -> bool) -> ReelResult<u64> {
    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory '{}'", dir.display()))?;
    let mut removed = 0;
    for entry in entries {
        let path = entry
            .with_context(|| format!("failed to read entry in '{}'", dir.display()))?
            .path();
        if path.is_file() && keep_going(&path) {
            std::fs::remove_file(&path)
                .with_context(|| format!("failed to remove '{}'", path.display()))?;
            removed += 1;
        }
    }
    Ok(removed)
}

/// CPU rasterizer that fills circle and rectangle visuals and writes PNGs.
///
/// World space is y-up with the origin at the image centre; one world unit spans
/// `pixels_per_unit` pixels. Visuals are drawn in scene order with straight-alpha source-over
/// blending, sampling each pixel at its centre.
#[derive(Clone, Debug, PartialEq)]
pub struct PngCapture {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Pixels per world unit.
    pub pixels_per_unit: f64,
    /// Color behind every visual.
    pub background: Rgba,
}

impl PngCapture {
    /// Capture at `width` x `height` with 100 pixels per unit over opaque black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels_per_unit: 100.0,
            background: Rgba::BLACK,
        }
    }

    /// Reject empty images and non-positive scales.
    pub fn validate(&self) -> ReelResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(ReelError::capture("image width/height must be non-zero"));
        }
        if !self.pixels_per_unit.is_finite() || self.pixels_per_unit <= 0.0 {
            return Err(ReelError::capture(format!(
                "pixels_per_unit must be finite and > 0, got {}",
                self.pixels_per_unit
            )));
        }
        Ok(())
    }

    /// Rasterize `scene` into an RGBA8 image.
    pub fn render(&self, scene: &SceneTree) -> ReelResult<image::RgbaImage> {
        self.validate()?;
        let (w, h) = (self.width as usize, self.height as usize);
        let mut buf = vec![self.background; w * h];
        for visual in scene.world_visuals() {
            self.fill(&mut buf, &visual);
        }

        let mut data = Vec::with_capacity(w * h * 4);
        for px in &buf {
            data.extend_from_slice(&px.to_rgba8());
        }
        image::RgbaImage::from_raw(self.width, self.height, data)
            .ok_or_else(|| ReelError::capture("pixel buffer does not match image size"))
    }

    fn world_to_pixel(&self, p: Point) -> Point {
        Point::new(
            p.x * self.pixels_per_unit + f64::from(self.width) / 2.0,
            f64::from(self.height) / 2.0 - p.y * self.pixels_per_unit,
        )
    }

    fn pixel_to_world(&self, x: f64, y: f64) -> Point {
        Point::new(
            (x - f64::from(self.width) / 2.0) / self.pixels_per_unit,
            (f64::from(self.height) / 2.0 - y) / self.pixels_per_unit,
        )
    }

    fn fill(&self, buf: &mut [Rgba], wv: &WorldVisual) {
        if wv.color.a <= 0.0 || wv.transform.determinant().abs() < 1e-12 {
            return;
        }
        let inverse = wv.transform.inverse();
        let (hw, hh) = (wv.visual.width / 2.0, wv.visual.height / 2.0);
        if hw <= 0.0 || hh <= 0.0 {
            return;
        }

        // Pixel bounding box of the transformed local box.
        let corners = [(-hw, -hh), (hw, -hh), (hw, hh), (-hw, hh)]
            .map(|(x, y)| self.world_to_pixel(wv.transform * Point::new(x, y)));
        let min_x = corners.iter().map(|p| p.x).fold(f64::INFINITY, f64::min);
        let max_x = corners.iter().map(|p| p.x).fold(f64::NEG_INFINITY, f64::max);
        let min_y = corners.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);
        let max_y = corners.iter().map(|p| p.y).fold(f64::NEG_INFINITY, f64::max);
        let x0 = min_x.floor().max(0.0) as usize;
        let y0 = min_y.floor().max(0.0) as usize;
        let x1 = (max_x.ceil().min(f64::from(self.width))).max(0.0) as usize;
        let y1 = (max_y.ceil().min(f64::from(self.height))).max(0.0) as usize;

        let stride = self.width as usize;
        for py in y0..y1 {
            for px in x0..x1 {
                let world = self.pixel_to_world(px as f64 + 0.5, py as f64 + 0.5);
                let local = inverse * world;
                let inside = match wv.visual.shape {
                    ShapeKind::Rect => local.x.abs() <= hw && local.y.abs() <= hh,
                    ShapeKind::Circle => {
                        let (u, v) = (local.x / hw, local.y / hh);
                        u * u + v * v <= 1.0
                    }
                };
                if inside {
                    let dst = &mut buf[py * stride + px];
                    *dst = source_over(wv.color, *dst);
                }
            }
        }
    }
}

impl FrameCapture<SceneTree> for PngCapture {
    fn capture_frame(
        &mut self,
        scene: &SceneTree,
        path: &Path,
        index: u64,
        padding: usize,
    ) -> ReelResult<()> {
        let img = self.render(scene)?;
        img.save_with_format(path, image::ImageFormat::Png)
            .map_err(|e| {
                ReelError::capture(format!(
                    "failed to write frame {index:0padding$} to '{}': {e}",
                    path.display()
                ))
            })
    }
}

fn source_over(src: Rgba, dst: Rgba) -> Rgba {
    let sa = src.a.clamp(0.0, 1.0);
    let da = dst.a.clamp(0.0, 1.0);
    let out_a = sa + da * (1.0 - sa);
    if out_a <= 0.0 {
        return Rgba::TRANSPARENT;
    }
    let mix = |s: f64, d: f64| (s * sa + d * da * (1.0 - sa)) / out_a;
    Rgba::new(mix(src.r, dst.r), mix(src.g, dst.g), mix(src.b, dst.b), out_a)
}

#[cfg(test)]
#[path = "../../tests/unit/encode/capture.rs"]
mod tests;

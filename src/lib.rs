//! Renders an SVG icon into a square PNG.
//! The vector canvas is scaled onto a `size × size` pixel grid according to a [`Fit`].
//!
//! ## Examples
//! ### Basic
//! Renders `icon.svg` into a 1024×1024 `icon.png`, cropping any overflow
//! of a non-square canvas.
//!
//! ```no_run
//! # use icon_rasterizer::SvgRasterizer;
//! SvgRasterizer::default().render_file("icon.svg", "icon.png");
//! ```
//!
//! ### Custom Size
//! ```no_run
//! # use icon_rasterizer::{Fit, SvgRasterizer};
//! SvgRasterizer::default()
//!     .size(512)
//!     .fit(Fit::Contain)
//!     .render_file("icon.svg", "icon-512.png");
//! ```

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, RgbaImage};
use resvg::tiny_skia::{Pixmap, Transform};
use resvg::usvg;
use std::fs::{self, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

mod convert;
mod error;
pub mod logger;

pub use convert::{convert, convert_with, try_convert, FOLLOW_UP_HINT};
pub use error::{Error, Result};

/// Edge length of the rendered icon.
pub const DEFAULT_SIZE: u32 = 1024;

/// How a vector canvas is mapped onto the square output.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Fit {
    /// Scale uniformly until the square is covered, then crop the overflow.
    #[default]
    Cover,
    /// Scale uniformly until the whole canvas fits, padding with transparency.
    Contain,
    /// Stretch each axis independently.
    Fill,
}

/// Renders SVG files into square PNG images.
#[derive(Debug, Clone)]
pub struct SvgRasterizer {
    size: u32,
    fit: Fit,
}

impl Default for SvgRasterizer {
    fn default() -> Self {
        SvgRasterizer {
            size: DEFAULT_SIZE,
            fit: Fit::default(),
        }
    }
}

impl SvgRasterizer {
    /// Customizes the edge length of the output. Defaults to [`DEFAULT_SIZE`].
    pub fn size(&mut self, size: u32) -> &mut SvgRasterizer {
        self.size = size;
        self
    }

    /// Customizes how non-square canvases are fitted. Defaults to [`Fit::Cover`].
    pub fn fit(&mut self, fit: Fit) -> &mut SvgRasterizer {
        self.fit = fit;
        self
    }

    /// Renders SVG data into a straight-alpha RGBA image.
    ///
    /// Relative `href`s inside the document are resolved against `resources_dir`.
    /// System fonts are scanned on every call; callers rendering many documents
    /// should build the options once and use [`SvgRasterizer::render_with`].
    pub fn render(&self, svg: &[u8], resources_dir: Option<PathBuf>) -> Result<RgbaImage> {
        let mut options = usvg::Options {
            resources_dir,
            ..usvg::Options::default()
        };
        options.fontdb_mut().load_system_fonts();

        self.render_with(svg, &options)
    }

    /// Renders SVG data with caller-provided parsing options.
    pub fn render_with(&self, svg: &[u8], options: &usvg::Options<'_>) -> Result<RgbaImage> {
        let tree = usvg::Tree::from_data(svg, options)?;
        let canvas = tree.size();
        debug!(
            width = canvas.width(),
            height = canvas.height(),
            "parsed SVG canvas"
        );

        let mut pixmap = Pixmap::new(self.size, self.size).ok_or(Error::InvalidSize(self.size))?;
        let transform = fit_transform(canvas.width(), canvas.height(), self.size, self.fit);
        debug!(?transform, fit = ?self.fit, "rendering");
        resvg::render(&tree, transform, &mut pixmap.as_mut());

        let data = pixmap
            .pixels()
            .iter()
            .flat_map(|pixel| {
                let color = pixel.demultiply();
                [color.red(), color.green(), color.blue(), color.alpha()]
            })
            .collect();
        RgbaImage::from_raw(self.size, self.size, data).ok_or(Error::InvalidSize(self.size))
    }

    /// Renders `source_file_path` and writes a PNG to `output_file_path`,
    /// replacing any file already there.
    pub fn render_file(
        &self,
        source_file_path: impl AsRef<Path>,
        output_file_path: impl AsRef<Path>,
    ) -> Result<()> {
        let source = source_file_path.as_ref();
        let svg = fs::read(source)?;
        let resources_dir = fs::canonicalize(source)
            .ok()
            .and_then(|p| p.parent().map(Path::to_path_buf));
        let image = self.render(&svg, resources_dir)?;

        // The destination is only opened once rendering succeeded.
        let file = OpenOptions::new()
            .create(true)
            .truncate(true)
            .write(true)
            .open(&output_file_path)?;
        let mut writer = BufWriter::new(file);
        encode_png(&mut writer, &image)?;
        writer.flush()?;

        debug!(path = %output_file_path.as_ref().display(), "wrote PNG");
        Ok(())
    }
}

fn encode_png(writer: impl Write, image: &RgbaImage) -> Result<()> {
    PngEncoder::new(writer).write_image(
        image.as_raw(),
        image.width(),
        image.height(),
        ExtendedColorType::Rgba8,
    )?;
    Ok(())
}

fn fit_transform(width: f32, height: f32, size: u32, fit: Fit) -> Transform {
    let size = size as f32;
    let (sx, sy) = (size / width, size / height);
    let (sx, sy) = match fit {
        Fit::Cover => (sx.max(sy), sx.max(sy)),
        Fit::Contain => (sx.min(sy), sx.min(sy)),
        Fit::Fill => (sx, sy),
    };
    let tx = (size - width * sx) / 2.0;
    let ty = (size - height * sy) / 2.0;
    Transform::from_row(sx, 0.0, 0.0, sy, tx, ty)
}

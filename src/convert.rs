use crate::{Error, Result, SvgRasterizer, DEFAULT_SIZE};
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tracing::{debug, info};

/// Printed after a successful conversion.
pub const FOLLOW_UP_HINT: &str = "Now you can run: flutter pub run flutter_launcher_icons";

/// Converts `source` into a [`DEFAULT_SIZE`] PNG at `dest` and reports the
/// outcome on stdout/stderr. Returns `true` on success.
pub fn convert(source: impl AsRef<Path>, dest: impl AsRef<Path>) -> bool {
    convert_with(source, dest, &mut io::stdout().lock(), &mut io::stderr().lock())
}

/// Same as [`convert`] with explicit sinks for success and error messages.
pub fn convert_with(
    source: impl AsRef<Path>,
    dest: impl AsRef<Path>,
    out: &mut impl Write,
    err: &mut impl Write,
) -> bool {
    let (source, dest) = (source.as_ref(), dest.as_ref());
    // Console write failures don't change the outcome.
    match try_convert(source, dest) {
        Ok(()) => {
            let _ = writeln!(
                out,
                "✅ Successfully converted {} to {} ({DEFAULT_SIZE}x{DEFAULT_SIZE})",
                source.display(),
                dest.display(),
            );
            let _ = writeln!(out, "🎉 {FOLLOW_UP_HINT}");
            true
        }
        Err(e) if e.is_missing_source() => {
            let _ = writeln!(err, "❌ {e}");
            false
        }
        Err(e) => {
            let _ = writeln!(err, "❌ Error converting SVG: {e}");
            false
        }
    }
}

/// Checks that `source` exists, creates the parent directory of `dest` and
/// renders a [`DEFAULT_SIZE`] PNG into it.
pub fn try_convert(source: impl AsRef<Path>, dest: impl AsRef<Path>) -> Result<()> {
    let (source, dest) = (source.as_ref(), dest.as_ref());

    if !source.exists() {
        return Err(Error::MissingSourceFile(source.to_owned()));
    }

    if let Some(dir) = dest.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        if !dir.exists() {
            debug!(dir = %dir.display(), "creating output directory");
            fs::create_dir_all(dir)?;
        }
    }

    SvgRasterizer::default().render_file(source, dest)?;
    info!(source = %source.display(), dest = %dest.display(), "converted");
    Ok(())
}

//! One invocation: banner, validation, decoding, warnings, rendering,
//! printing.

use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;

use crate::cli::{Args, USAGE};
use crate::config::Settings;
use crate::display::FrameRenderer;
use crate::error::Error;
use crate::source;

pub const PROGRAM: &str = "terminal-image";

/// How an invocation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    Failure,
}

impl From<Status> for ExitCode {
    fn from(status: Status) -> Self {
        match status {
            Status::Success => ExitCode::SUCCESS,
            Status::Failure => ExitCode::from(1),
        }
    }
}

pub fn write_banner<W: Write>(out: &mut W, program: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "List of Arguments: {program} {USAGE}")?;
    writeln!(out)
}

/// Run one invocation against `out`. Failures are reported as an
/// `Error: <message>` line; only I/O errors on `out` escape.
///
/// The image is decoded before any argument warning is printed, so a
/// decode failure is never preceded by warnings.
pub fn execute<W: Write>(
    args: &Args,
    settings: &Settings,
    cwd: &Path,
    out: &mut W,
) -> anyhow::Result<Status> {
    write_banner(out, PROGRAM)?;
    log::debug!("Arguments: {args:?}");

    let path = match source::validate(args.image_path(), cwd, settings) {
        Ok(path) => path,
        Err(e) => return report(out, e),
    };

    let loaded = match source::load(&path) {
        Ok(loaded) => loaded,
        Err(e) => return report(out, e),
    };
    for line in loaded.info.attribute_lines() {
        log::debug!("{line}");
    }

    let request = args.render_request(settings);
    for warning in &request.warnings {
        writeln!(out, "Warning: {warning}")?;
    }
    log::debug!("Render config: {:?}", request.config);

    let frame = FrameRenderer::new(request.config).render(&loaded.image);
    drop(loaded);

    frame.write_to(out)?;
    Ok(Status::Success)
}

/// Handle a command line clap refused, or a help/version request, after
/// the banner. Only real usage errors count as a failure.
pub fn report_usage<W: Write>(out: &mut W, err: &clap::Error) -> anyhow::Result<Status> {
    write_banner(out, PROGRAM)?;
    write!(out, "{}", err.render())?;

    if err.use_stderr() {
        Ok(Status::Failure)
    } else {
        Ok(Status::Success)
    }
}

fn report<W: Write>(out: &mut W, err: Error) -> anyhow::Result<Status> {
    log::debug!("Rendering failed: {err:?}");
    writeln!(out, "Error: {err}")?;
    Ok(Status::Failure)
}

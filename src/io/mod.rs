//! Vector exporters.
//!
//! Both serializers are pure functions of their inputs: identical inputs give
//! byte-identical documents.

#[cfg(feature = "svg-io")]
pub mod svg;

#[cfg(feature = "dxf-io")]
pub mod dxf;

use crate::calculator::ToothResult;
use crate::params::DesignParameters;
use std::fs;
use std::path::{Path, PathBuf};

/// Writes `antenna.svg` and `antenna.dxf` (for the enabled features) into
/// `dir`, creating it first. Returns the written paths.
pub fn write_layouts(
    dir: &Path,
    results: &[ToothResult],
    params: &DesignParameters,
) -> Result<Vec<PathBuf>, IoError> {
    fs::create_dir_all(dir)?;
    let mut written = Vec::new();

    #[cfg(feature = "svg-io")]
    {
        let geometry = crate::geometry::build_geometry(results, params);
        let path = dir.join("antenna.svg");
        fs::write(&path, self::svg::to_svg_document(&geometry, params))?;
        written.push(path);
    }

    #[cfg(feature = "dxf-io")]
    {
        let path = dir.join("antenna.dxf");
        fs::write(&path, self::dxf::to_dxf_document(results, params)?)?;
        written.push(path);
    }

    #[cfg(not(any(feature = "svg-io", feature = "dxf-io")))]
    let _ = (results, params);

    Ok(written)
}

/// Generic I/O and encoding errors raised while exporting.
#[derive(Debug)]
pub enum IoError {
    StdIo(std::io::Error),
    Encoding(std::string::FromUtf8Error),
}

impl std::fmt::Display for IoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use IoError::*;

        match self {
            StdIo(error) => write!(f, "std::io::Error: {error}"),
            Encoding(error) => write!(f, "Exported document is not valid UTF-8: {error}"),
        }
    }
}

impl std::error::Error for IoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IoError::StdIo(error) => Some(error),
            IoError::Encoding(error) => Some(error),
        }
    }
}

impl From<std::io::Error> for IoError {
    fn from(value: std::io::Error) -> Self {
        Self::StdIo(value)
    }
}

impl From<std::string::FromUtf8Error> for IoError {
    fn from(value: std::string::FromUtf8Error) -> Self {
        Self::Encoding(value)
    }
}

//! Loading of XYZ geometry files.
//!
//! The accepted layout is a fixed 2-line header (atom count and comment,
//! both ignored) followed by one `symbol x y z` row per atom. Rows are
//! whitespace-delimited and blank lines between rows are skipped.
//!
//! ```
//! use std::io::Cursor;
//! use bondscan::io::XyzReader;
//!
//! let text = "2\nhydrogen\nH 0.0 0.0 0.0\nH 0.0 0.0 0.74\n";
//! let geometry = XyzReader::new(Cursor::new(text)).read()?;
//! assert_eq!(geometry.atom_count(), 2);
//! # Ok::<(), bondscan::io::Error>(())
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;

mod error;
mod xyz;

pub use error::Error;

use crate::model::geometry::Geometry;

/// Reader for XYZ geometry data from any buffered source.
pub struct XyzReader<R> {
    reader: R,
}

impl<R: BufRead> XyzReader<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Parses the whole input into a [`Geometry`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] for malformed rows or a short header,
    /// [`Error::TooFewAtoms`] when fewer than two atoms are present, and
    /// [`Error::Io`] when the underlying reader fails.
    pub fn read(self) -> Result<Geometry, Error> {
        xyz::reader::read(self.reader)
    }
}

/// Parses XYZ data from a buffered reader.
pub fn read_xyz<R: BufRead>(reader: R) -> Result<Geometry, Error> {
    XyzReader::new(reader).read()
}

/// Opens and parses an XYZ file.
///
/// A missing path is reported as [`Error::NotFound`]; other open failures
/// surface as [`Error::Io`].
pub fn read_xyz_file(path: impl AsRef<Path>) -> Result<Geometry, Error> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => Error::NotFound {
            path: path.to_path_buf(),
        },
        _ => Error::Io { source: e },
    })?;
    read_xyz(BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_not_found() {
        let path = std::env::temp_dir().join("bondscan-definitely-missing-file.xyz");
        let err = read_xyz_file(&path).unwrap_err();

        assert!(err.is_not_found());
        assert!(!err.is_format_error());
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn reads_file_from_disk() {
        let dir = std::env::temp_dir().join(format!("bondscan-io-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("h2.xyz");
        std::fs::write(&path, "2\nH2\nH 0 0 0\nH 0 0 0.74\n").unwrap();

        let geometry = read_xyz_file(&path).unwrap();
        assert_eq!(geometry.atom_count(), 2);

        std::fs::remove_dir_all(&dir).unwrap();
    }
}

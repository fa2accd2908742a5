// forge-env: Environment-loading shim for forge
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `.env` file loading.
//!
//! ```text
//! EnvFile::load(path)
//!   missing file      --> Ok(None)
//!   unreadable file   --> Err(EnvFileError::Read)
//!   bytes             --> strip UTF-8 BOM, lossy UTF-8 decode
//!   dotenvy::Iter     --> pairs in file order
//!     blank / # lines --> skipped by the parser
//!     malformed line  --> skipped, counted
//! ```
//!
//! Invalid UTF-8 never rejects the file: offending bytes become U+FFFD and
//! the surrounding lines parse as usual.

use std::io::ErrorKind;
use std::path::Path;

use tracing::{debug, trace};

use crate::error::EnvFileError;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Pairs read from an env file, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvFile {
    pairs: Vec<(String, String)>,
    skipped: usize,
}

impl EnvFile {
    /// Reads the env file at `path`.
    ///
    /// Returns `Ok(None)` when the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`EnvFileError::Read`] if the file exists but cannot be opened
    /// or read. Malformed lines and invalid UTF-8 are not errors.
    pub fn load(path: impl AsRef<Path>) -> Result<Option<Self>, EnvFileError> {
        let path = path.as_ref();
        let bytes = match std::fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                trace!(path = %path.display(), "no env file");
                return Ok(None);
            }
            Err(source) => {
                return Err(EnvFileError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(&bytes);
        let text = String::from_utf8_lossy(bytes);
        if matches!(text, std::borrow::Cow::Owned(_)) {
            debug!(path = %path.display(), "invalid UTF-8 replaced");
        }

        let mut file = Self::default();
        for item in dotenvy::from_read_iter(text.as_bytes()) {
            match item {
                Ok(pair) => file.pairs.push(pair),
                Err(dotenvy::Error::LineParse(line, index)) => {
                    debug!(path = %path.display(), index, line = %line, "skipping malformed line");
                    file.skipped += 1;
                }
                Err(e) => return Err(read_error(path, e)),
            }
        }

        debug!(
            path = %path.display(),
            pairs = file.pairs.len(),
            skipped = file.skipped,
            "loaded env file"
        );
        Ok(Some(file))
    }

    /// Number of malformed lines that were ignored.
    #[must_use]
    pub const fn skipped(&self) -> usize {
        self.skipped
    }

    #[must_use]
    pub fn into_pairs(self) -> Vec<(String, String)> {
        self.pairs
    }
}

fn read_error(path: &Path, err: dotenvy::Error) -> EnvFileError {
    let source = match err {
        dotenvy::Error::Io(e) => e,
        other => std::io::Error::new(ErrorKind::InvalidData, other.to_string()),
    };
    EnvFileError::Read {
        path: path.to_path_buf(),
        source,
    }
}

/// Mapping failures
///
/// Both variants are fatal to the pass: the traversal stops at the
/// first one, and the ledger keeps whatever was registered before it.

use crate::module::LoadError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MapError {
    /// A route or declaration module failed to load.
    #[error("failed to load module at {path}")]
    ModuleLoad {
        path: PathBuf,
        #[source]
        source: LoadError,
    },

    /// The filesystem refused a stat or listing.
    #[error("io error at {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_module_load_carries_source() {
        let err = MapError::ModuleLoad {
            path: PathBuf::from("routes/users.rs"),
            source: LoadError::Failed("bad module".into()),
        };
        assert!(err.to_string().contains("routes/users.rs"));
        assert_eq!(err.source().unwrap().to_string(), "bad module");
    }

    #[test]
    fn test_io_display_names_path() {
        let err = MapError::Io {
            path: PathBuf::from("routes"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("routes"));
    }
}

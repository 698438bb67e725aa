use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::error::TtsError;

/// Rotating pool of artifact output paths
///
/// Hands out `<stem>_<slot>.<extension>` paths under a fixed directory,
/// cycling through `pool_size` slots so the directory never grows beyond
/// the pool.
pub struct FileRotation {
    dir: PathBuf,
    pool_size: usize,
    file_stem: String,
    extension: String,
    cursor: AtomicUsize,
}

impl FileRotation {
    /// Create a rotation over `dir`, creating the directory if needed
    ///
    /// # Errors
    ///
    /// Returns an error if `pool_size` is zero or the directory cannot
    /// be created
    pub fn new(dir: PathBuf, pool_size: usize, file_stem: String, extension: String) -> crate::error::Result<Self> {
        if pool_size == 0 {
            return Err(TtsError::ConfigError("rotation pool size must be at least 1".to_string()));
        }

        std::fs::create_dir_all(&dir)?;

        Ok(Self {
            dir,
            pool_size,
            file_stem,
            extension,
            cursor: AtomicUsize::new(0),
        })
    }

    /// Next artifact path in the rotation
    pub fn next_path(&self) -> PathBuf {
        let slot = self.cursor.fetch_add(1, Ordering::Relaxed) % self.pool_size;
        self.dir.join(format!("{}_{slot:03}.{}", self.file_stem, self.extension))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rotation(dir: PathBuf, pool_size: usize) -> FileRotation {
        FileRotation::new(dir, pool_size, "vo".to_string(), "mp3".to_string()).unwrap()
    }

    #[test]
    fn slots_are_zero_padded() {
        let dir = tempfile::tempdir().unwrap();
        let rotation = rotation(dir.path().to_path_buf(), 64);

        assert_eq!(rotation.next_path(), dir.path().join("vo_000.mp3"));
        assert_eq!(rotation.next_path(), dir.path().join("vo_001.mp3"));
    }

    #[test]
    fn rotation_wraps_at_the_pool_size() {
        let dir = tempfile::tempdir().unwrap();
        let rotation = rotation(dir.path().to_path_buf(), 3);

        let first_cycle: Vec<_> = (0..3).map(|_| rotation.next_path()).collect();
        assert_eq!(rotation.next_path(), first_cycle[0]);
        assert_eq!(rotation.next_path(), first_cycle[1]);
    }

    #[test]
    fn creates_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("audio").join("voiceover");

        let _rotation = rotation(nested.clone(), 4);
        assert!(nested.is_dir());
    }

    #[test]
    fn zero_pool_size_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let result = FileRotation::new(dir.path().to_path_buf(), 0, "vo".to_string(), "mp3".to_string());
        assert!(result.is_err());
    }
}

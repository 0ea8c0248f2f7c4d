use std::path::Path;
use std::fs;
use std::io::Write;
use log::trace;

use crate::convert::error::{ConvertError, Result};
use crate::convert::types::FILE_MODE;

/// Check if a file has exactly the given extension (case-sensitive)
pub fn has_extension(path: impl AsRef<Path>, extension: &str) -> bool {
    path.as_ref()
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext == extension)
}

/// Read a whole file, whatever its encoding
pub fn read_file(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    let path = path.as_ref();
    trace!("Reading {}", path.display());
    fs::read(path).map_err(|source| ConvertError::FileRead {
        path: path.to_path_buf(),
        source,
    })
}

/// Replace the contents of a file in a single write, creating it with
/// `FILE_MODE` if it does not exist
pub fn write_file(path: impl AsRef<Path>, content: &[u8]) -> Result<()> {
    let path = path.as_ref();
    trace!("Writing {} bytes to {}", content.len(), path.display());

    let mut options = fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(FILE_MODE);
    }

    options
        .open(path)
        .and_then(|mut file| file.write_all(content))
        .map_err(|source| ConvertError::FileWrite {
            path: path.to_path_buf(),
            source,
        })
}

/// Async counterpart of [`read_file`]
pub async fn read_file_async(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    let path = path.as_ref();
    trace!("Reading {}", path.display());
    tokio::fs::read(path)
        .await
        .map_err(|source| ConvertError::FileRead {
            path: path.to_path_buf(),
            source,
        })
}

/// Async counterpart of [`write_file`]
pub async fn write_file_async(path: impl AsRef<Path>, content: &[u8]) -> Result<()> {
    use tokio::io::AsyncWriteExt;

    let path = path.as_ref();
    trace!("Writing {} bytes to {}", content.len(), path.display());

    let mut options = tokio::fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    options.mode(FILE_MODE);

    let write = async {
        let mut file = options.open(path).await?;
        file.write_all(content).await?;
        // tokio finishes the write in the background unless flushed
        file.flush().await
    };

    write.await.map_err(|source| ConvertError::FileWrite {
        path: path.to_path_buf(),
        source,
    })
}

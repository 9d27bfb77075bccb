//! Document output

use crate::types::*;
use std::path::Path;

/// Write finished PDF bytes, creating the parent directory if needed
pub async fn save_pdf(bytes: Vec<u8>, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(path, bytes).await?;
    Ok(())
}

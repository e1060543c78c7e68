pub mod image;
pub mod ping;
pub mod text;
pub mod video;

use crate::error::Result;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use std::path::Path;

/// Decodes a base64 payload and writes it to `out`. Returns the byte count.
pub async fn save_base64(payload: &str, out: &Path) -> Result<usize> {
    let bytes = STANDARD.decode(payload.trim())?;
    tokio::fs::write(out, &bytes)
        .await
        .map_err(sg_core::error::ErrorCore::from)?;
    Ok(bytes.len())
}

use crate::client::CliClient;
use crate::commands::save_base64;
use crate::error::{ErrorCli, Result};
use sg_core::server::payload::generate_image_request::GenerateImageRequest;
use std::path::Path;

pub async fn handle(cli_client: &CliClient, prompt: String, out: &Path) -> Result<()> {
    let result = cli_client
        .generate_image(&GenerateImageRequest::new(prompt))
        .await?;
    let Some(image) = result.image_base64 else {
        return Err(ErrorCli::UnexpectedResponse("no image_base64 field".into()));
    };
    let size = save_base64(&image, out).await?;
    println!("✅ Saved image to {} ({size} bytes)", out.display());
    Ok(())
}

use crate::client::CliClient;
use crate::commands::save_base64;
use crate::error::{ErrorCli, Result};
use std::path::Path;

pub async fn handle(cli_client: &CliClient, out: &Path) -> Result<()> {
    let result = cli_client.generate_video().await?;
    match (result.video_url, result.video_base64) {
        (Some(url), _) => println!("🎬 {url}"),
        (None, Some(video)) => {
            let size = save_base64(&video, out).await?;
            println!("✅ Saved video to {} ({size} bytes)", out.display());
        }
        (None, None) => {
            return Err(ErrorCli::UnexpectedResponse(
                "neither video_url nor video_base64".into(),
            ));
        }
    }
    Ok(())
}

use crate::client::CliClient;
use crate::error::Result;

pub async fn handle(cli_client: &CliClient) -> Result<()> {
    cli_client.ping().await?;
    println!("✅ Gateway is up");
    Ok(())
}

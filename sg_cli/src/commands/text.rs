use crate::client::CliClient;
use crate::error::{ErrorCli, Result};
use sg_core::server::payload::generate_text_request::GenerateTextRequest;

pub async fn handle(cli_client: &CliClient, request: &GenerateTextRequest) -> Result<()> {
    let result = cli_client.generate_text(request).await?;
    match result.text {
        Some(text) => {
            println!("{text}");
            Ok(())
        }
        None => Err(ErrorCli::UnexpectedResponse("no text field".into())),
    }
}

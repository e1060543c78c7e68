use clap::Parser;
use clap::Subcommand;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about = "Manual client for the social-gen gateway", long_about = None)]
pub struct Cli {
    /// Base URL of a running gateway
    #[arg(long, global = true, default_value = "http://localhost:3000")]
    pub url: String,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check that the gateway is up
    Ping,
    /// Generate a social media post
    Text {
        #[arg()]
        topic: String,
        #[arg(long)]
        tone: Option<String>,
        #[arg(long)]
        platform: Option<String>,
        #[arg(long)]
        length: Option<String>,
        /// Comma separated, turned into hashtags
        #[arg(short, long)]
        keywords: Option<String>,
    },
    /// Generate an image and save it
    Image {
        #[arg()]
        prompt: String,
        #[arg(short, long, default_value = "image.png")]
        out: PathBuf,
    },
    /// Fetch the demo video
    Video {
        #[arg(short, long, default_value = "video.mp4")]
        out: PathBuf,
    },
}

pub mod post;
pub mod prompt;

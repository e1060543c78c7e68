pub mod error_response;
pub mod generate_image_request;
pub mod generate_text_request;
pub mod normalized_result;

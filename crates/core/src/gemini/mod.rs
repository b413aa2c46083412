pub mod extract;
pub mod status;
pub mod types;

pub use extract::extract_text;
pub use status::classify_error;
pub use types::{Content, GenerateContentRequest, GenerateContentResponse, Part, Role};

pub mod code;
pub mod social;
pub mod types;

pub use code::{code_template, CodeLanguage, SAMPLE_CODE};
pub use social::{social_template, Platform, SAMPLE_DESCRIPTION};
pub use types::PromptTemplate;

pub use anstream::eprintln;
pub use color_eyre::eyre::{eyre, Context, Result};
pub use promptcast_core::CompletionError;

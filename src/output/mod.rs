pub mod json;
pub mod terminal;
pub mod traits;

pub use json::JsonSurface;
pub use terminal::TerminalSurface;
pub use traits::{ContentSurface, StatusLine};

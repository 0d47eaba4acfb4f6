use crate::domain::ArticleRecord;
use crate::output::traits::{ContentSurface, StatusLine};

/// Machine-readable output: the card list as a JSON array on stdout,
/// fallback messages as a `{"message": ...}` object, status on stderr.
#[derive(Debug, Default)]
pub struct JsonSurface;

impl JsonSurface {
    pub fn new() -> Self {
        Self
    }
}

impl ContentSurface for JsonSurface {
    fn replace_cards(&mut self, cards: &[ArticleRecord]) {
        match serde_json::to_string_pretty(cards) {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("error: failed to serialize articles: {}", e),
        }
    }

    fn replace_message(&mut self, message: &str) {
        println!("{}", serde_json::json!({ "message": message }));
    }
}

impl StatusLine for JsonSurface {
    fn set_status(&mut self, message: &str, is_error: bool) {
        if is_error {
            eprintln!("error: {}", message);
        } else {
            eprintln!("{}", message);
        }
    }
}

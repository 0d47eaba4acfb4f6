use crate::domain::{ArticleImage, ArticleRecord};
use crate::output::traits::{ContentSurface, StatusLine};

/// Renders cards and fallback messages on stdout; the status line goes to
/// stderr so piped output stays clean.
#[derive(Debug, Default)]
pub struct TerminalSurface;

impl TerminalSurface {
    pub fn new() -> Self {
        Self
    }
}

impl ContentSurface for TerminalSurface {
    fn replace_cards(&mut self, cards: &[ArticleRecord]) {
        for card in cards {
            println!("{}", card.title);
            println!("  {}", card.url);
            println!("  {}", card.description);
            println!("  {} | {}", card.source, card.published);
            match &card.image {
                ArticleImage::Url(url) => println!("  Image: {}", url),
                ArticleImage::Invalid => println!("  [Invalid image URL]"),
                ArticleImage::Missing => println!("  [No image available]"),
            }
            println!();
        }
    }

    fn replace_message(&mut self, message: &str) {
        println!("{}", message);
    }
}

impl StatusLine for TerminalSurface {
    fn set_status(&mut self, message: &str, is_error: bool) {
        if is_error {
            eprintln!("error: {}", message);
        } else {
            eprintln!("{}", message);
        }
    }
}

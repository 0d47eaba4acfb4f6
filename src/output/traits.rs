use crate::domain::ArticleRecord;

/// Content area of the display. Every call fully replaces what was shown
/// before; nothing appends.
pub trait ContentSurface {
    fn replace_cards(&mut self, cards: &[ArticleRecord]);
    fn replace_message(&mut self, message: &str);
}

/// Single status line shown independently of the content area.
pub trait StatusLine {
    fn set_status(&mut self, message: &str, is_error: bool);
}

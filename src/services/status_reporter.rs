use crate::output::{ContentSurface, StatusLine};

pub const NO_RESULTS_MESSAGE: &str = "No articles found matching your criteria.";

/// Result of one fetch cycle, as far as the surfaces are concerned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Cards were rendered; carries the rendered count.
    Success(usize),
    /// The API answered but nothing was displayable.
    Empty,
    /// The cycle failed; carries the user-facing message.
    Failed(String),
}

/// Write one outcome to the status line and, for empty/error outcomes, the
/// content area. Both surfaces always move together and fully overwrite
/// prior content.
pub fn report<S: ContentSurface + StatusLine>(surface: &mut S, outcome: &FetchOutcome) {
    match outcome {
        FetchOutcome::Success(count) => {
            surface.set_status(&format!("Showing {} articles.", count), false);
        }
        FetchOutcome::Empty => {
            surface.replace_message(NO_RESULTS_MESSAGE);
            surface.set_status("No articles found.", false);
        }
        FetchOutcome::Failed(message) => {
            surface.replace_message(message);
            surface.set_status(message, true);
        }
    }
}

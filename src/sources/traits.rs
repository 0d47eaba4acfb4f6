use crate::domain::{QueryDescriptor, RawArticle};
use crate::errors::NewsdeskResult;

/// One outbound request per call; the raw items come back unvalidated and
/// are normalized by the renderer.
#[cfg_attr(test, mockall::automock)]
pub trait NewsSource: Send + Sync {
    fn fetch(&self, query: &QueryDescriptor) -> NewsdeskResult<Vec<RawArticle>>;
}

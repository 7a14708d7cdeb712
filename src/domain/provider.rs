use crate::error::Result;
use std::future::Future;

/// Supplies the profile games page a pipeline run works on.
pub trait DocumentProvider {
    fn fetch_document(&self) -> impl Future<Output = Result<String>> + Send;
}

pub(crate) mod extractor;
pub(crate) mod locator;

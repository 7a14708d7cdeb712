use crate::domain::HtmlFragment;
use crate::error::{IdleError, Result};
use scraper::{Html, Selector};

/// Finds the node embedding the games list on a profile games page.
pub struct FragmentLocator {
    selector: Selector,
}

impl FragmentLocator {
    pub fn new(element_id: &str) -> Result<Self> {
        // Attribute form, so ids that are not valid CSS identifiers still work
        let selector = Selector::parse(&format!("[id=\"{}\"]", element_id))
            .map_err(|e| IdleError::Selector(e.to_string()))?;

        Ok(Self { selector })
    }

    /// Returns the outer HTML of the first matching element, if any.
    pub fn locate(&self, document: &Html) -> Option<HtmlFragment> {
        document
            .select(&self.selector)
            .next()
            .map(|element| HtmlFragment::new(element.html()))
    }
}

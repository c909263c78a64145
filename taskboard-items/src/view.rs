//! HTML listing page

use crate::error::{ItemError, Result};
use crate::store::Item;
use serde::Serialize;

const LISTING_TEMPLATE: &str = include_str!("../templates/index.liquid");

#[derive(Serialize)]
struct Page<'a> {
    list_title: &'a str,
    items: &'a [Item],
}

/// Renders the item listing
///
/// The template is parsed once; rendering only binds the page globals.
pub struct ListingView {
    template: liquid::Template,
    list_title: String,
}

impl std::fmt::Debug for ListingView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListingView")
            .field("list_title", &self.list_title)
            .finish_non_exhaustive()
    }
}

impl ListingView {
    /// Parse the built-in listing template
    pub fn new(list_title: impl Into<String>) -> Result<Self> {
        let template = liquid::ParserBuilder::with_stdlib()
            .build()
            .and_then(|parser| parser.parse(LISTING_TEMPLATE))
            .map_err(ItemError::template)?;

        Ok(Self {
            template,
            list_title: list_title.into(),
        })
    }

    pub fn list_title(&self) -> &str {
        &self.list_title
    }

    /// Render the page for `items`
    pub fn render(&self, items: &[Item]) -> Result<String> {
        let page = Page {
            list_title: &self.list_title,
            items,
        };
        let globals = liquid::model::to_object(&page).map_err(ItemError::template)?;
        self.template.render(&globals).map_err(ItemError::template)
    }
}

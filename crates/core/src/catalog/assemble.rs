//! Query assembly: ordering and partitioning of drained result sets.

use std::cmp::Ordering;

use serde::Serialize;
use serde_json::Value;

use super::requests::ENTITY_ATTR;
use crate::storage::Item;

/// Discriminator values routed into the featured view.
const ARTICLE_ENTITY: &str = "article";
const CAMPSITE_ENTITY: &str = "campsite";

/// Reads a string attribute; absent or non-string values read as "".
fn text_attr<'a>(item: &'a Item, field: &str) -> &'a str {
    item.get(field).and_then(Value::as_str).unwrap_or("")
}

fn compare_by(field: &str) -> impl Fn(&Item, &Item) -> Ordering + '_ {
    move |a, b| text_attr(a, field).cmp(text_attr(b, field))
}

/// Sorts items ascending by a string attribute.
pub fn sort_by_field(mut items: Vec<Item>, field: &str) -> Vec<Item> {
    items.sort_unstable_by(compare_by(field));
    items
}

/// The composite view of a park: its articles and its campgrounds.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Featured {
    pub articles: Vec<Item>,
    pub campgrounds: Vec<Item>,
}

/// Splits a mixed partition by discriminator.
///
/// Articles are ordered by `title` and campgrounds by `name`. Items with any
/// other discriminator, or none, are dropped.
pub fn partition_featured(items: Vec<Item>) -> Featured {
    let mut featured = Featured::default();
    for item in items {
        match text_attr(&item, ENTITY_ATTR) {
            ARTICLE_ENTITY => featured.articles.push(item),
            CAMPSITE_ENTITY => featured.campgrounds.push(item),
            _ => {}
        }
    }

    featured.articles = sort_by_field(featured.articles, "title");
    featured.campgrounds = sort_by_field(featured.campgrounds, "name");
    featured
}

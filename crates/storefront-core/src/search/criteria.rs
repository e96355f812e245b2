//! Filter and sort criteria.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::catalog::Category;
use crate::error::StorefrontError;

/// Category selection: everything, or one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Check if a product category passes this filter.
    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => *selected == category,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(category) => category.as_str(),
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CategoryFilter::All => "All Products",
            CategoryFilter::Only(category) => category.display_name(),
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        CategoryFilter::Only(category)
    }
}

impl FromStr for CategoryFilter {
    type Err = StorefrontError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            return Ok(CategoryFilter::All);
        }
        s.parse().map(CategoryFilter::Only)
    }
}

impl TryFrom<String> for CategoryFilter {
    type Error = StorefrontError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<CategoryFilter> for String {
    fn from(filter: CategoryFilter) -> String {
        filter.as_str().to_string()
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sort order for the product listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortMode {
    /// Highest rated first.
    #[default]
    #[serde(rename = "popular")]
    Popular,
    /// Price, low to high.
    #[serde(rename = "price-asc")]
    PriceAsc,
    /// Price, high to low.
    #[serde(rename = "price-desc")]
    PriceDesc,
}

impl SortMode {
    pub const ALL: [SortMode; 3] = [SortMode::Popular, SortMode::PriceAsc, SortMode::PriceDesc];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::Popular => "popular",
            SortMode::PriceAsc => "price-asc",
            SortMode::PriceDesc => "price-desc",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortMode::Popular => "Most Popular",
            SortMode::PriceAsc => "Price: Low to High",
            SortMode::PriceDesc => "Price: High to Low",
        }
    }
}

impl FromStr for SortMode {
    type Err = StorefrontError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortMode::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| StorefrontError::UnknownSortMode(s.to_string()))
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the shopper is currently looking for.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Criteria {
    /// Free-text query.
    #[serde(default)]
    pub query: String,
    /// Category selection.
    #[serde(default)]
    pub category: CategoryFilter,
    /// Sort order.
    #[serde(default)]
    pub sort: SortMode,
}

impl Criteria {
    /// All products, most popular first.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the text query.
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Set the category filter.
    pub fn with_category(mut self, category: impl Into<CategoryFilter>) -> Self {
        self.category = category.into();
        self
    }

    /// Set the sort order.
    pub fn with_sort(mut self, sort: SortMode) -> Self {
        self.sort = sort;
        self
    }

    /// The query as matched: lowercased, `None` when empty.
    ///
    /// Whitespace is significant. Callers that take raw user input trim it
    /// before building the criteria.
    pub(crate) fn normalized_query(&self) -> Option<String> {
        (!self.query.is_empty()).then(|| self.query.to_lowercase())
    }
}

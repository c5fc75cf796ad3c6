//! Default sort, paging and fold values per searchable resource.

use std::fmt;

/// Direction of the page ordering.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    /// Parses `asc`/`desc` case-insensitively.
    pub fn parse(value: &str) -> Option<Self> {
        if value.eq_ignore_ascii_case("asc") {
            Some(SortDirection::Asc)
        } else if value.eq_ignore_ascii_case("desc") {
            Some(SortDirection::Desc)
        } else {
            None
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Largest page size a request may ask for.
pub const MAX_SIZE: u64 = 1_000;

/// Largest zero-based page index a request may ask for; keeps `page * size` within
/// the signed 64-bit OFFSET the database binds.
pub const MAX_PAGE: u64 = u32::MAX as u64;

/// Values the request parser falls back to when a reserved parameter is absent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchPolicy {
    pub sort: &'static str,
    pub direction: SortDirection,
    pub page: u64,
    pub size: u64,
    pub fold: bool,
}

/// Resources exposed through the search pipeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resource {
    GiftCertificate,
    Tag,
    User,
    Order,
    Purchase,
}

impl Resource {
    /// Returns the default policy for the resource.
    ///
    /// Tags fold their certificate lists by default since a popular tag can be attached
    /// to a large part of the catalog.
    pub const fn policy(self) -> SearchPolicy {
        let fold = matches!(self, Resource::Tag);
        SearchPolicy {
            sort: "id",
            direction: SortDirection::Asc,
            page: 0,
            size: 10,
            fold,
        }
    }
}

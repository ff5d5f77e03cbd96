// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::model::CatalogItem;

/// Queries this short skip the local filter and go straight to the API.
pub const SHORT_QUERY_CHARS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewOrigin {
    Catalog,
    LocalFilter,
    RemoteLookup,
}

impl ViewOrigin {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Catalog => "catalog",
            Self::LocalFilter => "local filter",
            Self::RemoteLookup => "remote lookup",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchRoute {
    RestoreCatalog,
    LocalFilter(Vec<CatalogItem>),
    RemoteLookup { key: String },
}

/// Decides how a settled query is answered.
///
/// | trimmed query                     | route            |
/// |-----------------------------------|------------------|
/// | empty                             | restore catalog  |
/// | finite number                     | remote lookup    |
/// | at most two characters            | remote lookup    |
/// | local filter has matches          | local filter     |
/// | local filter has no matches       | remote lookup    |
pub fn route(query: &str, known: &[CatalogItem]) -> SearchRoute {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return SearchRoute::RestoreCatalog;
    }

    if is_numeric(trimmed) || trimmed.chars().count() <= SHORT_QUERY_CHARS {
        return SearchRoute::RemoteLookup {
            key: lookup_key(trimmed),
        };
    }

    let local = filter_local(known, trimmed);
    if local.is_empty() {
        SearchRoute::RemoteLookup {
            key: lookup_key(trimmed),
        }
    } else {
        SearchRoute::LocalFilter(local)
    }
}

pub fn filter_local(known: &[CatalogItem], query: &str) -> Vec<CatalogItem> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return known.to_vec();
    }
    known
        .iter()
        .filter(|item| item.matches(trimmed))
        .cloned()
        .collect()
}

pub fn is_numeric(query: &str) -> bool {
    query
        .trim()
        .parse::<f64>()
        .is_ok_and(|value| value.is_finite())
}

/// Path key for a point lookup: integers lose leading zeros, names are
/// lower-cased.
pub fn lookup_key(query: &str) -> String {
    let trimmed = query.trim();
    match trimmed.parse::<u64>() {
        Ok(number) => number.to_string(),
        Err(_) => trimmed.to_lowercase(),
    }
}

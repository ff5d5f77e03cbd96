// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use std::sync::Arc;

use crate::cancel::CancelToken;
use crate::error::FetchError;
use crate::model::{CatalogItem, CatalogPage, PokemonDetails};

/// Read-only remote catalog. Implementations block; callers run them off the
/// UI thread.
pub trait CatalogSource: Send + Sync {
    fn fetch_page(
        &self,
        offset: u64,
        limit: u32,
        token: &CancelToken,
    ) -> Result<CatalogPage, FetchError>;

    fn lookup(&self, key: &str, token: &CancelToken) -> Result<CatalogItem, FetchError>;

    fn details(&self, key: &str) -> Result<PokemonDetails, FetchError>;
}

impl<S: CatalogSource + ?Sized> CatalogSource for Arc<S> {
    fn fetch_page(
        &self,
        offset: u64,
        limit: u32,
        token: &CancelToken,
    ) -> Result<CatalogPage, FetchError> {
        (**self).fetch_page(offset, limit, token)
    }

    fn lookup(&self, key: &str, token: &CancelToken) -> Result<CatalogItem, FetchError> {
        (**self).lookup(key, token)
    }

    fn details(&self, key: &str) -> Result<PokemonDetails, FetchError> {
        (**self).details(key)
    }
}

// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The request was superseded or torn down. Never shown to the user.
    #[error("request canceled")]
    Canceled,
    #[error("no pokemon matches {key:?}")]
    NotFound { key: String },
    #[error("network failure: {0}")]
    Network(String),
}

impl FetchError {
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    pub const fn is_canceled(&self) -> bool {
        matches!(self, Self::Canceled)
    }

    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ControllerError {
    #[error("page numbers start at 1, got {0}")]
    InvalidPage(u32),
}

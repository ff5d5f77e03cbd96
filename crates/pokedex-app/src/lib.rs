// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

pub mod cancel;
pub mod controller;
pub mod debounce;
pub mod error;
pub mod ids;
pub mod model;
pub mod search;
pub mod source;

pub use cancel::*;
pub use controller::*;
pub use debounce::*;
pub use error::*;
pub use ids::*;
pub use model::*;
pub use search::*;
pub use source::*;

// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result};
use pokedex_app::{CatalogSource, Command, Completion, FetchError, PokemonDetails};
use pokedex_tui::{CatalogRuntime, InternalEvent};
use std::sync::Arc;
use std::sync::mpsc::Sender;
use std::thread;
use tracing::debug;

/// Runs catalog requests on short-lived worker threads so the UI loop never
/// blocks on the network.
pub struct SourceRuntime<S> {
    source: Arc<S>,
}

impl<S: CatalogSource + 'static> SourceRuntime<S> {
    pub fn new(source: S) -> Self {
        Self {
            source: Arc::new(source),
        }
    }
}

impl<S: CatalogSource + 'static> CatalogRuntime for SourceRuntime<S> {
    fn run_command(&mut self, command: &Command) -> Completion {
        command.execute(self.source.as_ref())
    }

    fn load_details(&mut self, key: &str) -> Result<PokemonDetails, FetchError> {
        self.source.details(key)
    }

    fn spawn_command(&mut self, command: Command, tx: Sender<InternalEvent>) -> Result<()> {
        let source = Arc::clone(&self.source);
        let ticket = command.ticket();
        thread::Builder::new()
            .name(format!("catalog-{}", ticket.get()))
            .spawn(move || {
                let completion = command.execute(source.as_ref());
                if tx.send(InternalEvent::Catalog(completion)).is_err() {
                    debug!(
                        event_name = "runtime.command.dropped",
                        ticket = ticket.get(),
                        "ui loop gone before completion arrived"
                    );
                }
            })
            .with_context(|| format!("spawn worker for request {ticket}"))?;
        Ok(())
    }

    fn spawn_details(
        &mut self,
        request_id: u64,
        key: &str,
        tx: Sender<InternalEvent>,
    ) -> Result<()> {
        let source = Arc::clone(&self.source);
        let key = key.to_owned();
        thread::Builder::new()
            .name(format!("details-{request_id}"))
            .spawn(move || {
                let result = source.details(&key);
                let _ = tx.send(InternalEvent::Details { request_id, result });
            })
            .context("spawn details worker")?;
        Ok(())
    }
}

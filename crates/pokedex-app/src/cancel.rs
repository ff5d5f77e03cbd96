// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::FetchError;
use crate::ids::Ticket;

/// Revocable flag shared between the slot that issued a request and the
/// worker running it. Workers poll it between round-trips.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    revoked: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn revoke(&self) {
        self.revoked.store(true, Ordering::SeqCst);
    }

    pub fn is_revoked(&self) -> bool {
        self.revoked.load(Ordering::SeqCst)
    }

    pub fn check(&self) -> Result<(), FetchError> {
        if self.is_revoked() {
            return Err(FetchError::Canceled);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotOutcome {
    Completed,
    Canceled,
    Failed,
}

impl SlotOutcome {
    pub fn of<T>(result: &Result<T, FetchError>) -> Self {
        match result {
            Ok(_) => Self::Completed,
            Err(FetchError::Canceled) => Self::Canceled,
            Err(_) => Self::Failed,
        }
    }
}

#[derive(Debug)]
struct InFlight<P> {
    ticket: Ticket,
    token: CancelToken,
    payload: P,
}

/// Holds at most one authoritative request of a single kind.
///
/// `Idle -> InFlight -> (Completed | Canceled | Failed) -> Idle`. Beginning a
/// new request while one is in flight cancels the old one first, so only the
/// newest ticket can ever settle with its payload.
#[derive(Debug)]
pub struct RequestSlot<P> {
    in_flight: Option<InFlight<P>>,
    last_outcome: Option<SlotOutcome>,
}

impl<P> Default for RequestSlot<P> {
    fn default() -> Self {
        Self {
            in_flight: None,
            last_outcome: None,
        }
    }
}

impl<P> RequestSlot<P> {
    pub fn begin(&mut self, ticket: Ticket, payload: P) -> CancelToken {
        self.cancel();
        let token = CancelToken::new();
        self.in_flight = Some(InFlight {
            ticket,
            token: token.clone(),
            payload,
        });
        token
    }

    /// Revokes the in-flight request, if any, and returns its ticket.
    pub fn cancel(&mut self) -> Option<Ticket> {
        let in_flight = self.in_flight.take()?;
        in_flight.token.revoke();
        self.last_outcome = Some(SlotOutcome::Canceled);
        Some(in_flight.ticket)
    }

    /// Releases the payload when `ticket` is the live request. Stale tickets
    /// leave the slot untouched and yield `None`.
    pub fn settle(&mut self, ticket: Ticket, outcome: SlotOutcome) -> Option<P> {
        if self.ticket() != Some(ticket) {
            return None;
        }
        let in_flight = self.in_flight.take()?;
        self.last_outcome = Some(outcome);
        Some(in_flight.payload)
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn ticket(&self) -> Option<Ticket> {
        self.in_flight.as_ref().map(|in_flight| in_flight.ticket)
    }

    pub fn payload(&self) -> Option<&P> {
        self.in_flight.as_ref().map(|in_flight| &in_flight.payload)
    }

    pub fn last_outcome(&self) -> Option<SlotOutcome> {
        self.last_outcome
    }
}

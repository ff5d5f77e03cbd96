// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use std::collections::HashSet;
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::cancel::{CancelToken, RequestSlot, SlotOutcome};
use crate::debounce::{DEFAULT_DEBOUNCE, Debouncer};
use crate::error::{ControllerError, FetchError};
use crate::ids::Ticket;
use crate::model::{CatalogItem, CatalogPage};
use crate::search::{self, SearchRoute, ViewOrigin};
use crate::source::CatalogSource;

pub const DEFAULT_PAGE_SIZE: u32 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerOptions {
    pub page_size: u32,
    pub debounce: Duration,
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            debounce: DEFAULT_DEBOUNCE,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PageRequest {
    pub ticket: Ticket,
    pub page: u32,
    pub offset: u64,
    pub limit: u32,
    pub token: CancelToken,
}

#[derive(Debug, Clone)]
pub struct LookupRequest {
    pub ticket: Ticket,
    pub key: String,
    pub token: CancelToken,
}

/// Network work the controller wants started. The caller decides where it
/// runs and feeds the resulting [`Completion`] back through
/// [`CatalogController::apply`].
#[derive(Debug, Clone)]
pub enum Command {
    FetchPage(PageRequest),
    Lookup(LookupRequest),
}

impl Command {
    pub const fn ticket(&self) -> Ticket {
        match self {
            Self::FetchPage(request) => request.ticket,
            Self::Lookup(request) => request.ticket,
        }
    }

    pub fn token(&self) -> &CancelToken {
        match self {
            Self::FetchPage(request) => &request.token,
            Self::Lookup(request) => &request.token,
        }
    }

    pub fn execute<S: CatalogSource + ?Sized>(&self, source: &S) -> Completion {
        match self {
            Self::FetchPage(request) => Completion::Page {
                ticket: request.ticket,
                result: request.token.check().and_then(|()| {
                    source.fetch_page(request.offset, request.limit, &request.token)
                }),
            },
            Self::Lookup(request) => Completion::Lookup {
                ticket: request.ticket,
                result: request
                    .token
                    .check()
                    .and_then(|()| source.lookup(&request.key, &request.token)),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    Page {
        ticket: Ticket,
        result: Result<CatalogPage, FetchError>,
    },
    Lookup {
        ticket: Ticket,
        result: Result<CatalogItem, FetchError>,
    },
}

impl Completion {
    pub const fn ticket(&self) -> Ticket {
        match self {
            Self::Page { ticket, .. } | Self::Lookup { ticket, .. } => *ticket,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogEvent {
    /// The view was replaced wholesale.
    ViewChanged { origin: ViewOrigin, len: usize },
    /// A page was appended to the current view; existing rows keep their place.
    ViewExtended { origin: ViewOrigin, len: usize },
    TotalHintUpdated(u64),
    PageFailed { page: u32, message: String },
    LookupFellBack { query: String },
}

/// Result of one controller operation: requests to start and changes the
/// presentation layer may want to react to.
#[derive(Debug, Clone, Default)]
pub struct Update {
    pub commands: Vec<Command>,
    pub events: Vec<CatalogEvent>,
}

impl Update {
    fn command(command: Command) -> Self {
        Self {
            commands: vec![command],
            events: Vec::new(),
        }
    }

    fn event(event: CatalogEvent) -> Self {
        Self {
            commands: Vec::new(),
            events: vec![event],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty() && self.events.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PageLoad {
    page: u32,
    append: bool,
}

/// Owns the known catalog, the filtered view, pagination, and the single
/// authoritative request of each kind.
#[derive(Debug)]
pub struct CatalogController {
    options: ControllerOptions,
    known: Vec<CatalogItem>,
    view: Vec<CatalogItem>,
    origin: ViewOrigin,
    query: String,
    debounce: Debouncer<String>,
    page: u32,
    total_hint: u64,
    refreshing: bool,
    page_slot: RequestSlot<PageLoad>,
    lookup_slot: RequestSlot<String>,
    last_ticket: u64,
}

impl Default for CatalogController {
    fn default() -> Self {
        Self::new(ControllerOptions::default())
    }
}

impl CatalogController {
    pub fn new(options: ControllerOptions) -> Self {
        let options = ControllerOptions {
            page_size: options.page_size.max(1),
            ..options
        };
        Self {
            options,
            known: Vec::new(),
            view: Vec::new(),
            origin: ViewOrigin::Catalog,
            query: String::new(),
            debounce: Debouncer::new(options.debounce),
            page: 0,
            total_hint: 0,
            refreshing: false,
            page_slot: RequestSlot::default(),
            lookup_slot: RequestSlot::default(),
            last_ticket: 0,
        }
    }

    pub const fn options(&self) -> ControllerOptions {
        self.options
    }

    pub fn known(&self) -> &[CatalogItem] {
        &self.known
    }

    pub fn view(&self) -> &[CatalogItem] {
        &self.view
    }

    pub const fn view_origin(&self) -> ViewOrigin {
        self.origin
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub const fn page(&self) -> u32 {
        self.page
    }

    pub const fn total_hint(&self) -> u64 {
        self.total_hint
    }

    pub fn is_loading(&self) -> bool {
        self.page_slot.is_in_flight()
    }

    pub fn is_searching(&self) -> bool {
        self.lookup_slot.is_in_flight()
    }

    pub fn is_search_pending(&self) -> bool {
        self.debounce.is_pending()
    }

    pub const fn is_refreshing(&self) -> bool {
        self.refreshing
    }

    pub fn page_outcome(&self) -> Option<SlotOutcome> {
        self.page_slot.last_outcome()
    }

    pub fn lookup_outcome(&self) -> Option<SlotOutcome> {
        self.lookup_slot.last_outcome()
    }

    /// When the pending debounced query becomes due, if any.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.debounce.deadline()
    }

    pub fn can_load_more(&self) -> bool {
        self.query.is_empty()
            && !self.page_slot.is_in_flight()
            && (self.known.len() as u64) < self.total_hint
    }

    pub fn mount(&mut self) -> Update {
        Update::command(self.start_page(1, false))
    }

    /// Tears down everything outstanding. Completions that still arrive are
    /// ignored.
    pub fn unmount(&mut self) {
        self.debounce.cancel();
        let page = self.page_slot.cancel();
        let lookup = self.lookup_slot.cancel();
        self.refreshing = false;
        debug!(
            event_name = "catalog.unmounted",
            page_canceled = page.is_some(),
            lookup_canceled = lookup.is_some(),
            "catalog controller unmounted"
        );
    }

    pub fn load_page(&mut self, page: u32, append: bool) -> Result<Update, ControllerError> {
        if page == 0 {
            return Err(ControllerError::InvalidPage(page));
        }
        Ok(Update::command(self.start_page(page, append)))
    }

    /// Records the query right away and schedules its evaluation for the end
    /// of the debounce window. Call [`Self::tick`] to evaluate.
    pub fn search(&mut self, query: &str, now: Duration) {
        self.query = query.to_owned();
        self.debounce.call(now, query.to_owned());
    }

    pub fn tick(&mut self, now: Duration) -> Update {
        match self.debounce.poll(now) {
            Some(query) => self.evaluate(&query),
            None => Update::default(),
        }
    }

    pub fn load_more(&mut self) -> Update {
        if !self.can_load_more() {
            return Update::default();
        }
        let next = self.page.saturating_add(1);
        Update::command(self.start_page(next, true))
    }

    pub fn refresh(&mut self) -> Update {
        self.query.clear();
        self.debounce.cancel();
        self.cancel_lookup();
        self.page = 1;
        self.refreshing = true;
        Update::command(self.start_page(1, false))
    }

    pub fn clear_search(&mut self) -> Update {
        self.query.clear();
        self.debounce.cancel();
        self.cancel_lookup();
        Update::event(self.replace_view(self.known.clone(), ViewOrigin::Catalog))
    }

    pub fn apply(&mut self, completion: Completion) -> Update {
        match completion {
            Completion::Page { ticket, result } => self.finish_page(ticket, result),
            Completion::Lookup { ticket, result } => self.finish_lookup(ticket, result),
        }
    }

    fn evaluate(&mut self, query: &str) -> Update {
        self.cancel_lookup();
        match search::route(query, &self.known) {
            SearchRoute::RestoreCatalog => {
                Update::event(self.replace_view(self.known.clone(), ViewOrigin::Catalog))
            }
            SearchRoute::LocalFilter(items) => {
                Update::event(self.replace_view(items, ViewOrigin::LocalFilter))
            }
            SearchRoute::RemoteLookup { key } => {
                Update::command(self.start_lookup(query.trim().to_owned(), key))
            }
        }
    }

    fn start_page(&mut self, page: u32, append: bool) -> Command {
        let ticket = self.issue_ticket();
        if let Some(previous) = self.page_slot.ticket() {
            debug!(
                event_name = "catalog.page.superseded",
                ticket = previous.get(),
                "canceling superseded page request"
            );
        }
        let token = self.page_slot.begin(ticket, PageLoad { page, append });
        let limit = self.options.page_size;
        let offset = u64::from(page.saturating_sub(1)) * u64::from(limit);
        debug!(
            event_name = "catalog.page.requested",
            ticket = ticket.get(),
            page,
            offset,
            append,
            "requesting catalog page"
        );
        Command::FetchPage(PageRequest {
            ticket,
            page,
            offset,
            limit,
            token,
        })
    }

    fn start_lookup(&mut self, query: String, key: String) -> Command {
        let ticket = self.issue_ticket();
        debug!(
            event_name = "catalog.lookup.requested",
            ticket = ticket.get(),
            key = %key,
            "requesting point lookup"
        );
        let token = self.lookup_slot.begin(ticket, query);
        Command::Lookup(LookupRequest { ticket, key, token })
    }

    fn cancel_lookup(&mut self) {
        if let Some(ticket) = self.lookup_slot.cancel() {
            debug!(
                event_name = "catalog.lookup.superseded",
                ticket = ticket.get(),
                "canceling superseded point lookup"
            );
        }
    }

    fn finish_page(&mut self, ticket: Ticket, result: Result<CatalogPage, FetchError>) -> Update {
        let Some(load) = self.page_slot.settle(ticket, SlotOutcome::of(&result)) else {
            debug!(
                event_name = "catalog.page.stale",
                ticket = ticket.get(),
                "ignoring completion for superseded page request"
            );
            return Update::default();
        };
        self.refreshing = false;

        match result {
            Ok(page) => {
                let mut update = Update::default();
                let fetched = page.items.len();
                if load.append {
                    self.append_items(page.items);
                } else {
                    self.total_hint = page.total_count;
                    update
                        .events
                        .push(CatalogEvent::TotalHintUpdated(self.total_hint));
                    self.known = page.items;
                    self.view = self.known.clone();
                    self.origin = ViewOrigin::Catalog;
                }
                self.page = load.page;
                info!(
                    event_name = "catalog.page.loaded",
                    ticket = ticket.get(),
                    page = load.page,
                    fetched,
                    known = self.known.len(),
                    total_hint = self.total_hint,
                    "catalog page loaded"
                );
                let len = self.view.len();
                update.events.push(if load.append {
                    CatalogEvent::ViewExtended {
                        origin: self.origin,
                        len,
                    }
                } else {
                    CatalogEvent::ViewChanged {
                        origin: self.origin,
                        len,
                    }
                });
                update
            }
            Err(FetchError::Canceled) => {
                debug!(
                    event_name = "catalog.page.canceled",
                    ticket = ticket.get(),
                    page = load.page,
                    "catalog page request canceled"
                );
                Update::default()
            }
            Err(error) => {
                warn!(
                    event_name = "catalog.page.failed",
                    ticket = ticket.get(),
                    page = load.page,
                    error = %error,
                    "catalog page load failed"
                );
                Update::event(CatalogEvent::PageFailed {
                    page: load.page,
                    message: error.to_string(),
                })
            }
        }
    }

    fn finish_lookup(&mut self, ticket: Ticket, result: Result<CatalogItem, FetchError>) -> Update {
        let Some(query) = self.lookup_slot.settle(ticket, SlotOutcome::of(&result)) else {
            debug!(
                event_name = "catalog.lookup.stale",
                ticket = ticket.get(),
                "ignoring completion for superseded point lookup"
            );
            return Update::default();
        };

        match result {
            Ok(item) => {
                info!(
                    event_name = "catalog.lookup.found",
                    ticket = ticket.get(),
                    id = item.id.get(),
                    "point lookup matched"
                );
                Update::event(self.replace_view(vec![item], ViewOrigin::RemoteLookup))
            }
            Err(FetchError::Canceled) => {
                debug!(
                    event_name = "catalog.lookup.canceled",
                    ticket = ticket.get(),
                    "point lookup canceled"
                );
                Update::default()
            }
            Err(error) => {
                if error.is_not_found() {
                    info!(
                        event_name = "catalog.lookup.not_found",
                        ticket = ticket.get(),
                        query = %query,
                        "point lookup missed; filtering locally"
                    );
                } else {
                    warn!(
                        event_name = "catalog.lookup.failed",
                        ticket = ticket.get(),
                        query = %query,
                        error = %error,
                        "point lookup failed; filtering locally"
                    );
                }
                let local = search::filter_local(&self.known, &query);
                let changed = self.replace_view(local, ViewOrigin::LocalFilter);
                Update {
                    commands: Vec::new(),
                    events: vec![CatalogEvent::LookupFellBack { query }, changed],
                }
            }
        }
    }

    /// Appends unseen items; the catalog never reorders or drops entries.
    fn append_items(&mut self, items: Vec<CatalogItem>) {
        let mut seen: HashSet<_> = self.known.iter().map(|item| item.id).collect();
        let fresh: Vec<CatalogItem> = items
            .into_iter()
            .filter(|item| seen.insert(item.id))
            .collect();
        self.known.extend(fresh.iter().cloned());
        self.view.extend(fresh);
    }

    fn replace_view(&mut self, items: Vec<CatalogItem>, origin: ViewOrigin) -> CatalogEvent {
        self.view = items;
        self.origin = origin;
        CatalogEvent::ViewChanged {
            origin,
            len: self.view.len(),
        }
    }

    fn issue_ticket(&mut self) -> Ticket {
        self.last_ticket = self.last_ticket.saturating_add(1);
        Ticket::new(self.last_ticket)
    }
}

#[cfg(test)]
mod tests {
    use super::{CatalogController, CatalogEvent, Command, Completion, ControllerOptions, Update};
    use crate::{
        CatalogItem, CatalogPage, ControllerError, FetchError, PokemonId, SlotOutcome, TypeTag,
        ViewOrigin,
    };
    use std::time::Duration;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn item(id: u32, name: &str) -> CatalogItem {
        CatalogItem {
            id: PokemonId::new(id),
            name: name.to_owned(),
            image: format!("https://img.example/{id}.png"),
            image_back: None,
            types: vec![TypeTag::new("normal")],
        }
    }

    fn page_of(ids: std::ops::RangeInclusive<u32>, total: u64) -> CatalogPage {
        let offset = u64::from(*ids.start() - 1);
        CatalogPage {
            items: ids.map(|id| item(id, &format!("mon{id}"))).collect(),
            total_count: total,
            offset,
        }
    }

    fn only_command(update: Update) -> Command {
        assert_eq!(update.commands.len(), 1, "expected exactly one command");
        update.commands.into_iter().next().expect("one command")
    }

    fn mounted(total: u64) -> CatalogController {
        let mut controller = CatalogController::default();
        let command = only_command(controller.mount());
        controller.apply(Completion::Page {
            ticket: command.ticket(),
            result: Ok(page_of(1..=20, total)),
        });
        controller
    }

    #[test]
    fn mount_requests_first_page_and_replaces_catalog() {
        let mut controller = CatalogController::default();
        let Command::FetchPage(request) = only_command(controller.mount()) else {
            panic!("expected page fetch");
        };
        assert_eq!(request.page, 1);
        assert_eq!(request.offset, 0);
        assert_eq!(request.limit, 20);
        assert!(controller.is_loading());

        let update = controller.apply(Completion::Page {
            ticket: request.ticket,
            result: Ok(page_of(1..=20, 1000)),
        });
        assert_eq!(
            update.events,
            vec![
                CatalogEvent::TotalHintUpdated(1000),
                CatalogEvent::ViewChanged {
                    origin: ViewOrigin::Catalog,
                    len: 20
                },
            ]
        );
        assert_eq!(controller.known().len(), 20);
        assert_eq!(controller.view(), controller.known());
        assert_eq!(controller.page(), 1);
        assert!(!controller.is_loading());
    }

    #[test]
    fn load_page_rejects_page_zero() {
        let mut controller = CatalogController::default();
        let error = controller
            .load_page(0, false)
            .expect_err("page zero should fail");
        assert_eq!(error, ControllerError::InvalidPage(0));
        assert!(!controller.is_loading());
    }

    #[test]
    fn new_page_request_cancels_previous_one() {
        let mut controller = CatalogController::default();
        let first = only_command(controller.load_page(1, false).expect("page 1"));
        let second = only_command(controller.load_page(3, false).expect("page 3"));
        assert!(first.token().is_revoked());
        assert!(!second.token().is_revoked());

        let stale = controller.apply(Completion::Page {
            ticket: first.ticket(),
            result: Ok(page_of(1..=20, 1000)),
        });
        assert!(stale.is_empty());
        assert!(controller.known().is_empty());
        assert!(controller.is_loading());

        let Command::FetchPage(request) = second else {
            panic!("expected page fetch");
        };
        assert_eq!(request.offset, 40);
    }

    #[test]
    fn append_extends_known_and_view() {
        let mut controller = mounted(1000);
        let command = only_command(controller.load_more());
        controller.apply(Completion::Page {
            ticket: command.ticket(),
            result: Ok(page_of(21..=40, 1000)),
        });
        assert_eq!(controller.known().len(), 40);
        assert_eq!(controller.view().len(), 40);
        assert_eq!(controller.page(), 2);
        assert_eq!(controller.total_hint(), 1000);
    }

    #[test]
    fn append_keeps_total_hint_from_first_page() {
        let mut controller = mounted(1000);
        let command = only_command(controller.load_more());
        let update = controller.apply(Completion::Page {
            ticket: command.ticket(),
            result: Ok(page_of(21..=40, 2000)),
        });
        assert_eq!(controller.total_hint(), 1000);
        let hint_events = update
            .events
            .iter()
            .filter(|event| matches!(event, CatalogEvent::TotalHintUpdated(_)))
            .count();
        assert_eq!(hint_events, 0);
        assert_eq!(
            update.events,
            vec![CatalogEvent::ViewExtended {
                origin: ViewOrigin::Catalog,
                len: 40
            }]
        );
    }

    #[test]
    fn append_during_local_search_extends_instead_of_replacing() {
        let mut controller = mounted(1000);
        let command = only_command(controller.load_more());
        controller.search("mon3", ms(0));
        controller.tick(ms(300));
        assert_eq!(controller.view_origin(), ViewOrigin::LocalFilter);

        let update = controller.apply(Completion::Page {
            ticket: command.ticket(),
            result: Ok(page_of(21..=40, 1000)),
        });
        assert!(matches!(
            update.events.as_slice(),
            [CatalogEvent::ViewExtended {
                origin: ViewOrigin::LocalFilter,
                ..
            }]
        ));
    }

    #[test]
    fn append_skips_items_already_known() {
        let mut controller = mounted(1000);
        let command = only_command(controller.load_page(1, true).expect("page"));
        controller.apply(Completion::Page {
            ticket: command.ticket(),
            result: Ok(page_of(15..=25, 1000)),
        });
        let ids: Vec<u32> = controller.known().iter().map(|item| item.id.get()).collect();
        assert_eq!(ids, (1..=25).collect::<Vec<_>>());
    }

    #[test]
    fn load_more_is_noop_while_query_active() {
        let mut controller = mounted(1000);
        controller.search("mon", ms(0));
        assert!(!controller.can_load_more());
        assert!(controller.load_more().is_empty());
    }

    #[test]
    fn load_more_is_noop_when_catalog_complete() {
        let mut controller = mounted(20);
        assert!(controller.load_more().is_empty());
        assert!(!controller.is_loading());
    }

    #[test]
    fn load_more_is_noop_while_page_in_flight() {
        let mut controller = mounted(1000);
        let _pending = only_command(controller.load_more());
        assert!(controller.load_more().is_empty());
    }

    #[test]
    fn load_more_before_first_page_is_noop() {
        let mut controller = CatalogController::default();
        assert!(controller.load_more().is_empty());
    }

    #[test]
    fn failed_page_keeps_state_and_pagination() {
        let mut controller = mounted(1000);
        let command = only_command(controller.load_more());
        let update = controller.apply(Completion::Page {
            ticket: command.ticket(),
            result: Err(FetchError::network("connection reset")),
        });
        assert_eq!(
            update.events,
            vec![CatalogEvent::PageFailed {
                page: 2,
                message: "network failure: connection reset".to_owned()
            }]
        );
        assert_eq!(controller.known().len(), 20);
        assert_eq!(controller.page(), 1);
        assert!(!controller.is_loading());
        assert_eq!(controller.page_outcome(), Some(SlotOutcome::Failed));

        let retry = only_command(controller.load_more());
        let Command::FetchPage(request) = retry else {
            panic!("expected page fetch");
        };
        assert_eq!(request.page, 2);
    }

    #[test]
    fn canceled_page_is_silent() {
        let mut controller = mounted(1000);
        let command = only_command(controller.load_more());
        let update = controller.apply(Completion::Page {
            ticket: command.ticket(),
            result: Err(FetchError::Canceled),
        });
        assert!(update.is_empty());
        assert_eq!(controller.page_outcome(), Some(SlotOutcome::Canceled));
        assert_eq!(controller.known().len(), 20);
    }

    #[test]
    fn search_is_debounced_to_last_query() {
        let mut controller = mounted(1000);
        controller.search("mon1", ms(0));
        controller.search("mon12", ms(120));
        assert_eq!(controller.query(), "mon12");

        assert!(controller.tick(ms(300)).is_empty());
        let update = controller.tick(ms(420));
        assert_eq!(
            update.events,
            vec![CatalogEvent::ViewChanged {
                origin: ViewOrigin::LocalFilter,
                len: 1
            }]
        );
        assert_eq!(controller.view()[0].id.get(), 12);
        assert!(controller.tick(ms(2000)).is_empty());
    }

    #[test]
    fn empty_query_restores_known_catalog_in_order() {
        let mut controller = mounted(1000);
        controller.search("mon7", ms(0));
        controller.tick(ms(300));
        assert_eq!(controller.view_origin(), ViewOrigin::LocalFilter);

        controller.search("", ms(400));
        controller.tick(ms(700));
        assert_eq!(controller.view(), controller.known());
        assert_eq!(controller.view_origin(), ViewOrigin::Catalog);
    }

    #[test]
    fn short_and_numeric_queries_go_remote() {
        let mut controller = mounted(1000);
        for (index, query) in ["7", "ab", "mo", "12"].into_iter().enumerate() {
            let start = ms(index as u64 * 1000);
            controller.search(query, start);
            let command = only_command(controller.tick(start + ms(300)));
            assert!(matches!(command, Command::Lookup(_)), "query {query:?}");
        }
    }

    #[test]
    fn remote_lookup_replaces_view_with_single_item() {
        let mut controller = mounted(1000);
        controller.search("25", ms(0));
        let command = only_command(controller.tick(ms(300)));
        assert!(controller.is_searching());

        let update = controller.apply(Completion::Lookup {
            ticket: command.ticket(),
            result: Ok(item(25, "pikachu")),
        });
        assert_eq!(
            update.events,
            vec![CatalogEvent::ViewChanged {
                origin: ViewOrigin::RemoteLookup,
                len: 1
            }]
        );
        assert_eq!(controller.view()[0].name, "pikachu");
        assert_eq!(controller.known().len(), 20);
        assert!(!controller.is_searching());
    }

    #[test]
    fn lookup_not_found_falls_back_to_local_filter() {
        let mut controller = mounted(1000);
        controller.search("1", ms(0));
        let command = only_command(controller.tick(ms(300)));
        let update = controller.apply(Completion::Lookup {
            ticket: command.ticket(),
            result: Err(FetchError::NotFound {
                key: "1".to_owned(),
            }),
        });
        assert_eq!(
            update.events[0],
            CatalogEvent::LookupFellBack {
                query: "1".to_owned()
            }
        );
        let ids: Vec<u32> = controller.view().iter().map(|item| item.id.get()).collect();
        assert_eq!(ids, vec![1, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19]);
        assert_eq!(controller.view_origin(), ViewOrigin::LocalFilter);
    }

    #[test]
    fn lookup_network_failure_falls_back_and_may_be_empty() {
        let mut controller = mounted(1000);
        controller.search("zz", ms(0));
        let command = only_command(controller.tick(ms(300)));
        controller.apply(Completion::Lookup {
            ticket: command.ticket(),
            result: Err(FetchError::network("timeout")),
        });
        assert!(controller.view().is_empty());
        assert_eq!(controller.lookup_outcome(), Some(SlotOutcome::Failed));
    }

    #[test]
    fn newer_search_supersedes_outstanding_lookup() {
        let mut controller = mounted(1000);
        controller.search("25", ms(0));
        let lookup = only_command(controller.tick(ms(300)));

        controller.search("mon3", ms(400));
        controller.tick(ms(700));
        assert!(lookup.token().is_revoked());
        assert!(!controller.is_searching());

        let late = controller.apply(Completion::Lookup {
            ticket: lookup.ticket(),
            result: Ok(item(25, "pikachu")),
        });
        assert!(late.is_empty());
        assert_eq!(controller.view_origin(), ViewOrigin::LocalFilter);
        assert_eq!(controller.view()[0].id.get(), 3);
    }

    #[test]
    fn refresh_resets_page_and_clears_query() {
        let mut controller = mounted(1000);
        let more = only_command(controller.load_more());
        controller.apply(Completion::Page {
            ticket: more.ticket(),
            result: Ok(page_of(21..=40, 1000)),
        });
        controller.search("25", ms(0));
        let lookup = only_command(controller.tick(ms(300)));

        let Command::FetchPage(request) = only_command(controller.refresh()) else {
            panic!("expected page fetch");
        };
        assert_eq!(request.page, 1);
        assert_eq!(request.offset, 0);
        assert_eq!(controller.page(), 1);
        assert_eq!(controller.query(), "");
        assert!(controller.is_refreshing());
        assert!(lookup.token().is_revoked());

        controller.apply(Completion::Page {
            ticket: request.ticket,
            result: Ok(page_of(1..=20, 1000)),
        });
        assert_eq!(controller.known().len(), 20);
        assert!(!controller.is_refreshing());
    }

    #[test]
    fn refresh_drops_pending_debounced_query() {
        let mut controller = mounted(1000);
        controller.search("mon5", ms(0));
        controller.refresh();
        assert!(!controller.is_search_pending());
        assert!(controller.tick(ms(1000)).is_empty());
    }

    #[test]
    fn clear_search_restores_catalog_immediately() {
        let mut controller = mounted(1000);
        controller.search("mon9", ms(0));
        controller.tick(ms(300));
        let update = controller.clear_search();
        assert_eq!(
            update.events,
            vec![CatalogEvent::ViewChanged {
                origin: ViewOrigin::Catalog,
                len: 20
            }]
        );
        assert_eq!(controller.query(), "");
    }

    #[test]
    fn unmount_cancels_everything_outstanding() {
        let mut controller = mounted(1000);
        let page = only_command(controller.load_more());
        controller.search("25", ms(0));
        let lookup = only_command(controller.tick(ms(300)));
        controller.search("mon", ms(400));

        controller.unmount();
        assert!(page.token().is_revoked());
        assert!(lookup.token().is_revoked());
        assert!(!controller.is_loading());
        assert!(!controller.is_searching());
        assert!(controller.tick(ms(5000)).is_empty());
    }

    #[test]
    fn page_size_is_clamped_to_at_least_one() {
        let mut controller = CatalogController::new(ControllerOptions {
            page_size: 0,
            ..ControllerOptions::default()
        });
        let Command::FetchPage(request) = only_command(controller.mount()) else {
            panic!("expected page fetch");
        };
        assert_eq!(request.limit, 1);
    }
}

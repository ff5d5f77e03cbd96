// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result, anyhow};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use crossterm::{execute, terminal};
use pokedex_app::{
    CatalogController, CatalogEvent, CatalogItem, Command, Completion, FetchError,
    PokemonDetails, Stat, StatTier, Update, ViewOrigin,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, Tabs, Wrap};
use std::io;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

const POLL_INTERVAL: Duration = Duration::from_millis(50);
const STATUS_CLEAR_AFTER: Duration = Duration::from_secs(4);
/// Selecting a row inside this trailing share of the list asks for the next page.
const LOAD_MORE_THRESHOLD_PERCENT: usize = 30;
const PAGE_JUMP_ROWS: isize = 10;
const STAT_BAR_WIDTH: usize = 24;
const FALLBACK_TYPE_COLOR: Color = Color::Rgb(0xA8, 0xA8, 0x78);

/// Executes controller commands and detail fetches. The default `spawn_*`
/// methods run synchronously on the caller's thread; real runtimes override
/// them to run off the UI thread.
pub trait CatalogRuntime {
    fn run_command(&mut self, command: &Command) -> Completion;
    fn load_details(&mut self, key: &str) -> Result<PokemonDetails, FetchError>;

    fn spawn_command(&mut self, command: Command, tx: Sender<InternalEvent>) -> Result<()> {
        let completion = self.run_command(&command);
        tx.send(InternalEvent::Catalog(completion))
            .map_err(|_| anyhow!("catalog event channel closed"))?;
        Ok(())
    }

    fn spawn_details(
        &mut self,
        request_id: u64,
        key: &str,
        tx: Sender<InternalEvent>,
    ) -> Result<()> {
        let result = self.load_details(key);
        tx.send(InternalEvent::Details { request_id, result })
            .map_err(|_| anyhow!("details event channel closed"))?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InternalEvent {
    ClearStatus {
        token: u64,
    },
    Catalog(Completion),
    Details {
        request_id: u64,
        result: Result<PokemonDetails, FetchError>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Focus {
    #[default]
    List,
    Search,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum DetailTab {
    #[default]
    About,
    Stats,
}

impl DetailTab {
    const ALL: [Self; 2] = [Self::About, Self::Stats];

    const fn title(self) -> &'static str {
        match self {
            Self::About => "About",
            Self::Stats => "Stats",
        }
    }

    const fn toggled(self) -> Self {
        match self {
            Self::About => Self::Stats,
            Self::Stats => Self::About,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct DetailUiState {
    request_id: u64,
    item: CatalogItem,
    details: Option<PokemonDetails>,
    error: Option<String>,
    tab: DetailTab,
}

impl DetailUiState {
    fn is_loading(&self) -> bool {
        self.details.is_none() && self.error.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct ViewData {
    focus: Focus,
    cursor: usize,
    detail: Option<DetailUiState>,
    detail_requests: u64,
    status: Option<String>,
    status_token: u64,
}

pub fn run_app<R: CatalogRuntime>(
    controller: &mut CatalogController,
    runtime: &mut R,
) -> Result<()> {
    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, terminal::EnterAlternateScreen).context("enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;

    let mut view_data = ViewData::default();
    let (internal_tx, internal_rx) = mpsc::channel();
    let started = Instant::now();

    let mount = controller.mount();
    dispatch_update(runtime, &mut view_data, &internal_tx, mount);

    let mut result = Ok(());
    loop {
        tick_controller(
            controller,
            runtime,
            &mut view_data,
            &internal_tx,
            started.elapsed(),
        );
        process_internal_events(controller, runtime, &mut view_data, &internal_tx, &internal_rx);

        if let Err(error) = terminal.draw(|frame| render(frame, controller, &view_data)) {
            result = Err(error).context("draw frame");
            break;
        }

        let has_event = match event::poll(POLL_INTERVAL).context("poll event") {
            Ok(has_event) => has_event,
            Err(error) => {
                result = Err(error);
                break;
            }
        };
        if has_event {
            match event::read().context("read event") {
                Ok(Event::Key(key)) => {
                    let now = started.elapsed();
                    if handle_key_event(controller, runtime, &mut view_data, &internal_tx, key, now)
                    {
                        break;
                    }
                }
                Ok(_) => {}
                Err(error) => {
                    result = Err(error);
                    break;
                }
            }
        }
    }

    controller.unmount();
    disable_raw_mode().context("disable raw mode")?;
    execute!(io::stdout(), terminal::LeaveAlternateScreen).context("leave alternate screen")?;
    result
}

fn tick_controller<R: CatalogRuntime>(
    controller: &mut CatalogController,
    runtime: &mut R,
    view_data: &mut ViewData,
    tx: &Sender<InternalEvent>,
    now: Duration,
) {
    let update = controller.tick(now);
    dispatch_update(runtime, view_data, tx, update);
}

fn dispatch_update<R: CatalogRuntime>(
    runtime: &mut R,
    view_data: &mut ViewData,
    tx: &Sender<InternalEvent>,
    update: Update,
) {
    for event in update.events {
        handle_catalog_event(view_data, tx, event);
    }
    for command in update.commands {
        let ticket = command.ticket();
        if let Err(error) = runtime.spawn_command(command, tx.clone()) {
            warn!(
                event_name = "tui.command.spawn_failed",
                %ticket,
                error = %error,
                "could not start catalog request"
            );
            emit_status(view_data, tx, format!("request failed to start: {error}"));
        }
    }
}

fn process_internal_events<R: CatalogRuntime>(
    controller: &mut CatalogController,
    runtime: &mut R,
    view_data: &mut ViewData,
    tx: &Sender<InternalEvent>,
    rx: &Receiver<InternalEvent>,
) {
    while let Ok(event) = rx.try_recv() {
        match event {
            InternalEvent::ClearStatus { token } if token == view_data.status_token => {
                view_data.status = None;
            }
            InternalEvent::ClearStatus { .. } => {}
            InternalEvent::Catalog(completion) => {
                let update = controller.apply(completion);
                dispatch_update(runtime, view_data, tx, update);
            }
            InternalEvent::Details { request_id, result } => {
                handle_details_result(view_data, tx, request_id, result);
            }
        }
    }
}

fn handle_catalog_event(view_data: &mut ViewData, tx: &Sender<InternalEvent>, event: CatalogEvent) {
    match event {
        CatalogEvent::ViewChanged { origin, len } => {
            view_data.cursor = match origin {
                ViewOrigin::Catalog => view_data.cursor.min(len.saturating_sub(1)),
                ViewOrigin::LocalFilter | ViewOrigin::RemoteLookup => 0,
            };
        }
        CatalogEvent::ViewExtended { len, .. } => {
            view_data.cursor = view_data.cursor.min(len.saturating_sub(1));
        }
        CatalogEvent::TotalHintUpdated(_) => {}
        CatalogEvent::PageFailed { page, message } => {
            emit_status(
                view_data,
                tx,
                format!("page {page} failed to load: {message}; scroll again or press r to retry"),
            );
        }
        CatalogEvent::LookupFellBack { query } => {
            debug!(event_name = "tui.search.fell_back", %query, "showing local matches");
        }
    }
}

fn handle_details_result(
    view_data: &mut ViewData,
    tx: &Sender<InternalEvent>,
    request_id: u64,
    result: Result<PokemonDetails, FetchError>,
) {
    let Some(detail) = view_data.detail.as_mut() else {
        return;
    };
    if detail.request_id != request_id {
        return;
    }

    match result {
        Ok(details) => detail.details = Some(details),
        Err(error) => {
            let message = format!("could not load {}: {error}", detail.item.display_name());
            detail.error = Some(error.to_string());
            emit_status(view_data, tx, message);
        }
    }
}

fn schedule_status_clear(internal_tx: &Sender<InternalEvent>, token: u64) {
    let sender = internal_tx.clone();
    thread::spawn(move || {
        thread::sleep(STATUS_CLEAR_AFTER);
        let _ = sender.send(InternalEvent::ClearStatus { token });
    });
}

fn emit_status(
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    message: impl Into<String>,
) {
    view_data.status = Some(message.into());
    view_data.status_token = view_data.status_token.saturating_add(1);
    schedule_status_clear(internal_tx, view_data.status_token);
}

fn is_ctrl(key: KeyEvent, ch: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char(ch)
}

/// Returns true when the app should quit.
fn handle_key_event<R: CatalogRuntime>(
    controller: &mut CatalogController,
    runtime: &mut R,
    view_data: &mut ViewData,
    tx: &Sender<InternalEvent>,
    key: KeyEvent,
    now: Duration,
) -> bool {
    if is_ctrl(key, 'q') || is_ctrl(key, 'c') {
        return true;
    }
    if view_data.detail.is_some() {
        return handle_detail_key(view_data, key);
    }
    if is_ctrl(key, 'u') {
        clear_search(controller, runtime, view_data, tx);
        return false;
    }

    match view_data.focus {
        Focus::Search => {
            handle_search_key(controller, view_data, key, now);
            false
        }
        Focus::List => handle_list_key(controller, runtime, view_data, tx, key),
    }
}

fn handle_search_key(
    controller: &mut CatalogController,
    view_data: &mut ViewData,
    key: KeyEvent,
    now: Duration,
) {
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Down | KeyCode::Tab => {
            view_data.focus = Focus::List;
        }
        KeyCode::Backspace => {
            let mut query = controller.query().to_owned();
            if query.pop().is_some() {
                controller.search(&query, now);
            }
        }
        KeyCode::Char(ch)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            let mut query = controller.query().to_owned();
            query.push(ch);
            controller.search(&query, now);
        }
        _ => {}
    }
}

fn handle_list_key<R: CatalogRuntime>(
    controller: &mut CatalogController,
    runtime: &mut R,
    view_data: &mut ViewData,
    tx: &Sender<InternalEvent>,
    key: KeyEvent,
) -> bool {
    match key.code {
        KeyCode::Char('q') => return true,
        KeyCode::Char('/') => view_data.focus = Focus::Search,
        KeyCode::Char('j') | KeyCode::Down => move_cursor(controller, runtime, view_data, tx, 1),
        KeyCode::Char('k') | KeyCode::Up => move_cursor(controller, runtime, view_data, tx, -1),
        KeyCode::PageDown => move_cursor(controller, runtime, view_data, tx, PAGE_JUMP_ROWS),
        KeyCode::PageUp => move_cursor(controller, runtime, view_data, tx, -PAGE_JUMP_ROWS),
        KeyCode::Char('g') | KeyCode::Home => view_data.cursor = 0,
        KeyCode::Char('G') | KeyCode::End => {
            let last = controller.view().len().saturating_sub(1) as isize;
            let delta = last - view_data.cursor as isize;
            move_cursor(controller, runtime, view_data, tx, delta);
        }
        KeyCode::Char('r') => {
            view_data.cursor = 0;
            let update = controller.refresh();
            dispatch_update(runtime, view_data, tx, update);
        }
        KeyCode::Enter => open_details(controller, runtime, view_data, tx),
        KeyCode::Esc if !controller.query().is_empty() => {
            clear_search(controller, runtime, view_data, tx);
        }
        _ => {}
    }
    false
}

fn handle_detail_key(view_data: &mut ViewData, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') => return true,
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Left | KeyCode::Char('h') => {
            view_data.detail = None;
        }
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Right | KeyCode::Char('l') => {
            if let Some(detail) = view_data.detail.as_mut() {
                detail.tab = detail.tab.toggled();
            }
        }
        _ => {}
    }
    false
}

fn clear_search<R: CatalogRuntime>(
    controller: &mut CatalogController,
    runtime: &mut R,
    view_data: &mut ViewData,
    tx: &Sender<InternalEvent>,
) {
    let update = controller.clear_search();
    dispatch_update(runtime, view_data, tx, update);
}

fn move_cursor<R: CatalogRuntime>(
    controller: &mut CatalogController,
    runtime: &mut R,
    view_data: &mut ViewData,
    tx: &Sender<InternalEvent>,
    delta: isize,
) {
    let len = controller.view().len();
    if len == 0 {
        view_data.cursor = 0;
        return;
    }
    view_data.cursor = view_data.cursor.saturating_add_signed(delta).min(len - 1);
    if should_load_more(view_data.cursor, len) {
        let update = controller.load_more();
        dispatch_update(runtime, view_data, tx, update);
    }
}

fn should_load_more(cursor: usize, len: usize) -> bool {
    len > 0 && (cursor + 1) * 100 >= len * (100 - LOAD_MORE_THRESHOLD_PERCENT)
}

fn open_details<R: CatalogRuntime>(
    controller: &CatalogController,
    runtime: &mut R,
    view_data: &mut ViewData,
    tx: &Sender<InternalEvent>,
) {
    let Some(item) = controller.view().get(view_data.cursor) else {
        return;
    };
    view_data.detail_requests = view_data.detail_requests.saturating_add(1);
    let request_id = view_data.detail_requests;
    let key = item.id.to_string();
    view_data.detail = Some(DetailUiState {
        request_id,
        item: item.clone(),
        details: None,
        error: None,
        tab: DetailTab::default(),
    });

    debug!(event_name = "tui.details.requested", request_id, %key, "opening details");
    if let Err(error) = runtime.spawn_details(request_id, &key, tx.clone()) {
        emit_status(view_data, tx, format!("details failed to start: {error}"));
    }
}

fn render(frame: &mut ratatui::Frame<'_>, controller: &CatalogController, view_data: &ViewData) {
    match &view_data.detail {
        Some(detail) => render_detail(frame, detail, view_data),
        None => render_list(frame, controller, view_data),
    }
}

fn render_list(
    frame: &mut ratatui::Frame<'_>,
    controller: &CatalogController,
    view_data: &ViewData,
) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(2),
        ])
        .split(frame.area());

    let header = Paragraph::new(header_text(controller.total_hint()))
        .style(Style::default().fg(Color::White))
        .block(Block::default().title("pokedex").borders(Borders::ALL));
    frame.render_widget(header, layout[0]);

    let focused = view_data.focus == Focus::Search;
    let search_border = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    let search = Paragraph::new(search_line(controller.query(), focused)).block(
        Block::default()
            .title("search")
            .borders(Borders::ALL)
            .border_style(search_border),
    );
    frame.render_widget(search, layout[1]);

    if controller.view().is_empty() {
        let text = if controller.is_loading() || controller.is_searching() {
            "Loading...".to_owned()
        } else {
            empty_text(controller.query())
        };
        let empty = Paragraph::new(text)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(empty, layout[2]);
    } else {
        render_table(frame, layout[2], controller, view_data);
    }

    if let Some(footer) = footer_text(controller) {
        let footer = Paragraph::new(footer)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Cyan));
        frame.render_widget(footer, layout[3]);
    }

    render_status(frame, layout[4], view_data);
}

fn render_table(
    frame: &mut ratatui::Frame<'_>,
    area: Rect,
    controller: &CatalogController,
    view_data: &ViewData,
) {
    let view = controller.view();
    let rows_visible = usize::from(area.height.saturating_sub(2));
    let (start, end) = visible_window(view_data.cursor, view.len(), rows_visible);

    let rows = view[start..end].iter().enumerate().map(|(offset, item)| {
        let [number, name, types] = row_cells(item);
        let mut style = Style::default();
        if start + offset == view_data.cursor {
            style = style.bg(Color::DarkGray).add_modifier(Modifier::BOLD);
        }
        Row::new(vec![
            Cell::from(number).style(Style::default().fg(Color::DarkGray)),
            Cell::from(name),
            Cell::from(types).style(Style::default().fg(type_color(item.primary_type()))),
        ])
        .style(style)
    });

    let widths = [
        Constraint::Length(6),
        Constraint::Min(12),
        Constraint::Length(20),
    ];
    let table = Table::new(rows, widths).column_spacing(2).block(
        Block::default()
            .title(list_title(controller.view_origin(), view.len()))
            .borders(Borders::ALL),
    );
    frame.render_widget(table, area);
}

fn render_detail(frame: &mut ratatui::Frame<'_>, detail: &DetailUiState, view_data: &ViewData) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(2),
        ])
        .split(frame.area());

    let accent = type_color(detail.item.primary_type());
    let title = Paragraph::new(detail_title(&detail.item))
        .style(Style::default().add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title("details")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(accent)),
        );
    frame.render_widget(title, layout[0]);

    let selected = DetailTab::ALL
        .iter()
        .position(|tab| *tab == detail.tab)
        .unwrap_or(0);
    let tabs = Tabs::new(DetailTab::ALL.iter().map(|tab| tab.title()))
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(Color::White))
        .highlight_style(Style::default().fg(accent).add_modifier(Modifier::BOLD))
        .select(selected);
    frame.render_widget(tabs, layout[1]);

    let body_block = Block::default().borders(Borders::ALL);
    let body = match (&detail.details, &detail.error) {
        (Some(details), _) => match detail.tab {
            DetailTab::About => Paragraph::new(
                about_lines(details)
                    .into_iter()
                    .map(Line::from)
                    .collect::<Vec<_>>(),
            ),
            DetailTab::Stats => Paragraph::new(stats_lines(details)),
        },
        (None, Some(error)) => {
            Paragraph::new(format!("Could not load details: {error}\n\npress esc to go back"))
                .style(Style::default().fg(Color::Red))
        }
        (None, None) => Paragraph::new("Loading...").alignment(Alignment::Center),
    };
    frame.render_widget(body.wrap(Wrap { trim: false }).block(body_block), layout[2]);

    render_status(frame, layout[3], view_data);
}

fn render_status(frame: &mut ratatui::Frame<'_>, area: Rect, view_data: &ViewData) {
    let status = Paragraph::new(status_text(view_data))
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().borders(Borders::TOP));
    frame.render_widget(status, area);
}

fn header_text(total_hint: u64) -> String {
    format!("{total_hint} Pokémon discovered")
}

fn search_line(query: &str, focused: bool) -> String {
    if focused {
        format!("{query}█")
    } else if query.is_empty() {
        "press / to search by name or number".to_owned()
    } else {
        query.to_owned()
    }
}

fn empty_text(query: &str) -> String {
    if query.trim().is_empty() {
        "No Pokémon found".to_owned()
    } else {
        format!("No Pokémon found for \"{query}\"")
    }
}

fn footer_text(controller: &CatalogController) -> Option<&'static str> {
    if controller.is_refreshing() {
        Some("Refreshing...")
    } else if controller.is_searching() || controller.is_search_pending() {
        Some("Searching...")
    } else if controller.is_loading() {
        Some("Loading...")
    } else {
        None
    }
}

fn list_title(origin: ViewOrigin, len: usize) -> String {
    match origin {
        ViewOrigin::Catalog => format!("catalog ({len})"),
        ViewOrigin::LocalFilter => format!("matches ({len})"),
        ViewOrigin::RemoteLookup => format!("lookup ({len})"),
    }
}

fn status_text(view_data: &ViewData) -> String {
    if let Some(status) = &view_data.status {
        return status.clone();
    }
    match (&view_data.detail, view_data.focus) {
        (Some(_), _) => "tab switch · esc back · q quit".to_owned(),
        (None, Focus::Search) => "type to search · esc done · ctrl+u clear".to_owned(),
        (None, Focus::List) => {
            "/ search · j/k move · enter details · r refresh · q quit".to_owned()
        }
    }
}

fn type_labels(item: &CatalogItem) -> String {
    item.types
        .iter()
        .map(|tag| tag.label())
        .collect::<Vec<_>>()
        .join(" / ")
}

fn row_cells(item: &CatalogItem) -> [String; 3] {
    [item.display_number(), item.display_name(), type_labels(item)]
}

fn detail_title(item: &CatalogItem) -> String {
    format!(
        "{}  {}  {}",
        item.display_number(),
        item.display_name(),
        type_labels(item)
    )
}

/// Range of rows to draw so the cursor stays on screen.
fn visible_window(cursor: usize, len: usize, rows: usize) -> (usize, usize) {
    if rows == 0 || len == 0 {
        return (0, 0);
    }
    let start = (cursor + 1).saturating_sub(rows).min(len.saturating_sub(1));
    (start, (start + rows).min(len))
}

fn about_lines(details: &PokemonDetails) -> Vec<String> {
    let abilities = details
        .abilities
        .iter()
        .map(|ability| {
            if ability.hidden {
                format!("{} (hidden)", ability.display_name())
            } else {
                ability.display_name()
            }
        })
        .collect::<Vec<_>>()
        .join(", ");

    let mut lines = vec![
        format!("{:<12}{:.1} m", "Height", details.height_meters()),
        format!("{:<12}{:.1} kg", "Weight", details.weight_kilograms()),
        format!("{:<12}{}", "Abilities", abilities),
    ];
    if let Some(image) = details.sprites.primary_image() {
        lines.push(format!("{:<12}{}", "Artwork", image));
    }
    lines
}

fn stats_lines(details: &PokemonDetails) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(format!("{:<10}{}", "Total", details.total_base_stats()))
            .style(Style::default().add_modifier(Modifier::BOLD)),
        Line::from(""),
    ];
    lines.extend(details.stats.iter().map(|stat| {
        Line::from(vec![
            Span::raw(format!("{:<10}", stat.label())),
            Span::styled(
                stat_bar(stat, STAT_BAR_WIDTH),
                Style::default().fg(tier_color(stat.tier())),
            ),
            Span::raw(format!(" {:>3}", stat.base)),
        ])
    }));
    lines
}

fn stat_bar(stat: &Stat, width: usize) -> String {
    let filled = ((stat.ratio() * width as f64).round() as usize).min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

const fn tier_color(tier: StatTier) -> Color {
    match tier {
        StatTier::Excellent => Color::Rgb(0x4C, 0xAF, 0x50),
        StatTier::Good => Color::Rgb(0x8B, 0xC3, 0x4A),
        StatTier::Fair => Color::Rgb(0xFF, 0xC1, 0x07),
        StatTier::Poor => Color::Rgb(0xFF, 0x98, 0x00),
        StatTier::Weak => Color::Rgb(0xF4, 0x43, 0x36),
    }
}

fn type_color(type_name: &str) -> Color {
    match type_name {
        "normal" => Color::Rgb(0xA8, 0xA8, 0x78),
        "fire" => Color::Rgb(0xF0, 0x80, 0x30),
        "water" => Color::Rgb(0x68, 0x90, 0xF0),
        "electric" => Color::Rgb(0xF8, 0xD0, 0x30),
        "grass" => Color::Rgb(0x78, 0xC8, 0x50),
        "ice" => Color::Rgb(0x98, 0xD8, 0xD8),
        "fighting" => Color::Rgb(0xC0, 0x30, 0x28),
        "poison" => Color::Rgb(0xA0, 0x40, 0xA0),
        "ground" => Color::Rgb(0xE0, 0xC0, 0x68),
        "flying" => Color::Rgb(0xA8, 0x90, 0xF0),
        "psychic" => Color::Rgb(0xF8, 0x58, 0x88),
        "bug" => Color::Rgb(0xA8, 0xB8, 0x20),
        "rock" => Color::Rgb(0xB8, 0xA0, 0x38),
        "ghost" => Color::Rgb(0x70, 0x58, 0x98),
        "dragon" => Color::Rgb(0x70, 0x38, 0xF8),
        "dark" => Color::Rgb(0x70, 0x58, 0x48),
        "steel" => Color::Rgb(0xB8, 0xB8, 0xD0),
        "fairy" => Color::Rgb(0xEE, 0x99, 0xAC),
        _ => FALLBACK_TYPE_COLOR,
    }
}

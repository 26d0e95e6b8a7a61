use crate::data::{AppSettings, Assistance, GuestKind, TripSession};
use crate::dates;
use crate::wizard::{WizardController, WizardStep};
use anyhow::Result;
use crossterm::event::{self, Event as CEvent, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
};
use std::io::Stdout;
use std::time::Duration as StdDuration;

const ACCENT: Color = Color::Rgb(37, 99, 235);
const MUTED: Color = Color::DarkGray;

const DETAILS_LABELS: [&str; 3] = ["Name", "Start Location", "End Location"];
const DATE_LABELS: [&str; 2] = ["Start Date", "End Date"];

#[derive(PartialEq, Default, Debug, Clone, Copy)]
enum ViewState {
    #[default]
    Wizard,
    Trips,
}

pub struct App<'a> {
    wizard: WizardController<'a>,
    pub settings: AppSettings,
    view_state: ViewState,
    /// Focused row on the details, dates and guests steps.
    field_cursor: usize,
    /// Date text being typed; applied to the focused date on Enter.
    input_buffer: String,
    /// Assistance checkbox and picker, stored into the draft on Enter.
    assistance_enabled: bool,
    assistance_choice: Assistance,
    /// Inline feedback (message, color). Cleared on next keypress.
    status: Option<(String, Color)>,
    /// Selected row in the trips list.
    list_cursor: usize,
}

impl<'a> App<'a> {
    pub fn new(session: &'a mut TripSession, settings: AppSettings) -> Self {
        App {
            wizard: WizardController::new(session),
            settings,
            view_state: ViewState::Wizard,
            field_cursor: 0,
            input_buffer: String::new(),
            assistance_enabled: false,
            assistance_choice: Assistance::Car,
            status: None,
            list_cursor: 0,
        }
    }

    /// Returns true if the app should quit.
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        if modifiers.contains(KeyModifiers::CONTROL) && code == KeyCode::Char('c') {
            return true;
        }
        self.status = None;

        if self.view_state == ViewState::Trips {
            return self.handle_trips_key(code);
        }
        if self.wizard.is_booked() {
            return self.handle_booked_key(code);
        }
        match self.wizard.step() {
            WizardStep::Details => self.handle_details_key(code),
            WizardStep::Dates => self.handle_dates_key(code),
            WizardStep::Guests => self.handle_guests_key(code),
            WizardStep::Assistance => self.handle_assistance_key(code),
            WizardStep::Confirmation => self.handle_confirmation_key(code),
            WizardStep::Booked => {}
        }
        false
    }

    fn advance(&mut self) {
        match self.wizard.advance() {
            Ok(step) => self.enter_step(step),
            Err(e) => self.status = Some((e.to_string(), Color::Red)),
        }
    }

    fn go_back(&mut self) {
        match self.wizard.go_back() {
            Ok(step) => self.enter_step(step),
            Err(e) => self.status = Some((e.to_string(), Color::Red)),
        }
    }

    /// Resets per-step input state when a step is (re)entered.
    fn enter_step(&mut self, step: WizardStep) {
        self.field_cursor = 0;
        self.input_buffer.clear();
        match step {
            WizardStep::Dates => {
                self.input_buffer = self.wizard.draft().start_date.clone();
            }
            WizardStep::Assistance => {
                let current = self.wizard.draft().assistance;
                self.assistance_enabled = current.is_required();
                self.assistance_choice = if current.is_required() {
                    current
                } else {
                    Assistance::Car
                };
            }
            WizardStep::Booked => {
                let name = self.wizard.draft().name.clone();
                self.settings.remember_name(&name);
                self.status = Some((
                    "Awesome! Your booking has been confirmed.".to_string(),
                    Color::Green,
                ));
            }
            _ => {}
        }
    }

    fn start_new_booking(&mut self) {
        self.wizard.start_new_booking();
        self.view_state = ViewState::Wizard;
        self.enter_step(WizardStep::Details);
    }

    // ── Details ───────────────────────────────────────────────────────────────

    fn details_value(&self, field: usize) -> &str {
        let draft = self.wizard.draft();
        match field {
            0 => draft.name.as_str(),
            1 => draft.start_location.as_str(),
            _ => draft.end_location.as_str(),
        }
    }

    fn edit_details(&mut self, edit: impl FnOnce(&mut String)) {
        let mut value = self.details_value(self.field_cursor).to_string();
        edit(&mut value);
        let store = self.wizard.draft_mut();
        match self.field_cursor {
            0 => store.set_name(&value),
            1 => store.set_start_location(&value),
            _ => store.set_end_location(&value),
        }
    }

    fn handle_details_key(&mut self, code: KeyCode) {
        let n = DETAILS_LABELS.len();
        match code {
            KeyCode::Up | KeyCode::BackTab => {
                self.field_cursor = (self.field_cursor + n - 1) % n;
            }
            KeyCode::Tab
                if self.field_cursor == 0
                    && self.wizard.draft().name.is_empty()
                    && !self.settings.remembered_name.is_empty() =>
            {
                let name = self.settings.remembered_name.clone();
                self.wizard.draft_mut().set_name(&name);
            }
            KeyCode::Down | KeyCode::Tab => {
                self.field_cursor = (self.field_cursor + 1) % n;
            }
            KeyCode::Char(c) => self.edit_details(|v| v.push(c)),
            KeyCode::Backspace => self.edit_details(|v| {
                v.pop();
            }),
            KeyCode::Enter => self.advance(),
            KeyCode::Esc => {
                self.view_state = ViewState::Trips;
            }
            _ => {}
        }
    }

    // ── Dates ─────────────────────────────────────────────────────────────────

    fn date_value(&self, field: usize) -> &str {
        let draft = self.wizard.draft();
        if field == 0 { draft.start_date.as_str() } else { draft.end_date.as_str() }
    }

    fn focus_date(&mut self, field: usize) {
        self.field_cursor = field;
        self.input_buffer = self.date_value(field).to_string();
    }

    fn handle_dates_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char(c) if c.is_ascii_digit() || c == '/' => {
                if self.input_buffer.len() < 10 {
                    self.input_buffer.push(c);
                }
            }
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Up | KeyCode::Down | KeyCode::Tab | KeyCode::BackTab => {
                let other = 1 - self.field_cursor.min(1);
                self.focus_date(other);
            }
            KeyCode::Enter => {
                let typed = self.input_buffer.clone();
                let unchanged =
                    dates::normalize(&typed).as_deref() == Some(self.date_value(self.field_cursor));
                if !typed.is_empty() && !unchanged {
                    let store = self.wizard.draft_mut();
                    let applied = if self.field_cursor == 0 {
                        store.set_start_date(&typed)
                    } else {
                        store.set_end_date(&typed)
                    };
                    if let Err(e) = applied {
                        self.status = Some((e.to_string(), Color::Red));
                        return;
                    }
                    let was_start = self.field_cursor == 0;
                    self.focus_date(1);
                    if was_start {
                        return;
                    }
                }
                self.advance();
            }
            KeyCode::Esc => self.go_back(),
            _ => {}
        }
    }

    // ── Guests ────────────────────────────────────────────────────────────────

    fn handle_guests_key(&mut self, code: KeyCode) {
        let n = GuestKind::ALL.len();
        let kind = GuestKind::ALL[self.field_cursor.min(n - 1)];
        match code {
            KeyCode::Up => self.field_cursor = (self.field_cursor + n - 1) % n,
            KeyCode::Down | KeyCode::Tab => self.field_cursor = (self.field_cursor + 1) % n,
            KeyCode::Right | KeyCode::Char('+') => self.wizard.draft_mut().increment_guest(kind),
            KeyCode::Left | KeyCode::Char('-') => self.wizard.draft_mut().decrement_guest(kind),
            KeyCode::Enter => self.advance(),
            KeyCode::Esc => self.go_back(),
            _ => {}
        }
    }

    // ── Assistance ────────────────────────────────────────────────────────────

    fn handle_assistance_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char(' ') => self.assistance_enabled = !self.assistance_enabled,
            KeyCode::Right | KeyCode::Down => {
                self.assistance_choice = self.assistance_choice.cycle(true);
            }
            KeyCode::Left | KeyCode::Up => {
                self.assistance_choice = self.assistance_choice.cycle(false);
            }
            KeyCode::Enter => {
                let (enabled, choice) = (self.assistance_enabled, self.assistance_choice);
                self.wizard.draft_mut().choose_assistance(enabled, choice);
                self.advance();
            }
            KeyCode::Esc => self.go_back(),
            _ => {}
        }
    }

    // ── Confirmation / Booked ─────────────────────────────────────────────────

    fn handle_confirmation_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter => self.advance(),
            KeyCode::Esc => self.go_back(),
            _ => {}
        }
    }

    fn handle_booked_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Enter | KeyCode::Char('n') => self.start_new_booking(),
            KeyCode::Char('t') => {
                self.list_cursor = self.wizard.history().len().saturating_sub(1);
                self.view_state = ViewState::Trips;
            }
            KeyCode::Char('q') => return true,
            _ => {}
        }
        false
    }

    // ── Trips ─────────────────────────────────────────────────────────────────

    fn handle_trips_key(&mut self, code: KeyCode) -> bool {
        let len = self.wizard.history().len();
        match code {
            KeyCode::Up => {
                if self.list_cursor > 0 {
                    self.list_cursor -= 1;
                }
            }
            KeyCode::Down => {
                if self.list_cursor + 1 < len {
                    self.list_cursor += 1;
                }
            }
            KeyCode::Delete | KeyCode::Char('x') => {
                match self.wizard.history_mut().remove(self.list_cursor) {
                    Ok(removed) => {
                        self.status = Some((
                            format!("Cancelled trip to {}", removed.end_location),
                            Color::Yellow,
                        ));
                        let remaining = self.wizard.history().len();
                        if self.list_cursor > 0 && self.list_cursor >= remaining {
                            self.list_cursor -= 1;
                        }
                    }
                    Err(e) => self.status = Some((e.to_string(), Color::Red)),
                }
            }
            KeyCode::Char('n') => self.start_new_booking(),
            KeyCode::Esc => self.view_state = ViewState::Wizard,
            KeyCode::Char('q') => return true,
            _ => {}
        }
        false
    }

    // ── Rendering ─────────────────────────────────────────────────────────────

    pub fn render(&self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // step indicator
                Constraint::Min(8),    // step body or trips list
                Constraint::Length(3), // status + key hints
            ])
            .split(f.area());

        match self.view_state {
            ViewState::Trips => {
                self.render_trips(f, chunks[0].union(chunks[1]));
            }
            ViewState::Wizard => {
                self.render_step_indicator(f, chunks[0]);
                self.render_step(f, chunks[1]);
            }
        }
        self.render_footer(f, chunks[2]);
    }

    fn render_step_indicator(&self, f: &mut Frame, area: Rect) {
        let current = self.wizard.current_step();
        let mut spans = Vec::with_capacity(WizardStep::COUNT * 2);
        for i in 0..WizardStep::COUNT {
            let color = if self.wizard.is_booked() {
                Color::Green
            } else if i == current {
                ACCENT
            } else {
                MUTED
            };
            spans.push(Span::styled("━━━━━━━━", Style::default().fg(color)));
            spans.push(Span::raw(" "));
        }
        let p = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::NONE));
        f.render_widget(p, area);
    }

    fn render_step(&self, f: &mut Frame, area: Rect) {
        let step = self.wizard.step();
        let lines = match step {
            WizardStep::Details => self.details_lines(),
            WizardStep::Dates => self.dates_lines(),
            WizardStep::Guests => self.guests_lines(),
            WizardStep::Assistance => self.assistance_lines(),
            WizardStep::Confirmation => self.confirmation_lines(),
            WizardStep::Booked => vec![
                Line::from(Span::styled(
                    "Awesome!",
                    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                )),
                Line::from("Your booking has been confirmed."),
            ],
        };
        let p = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", step.title())),
        );
        f.render_widget(p, area);
    }

    fn field_line(&self, label: &str, value: &str, focused: bool) -> Line<'static> {
        let marker = if focused { "> " } else { "  " };
        let cursor = if focused { "_" } else { "" };
        let style = if focused {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        Line::from(vec![
            Span::styled(format!("{}{:<16}", marker, label), style),
            Span::raw(format!("{}{}", value, cursor)),
        ])
    }

    fn details_lines(&self) -> Vec<Line<'static>> {
        let mut lines = vec![
            Line::from(Span::styled(
                "Enter your name and location details",
                Style::default().fg(MUTED),
            )),
            Line::from(""),
        ];
        for (i, label) in DETAILS_LABELS.iter().enumerate() {
            lines.push(self.field_line(label, self.details_value(i), i == self.field_cursor));
        }
        if !self.settings.remembered_name.is_empty() && self.wizard.draft().name.is_empty() {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                format!("Tab: use remembered name '{}'", self.settings.remembered_name),
                Style::default().fg(MUTED),
            )));
        }
        lines
    }

    fn dates_lines(&self) -> Vec<Line<'static>> {
        let mut lines = vec![
            Line::from(Span::styled(
                "Select your Start and End Date (dd/mm/yyyy).",
                Style::default().fg(MUTED),
            )),
            Line::from(""),
        ];
        for (i, label) in DATE_LABELS.iter().enumerate() {
            let focused = i == self.field_cursor;
            let value = if focused {
                self.input_buffer.clone()
            } else {
                self.date_value(i).to_string()
            };
            lines.push(self.field_line(label, &value, focused));
        }
        let draft = self.wizard.draft();
        if let Some(days) = dates::trip_days(&draft.start_date, &draft.end_date) {
            lines.push(Line::from(""));
            lines.push(Line::from(format!("{} day(s)", days)));
        }
        lines
    }

    fn guests_lines(&self) -> Vec<Line<'static>> {
        let guests = self.wizard.draft().guests;
        let mut lines = vec![
            Line::from(Span::styled("Select your Guests", Style::default().fg(MUTED))),
            Line::from(""),
        ];
        for (i, kind) in GuestKind::ALL.iter().enumerate() {
            let value = format!("-  {:>2}  +   {}", guests.get(*kind), kind.age_hint());
            lines.push(self.field_line(kind.label(), &value, i == self.field_cursor));
        }
        lines
    }

    fn assistance_lines(&self) -> Vec<Line<'static>> {
        let checkbox = if self.assistance_enabled { "[x]" } else { "[ ]" };
        let mut lines = vec![
            Line::from(Span::styled(
                "Select your Travel Assistance.",
                Style::default().fg(MUTED),
            )),
            Line::from(""),
            Line::from(format!("{} Travel Assistance", checkbox)),
        ];
        if self.assistance_enabled {
            let options: Vec<Span> = Assistance::MODES
                .iter()
                .map(|m| {
                    if *m == self.assistance_choice {
                        Span::styled(
                            format!(" [{}] ", m.label()),
                            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                        )
                    } else {
                        Span::raw(format!("  {}  ", m.label()))
                    }
                })
                .collect();
            lines.push(Line::from(""));
            lines.push(Line::from(options));
        }
        lines
    }

    fn confirmation_lines(&self) -> Vec<Line<'static>> {
        let d = self.wizard.draft();
        let days = dates::trip_days(&d.start_date, &d.end_date)
            .map(|n| n.to_string())
            .unwrap_or_else(|| "?".to_string());
        let rows = [
            ("Name", d.name.clone()),
            ("Start Location", d.start_location.clone()),
            ("End Location", d.end_location.clone()),
            ("Start Date", d.start_date.clone()),
            ("End Date", d.end_date.clone()),
            ("Days", days),
            ("Guests", d.guests.total().to_string()),
            ("Travel Assistance", d.assistance.to_string()),
        ];
        let mut lines = vec![
            Line::from(Span::styled("Confirm your details", Style::default().fg(MUTED))),
            Line::from(""),
        ];
        for (label, value) in rows {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {:<18}", label),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(value),
            ]));
        }
        lines
    }

    fn render_trips(&self, f: &mut Frame, area: Rect) {
        let history = self.wizard.history();
        if history.is_empty() {
            let p = Paragraph::new(vec![
                Line::from("No upcoming trips."),
                Line::from(Span::styled(
                    "When you book a trip, you will see your trip details here.",
                    Style::default().fg(MUTED),
                )),
            ])
            .block(Block::default().borders(Borders::ALL).title(" My Trips "));
            f.render_widget(p, area);
            return;
        }

        let bold = Style::default().add_modifier(Modifier::BOLD);
        let header = Row::new(vec![
            Cell::from("#").style(bold),
            Cell::from("Destination").style(bold),
            Cell::from("Start").style(bold),
            Cell::from("End").style(bold),
            Cell::from("Days").style(bold),
            Cell::from("Assistance").style(bold),
        ]);
        let rows: Vec<Row> = history
            .entries()
            .iter()
            .enumerate()
            .map(|(i, t)| {
                let destination = if t.end_location.is_empty() {
                    "Unknown".to_string()
                } else {
                    t.end_location.clone()
                };
                Row::new(vec![
                    Cell::from(format!("{}", i + 1)),
                    Cell::from(destination),
                    Cell::from(t.start_date.clone()),
                    Cell::from(t.end_date.clone()),
                    Cell::from(t.days().map(|d| d.to_string()).unwrap_or_default()),
                    Cell::from(t.assistance.to_string()),
                ])
            })
            .collect();

        let mut table_state = TableState::default();
        table_state.select(Some(self.list_cursor.min(history.len() - 1)));

        let table = Table::new(
            rows,
            [
                Constraint::Length(3),
                Constraint::Length(28),
                Constraint::Length(12),
                Constraint::Length(12),
                Constraint::Length(6),
                Constraint::Length(14),
            ],
        )
        .header(header)
        .block(Block::default().borders(Borders::ALL).title(" My Trips "))
        .row_highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .bg(MUTED)
                .add_modifier(Modifier::BOLD),
        );
        f.render_stateful_widget(table, area, &mut table_state);
    }

    fn render_footer(&self, f: &mut Frame, area: Rect) {
        let hints = match (self.view_state, self.wizard.step()) {
            (ViewState::Trips, _) => "↑↓=move  x=cancel trip  n=new booking  Esc=back  q=quit",
            (_, WizardStep::Details) => "↑↓/Tab=field  Enter=next  Esc=my trips  Ctrl+C=quit",
            (_, WizardStep::Dates) => "↑↓=field  Enter=set/next  Esc=previous",
            (_, WizardStep::Guests) => "↑↓=guest  +/-=count  Enter=next  Esc=previous",
            (_, WizardStep::Assistance) => "Space=toggle  ←→=mode  Enter=next  Esc=previous",
            (_, WizardStep::Confirmation) => "Enter=confirm  Esc=cancel",
            (_, WizardStep::Booked) => "Enter/n=book a new trip  t=my trips  q=quit",
        };
        let mut lines = Vec::with_capacity(2);
        if let Some((msg, color)) = &self.status {
            lines.push(Line::from(Span::styled(msg.clone(), Style::default().fg(*color))));
        } else {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(Span::styled(hints, Style::default().fg(MUTED))));
        f.render_widget(Paragraph::new(lines), area);
    }
}

// ── App event loop ────────────────────────────────────────────────────────────

pub fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| app.render(f))?;
        if event::poll(StdDuration::from_millis(16))? {
            match event::read()? {
                CEvent::Key(key) if key.kind == KeyEventKind::Press => {
                    if app.handle_key(key.code, key.modifiers) {
                        break;
                    }
                }
                _ => {}
            }
        }
    }
    Ok(())
}

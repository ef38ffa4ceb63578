//! Interactive paste-and-total screen.
//!
//! Layout: splash header, entry tables, multi-line input box, status line.
//! Ctrl-P runs the classifier over the input box, Ctrl-T calculates totals
//! for the last processed input, Esc quits.

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Row, Table, Wrap},
    Frame, Terminal,
};
use std::io::{self, Stdout};
use valsep_core::{Entry, ExtractPolicy};

use crate::session::{sort_for_display, ProcessOutcome, Session};

struct App {
    session: Session,
    policy: ExtractPolicy,
    input: String,
    positive: Vec<Entry>,
    other: Vec<Entry>,
    status: Vec<String>,
    show_help: bool,
}

impl App {
    fn new(policy: ExtractPolicy) -> Self {
        Self {
            session: Session::new(),
            policy,
            input: String::new(),
            positive: Vec::new(),
            other: Vec::new(),
            status: vec!["Paste your values below. Lines with + will be separated and summed.".to_string()],
            show_help: true,
        }
    }

    fn process(&mut self) -> Result<()> {
        match self.session.process(&self.input) {
            ProcessOutcome::EmptyInput => {
                self.status = vec!["Please provide some input to process.".to_string()];
            }
            ProcessOutcome::Processed { positive, other } => {
                let (pos, oth) = self.session.entries(self.policy)?;
                self.positive = pos;
                self.other = oth;
                self.status = vec![format!(
                    "Processed {} positive and {} other line(s). Ctrl-T for totals.",
                    positive, other
                )];
            }
        }
        Ok(())
    }

    fn calculate_totals(&mut self) -> Result<()> {
        if !self.session.processed() {
            self.status = vec!["Process some input first (Ctrl-P).".to_string()];
            return Ok(());
        }
        self.status = self.session.totals(self.policy)?.messages();
        Ok(())
    }
}

pub fn run(policy: ExtractPolicy) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = event_loop(&mut terminal, App::new(policy));

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    res
}

fn event_loop(terminal: &mut Terminal<CrosstermBackend<Stdout>>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| draw(f, &app))?;

        if event::poll(std::time::Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
                match key.code {
                    KeyCode::Esc => break,
                    KeyCode::Char('p') if ctrl => app.process()?,
                    KeyCode::Char('t') if ctrl => app.calculate_totals()?,
                    KeyCode::F(1) => {
                        app.show_help = !app.show_help;
                    }
                    KeyCode::Enter => {
                        app.input.push('\n');
                    }
                    KeyCode::Backspace => {
                        app.input.pop();
                    }
                    KeyCode::Char(c) if !ctrl => {
                        app.input.push(c);
                    }
                    _ => {}
                }
            }
        }
    }

    Ok(())
}

fn draw(f: &mut Frame, app: &App) {
    let size = f.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Min(8),
            Constraint::Length(8),
            Constraint::Length(5),
        ])
        .split(size);

    draw_header(f, chunks[0], app.show_help);
    draw_tables(f, chunks[1], app);

    let input_block = Block::default()
        .borders(Borders::ALL)
        .title("values (Enter = new line)");
    let input_widget = Paragraph::new(app.input.as_str())
        .block(input_block)
        .style(Style::default().fg(Color::White))
        .wrap(Wrap { trim: false });
    f.render_widget(input_widget, chunks[2]);

    let status_lines: Vec<Line> = app
        .status
        .iter()
        .map(|s| Line::from(Span::styled(s.clone(), Style::default().fg(Color::Yellow))))
        .collect();
    let status = Paragraph::new(Text::from(status_lines))
        .block(Block::default().borders(Borders::ALL).title("totals"))
        .wrap(Wrap { trim: false });
    f.render_widget(status, chunks[3]);
}

fn draw_header(f: &mut Frame, area: Rect, show_help: bool) {
    let mut lines = vec![Line::from(Span::styled(
        "Value Separator and Calculator",
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    ))];
    if show_help {
        lines.push(Line::from(Span::styled(
            "Ctrl-P=process, Ctrl-T=calculate totals, F1=toggle help, Esc=quit",
            Style::default().fg(Color::Gray),
        )));
    }
    let splash = Paragraph::new(Text::from(lines))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(splash, area);
}

fn draw_tables(f: &mut Frame, area: Rect, app: &App) {
    if !app.session.processed() {
        let hint = Paragraph::new("Nothing processed yet.")
            .style(Style::default().fg(Color::Gray))
            .block(Block::default().borders(Borders::ALL).title("entries"));
        f.render_widget(hint, area);
        return;
    }

    if !app.positive.is_empty() {
        let halves = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);
        render_entry_table(f, halves[0], "Positive (+) Entries", &app.positive);
        render_entry_table(f, halves[1], "Other Entries", &app.other);
    } else if !app.other.is_empty() {
        render_entry_table(f, area, "All Entries", &app.other);
    } else {
        let hint = Paragraph::new("No lines with a parseable amount.")
            .style(Style::default().fg(Color::Gray))
            .block(Block::default().borders(Borders::ALL).title("entries"));
        f.render_widget(hint, area);
    }
}

fn render_entry_table(f: &mut Frame, area: Rect, title: &str, entries: &[Entry]) {
    let rows: Vec<Row> = sort_for_display(entries.to_vec())
        .into_iter()
        .map(|e| Row::new(vec![e.text.clone(), e.amount.to_string()]))
        .collect();

    let table = Table::new(rows, [Constraint::Min(20), Constraint::Length(16)])
        .header(
            Row::new(vec!["Entry", "Amount"]).style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        )
        .block(Block::default().borders(Borders::ALL).title(title.to_string()));

    f.render_widget(table, area);
}

//! AROGYA Triage Console — interactive Ratatui TUI
//!
//! Layout:
//!   ┌─── header ──────────────────────────────────────────────────────────┐
//!   │  AROGYA Triage Console                                              │
//!   ├─── input ───────────────────────────────────────────────────────────┤
//!   │  Describe the symptoms...                                           │
//!   ├─── left panel ──────────────────┬─── right panel ───────────────────┤
//!   │  Triage Result                  │  Severity Scoring                 │
//!   │                                 ├───────────────────────────────────┤
//!   │                                 │  Red Flags                        │
//!   ├─────────────────────────────────┴───────────────────────────────────┤
//!   │  footer (key bindings)                                              │
//!   └─────────────────────────────────────────────────────────────────────┘

use std::{io, time::Duration};

use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame, Terminal,
};

use arogya_contracts::triage::{Severity, TriageResult, Urgency};
use arogya_triage::{
    emergency, flags::identify_red_flags, normalize::normalize, score, TriageEngine,
};

// ── App state ─────────────────────────────────────────────────────────────────

/// Everything captured from one analysis run, precomputed for rendering.
struct AnalysisCapture {
    /// The input as it was analyzed.
    input: String,
    result: TriageResult,
    /// The emergency phrase that short-circuited the pipeline, if any.
    emergency_trigger: Option<String>,
    /// Indicator phrases that contributed to the severity score.
    score_contributions: Vec<(&'static str, u32)>,
    score_total: u32,
    red_flags: Vec<&'static str>,
}

struct App {
    engine: TriageEngine,
    /// The text being edited in the input line.
    input: String,
    /// Most recent analysis, if any.
    capture: Option<AnalysisCapture>,
}

impl App {
    fn new() -> Self {
        Self {
            engine: TriageEngine::with_builtin_knowledge(),
            input: String::new(),
            capture: None,
        }
    }

    /// Analyze the current input and capture everything the panels show.
    fn run(&mut self) {
        let input = self.input.clone();
        let normalized = normalize(&input);

        let result = self.engine.analyze(&input);
        let emergency_trigger =
            emergency::first_emergency_match(&normalized, self.engine.knowledge())
                .map(|p| p.to_string());
        let score_contributions = score::matched_weights(&normalized);
        let score_total = score::severity_score(&normalized);
        let red_flags = identify_red_flags(&input);

        self.capture = Some(AnalysisCapture {
            input,
            result,
            emergency_trigger,
            score_contributions,
            score_total,
            red_flags,
        });
    }
}

// ── Rendering ─────────────────────────────────────────────────────────────────

fn ui(f: &mut Frame, app: &App) {
    let full = f.area();

    // Split into: header, input, main body (left/right split), footer.
    let outer_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // header
            Constraint::Length(3), // input line
            Constraint::Min(12),   // result + scoring panels
            Constraint::Length(3), // footer
        ])
        .split(full);

    render_header(f, outer_chunks[0]);
    render_input(f, outer_chunks[1], app);

    let mid_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(outer_chunks[2]);

    render_result(f, mid_chunks[0], app);

    let right_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(mid_chunks[1]);

    render_scoring(f, right_chunks[0], app);
    render_red_flags(f, right_chunks[1], app);

    render_footer(f, outer_chunks[3]);
}

fn render_header(f: &mut Frame, area: ratatui::layout::Rect) {
    let title_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);

    let header_line = Line::from(vec![
        Span::styled("AROGYA Triage Console", title_style),
        Span::styled(
            "    heuristic triage, not a diagnosis — emergencies: call 102 / 108",
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    let header = Paragraph::new(header_line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(header, area);
}

fn render_input(f: &mut Frame, area: ratatui::layout::Rect, app: &App) {
    let content = if app.input.is_empty() {
        Line::from(Span::styled(
            "Describe the symptoms and press Enter...",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from(vec![
            Span::raw(app.input.as_str()),
            Span::styled("▏", Style::default().fg(Color::Cyan)),
        ])
    };

    let input = Paragraph::new(content).block(
        Block::default()
            .title(" Symptoms ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(input, area);
}

fn render_result(f: &mut Frame, area: ratatui::layout::Rect, app: &App) {
    let block = Block::default()
        .title(" Triage Result ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let Some(cap) = &app.capture else {
        let p = Paragraph::new(Span::styled(
            "  Type a symptom description and press Enter.",
            Style::default().fg(Color::DarkGray),
        ))
        .block(block);
        f.render_widget(p, area);
        return;
    };

    let result = &cap.result;
    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(vec![
        Span::styled("  Input:       ", Style::default().fg(Color::Gray)),
        Span::raw(truncate(&cap.input, 60)),
    ]));
    lines.push(Line::from(""));

    if result.is_emergency {
        lines.push(Line::from(vec![
            Span::styled("  EMERGENCY", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
            Span::styled(
                format!(
                    "  (triggered by \"{}\")",
                    cap.emergency_trigger.as_deref().unwrap_or("?")
                ),
                Style::default().fg(Color::Gray),
            ),
        ]));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(vec![
        Span::styled("  Condition:   ", Style::default().fg(Color::Gray)),
        Span::styled(
            result.condition.as_str(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
    ]));
    lines.push(Line::from(vec![
        Span::styled("  Severity:    ", Style::default().fg(Color::Gray)),
        Span::styled(
            result.severity.as_str(),
            Style::default()
                .fg(severity_color(result.severity))
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  ({})", result.urgency),
            Style::default().fg(urgency_color(result.urgency)),
        ),
    ]));
    lines.push(Line::from(vec![
        Span::styled("  Confidence:  ", Style::default().fg(Color::Gray)),
        Span::raw(format!("{}/100", result.confidence)),
    ]));

    let medicines = if result.medicines.is_empty() {
        "(none — do not self-medicate)".to_string()
    } else {
        result.medicines.join(", ")
    };
    lines.push(Line::from(vec![
        Span::styled("  Medicines:   ", Style::default().fg(Color::Gray)),
        Span::raw(medicines),
    ]));

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Recommendations:",
        Style::default().fg(Color::Gray),
    )));
    for recommendation in &result.recommendations {
        lines.push(Line::from(Span::raw(format!("    - {}", recommendation))));
    }

    let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_scoring(f: &mut Frame, area: ratatui::layout::Rect, app: &App) {
    let mut items: Vec<ListItem> = Vec::new();

    match &app.capture {
        None => {
            items.push(ListItem::new(Span::styled(
                "  No analysis yet.",
                Style::default().fg(Color::DarkGray),
            )));
        }
        Some(cap) if cap.result.is_emergency => {
            items.push(ListItem::new(Span::styled(
                "  Skipped — emergency short-circuit.",
                Style::default().fg(Color::Red),
            )));
        }
        Some(cap) => {
            if cap.score_contributions.is_empty() {
                items.push(ListItem::new(Span::styled(
                    "  No severity indicators found.",
                    Style::default().fg(Color::DarkGray),
                )));
            }
            for (phrase, weight) in &cap.score_contributions {
                items.push(ListItem::new(Line::from(vec![
                    Span::styled(
                        format!("  {:<12}", phrase),
                        Style::default().fg(Color::White),
                    ),
                    Span::styled(
                        format!("+{}", weight),
                        Style::default().fg(Color::Yellow),
                    ),
                ])));
            }
            items.push(ListItem::new(""));
            let (severity, urgency) = score::classify(cap.score_total);
            items.push(ListItem::new(Line::from(vec![
                Span::styled("  Total: ", Style::default().fg(Color::Gray)),
                Span::styled(
                    format!("{}", cap.score_total),
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  → {} / {}", severity, urgency),
                    Style::default().fg(severity_color(severity)),
                ),
            ])));
        }
    }

    let block = Block::default()
        .title(" Severity Scoring ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let list = List::new(items).block(block);
    f.render_widget(list, area);
}

fn render_red_flags(f: &mut Frame, area: ratatui::layout::Rect, app: &App) {
    let mut items: Vec<ListItem> = Vec::new();

    match &app.capture {
        None => {
            items.push(ListItem::new(Span::styled(
                "  No analysis yet.",
                Style::default().fg(Color::DarkGray),
            )));
        }
        Some(cap) if cap.red_flags.is_empty() => {
            items.push(ListItem::new(Span::styled(
                "  None detected.",
                Style::default().fg(Color::Green),
            )));
        }
        Some(cap) => {
            for flag in &cap.red_flags {
                items.push(ListItem::new(Line::from(vec![
                    Span::styled("  ▸ ", Style::default().fg(Color::DarkGray)),
                    Span::styled(
                        *flag,
                        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                    ),
                ])));
            }
        }
    }

    let block = Block::default()
        .title(" Red Flags ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let list = List::new(items).block(block);
    f.render_widget(list, area);
}

fn render_footer(f: &mut Frame, area: ratatui::layout::Rect) {
    let spans: Vec<Span> = vec![
        Span::styled(" [Enter] ", Style::default().fg(Color::Cyan)),
        Span::raw("Analyze  "),
        Span::styled("[Ctrl+U] ", Style::default().fg(Color::Cyan)),
        Span::raw("Clear  "),
        Span::styled("[Esc] ", Style::default().fg(Color::Cyan)),
        Span::raw("Quit"),
    ];

    let footer = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(footer, area);
}

// ── Styling helpers ───────────────────────────────────────────────────────────

fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Mild => Color::Green,
        Severity::Moderate => Color::Yellow,
        Severity::Severe => Color::Red,
        Severity::Critical => Color::Red,
    }
}

fn urgency_color(urgency: Urgency) -> Color {
    match urgency {
        Urgency::Routine => Color::Green,
        Urgency::Urgent => Color::Yellow,
        Urgency::Immediate => Color::Red,
    }
}

/// Truncate a string to at most `max` chars, appending "…" if truncated.
fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}

// ── Terminal setup / teardown ─────────────────────────────────────────────────

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()
}

// ── Main event loop ───────────────────────────────────────────────────────────

fn main() -> io::Result<()> {
    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        // Best-effort terminal restore on panic.
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        default_hook(info);
    }));

    let mut terminal = setup_terminal()?;
    let mut app = App::new();

    loop {
        terminal.draw(|f| ui(f, &app))?;

        if event::poll(Duration::from_millis(200))? {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    // Quit.
                    KeyCode::Esc => break,
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => break,

                    // Clear the input line.
                    KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.input.clear();
                    }

                    // Analyze.
                    KeyCode::Enter => {
                        app.run();
                    }

                    // Line editing.
                    KeyCode::Backspace => {
                        app.input.pop();
                    }
                    KeyCode::Char(c) => {
                        app.input.push(c);
                    }

                    _ => {}
                }
            }
        }
    }

    restore_terminal(&mut terminal)?;
    Ok(())
}

use std::time::Duration;

use chrono::{Local, TimeDelta};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Alignment, Constraint, Layout},
    style::{Style, Stylize},
    symbols::Marker,
    text::Line,
    widgets::{
        Paragraph,
        canvas::{Canvas, Points},
    },
};

use murmur_anim::Morpher;
use murmur_config::{Config, PhaseSchedule};
use murmur_core::{ColorTheme, EasingKind, InterpolationKind, MatchingKind, Pixel, TimeFormat};
use murmur_fonts::{DotMatrixFont, LayoutMetrics, string_to_pixels};

mod display;

/// Poll timeout between frames; short enough for a smooth morph.
const FRAME_POLL: Duration = Duration::from_millis(16);

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let config = murmur_config::load();
    let terminal = ratatui::init();
    let result = App::new(config).run(terminal);
    ratatui::restore();
    result
}

/// The main application which holds the state and logic of the application.
pub struct App {
    /// Is the application running?
    running: bool,
    /// Current time format (12h or 24h).
    time_format: TimeFormat,
    /// Current color theme.
    color_theme: ColorTheme,
    /// Current easing curve selection.
    easing: EasingKind,
    /// Current interpolation path selection.
    interpolation: InterpolationKind,
    /// Current matching strategy selection.
    matching: MatchingKind,
    /// Label windows within the display cycle.
    phases: PhaseSchedule,
    /// The morph pipeline, rebuilt when a strategy selection changes.
    morpher: Morpher,
    /// The bitmap glyph table, built once.
    font: DotMatrixFont,
    /// Dot layout spacing.
    metrics: LayoutMetrics,
}

impl App {
    /// Construct the app from the loaded configuration.
    pub fn new(config: Config) -> Self {
        Self {
            running: false,
            time_format: config.time_format,
            color_theme: config.theme,
            easing: config.easing,
            interpolation: config.interpolation,
            matching: config.matching,
            morpher: Morpher::new(config.easing, config.matching, config.interpolation),
            phases: config.phases,
            font: DotMatrixFont::new(),
            metrics: LayoutMetrics::default(),
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        while self.running {
            terminal.draw(|frame| self.render(frame))?;
            self.handle_crossterm_events()?;
        }
        Ok(())
    }

    /// Renders the user interface.
    fn render(&mut self, frame: &mut Frame) {
        let now = Local::now();
        let next = now + TimeDelta::seconds(1);

        let current_str = display::display_string(now, self.time_format, &self.phases);
        let next_str = display::display_string(next, self.time_format, &self.phases);

        let current_pix = string_to_pixels(&current_str, &self.font, &self.metrics);
        let next_pix = string_to_pixels(&next_str, &self.font, &self.metrics);

        let subsec_ms = now.timestamp_subsec_millis();
        let morph = self
            .morpher
            .frame(&current_pix, &next_pix, &current_str, subsec_ms);

        // Format date
        let date_str = now.format("%A, %B %d, %Y").to_string();

        let color = self.color_theme.color();
        let area = frame.area();

        let chunks = Layout::vertical([
            Constraint::Fill(1),    // Top padding
            Constraint::Length(16), // Dot canvas
            Constraint::Length(1),  // Spacing
            Constraint::Length(1),  // Date
            Constraint::Fill(1),    // Bottom padding
            Constraint::Length(1),  // Help text
        ])
        .split(area);

        // Layout space is y-down; the canvas is y-up, so dots are flipped
        // against the vertical bounds. Arcs that swing past the bounds clip.
        let (x_bounds, y_bounds) = self.bounds(&current_pix, &next_pix);
        let flip = y_bounds[0] + y_bounds[1];
        let fixed: Vec<(f64, f64)> = morph.fixed.iter().map(|p| (p.x, flip - p.y)).collect();
        let moving: Vec<(f64, f64)> = morph.moving.iter().map(|p| (p.x, flip - p.y)).collect();

        let canvas = Canvas::default()
            .marker(Marker::Braille)
            .x_bounds(x_bounds)
            .y_bounds(y_bounds)
            .paint(|ctx| {
                ctx.draw(&Points {
                    coords: &fixed,
                    color,
                });
                ctx.draw(&Points {
                    coords: &moving,
                    color,
                });
            });
        frame.render_widget(canvas, chunks[1]);

        // Render date
        let date = Paragraph::new(date_str)
            .style(Style::new().fg(color))
            .alignment(Alignment::Center);
        frame.render_widget(date, chunks[3]);

        // Render help text
        let help = Line::from(vec![
            "q".bold().fg(color),
            " quit  ".dark_gray(),
            "t".bold().fg(color),
            " toggle 12/24h  ".dark_gray(),
            "c".bold().fg(color),
            " color  ".dark_gray(),
            "e".bold().fg(color),
            " ease  ".dark_gray(),
            "i".bold().fg(color),
            " path  ".dark_gray(),
            "m".bold().fg(color),
            " match".dark_gray(),
        ])
        .centered();
        frame.render_widget(help, chunks[5]);
    }

    /// Canvas bounds covering both seconds' dots plus slack for the arcs.
    fn bounds(&self, current: &[Pixel], next: &[Pixel]) -> ([f64; 2], [f64; 2]) {
        let mut min_x = f64::MAX;
        let mut max_x = f64::MIN;
        let mut min_y = f64::MAX;
        let mut max_y = f64::MIN;
        for p in current.iter().chain(next) {
            min_x = min_x.min(p.x);
            max_x = max_x.max(p.x);
            min_y = min_y.min(p.y);
            max_y = max_y.max(p.y);
        }
        if current.is_empty() && next.is_empty() {
            return ([0.0, 1.0], [0.0, 1.0]);
        }
        let pad_x = 2.0 * self.metrics.pitch;
        let pad_y = 5.0 * self.metrics.pitch;
        (
            [min_x - pad_x, max_x + pad_x],
            [min_y - pad_y, max_y + pad_y],
        )
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// Uses polling with a short timeout so the morph redraws every frame.
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        if event::poll(FRAME_POLL)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Mouse(_) => {}
                Event::Resize(_, _) => {}
                _ => {}
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Char('t')) => self.time_format = self.time_format.toggle(),
            (_, KeyCode::Char('c')) => self.color_theme = self.color_theme.next(),
            (_, KeyCode::Char('e')) => {
                self.easing = self.easing.next();
                self.morpher.set_easing(self.easing);
            }
            (_, KeyCode::Char('i')) => {
                self.interpolation = self.interpolation.next();
                self.morpher.set_interpolation(self.interpolation);
            }
            (_, KeyCode::Char('m')) => {
                self.matching = self.matching.next();
                self.morpher.set_matching(self.matching);
            }
            _ => {}
        }
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}

use std::{
    io,
    time::{Duration, Instant},
};

use anyhow::Context as _;
use crossterm::event::{self, Event, KeyCode};
use plummet_engine::{Game, GameConfig};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Flex, Layout},
    style::{Color, Style},
    text::Text,
    widgets::Block,
};

use crate::ui::widgets::{BoardDisplay, style};

/// Render cadence of the play screen. Game time advances by real elapsed
/// time, so this only bounds drawing and input-poll granularity.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct PlayArg {
    /// Board width in columns
    #[clap(long, default_value_t = 12)]
    width: usize,
    /// Board height in rows
    #[clap(long, default_value_t = 20)]
    height: usize,
    /// Gravity drop interval in milliseconds
    #[clap(long, default_value_t = 1000)]
    drop_interval: u64,
    /// Seed for the piece sequence (random when omitted)
    #[clap(long)]
    seed: Option<u64>,
}

pub(crate) fn run(arg: &PlayArg) -> anyhow::Result<()> {
    let config = GameConfig {
        width: arg.width,
        height: arg.height,
        drop_interval: Duration::from_millis(arg.drop_interval),
        seed: arg.seed,
    };
    let game = Game::new(config).context("invalid game configuration")?;

    let mut app = PlayApp::new(game);
    ratatui::run(|terminal| app.run(terminal))?;

    Ok(())
}

#[derive(Debug)]
struct PlayApp {
    game: Game,
    last_update: Instant,
    is_exiting: bool,
}

impl PlayApp {
    fn new(game: Game) -> Self {
        Self {
            game,
            last_update: Instant::now(),
            is_exiting: false,
        }
    }

    fn run(&mut self, terminal: &mut DefaultTerminal) -> io::Result<()> {
        self.last_update = Instant::now();
        while !self.is_exiting {
            let now = Instant::now();
            let elapsed = now.duration_since(self.last_update);
            self.last_update = now;
            let _ = self.game.tick(elapsed);

            terminal.draw(|frame| self.draw(frame))?;

            // Input commands apply synchronously between frames, so they
            // never interleave with the gravity tick above.
            if event::poll(FRAME_INTERVAL)? {
                let event = event::read()?;
                self.handle_event(&event);
            }
        }
        Ok(())
    }

    fn draw(&self, frame: &mut Frame<'_>) {
        let board_display = BoardDisplay::new(self.game.board())
            .active_piece(self.game.active_piece())
            .block(Block::bordered().style(style::DEFAULT));
        let help_text = Text::from(
            "Controls: ← → (Move) | ↓ (Soft Drop) | ↑ X (Rotate CW) | Z (Rotate CCW) | Q (Quit)",
        )
        .style(Style::default().fg(Color::DarkGray))
        .centered();

        let [main_area, help_area] = Layout::vertical([
            Constraint::Length(board_display.height()),
            Constraint::Length(1),
        ])
        .areas::<2>(frame.area());
        let [board_area] = Layout::horizontal([Constraint::Length(board_display.width())])
            .flex(Flex::Center)
            .areas::<1>(main_area);

        frame.render_widget(board_display, board_area);
        frame.render_widget(help_text, help_area);
    }

    fn handle_event(&mut self, event: &Event) {
        if let Some(event) = event.as_key_event() {
            match event.code {
                KeyCode::Left => _ = self.game.move_left(),
                KeyCode::Right => _ = self.game.move_right(),
                KeyCode::Down => _ = self.game.soft_drop(),
                KeyCode::Up | KeyCode::Char('x') => _ = self.game.rotate_cw(),
                KeyCode::Char('z') => _ = self.game.rotate_ccw(),
                KeyCode::Char('q') => self.is_exiting = true,
                _ => {}
            }
        }
    }
}

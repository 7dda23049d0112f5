use std::io::{self, stdout, Stdout};
use std::path::PathBuf;

use arena::load_history;
use clap::Parser;
use ratatui::{
    crossterm::{
        event::{self, Event, KeyCode},
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
        ExecutableCommand,
    },
    prelude::*,
    widgets::*,
};
use spatial_dilemma::{Board, History, Strategy};

/// Replays a recorded tournament in the terminal.
#[derive(Parser)]
struct Args {
    /// A history written by `arena --record-history`
    history: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let history = load_history(&args.history)?;

    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    let mut viewer = Viewer::new(history);

    let result = run(&mut terminal, &mut viewer);

    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;
    result
}

fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>, viewer: &mut Viewer) -> anyhow::Result<()> {
    let mut should_quit = false;
    while !should_quit {
        terminal.draw(|frame| viewer.ui(frame))?;
        should_quit = handle_events(viewer)?;
    }
    Ok(())
}

fn handle_events(viewer: &mut Viewer) -> io::Result<bool> {
    if event::poll(std::time::Duration::from_millis(16))? {
        if let Event::Key(key) = event::read()? {
            if key.kind == event::KeyEventKind::Press {
                return Ok(viewer.on_key(key.code));
            }
        }
    }
    Ok(false)
}

struct Viewer {
    history: History,
    generation: usize,
}

impl Viewer {
    fn new(history: History) -> Self {
        Self {
            history,
            generation: 0,
        }
    }

    /// Returns true if the viewer should quit.
    fn on_key(&mut self, code: KeyCode) -> bool {
        let last = self.history.num_generations();
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Left | KeyCode::Char('h') => self.generation = self.generation.saturating_sub(1),
            KeyCode::Right | KeyCode::Char('l') => self.generation = (self.generation + 1).min(last),
            KeyCode::Home | KeyCode::Char('g') => self.generation = 0,
            KeyCode::End | KeyCode::Char('G') => self.generation = last,
            _ => {}
        }
        false
    }

    fn status_line(&self) -> String {
        let census = self.history[self.generation].census();
        format!(
            "b = {} │ {} cooperators, {} defectors ({:.1}%) │ ←/→ step, Home/End jump, q quit",
            self.history.temptation(),
            census.cooperators,
            census.defectors,
            census.cooperation_rate() * 100.0
        )
    }

    fn ui(&self, frame: &mut Frame) {
        let main_layout = Layout::new(
            Direction::Vertical,
            [Constraint::Min(0), Constraint::Length(1)],
        )
        .split(frame.size());

        let block = Block::new()
            .border_type(BorderType::Rounded)
            .borders(Borders::all())
            .title(format!(
                " Generation {}/{} ",
                self.generation,
                self.history.num_generations()
            ));
        let board_area = block.inner(main_layout[0]);
        frame.render_widget(block, main_layout[0]);
        frame.render_widget(
            BoardWidget {
                board: &self.history[self.generation],
            },
            board_area,
        );
        frame.render_widget(Paragraph::new(self.status_line()), main_layout[1]);
    }
}

// Terminal cells are about twice as tall as wide
const CELL_WIDTH: u16 = 2;

/// Draws the strategies of a board, cropped to the area.
struct BoardWidget<'a> {
    board: &'a Board,
}

impl Widget for BoardWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for (r, row) in self.board.rows_iter().enumerate().take(area.height as usize) {
            let y = area.y + r as u16;
            for (c, cell) in row.iter().enumerate() {
                let x = area.x + c as u16 * CELL_WIDTH;
                if x + CELL_WIDTH > area.right() {
                    break;
                }
                let color = match cell.strategy {
                    Strategy::Cooperate => Color::Blue,
                    Strategy::Defect => Color::Red,
                };
                buf.set_string(x, y, "██", Style::new().fg(color));
            }
        }
    }
}

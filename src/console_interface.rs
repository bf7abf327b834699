use crate::config::KeyBindings;
use crate::core::{Board, Cell, Direction, UserAction};
use crate::models::GameRenderState;
use crate::session::{InputSource, Prompt, Renderer};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction as LayoutDirection, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleInput {
    UserAction(UserAction),
    Quit,
    Restart,
    Unknown,
}

/// Asks for the level file on plain stdin, before the terminal switches to raw mode.
pub fn prompt_level_path() -> io::Result<PathBuf> {
    print!("Which level do you want to load? (e.g. level1.sok): ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    let name = line.trim();
    if name.is_empty() {
        return Err(io::Error::new(io::ErrorKind::InvalidInput, "no level file given"));
    }
    Ok(PathBuf::from(name))
}

pub fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    crossterm::terminal::enable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

pub fn cleanup_terminal() -> io::Result<()> {
    crossterm::terminal::disable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::LeaveAlternateScreen)?;
    Ok(())
}

/// The interactive terminal: keystrokes in, board and prompts out.
pub struct ConsoleTerminal {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    bindings: KeyBindings,
    last: Option<GameRenderState>,
}

impl ConsoleTerminal {
    pub fn new(bindings: KeyBindings) -> io::Result<Self> {
        Ok(ConsoleTerminal {
            terminal: setup_terminal()?,
            bindings,
            last: None,
        })
    }

    /// Restores the terminal. Must be called before printing to stdout again.
    pub fn close(self) -> io::Result<()> {
        cleanup_terminal()
    }

    /// Blocks until any key is pressed.
    pub fn wait_for_key(&mut self) -> io::Result<()> {
        loop {
            if read_key_press()?.is_some() {
                return Ok(());
            }
        }
    }

    fn draw(&mut self, prompt: Option<&str>) -> io::Result<()> {
        let bindings = self.bindings;
        let state = self.last.as_ref();
        self.terminal.draw(|f| {
            let chunks = Layout::default()
                .direction(LayoutDirection::Vertical)
                .constraints([
                    Constraint::Length(5),
                    Constraint::Min(0),
                    Constraint::Length(3),
                ])
                .split(f.area());

            let header = match state {
                Some(state) => vec![
                    Line::from(format!("Level: {}", state.session_name.display())),
                    Line::from(bindings.describe()),
                    Line::from(format!("Moves: {}", state.game.moves)),
                ],
                None => vec![Line::from(bindings.describe())],
            };
            let header_paragraph = Paragraph::new(header)
                .block(Block::default().borders(Borders::ALL).title("Sokoban"))
                .style(Style::default().fg(Color::White));
            f.render_widget(header_paragraph, chunks[0]);

            let board = state.map(|s| board_lines(&s.game.board)).unwrap_or_default();
            let board_paragraph = Paragraph::new(board)
                .block(Block::default().borders(Borders::ALL))
                .alignment(Alignment::Center);
            f.render_widget(board_paragraph, chunks[1]);

            let status = match (prompt, state) {
                (Some(prompt), _) => prompt.to_string(),
                (None, Some(state)) if state.won => format!(
                    "You won in {} moves! Press any key to quit.",
                    state.game.moves
                ),
                (None, Some(GameRenderState { message: Some(message), .. })) => message.clone(),
                _ => "Push every crate onto a target".to_string(),
            };
            let status_paragraph = Paragraph::new(status)
                .block(Block::default().borders(Borders::ALL))
                .style(Style::default().fg(Color::Cyan))
                .alignment(Alignment::Center);
            f.render_widget(status_paragraph, chunks[2]);
        })?;
        Ok(())
    }
}

impl InputSource for ConsoleTerminal {
    fn poll_key(&mut self) -> io::Result<Option<ConsoleInput>> {
        Ok(read_key_press()?.map(|code| input_from_key(&self.bindings, code)))
    }
}

impl Renderer for ConsoleTerminal {
    fn render(&mut self, state: &GameRenderState) -> io::Result<()> {
        self.last = Some(state.clone());
        self.draw(None)
    }
}

impl Prompt for ConsoleTerminal {
    fn confirm(&mut self, question: &str) -> io::Result<bool> {
        self.draw(Some(question))?;
        loop {
            match read_key_press()? {
                Some(KeyCode::Char('y' | 'Y')) => return Ok(true),
                Some(KeyCode::Char('n' | 'N') | KeyCode::Esc) => return Ok(false),
                _ => {}
            }
        }
    }

    fn ask_line(&mut self, question: &str, default: &str) -> io::Result<Option<String>> {
        let mut answer = String::new();
        loop {
            self.draw(Some(&format!("{} [{}]: {}_", question, default, answer)))?;
            match read_key_press()? {
                Some(KeyCode::Enter) => {
                    let answer = answer.trim();
                    let answer = if answer.is_empty() { default } else { answer };
                    return Ok(Some(answer.to_string()));
                }
                Some(KeyCode::Esc) => return Ok(None),
                Some(KeyCode::Backspace) => {
                    answer.pop();
                }
                Some(KeyCode::Char(c)) => answer.push(c),
                _ => {}
            }
        }
    }
}

/// Waits up to one poll interval for a key press.
fn read_key_press() -> io::Result<Option<KeyCode>> {
    if event::poll(POLL_INTERVAL)? {
        if let Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) = event::read()?
        {
            return Ok(Some(code));
        }
    }
    Ok(None)
}

pub fn input_from_key(bindings: &KeyBindings, code: KeyCode) -> ConsoleInput {
    match code {
        KeyCode::Up => ConsoleInput::UserAction(UserAction::Move(Direction::Up)),
        KeyCode::Down => ConsoleInput::UserAction(UserAction::Move(Direction::Down)),
        KeyCode::Left => ConsoleInput::UserAction(UserAction::Move(Direction::Left)),
        KeyCode::Right => ConsoleInput::UserAction(UserAction::Move(Direction::Right)),
        KeyCode::Esc => ConsoleInput::Quit,
        KeyCode::Char(c) => bindings.command_for(c),
        _ => ConsoleInput::Unknown,
    }
}

/// On screen a player or crate standing on a target keeps its usual glyph;
/// the target underneath is shown by colour instead.
fn cell_span(cell: Cell) -> Span<'static> {
    let (ch, color) = match cell {
        Cell::Empty => (' ', Color::Reset),
        Cell::Wall => ('#', Color::Gray),
        Cell::Target => ('.', Color::Yellow),
        Cell::Crate => ('$', Color::White),
        Cell::CrateOnTarget => ('$', Color::Green),
        Cell::Player => ('@', Color::Cyan),
        Cell::PlayerOnTarget => ('@', Color::Yellow),
    };
    Span::styled(ch.to_string(), Style::default().fg(color))
}

fn board_lines(board: &Board) -> Vec<Line<'static>> {
    board
        .rows()
        .map(|row| Line::from(row.iter().map(|&c| cell_span(c)).collect::<Vec<_>>()))
        .collect()
}

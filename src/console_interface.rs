use crate::core::{Board, Direction, EntityKind, Tile, Vec2};
use crate::models::GameRenderState;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction as LayoutDirection, Layout},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};
use std::io;

pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, Box<dyn std::error::Error>>
{
    crossterm::terminal::enable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

pub fn cleanup_terminal() -> Result<(), Box<dyn std::error::Error>> {
    crossterm::terminal::disable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::LeaveAlternateScreen)?;
    Ok(())
}

pub fn render_game(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    board: &Board,
    state: &GameRenderState,
) -> Result<(), Box<dyn std::error::Error>> {
    terminal.draw(|f| {
        let chunks = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3), Constraint::Length(3)])
            .split(f.area());

        // Board area
        let board_text = render_board_to_string(board);
        let title = format!("Sokoban [stage {}/{}]", state.stage, state.stage_count);
        let board_paragraph = Paragraph::new(board_text)
            .block(Block::default().borders(Borders::ALL).title(title))
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Center);
        f.render_widget(board_paragraph, chunks[0]);

        // Status
        let counts = board.box_counts();
        let status = format!(
            "Moves: {} | Light boxes left: {}/{} | Heavy boxes left: {}/{}",
            board.move_count(),
            counts.unresolved_light,
            counts.light,
            counts.unresolved_heavy,
            counts.heavy,
        );
        let status_paragraph = Paragraph::new(status)
            .block(Block::default().borders(Borders::ALL).title("Status"))
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Center);
        f.render_widget(status_paragraph, chunks[1]);

        // Instructions
        let instructions = if state.won {
            "Stage clear!"
        } else {
            "Controls: WASD or Arrow keys to move, U to undo, R to restart, Q to quit"
        };

        let instructions = if let Some(change) = &state.last_change {
            format!("{} | Last: {:?}", instructions, change)
        } else {
            instructions.to_string()
        };

        let instruction_paragraph = Paragraph::new(instructions)
            .block(Block::default().borders(Borders::ALL).title("Instructions"))
            .style(Style::default().fg(Color::Cyan))
            .alignment(Alignment::Center);
        f.render_widget(instruction_paragraph, chunks[2]);
    })?;
    Ok(())
}

pub fn render_game_complete(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<(), Box<dyn std::error::Error>> {
    terminal.draw(|f| {
        let paragraph = Paragraph::new("All stages cleared! Press any key to quit.")
            .block(Block::default().borders(Borders::ALL).title("Sokoban"))
            .style(Style::default().fg(Color::Cyan))
            .alignment(Alignment::Center);
        f.render_widget(paragraph, f.area());
    })?;
    Ok(())
}

pub fn render_board_to_string(board: &Board) -> String {
    let mut result = String::new();
    for i in 0..board.height() {
        for j in 0..board.width() {
            let pos = Vec2 { i, j };
            let tile = board.static_tile(pos).unwrap_or(Tile::Floor);
            let occupant = board.entity_at(pos).map(|(_, entity)| entity.kind);
            let ch = match tile {
                Tile::Wall => '#',
                Tile::Floor => match occupant {
                    Some(EntityKind::Player) => '@',
                    Some(EntityKind::LightBox) => '$',
                    Some(EntityKind::HeavyBox) => '&',
                    None => ' ',
                },
                Tile::Target => match occupant {
                    Some(EntityKind::Player) => '+',
                    Some(EntityKind::LightBox) => '*',
                    Some(EntityKind::HeavyBox) => '%',
                    None => '.',
                },
            };
            result.push(ch);
        }
        result.push('\n');
    }
    result
}

pub enum ConsoleInput {
    Move(Direction),
    Undo,
    Restart,
    Quit,
    Timeout,
    Unknown,
}

pub fn handle_input() -> Result<ConsoleInput, Box<dyn std::error::Error>> {
    if event::poll(std::time::Duration::from_millis(50))? {
        if let Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) = event::read()?
        {
            return Ok(match code {
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => ConsoleInput::Quit,
                KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => {
                    ConsoleInput::Move(Direction::Up)
                }
                KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => {
                    ConsoleInput::Move(Direction::Down)
                }
                KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => {
                    ConsoleInput::Move(Direction::Left)
                }
                KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => {
                    ConsoleInput::Move(Direction::Right)
                }
                KeyCode::Char('u') | KeyCode::Char('U') | KeyCode::Backspace => ConsoleInput::Undo,
                KeyCode::Char('r') | KeyCode::Char('R') => ConsoleInput::Restart,
                _ => ConsoleInput::Unknown,
            });
        }
    }
    Ok(ConsoleInput::Timeout)
}

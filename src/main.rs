// Terminal Sokoban with ratatui.
// Controls: W/A/S/D or arrow keys to move, U undo, R restart, Q quit.
// Cells: '#' wall, '@' player, '$' light box, '&' heavy box, '.' target,
// '*'/'%' box on target, '+' player on target.

use std::time::{Duration, Instant};

use SokoEngine::console_interface::ConsoleInput::*;
use SokoEngine::console_interface::{
    cleanup_terminal, handle_input, render_game, render_game_complete, setup_terminal,
};
use SokoEngine::core::{Board, get_json_data};
use SokoEngine::models::GameRenderState;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use std::io;

// Stage sources in the integer-code level format:
// 0 floor, 1 player, 2 light box, 3 heavy box, 4 wall, 5 target.
const STAGES: &[&str] = &[
    r#"
4 4 4 4 4 4
4 0 0 0 0 4
4 1 2 0 5 4
4 0 0 0 0 4
4 4 4 4 4 4
"#,
    r#"
4 4 4 4 4 4 4
4 0 0 0 0 0 4
4 0 2 1 3 0 4
4 5 0 0 0 5 4
4 0 0 0 0 0 4
4 4 4 4 4 4 4
"#,
    r#"
4 4 4 4 4 4 4 4
4 0 0 0 0 0 0 4
4 0 2 0 0 2 0 4
4 1 0 0 3 0 0 4
4 5 5 0 0 0 5 4
4 0 0 0 0 0 0 4
4 4 4 4 4 4 4 4
"#,
];

enum StageOutcome {
    Completed,
    Quit,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let switch = std::env::args().nth(1).unwrap_or("play".to_string());

    match switch.as_str() {
        "play" => {
            let mut terminal = setup_terminal()?;
            run_stages(&mut terminal)?;
        }
        "export" => {
            std::fs::create_dir_all("exports")?;
            for (index, source) in STAGES.iter().enumerate() {
                let board = Board::load(source)?;
                let path = format!("exports/stage{}.json", index + 1);
                std::fs::write(&path, get_json_data(&board))?;
                println!("Wrote {}", path);
            }
        }
        path => {
            // Anything else is a level file to play on its own. Parse before
            // entering raw mode so a bad file fails with a readable error.
            let source = std::fs::read_to_string(path)?;
            Board::load(&source)?;
            let mut terminal = setup_terminal()?;
            let outcome = run_stage(&mut terminal, &source, 1, 1);
            cleanup_terminal()?;
            outcome?;
        }
    }

    Ok(())
}

fn run_stages(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<(), Box<dyn std::error::Error>> {
    for (index, source) in STAGES.iter().enumerate() {
        match run_stage(terminal, source, index + 1, STAGES.len())? {
            StageOutcome::Quit => {
                cleanup_terminal()?;
                return Ok(());
            }
            StageOutcome::Completed => {}
        }
    }

    render_game_complete(terminal)?;
    loop {
        match handle_input() {
            Ok(Timeout) => {}
            Ok(_) => break,
            Err(_) => break,
        }
    }
    cleanup_terminal()?;
    Ok(())
}

fn run_stage(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    source: &str,
    stage: usize,
    stage_count: usize,
) -> Result<StageOutcome, Box<dyn std::error::Error>> {
    let mut board = Board::load(source)?;
    let mut last_change = None;
    let mut last_tick = Instant::now();

    loop {
        let now = Instant::now();
        board.tick(now.duration_since(last_tick).as_secs_f64());
        last_tick = now;

        let won = board.is_finished();
        let to_render = GameRenderState {
            stage,
            stage_count,
            won,
            last_change,
        };
        render_game(terminal, &board, &to_render)?;

        if won {
            // Let the cleared board linger before moving on.
            std::thread::sleep(Duration::from_millis(600));
            return Ok(StageOutcome::Completed);
        }

        match handle_input()? {
            Quit => return Ok(StageOutcome::Quit),
            Move(direction) => {
                last_change = Some(board.move_player(direction));
            }
            Undo => {
                board.undo();
                last_change = None;
            }
            Restart => {
                board = Board::load(source)?;
                last_change = None;
            }
            Timeout | Unknown => {}
        }
    }
}

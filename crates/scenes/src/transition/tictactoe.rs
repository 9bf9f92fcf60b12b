//! Tic-tac-toe against a random opponent. The player can take part with the
//! arrow keys and Enter; otherwise the game plays itself while a progress bar fills.

use crate::fx;
use crate::term::{Canvas, CellStyle, Rgb};
use crate::types::{Capabilities, Direction, Event, Input, Viewport};
use crate::Next;

use super::{tick_next, Transition};

const FULL: u32 = 1000;
const TICK_STEP: u32 = 5;
const KEY_STEP: u32 = 50;
/// Progress jumps here when the game ends, leaving a moment to see the result.
const RESULT_HOLD: u32 = 900;
const AI_DELAY: u32 = 10;
const AUTOPLAY_DELAY: u32 = 30;
const BAR_WIDTH: usize = 20;

const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Empty,
    X,
    O,
}

impl Mark {
    fn glyph(self) -> char {
        match self {
            Mark::Empty => ' ',
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Playing,
    Won(Mark),
    Draw,
}

#[derive(Debug)]
pub struct TicTacToe {
    board: [Mark; 9],
    cursor: usize,
    player_turn: bool,
    outcome: Outcome,
    progress: u32,
    timer: u32,
    moves: u32,
}

impl Default for TicTacToe {
    fn default() -> Self {
        Self {
            board: [Mark::Empty; 9],
            cursor: 4,
            player_turn: true,
            outcome: Outcome::Playing,
            progress: 0,
            timer: 0,
            moves: 0,
        }
    }
}

impl TicTacToe {
    pub fn new() -> Self {
        Self::default()
    }

    fn place(&mut self, cell: usize, mark: Mark) {
        self.board[cell] = mark;
        self.moves += 1;
        self.timer = 0;
        self.player_turn = mark == Mark::O;
        self.check_outcome();
    }

    fn random_empty(&self) -> Option<usize> {
        let empty: Vec<usize> = (0..9).filter(|&i| self.board[i] == Mark::Empty).collect();
        if empty.is_empty() {
            return None;
        }
        let pick = fx::noise(self.moves, self.progress, 77) as usize % empty.len();
        Some(empty[pick])
    }

    fn check_outcome(&mut self) {
        let winner = LINES.iter().find_map(|&[a, b, c]| {
            let m = self.board[a];
            (m != Mark::Empty && m == self.board[b] && m == self.board[c]).then_some(m)
        });
        self.outcome = match winner {
            Some(m) => Outcome::Won(m),
            None if self.board.iter().all(|&m| m != Mark::Empty) => Outcome::Draw,
            None => Outcome::Playing,
        };
        if self.outcome != Outcome::Playing {
            self.progress = self.progress.max(RESULT_HOLD);
        }
    }

    fn move_cursor(&mut self, dir: Direction) {
        let delta: isize = match dir {
            Direction::Up => -3,
            Direction::Down => 3,
            Direction::Left => -1,
            Direction::Right => 1,
        };
        self.cursor = (self.cursor as isize + delta).rem_euclid(9) as usize;
    }

    fn on_tick(&mut self) {
        self.progress = (self.progress + TICK_STEP).min(FULL);
        self.timer += 1;
        if self.outcome != Outcome::Playing {
            return;
        }

        let (delay, mark) = if self.player_turn {
            (AUTOPLAY_DELAY, Mark::X)
        } else {
            (AI_DELAY, Mark::O)
        };
        if self.timer > delay {
            if let Some(cell) = self.random_empty() {
                self.place(cell, mark);
            }
        }
    }

    fn on_input(&mut self, input: Input) {
        if !self.player_turn || self.outcome != Outcome::Playing {
            self.progress = (self.progress + KEY_STEP).min(FULL);
            return;
        }
        match input {
            Input::Nav(dir) => self.move_cursor(dir),
            Input::Submit | Input::Char(' ') => {
                if self.board[self.cursor] == Mark::Empty {
                    self.place(self.cursor, Mark::X);
                }
            }
            _ => {}
        }
    }
}

impl Transition for TicTacToe {
    fn name(&self) -> &str {
        "Tic-Tac-Toe"
    }

    fn is_compatible(&self, _caps: &Capabilities) -> bool {
        true
    }

    fn set_content(&mut self, _old: Canvas, _new: Canvas) {}

    fn update(&mut self, event: &Event) -> Next {
        match event {
            Event::Tick => self.on_tick(),
            Event::Input(input) => self.on_input(*input),
            Event::Resize(_) => {}
        }
        tick_next(event)
    }

    fn done(&self) -> bool {
        self.progress >= FULL
    }

    fn view(&self, viewport: Viewport) -> Canvas {
        let mut c = Canvas::for_viewport(viewport);
        let style = CellStyle::fg(Rgb::new(0x00, 0xFF, 0x00));
        let highlight = style.bold();

        let mut lines: Vec<String> = vec![
            "BYPASS SECURITY PROTOCOL: WIN OR WAIT...".to_string(),
            String::new(),
        ];
        for row in 0..3 {
            let cells: Vec<String> = (0..3)
                .map(|col| {
                    let i = row * 3 + col;
                    let g = self.board[i].glyph();
                    if i == self.cursor {
                        format!("[{g}]")
                    } else {
                        format!(" {g} ")
                    }
                })
                .collect();
            lines.push(cells.join("|"));
            if row < 2 {
                lines.push("---+---+---".to_string());
            }
        }
        lines.push(String::new());
        lines.push(match self.outcome {
            Outcome::Playing => String::new(),
            Outcome::Won(Mark::X) => "ACCESS BYPASSED".to_string(),
            Outcome::Won(_) => "COUNTERMEASURES WON".to_string(),
            Outcome::Draw => "STALEMATE".to_string(),
        });

        let filled = (self.progress as usize * BAR_WIDTH / FULL as usize).min(BAR_WIDTH);
        lines.push(format!(
            "BRUTE FORCE: [{}{}]",
            "#".repeat(filled),
            "-".repeat(BAR_WIDTH - filled)
        ));

        let top = fx::centered(viewport.height, lines.len());
        let center = i32::from(viewport.width) / 2;
        for (i, line) in lines.iter().enumerate() {
            let s = if i == 0 { highlight } else { style };
            c.set_string(center - fx::text_width(line) / 2, top + i as i32, line, s);
        }
        c
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_wraps() {
        let mut t = TicTacToe::new();
        t.cursor = 0;
        t.move_cursor(Direction::Left);
        assert_eq!(t.cursor, 8);
        t.move_cursor(Direction::Down);
        assert_eq!(t.cursor, 2);
        t.move_cursor(Direction::Up);
        assert_eq!(t.cursor, 8);
    }

    #[test]
    fn test_player_move_hands_turn_to_opponent() {
        let mut t = TicTacToe::new();
        t.update(&Event::Input(Input::Submit));
        assert_eq!(t.board[4], Mark::X);
        assert!(!t.player_turn);

        for _ in 0..=AI_DELAY {
            t.update(&Event::Tick);
        }
        assert_eq!(t.board.iter().filter(|&&m| m == Mark::O).count(), 1);
        assert!(t.player_turn);
    }

    #[test]
    fn test_occupied_cell_is_rejected() {
        let mut t = TicTacToe::new();
        t.board[4] = Mark::O;
        t.update(&Event::Input(Input::Submit));
        assert!(t.player_turn);
        assert_eq!(t.moves, 0);
    }

    #[test]
    fn test_win_is_detected() {
        let mut t = TicTacToe::new();
        t.board = [
            Mark::X, Mark::X, Mark::Empty,
            Mark::O, Mark::O, Mark::Empty,
            Mark::Empty, Mark::Empty, Mark::Empty,
        ];
        t.cursor = 2;
        t.update(&Event::Input(Input::Submit));
        assert_eq!(t.outcome, Outcome::Won(Mark::X));
        assert!(t.progress >= RESULT_HOLD);
        assert!(t.view(Viewport::new(80, 24)).plain_text().contains("ACCESS BYPASSED"));
    }

    #[test]
    fn test_keys_speed_up_once_game_is_over() {
        let mut t = TicTacToe::new();
        t.outcome = Outcome::Draw;
        let before = t.progress;
        t.update(&Event::Input(Input::Char('a')));
        assert_eq!(t.progress, before + KEY_STEP);
    }
}

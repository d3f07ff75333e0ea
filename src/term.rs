use std::{io::{Stdout, Write, stdout}, time::Duration};

use crate::snake::Direction;
use crate::{geometry, GridInt, Point};

use crossterm::{cursor, execute, queue, terminal};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers, poll, read};
use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen};

const SNAKE_HEAD_CHAR: char = '◆';
const SNAKE_BODY_CHAR: char = '█';
const FOOD_CHAR: char = '●';

/// A key press the game understands. Anything else the keyboard can
/// produce is treated as "no input".
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum InputEvent {
    Dir(Direction),
    Quit,
}

pub struct TermManager {
    stdout: Stdout,
}

impl TermManager {
    pub fn new() -> Self {
        TermManager { stdout: stdout() }
    }

    pub fn setup(&mut self) {
        execute!(self.stdout, EnterAlternateScreen).expect("Error entering alt screen");
        terminal::enable_raw_mode().expect("Error enabling raw mode.");
        execute!(self.stdout, cursor::Hide).expect("Error hiding cursor.");
    }

    pub fn restore(&mut self) {
        execute!(self.stdout, cursor::Show).expect("Error showing cursor.");
        terminal::disable_raw_mode().expect("Error disabling raw mode.");
        execute!(self.stdout, LeaveAlternateScreen).expect("Error leaving alt screen");
    }

    /// Queried fresh on every call; the terminal can be resized at any time.
    pub fn grid_size(&self) -> (GridInt, GridInt) {
        let (width, height) = terminal::size().expect("Error reading size.");
        (height as GridInt, width as GridInt)
    }

    pub fn clear(&mut self) {
        execute!(self.stdout, terminal::Clear(ClearType::All)).expect("Error clearing.");
    }

    pub fn flush(&mut self) {
        self.stdout.flush().expect("Error flushing.");
    }

    /// Waits up to `timeout` for a key. The timeout doubles as the frame
    /// pacer: `None` means the tick elapsed (or the key meant nothing).
    pub fn read_input_timeout(&self, timeout: Duration) -> Option<InputEvent> {
        if poll(timeout).expect("Error polling input.") {
            if let Event::Key(ev) = read().expect("Error reading input.") {
                return translate_key(&ev);
            }
        }

        None
    }

    /// Blocks until any key arrives; `None` means an unrecognized one.
    pub fn wait_for_key(&self) -> Option<InputEvent> {
        loop {
            if let Event::Key(ev) = read().expect("Error reading input.") {
                return translate_key(&ev);
            }
        }
    }

    /// Discards anything buffered while the game wasn't listening.
    pub fn flush_input(&self) {
        while poll(Duration::from_millis(0)).expect("Error polling input.") {
            let _ = read().expect("Error reading input.");
        }
    }

    pub fn draw_head(&mut self, pos: Point) {
        self.draw_char(pos, SNAKE_HEAD_CHAR);
    }

    pub fn draw_segment(&mut self, pos: Point) {
        self.draw_char(pos, SNAKE_BODY_CHAR);
    }

    pub fn draw_food(&mut self, pos: Point) {
        let (height, width) = self.grid_size();
        if !geometry::is_in_bounds(pos.0, pos.1, height, width) {
            return;
        }

        queue!(
            self.stdout,
            cursor::MoveTo(pos.1 as u16, pos.0 as u16),
            SetForegroundColor(Color::Red),
            Print(FOOD_CHAR),
            ResetColor
        )
        .expect("Error drawing food.");
        self.flush();
    }

    pub fn show_splash(&mut self) {
        self.clear();

        let lines = [
            "A simple movement toy.",
            "Arrow keys steer the snake; eat the red food.",
            "",
            "Press 'q' to quit or any other key to begin...",
        ];

        for (i, line) in lines.iter().enumerate() {
            queue!(self.stdout, cursor::MoveTo(0, i as u16), Print(line))
                .expect("Error drawing splash.");
        }

        self.flush();
    }

    pub fn show_game_over(&mut self, reason: &str, score: u32) {
        self.clear();

        queue!(
            self.stdout,
            cursor::MoveTo(0, 0),
            SetAttribute(Attribute::Bold),
            Print("Game Over!"),
            SetAttribute(Attribute::Reset),
            cursor::MoveTo(0, 1),
            Print(reason),
            cursor::MoveTo(0, 2),
            Print(format!("Your Score: {}", score))
        )
        .expect("Error drawing game over screen.");

        self.flush();
    }

    pub fn show_exit_prompt(&mut self) {
        queue!(
            self.stdout,
            cursor::MoveTo(0, 4),
            Print("Press any key to exit...")
        )
        .expect("Error drawing exit prompt.");

        self.flush();
    }

    ///////////////////////////////////////////////////////////////////////////

    fn draw_char(&mut self, pos: Point, ch: char) {
        // Skipped when out of bounds: a shrink can leave segments past the
        // edge for one tick, until the reset path runs.
        let (height, width) = self.grid_size();
        if !geometry::is_in_bounds(pos.0, pos.1, height, width) {
            return;
        }

        queue!(self.stdout, cursor::MoveTo(pos.1 as u16, pos.0 as u16), Print(ch))
            .expect("Error drawing.");
    }
}

fn translate_key(ev: &KeyEvent) -> Option<InputEvent> {
    if ev.code == KeyCode::Char('c') && ev.modifiers == KeyModifiers::CONTROL {
        return Some(InputEvent::Quit);
    }

    match ev.code {
        KeyCode::Up => Some(InputEvent::Dir(Direction::Up)),
        KeyCode::Down => Some(InputEvent::Dir(Direction::Down)),
        KeyCode::Left => Some(InputEvent::Dir(Direction::Left)),
        KeyCode::Right => Some(InputEvent::Dir(Direction::Right)),
        KeyCode::Char('q') => Some(InputEvent::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
        }
    }

    #[test]
    fn arrows_map_to_directions() {
        assert_eq!(
            translate_key(&key(KeyCode::Up)),
            Some(InputEvent::Dir(Direction::Up))
        );
        assert_eq!(
            translate_key(&key(KeyCode::Down)),
            Some(InputEvent::Dir(Direction::Down))
        );
        assert_eq!(
            translate_key(&key(KeyCode::Left)),
            Some(InputEvent::Dir(Direction::Left))
        );
        assert_eq!(
            translate_key(&key(KeyCode::Right)),
            Some(InputEvent::Dir(Direction::Right))
        );
    }

    #[test]
    fn q_and_ctrl_c_both_quit() {
        assert_eq!(translate_key(&key(KeyCode::Char('q'))), Some(InputEvent::Quit));

        let ctrl_c = KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
        };
        assert_eq!(translate_key(&ctrl_c), Some(InputEvent::Quit));
    }

    #[test]
    fn unrecognized_keys_mean_no_input() {
        assert_eq!(translate_key(&key(KeyCode::Char('x'))), None);
        assert_eq!(translate_key(&key(KeyCode::Esc)), None);
        assert_eq!(translate_key(&key(KeyCode::Enter)), None);
    }
}

//! Crossterm-backed full-screen note editor.
//!
//! # Responsibility
//! - Implement [`NoteEditor`] over a raw-mode alternate-screen session.
//! - Keep buffer manipulation pure (`EditBuffer`) so it stays testable
//!   without a terminal.
//!
//! # Invariants
//! - Raw mode and the alternate screen are released on every exit path via
//!   the drop guard, including error returns.
//! - This is the only module in the workspace that talks to the terminal
//!   directly.

use crossterm::cursor::MoveTo;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{
    self, disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::{execute, queue};
use log::info;
use quicknotes_core::{EditorError, NoteEditor};
use std::io::{stdout, Write};

const SAVE_HINT: &str = "Hit 'Ctrl-G' to save and exit";

/// Interactive terminal editor session.
pub struct TermEditor;

impl TermEditor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TermEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl NoteEditor for TermEditor {
    fn edit(&mut self, seed_text: &str) -> Result<String, EditorError> {
        info!(
            "event=editor_open module=editor status=ok seed_len={}",
            seed_text.len()
        );
        let mut buffer = EditBuffer::from_seed(seed_text);
        let _guard = RawScreenGuard::acquire()?;

        loop {
            draw(&buffer)?;
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if is_save_and_exit(&key) {
                        break;
                    }
                    apply_key(&mut buffer, &key);
                }
                // Resize falls through to the next draw pass.
                _ => {}
            }
        }

        let gathered = buffer.gather();
        info!(
            "event=editor_close module=editor status=ok text_len={}",
            gathered.len()
        );
        Ok(gathered)
    }
}

/// Scoped raw-mode + alternate-screen acquisition.
struct RawScreenGuard;

impl RawScreenGuard {
    fn acquire() -> Result<Self, EditorError> {
        enable_raw_mode()?;
        if let Err(err) = execute!(stdout(), EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(err.into());
        }
        Ok(Self)
    }
}

impl Drop for RawScreenGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}

fn is_save_and_exit(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('g') | KeyCode::Char('G'))
}

fn apply_key(buffer: &mut EditBuffer, key: &KeyEvent) {
    match key.code {
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            buffer.insert_char(c);
        }
        KeyCode::Enter => buffer.newline(),
        KeyCode::Backspace => buffer.backspace(),
        KeyCode::Left => buffer.move_left(),
        KeyCode::Right => buffer.move_right(),
        KeyCode::Up => buffer.move_up(),
        KeyCode::Down => buffer.move_down(),
        KeyCode::Home => buffer.move_home(),
        KeyCode::End => buffer.move_end(),
        _ => {}
    }
}

fn draw(buffer: &EditBuffer) -> Result<(), EditorError> {
    let mut out = stdout();
    let (cols, rows) = terminal::size()?;
    let edit_rows = rows.saturating_sub(1) as usize;

    queue!(out, Clear(ClearType::All))?;
    for (row, line) in buffer.lines().iter().take(edit_rows).enumerate() {
        let clipped: String = line.chars().take(cols as usize).collect();
        queue!(out, MoveTo(0, row as u16))?;
        out.write_all(clipped.as_bytes())?;
    }

    queue!(out, MoveTo(0, rows.saturating_sub(1)))?;
    out.write_all(SAVE_HINT.as_bytes())?;

    let (cursor_row, cursor_col) = buffer.cursor();
    queue!(
        out,
        MoveTo(
            cursor_col.min(cols.saturating_sub(1) as usize) as u16,
            cursor_row.min(edit_rows.saturating_sub(1)) as u16
        )
    )?;
    out.flush()?;
    Ok(())
}

/// Plain-text line buffer with a cursor. Columns are char offsets, not bytes.
struct EditBuffer {
    lines: Vec<String>,
    row: usize,
    col: usize,
}

impl EditBuffer {
    fn from_seed(seed_text: &str) -> Self {
        let lines: Vec<String> = if seed_text.is_empty() {
            vec![String::new()]
        } else {
            seed_text.split('\n').map(str::to_string).collect()
        };
        let row = lines.len() - 1;
        let col = char_len(&lines[row]);
        Self { lines, row, col }
    }

    fn lines(&self) -> &[String] {
        &self.lines
    }

    fn cursor(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    /// Joins the buffer back into one string, newlines intact.
    fn gather(&self) -> String {
        self.lines.join("\n")
    }

    fn insert_char(&mut self, c: char) {
        let at = byte_index(&self.lines[self.row], self.col);
        self.lines[self.row].insert(at, c);
        self.col += 1;
    }

    fn newline(&mut self) {
        let at = byte_index(&self.lines[self.row], self.col);
        let rest = self.lines[self.row].split_off(at);
        self.lines.insert(self.row + 1, rest);
        self.row += 1;
        self.col = 0;
    }

    fn backspace(&mut self) {
        if self.col > 0 {
            self.col -= 1;
            let at = byte_index(&self.lines[self.row], self.col);
            self.lines[self.row].remove(at);
        } else if self.row > 0 {
            let removed = self.lines.remove(self.row);
            self.row -= 1;
            self.col = char_len(&self.lines[self.row]);
            self.lines[self.row].push_str(&removed);
        }
    }

    fn move_left(&mut self) {
        if self.col > 0 {
            self.col -= 1;
        } else if self.row > 0 {
            self.row -= 1;
            self.col = char_len(&self.lines[self.row]);
        }
    }

    fn move_right(&mut self) {
        if self.col < char_len(&self.lines[self.row]) {
            self.col += 1;
        } else if self.row + 1 < self.lines.len() {
            self.row += 1;
            self.col = 0;
        }
    }

    fn move_up(&mut self) {
        if self.row > 0 {
            self.row -= 1;
            self.col = self.col.min(char_len(&self.lines[self.row]));
        }
    }

    fn move_down(&mut self) {
        if self.row + 1 < self.lines.len() {
            self.row += 1;
            self.col = self.col.min(char_len(&self.lines[self.row]));
        }
    }

    fn move_home(&mut self) {
        self.col = 0;
    }

    fn move_end(&mut self) {
        self.col = char_len(&self.lines[self.row]);
    }
}

fn char_len(line: &str) -> usize {
    line.chars().count()
}

fn byte_index(line: &str, col: usize) -> usize {
    line.char_indices()
        .nth(col)
        .map(|(index, _)| index)
        .unwrap_or(line.len())
}

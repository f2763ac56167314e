//! Cursor-addressable input line editing and key decoding for the terminal prompt.

/// Modifier state accompanying a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyModifiers {
    /// Control key held.
    pub ctrl: bool,
    /// Alt/Option key held.
    pub alt: bool,
    /// Meta/Command key held.
    pub meta: bool,
}

/// Logical terminal key input after decoding host key events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    /// Printable character.
    Char(char),
    /// Submit the current line.
    Enter,
    /// Accept the completion hint.
    Tab,
    /// Delete the character before the cursor.
    Backspace,
    /// Delete the character under the cursor.
    Delete,
    /// Move the cursor one character left.
    Left,
    /// Move the cursor one character right.
    Right,
    /// Move the cursor to the start of the line.
    Home,
    /// Move the cursor to the end of the line.
    End,
    /// Recall an older command.
    Up,
    /// Recall a newer command.
    Down,
    /// Move the cursor back one word.
    WordLeft,
    /// Move the cursor forward one word.
    WordRight,
    /// Delete the word before the cursor.
    DeleteWordBackward,
    /// Clear the whole line.
    KillLine,
    /// Delete from the start of the line to the cursor.
    KillToStart,
    /// Clear the transcript.
    ClearScreen,
    /// Abandon the current line.
    Interrupt,
    /// Switch to the next terminal theme.
    CycleTheme,
}

impl KeyInput {
    /// Decodes a host key name (DOM `KeyboardEvent.key` naming) and modifiers.
    ///
    /// Returns `None` for keys the terminal does not handle, including Ctrl/Cmd+V which is left to
    /// the host clipboard.
    pub fn decode(key: &str, modifiers: KeyModifiers) -> Option<Self> {
        if modifiers.ctrl || modifiers.meta {
            return match key.to_ascii_lowercase().as_str() {
                "l" => Some(Self::ClearScreen),
                "k" => Some(Self::KillLine),
                "u" => Some(Self::KillToStart),
                "w" => Some(Self::DeleteWordBackward),
                "a" => Some(Self::Home),
                "e" => Some(Self::End),
                "c" => Some(Self::Interrupt),
                "t" => Some(Self::CycleTheme),
                _ => None,
            };
        }

        if modifiers.alt {
            return match key {
                "b" => Some(Self::WordLeft),
                "f" => Some(Self::WordRight),
                "Backspace" => Some(Self::DeleteWordBackward),
                _ => None,
            };
        }

        match key {
            "Enter" => Some(Self::Enter),
            "Tab" => Some(Self::Tab),
            "Backspace" => Some(Self::Backspace),
            "Delete" => Some(Self::Delete),
            "Home" => Some(Self::Home),
            "End" => Some(Self::End),
            "ArrowLeft" => Some(Self::Left),
            "ArrowRight" => Some(Self::Right),
            "ArrowUp" => Some(Self::Up),
            "ArrowDown" => Some(Self::Down),
            _ => {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) if !ch.is_control() => Some(Self::Char(ch)),
                    _ => None,
                }
            }
        }
    }
}

/// In-progress input line with a character-indexed cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineEditor {
    chars: Vec<char>,
    cursor: usize,
}

impl LineEditor {
    /// Current line text.
    pub fn text(&self) -> String {
        self.chars.iter().collect()
    }

    /// Cursor position in characters, `0..=len`.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Whether the line is empty.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Inserts one character at the cursor.
    pub fn insert_char(&mut self, ch: char) {
        self.chars.insert(self.cursor, ch);
        self.cursor += 1;
    }

    /// Inserts text at the cursor.
    pub fn insert_str(&mut self, text: &str) {
        for ch in text.chars() {
            self.insert_char(ch);
        }
    }

    /// Replaces the line and moves the cursor to the end.
    pub fn replace(&mut self, text: &str) {
        self.chars = text.chars().collect();
        self.cursor = self.chars.len();
    }

    /// Returns the line and resets the editor.
    pub fn take(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.chars).into_iter().collect()
    }

    /// Deletes the character before the cursor.
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.chars.remove(self.cursor);
        }
    }

    /// Deletes the character under the cursor.
    pub fn delete(&mut self) {
        if self.cursor < self.chars.len() {
            self.chars.remove(self.cursor);
        }
    }

    /// Moves one character left.
    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Moves one character right.
    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.chars.len());
    }

    /// Moves to the start of the line.
    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    /// Moves to the end of the line.
    pub fn move_end(&mut self) {
        self.cursor = self.chars.len();
    }

    /// Moves onto the closest space before the cursor, or the line start.
    pub fn move_word_left(&mut self) {
        self.cursor = self.last_space_before_cursor().unwrap_or(0);
    }

    /// Moves just past the next space at or after the cursor, or to the line end.
    pub fn move_word_right(&mut self) {
        self.cursor = self.chars[self.cursor..]
            .iter()
            .position(|ch| *ch == ' ')
            .map(|offset| self.cursor + offset + 1)
            .unwrap_or(self.chars.len());
    }

    /// Deletes back to (but not including) the closest space before the cursor.
    pub fn delete_word_backward(&mut self) {
        let start = self.last_space_before_cursor().map_or(0, |index| index + 1);
        self.chars.drain(start..self.cursor);
        self.cursor = start;
    }

    /// Clears the whole line.
    pub fn kill_line(&mut self) {
        self.chars.clear();
        self.cursor = 0;
    }

    /// Deletes everything before the cursor.
    pub fn kill_to_start(&mut self) {
        self.chars.drain(..self.cursor);
        self.cursor = 0;
    }

    /// Applies a pure editing key. Returns `false` for keys that are not line edits.
    pub fn apply(&mut self, key: KeyInput) -> bool {
        match key {
            KeyInput::Char(ch) => self.insert_char(ch),
            KeyInput::Backspace => self.backspace(),
            KeyInput::Delete => self.delete(),
            KeyInput::Left => self.move_left(),
            KeyInput::Right => self.move_right(),
            KeyInput::Home => self.move_home(),
            KeyInput::End => self.move_end(),
            KeyInput::WordLeft => self.move_word_left(),
            KeyInput::WordRight => self.move_word_right(),
            KeyInput::DeleteWordBackward => self.delete_word_backward(),
            KeyInput::KillLine => self.kill_line(),
            KeyInput::KillToStart => self.kill_to_start(),
            _ => return false,
        }
        true
    }

    fn last_space_before_cursor(&self) -> Option<usize> {
        self.chars[..self.cursor].iter().rposition(|ch| *ch == ' ')
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn editor_with(text: &str, cursor: usize) -> LineEditor {
        let mut editor = LineEditor::default();
        editor.replace(text);
        editor.cursor = cursor;
        editor
    }

    #[test]
    fn inserts_and_deletes_at_cursor() {
        let mut editor = editor_with("hlp", 1);
        editor.insert_char('e');
        assert_eq!(editor.text(), "help");
        assert_eq!(editor.cursor(), 2);
        editor.backspace();
        editor.delete();
        assert_eq!(editor.text(), "hp");
        assert_eq!(editor.cursor(), 1);
    }

    #[test]
    fn cursor_movement_is_clamped_to_line() {
        let mut editor = editor_with("ab", 0);
        editor.move_left();
        assert_eq!(editor.cursor(), 0);
        editor.move_end();
        editor.move_right();
        assert_eq!(editor.cursor(), 2);
    }

    #[test]
    fn word_motion_uses_space_boundaries() {
        let mut editor = editor_with("theme set matrix", 16);
        editor.move_word_left();
        assert_eq!(editor.cursor(), 9);
        editor.move_word_left();
        assert_eq!(editor.cursor(), 5);
        editor.move_home();
        editor.move_word_right();
        assert_eq!(editor.cursor(), 6);
        editor.move_word_right();
        assert_eq!(editor.cursor(), 10);
        editor.move_word_right();
        assert_eq!(editor.cursor(), 16);
    }

    #[test]
    fn delete_word_backward_keeps_separator() {
        let mut editor = editor_with("banner hello world", 18);
        editor.delete_word_backward();
        assert_eq!(editor.text(), "banner hello ");
        assert_eq!(editor.cursor(), 13);

        let mut single = editor_with("whoami", 6);
        single.delete_word_backward();
        assert_eq!(single.text(), "");
    }

    #[test]
    fn kill_commands_trim_line() {
        let mut editor = editor_with("help skills", 5);
        editor.kill_to_start();
        assert_eq!(editor.text(), "skills");
        assert_eq!(editor.cursor(), 0);
        editor.kill_line();
        assert!(editor.is_empty());
    }

    #[test]
    fn multibyte_characters_are_single_positions() {
        let mut editor = editor_with("café", 4);
        editor.backspace();
        assert_eq!(editor.text(), "caf");
        assert_eq!(editor.take(), "caf");
        assert_eq!(editor.cursor(), 0);
    }

    #[test]
    fn decodes_host_keys() {
        let ctrl = KeyModifiers {
            ctrl: true,
            ..KeyModifiers::default()
        };
        let alt = KeyModifiers {
            alt: true,
            ..KeyModifiers::default()
        };
        assert_eq!(KeyInput::decode("L", ctrl), Some(KeyInput::ClearScreen));
        assert_eq!(KeyInput::decode("v", ctrl), None);
        assert_eq!(KeyInput::decode("b", alt), Some(KeyInput::WordLeft));
        assert_eq!(
            KeyInput::decode("ArrowUp", KeyModifiers::default()),
            Some(KeyInput::Up)
        );
        assert_eq!(
            KeyInput::decode("x", KeyModifiers::default()),
            Some(KeyInput::Char('x'))
        );
        assert_eq!(KeyInput::decode("Shift", KeyModifiers::default()), None);
    }
}

//! Bounded scrollback for a relayed command
//!
//! Lines are printed as they arrive until `max_lines` are on screen. After
//! that every new line moves the cursor back over the window, clears to the
//! end of the screen and redraws the most recent `max_lines` lines.

use std::collections::VecDeque;
use std::io::{self, Write};

use crossterm::cursor::MoveToPreviousLine;
use crossterm::queue;
use crossterm::terminal::{Clear, ClearType};

#[derive(Debug)]
pub struct OutputWindow {
    prefix: String,
    max_lines: u16,
    lines: VecDeque<String>,
}

impl OutputWindow {
    pub fn new(prefix: impl Into<String>, max_lines: u16) -> Self {
        let max_lines = max_lines.max(1);
        Self {
            prefix: prefix.into(),
            max_lines,
            lines: VecDeque::with_capacity(usize::from(max_lines) + 1),
        }
    }

    /// Append a line and write whatever the terminal needs to show it
    pub fn push<W: Write>(&mut self, line: String, out: &mut W) -> io::Result<()> {
        self.lines.push_back(line);

        if self.lines.len() > usize::from(self.max_lines) {
            self.lines.pop_front();
            queue!(
                out,
                MoveToPreviousLine(self.max_lines),
                Clear(ClearType::FromCursorDown)
            )?;
            for line in &self.lines {
                writeln!(out, "{}{}", self.prefix, line)?;
            }
        } else if let Some(line) = self.lines.back() {
            writeln!(out, "{}{}", self.prefix, line)?;
        }

        out.flush()
    }

    /// Lines currently on screen, oldest first
    pub fn displayed(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn push_all(window: &mut OutputWindow, lines: &[&str]) -> String {
        let mut out = Vec::new();
        for line in lines {
            window.push(line.to_string(), &mut out).unwrap();
        }
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_lines_under_limit_are_appended() {
        let mut window = OutputWindow::new("[3] ", 5);
        let output = push_all(&mut window, &["one", "two"]);

        assert_eq!(output, "[3] one\n[3] two\n");
        assert_eq!(window.displayed().collect::<Vec<_>>(), vec!["one", "two"]);
    }

    #[test]
    fn test_overflow_drops_oldest_and_redraws() {
        let mut window = OutputWindow::new("[3] ", 2);
        let output = push_all(&mut window, &["one", "two", "three"]);

        assert_eq!(window.displayed().collect::<Vec<_>>(), vec!["two", "three"]);
        // Cursor up two lines, clear below, then the redrawn window
        assert!(output.ends_with("\x1b[2F\x1b[J[3] two\n[3] three\n"));
    }

    #[test]
    fn test_zero_limit_is_treated_as_one() {
        let mut window = OutputWindow::new("", 0);
        push_all(&mut window, &["a", "b"]);
        assert_eq!(window.displayed().collect::<Vec<_>>(), vec!["b"]);
    }

    #[test]
    fn test_new_window_is_empty() {
        let window = OutputWindow::new("[1] ", 5);
        assert!(window.is_empty());
        assert_eq!(window.prefix(), "[1] ");
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_window_shows_most_recent_lines(
            max_lines in 1u16..10,
            lines in prop::collection::vec("[a-z0-9 ]{0,12}", 0..40)
        ) {
            let mut window = OutputWindow::new("", max_lines);
            let mut sink = Vec::new();
            for line in &lines {
                window.push(line.clone(), &mut sink).unwrap();
                prop_assert!(window.len() <= usize::from(max_lines));
            }

            let keep = lines.len().min(usize::from(max_lines));
            let expected: Vec<&str> = lines[lines.len() - keep..].iter().map(String::as_str).collect();
            prop_assert_eq!(window.displayed().collect::<Vec<_>>(), expected);
        }
    }
}

//! Tick-driven state behind the homepage hero. The page owns the timers and
//! calls `tick` on each firing; nothing in here knows about time.

use crate::data::CodeLine;

pub const WORD_INTERVAL_MS: u32 = 800;
pub const TERMINAL_DELAY_MS: u32 = 1000;
pub const TYPE_INTERVAL_MS: u32 = 50;
pub const CURSOR_BLINK_MS: u32 = 500;

/// Reveals a title one word at a time. The first word is visible from the
/// start.
#[derive(Clone, Debug, PartialEq)]
pub struct WordReveal {
    current: usize,
    total: usize,
}

impl WordReveal {
    pub fn new(total: usize) -> Self {
        Self { current: 0, total }
    }

    pub fn is_visible(&self, index: usize) -> bool {
        index <= self.current
    }

    pub fn is_complete(&self) -> bool {
        self.current + 1 >= self.total
    }

    /// Returns true on the tick that reveals the last word.
    pub fn tick(&mut self) -> bool {
        if self.is_complete() {
            return false;
        }
        self.current += 1;
        self.is_complete()
    }
}

/// Types a block of code one character per tick, line by line.
#[derive(Clone, Debug, PartialEq)]
pub struct TypedTerminal {
    lines: Vec<String>,
    line: usize,
    chars: usize,
}

impl TypedTerminal {
    pub fn new() -> Self {
        Self {
            lines: Vec::new(),
            line: 0,
            chars: 0,
        }
    }

    /// Text typed so far, one entry per started line.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_done(&self, code: &[CodeLine]) -> bool {
        self.line >= code.len()
    }

    /// Advances by one character, or onto the next line when the current one
    /// is finished. Returns false once everything is typed.
    pub fn tick(&mut self, code: &[CodeLine]) -> bool {
        let Some(target) = code.get(self.line) else {
            return false;
        };
        if self.lines.len() <= self.line {
            self.lines.push(String::new());
        }

        match target.text.chars().nth(self.chars) {
            Some(c) => {
                self.lines[self.line].push(c);
                self.chars += 1;
            }
            None => {
                self.line += 1;
                self.chars = 0;
            }
        }
        !self.is_done(code)
    }
}

impl Default for TypedTerminal {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{HERO_WORDS, TERMINAL_CODE};

    #[test]
    fn reveal_completes_after_words_minus_one_ticks() {
        let mut reveal = WordReveal::new(HERO_WORDS.len());
        assert!(reveal.is_visible(0));
        assert!(!reveal.is_visible(1));

        assert!(!reveal.tick());
        assert!(reveal.is_visible(1));
        assert!(reveal.tick());
        assert!(reveal.is_complete());
        assert!(!reveal.tick());
        assert!(reveal.is_visible(2));
    }

    #[test]
    fn single_word_is_complete_immediately() {
        let reveal = WordReveal::new(1);
        assert!(reveal.is_complete());
    }

    #[test]
    fn terminal_types_every_line_exactly() {
        let mut terminal = TypedTerminal::new();
        let mut ticks = 0;
        while terminal.tick(&TERMINAL_CODE) {
            ticks += 1;
            assert!(ticks < 10_000, "terminal never finished");
        }

        assert!(terminal.is_done(&TERMINAL_CODE));
        let expected: Vec<&str> = TERMINAL_CODE.iter().map(|l| l.text).collect();
        assert_eq!(terminal.lines(), expected.as_slice());
        assert!(!terminal.tick(&TERMINAL_CODE));
    }

    #[test]
    fn terminal_types_one_character_per_tick() {
        let code = [
            CodeLine { text: "ab", class: "x" },
            CodeLine { text: "c", class: "y" },
        ];
        let mut terminal = TypedTerminal::new();
        terminal.tick(&code);
        assert_eq!(terminal.lines(), ["a"]);
        terminal.tick(&code);
        assert_eq!(terminal.lines(), ["ab"]);
        terminal.tick(&code); // line break
        terminal.tick(&code);
        assert_eq!(terminal.lines(), ["ab", "c"]);
    }
}

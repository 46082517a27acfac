//! Player-facing message log.

/// Kind of log entry, for the front end to pick a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogStyle {
    Normal,
    /// A hot/cold hint.
    Feedback,
    /// A rejected action.
    Error,
    /// Round start and end.
    Notable,
}

/// A single log entry.
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub text: String,
    pub style: LogStyle,
    /// First entry of a turn.
    pub tick: bool,
    /// How many identical messages were folded into this one.
    pub dups: u32,
}

impl LogEntry {
    /// Text with the turn marker and repeat count.
    pub fn render(&self) -> String {
        let mut s = String::new();
        if self.tick {
            s.push_str("• ");
        }
        s.push_str(&self.text);
        if self.dups > 0 {
            s.push_str(&format!(" ({}×)", self.dups + 1));
        }
        s
    }

    fn repeats(&self, text: &str, style: LogStyle) -> bool {
        self.style == style && self.text == text
    }
}

const MAX_ENTRIES: usize = 1000;

/// The game's message log.
#[derive(Debug, Default)]
pub struct GameLog {
    pub entries: Vec<LogEntry>,
    next_tick: bool,
}

impl GameLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the start of a new turn (next entry gets a tick marker).
    pub fn new_turn(&mut self) {
        self.next_tick = true;
    }

    /// Add a message with a given style. A message identical to the last
    /// one of the same turn only bumps its repeat count.
    pub fn log_styled(&mut self, text: &str, style: LogStyle) {
        let text = sentence_case(text);
        let tick = std::mem::take(&mut self.next_tick);
        match self.entries.last_mut() {
            Some(last) if !tick && last.repeats(&text, style) => last.dups += 1,
            _ => {
                self.entries.push(LogEntry {
                    text,
                    style,
                    tick,
                    dups: 0,
                });
                if self.entries.len() > MAX_ENTRIES {
                    self.entries.drain(..MAX_ENTRIES / 10);
                }
            }
        }
    }

    /// Add a normal-style message.
    pub fn log(&mut self, text: &str) {
        self.log_styled(text, LogStyle::Normal);
    }

    /// The last `n` entries, rendered, oldest first.
    pub fn recent(&self, n: usize) -> Vec<String> {
        let skip = self.entries.len().saturating_sub(n);
        self.entries[skip..].iter().map(LogEntry::render).collect()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.next_tick = false;
    }
}

fn sentence_case(s: &str) -> String {
    let mut chars = s.chars();
    let mut out = String::with_capacity(s.len());
    out.extend(chars.next().into_iter().flat_map(char::to_uppercase));
    out.push_str(chars.as_str());
    out
}

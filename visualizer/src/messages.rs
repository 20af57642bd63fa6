//! Message log shown under the status bar.

const MAX_ENTRIES: usize = 200;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub text: String,
    pub dups: u32,
}

/// Engine and visualizer messages, newest last.
#[derive(Debug, Default)]
pub struct MessageLog {
    entries: Vec<LogEntry>,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `text`, folding it into the last entry when identical.
    pub fn push(&mut self, text: impl Into<String>) {
        let text = text.into();
        if let Some(last) = self.entries.last_mut() {
            if last.text == text {
                last.dups += 1;
                return;
            }
        }
        self.entries.push(LogEntry { text, dups: 0 });
        if self.entries.len() > MAX_ENTRIES {
            self.entries.drain(0..MAX_ENTRIES / 4);
        }
    }

    /// The newest entry formatted for display.
    pub fn latest(&self) -> Option<String> {
        self.entries.last().map(|e| match e.dups {
            0 => e.text.clone(),
            n => format!("{} ({}×)", e.text, n + 1),
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeats_are_folded() {
        let mut log = MessageLog::new();
        assert_eq!(log.latest(), None);
        log.push("Goal node not set");
        log.push("Goal node not set");
        assert_eq!(log.len(), 1);
        assert_eq!(log.latest().as_deref(), Some("Goal node not set (2×)"));
        log.push("Saved");
        assert_eq!(log.len(), 2);
        assert_eq!(log.latest().as_deref(), Some("Saved"));
    }

    #[test]
    fn old_entries_are_dropped() {
        let mut log = MessageLog::new();
        for i in 0..=MAX_ENTRIES {
            log.push(i.to_string());
        }
        assert_eq!(log.len(), MAX_ENTRIES + 1 - MAX_ENTRIES / 4);
        assert_eq!(log.latest(), Some(MAX_ENTRIES.to_string()));
    }
}

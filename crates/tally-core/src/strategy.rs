use std::fmt;

/// Synchronization mechanism behind a counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    Mutex,
    Atomic,
    Channel,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Strategy::Mutex, Strategy::Atomic, Strategy::Channel];

    /// Stable label used in routes, logs, and metrics.
    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::Mutex => "mutex",
            Strategy::Atomic => "atomic",
            Strategy::Channel => "channel",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

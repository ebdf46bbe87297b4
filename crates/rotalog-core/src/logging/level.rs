//! Logging levels

/// Message severity levels
///
/// `Debug` is a superset of `Info`: a sink configured at `Debug` also emits
/// INFO-tagged messages, while a sink configured at `Info` drops debug
/// messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Info,
    Debug,
}

impl LogLevel {
    /// Whether a sink configured at `self` emits messages at `message_level`
    pub fn enables(self, message_level: LogLevel) -> bool {
        message_level <= self
    }

    /// The literal tag written into formatted log lines
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_is_superset_of_info() {
        assert!(LogLevel::Debug.enables(LogLevel::Debug));
        assert!(LogLevel::Debug.enables(LogLevel::Info));
        assert!(LogLevel::Info.enables(LogLevel::Info));
        assert!(!LogLevel::Info.enables(LogLevel::Debug));
    }

    #[test]
    fn test_display_tags() {
        assert_eq!(LogLevel::Info.to_string(), "INFO");
        assert_eq!(LogLevel::Debug.to_string(), "DEBUG");
    }
}

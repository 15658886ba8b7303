//! Enumerations carried on management API entities.

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// TriggerKind
// ---------------------------------------------------------------------------

/// Firing rule kind of a scheduled task.
///
/// The server owns the vocabulary. `cron` and `simple` are the known kinds;
/// anything else is kept verbatim in [`TriggerKind::Other`] so it can be
/// printed back exactly as received.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TriggerKind {
    Cron,
    Simple,
    Other(String),
}

impl TriggerKind {
    /// Return the wire representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Cron => "cron",
            Self::Simple => "simple",
            Self::Other(value) => value,
        }
    }

    /// Whether the task fires on a cron expression rather than count/interval.
    #[must_use]
    pub const fn is_cron(&self) -> bool {
        matches!(self, Self::Cron)
    }
}

impl Default for TriggerKind {
    fn default() -> Self {
        Self::Other(String::new())
    }
}

impl From<String> for TriggerKind {
    fn from(value: String) -> Self {
        match value.as_str() {
            "cron" => Self::Cron,
            "simple" => Self::Simple,
            _ => Self::Other(value),
        }
    }
}

impl From<&str> for TriggerKind {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<TriggerKind> for String {
    fn from(kind: TriggerKind) -> Self {
        match kind {
            TriggerKind::Other(value) => value,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for TriggerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("cron", TriggerKind::Cron)]
    #[case("simple", TriggerKind::Simple)]
    #[case("interval", TriggerKind::Other("interval".into()))]
    #[case("CRON", TriggerKind::Other("CRON".into()))]
    fn parses_wire_value(#[case] wire: &str, #[case] expected: TriggerKind) {
        assert_eq!(TriggerKind::from(wire), expected);
    }

    #[test]
    fn only_cron_is_cron() {
        assert!(TriggerKind::Cron.is_cron());
        assert!(!TriggerKind::Simple.is_cron());
        assert!(!TriggerKind::Other("cron ".into()).is_cron());
    }

    #[test]
    fn unknown_kind_serializes_verbatim() {
        let json = serde_json::to_string(&TriggerKind::Other("fixed-rate".into())).unwrap();
        assert_eq!(json, "\"fixed-rate\"");
    }

    #[test]
    fn display_matches_wire() {
        assert_eq!(TriggerKind::Cron.to_string(), "cron");
        assert_eq!(TriggerKind::Other("x".into()).to_string(), "x");
    }
}

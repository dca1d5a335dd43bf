//! Classified debug output
//!
//! Every debug message carries a classification. A process-wide filter
//! decides which classifications are printed; `all` prints everything.
//! Messages with a classification outside [`POSSIBLE_CLASSIFICATIONS`] are
//! reported regardless of the filter so typos get noticed.

use std::fmt;
use std::str::FromStr;
use std::sync::{PoisonError, RwLock};
use tracing::Level;

/// Labels accepted by [`debug`]
pub const POSSIBLE_CLASSIFICATIONS: &[&str] = &[
    "all", "tss", "tss+", "tss++", "command", "command+", "adapter", "adapter+", "files",
];

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Classification {
    All,
    Tss,
    TssPlus,
    TssPlusPlus,
    Command,
    CommandPlus,
    Adapter,
    AdapterPlus,
    Files,
    Other(String),
}

impl Classification {
    pub fn as_str(&self) -> &str {
        match self {
            Classification::All => "all",
            Classification::Tss => "tss",
            Classification::TssPlus => "tss+",
            Classification::TssPlusPlus => "tss++",
            Classification::Command => "command",
            Classification::CommandPlus => "command+",
            Classification::Adapter => "adapter",
            Classification::AdapterPlus => "adapter+",
            Classification::Files => "files",
            Classification::Other(label) => label,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Classification::Other(_))
    }
}

impl From<&str> for Classification {
    fn from(label: &str) -> Self {
        match label {
            "all" => Classification::All,
            "tss" => Classification::Tss,
            "tss+" => Classification::TssPlus,
            "tss++" => Classification::TssPlusPlus,
            "command" => Classification::Command,
            "command+" => Classification::CommandPlus,
            "adapter" => Classification::Adapter,
            "adapter+" => Classification::AdapterPlus,
            "files" => Classification::Files,
            other => Classification::Other(other.to_string()),
        }
    }
}

impl FromStr for Classification {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Classification::from(s))
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Set of classifications that get printed
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DebugFilter {
    classifications: Vec<Classification>,
}

impl DebugFilter {
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            classifications: labels
                .into_iter()
                .map(|l| Classification::from(l.as_ref()))
                .collect(),
        }
    }

    pub fn classifications(&self) -> &[Classification] {
        &self.classifications
    }

    pub fn should_print(&self, classification: &Classification) -> bool {
        self.classifications
            .iter()
            .any(|c| *c == Classification::All || c == classification)
    }

    /// Lines emitted for one debug call, in order, with their log level
    pub fn lines(&self, classification: &Classification, text: &str) -> Vec<(Level, String)> {
        let mut lines = Vec::new();
        if self.should_print(classification) {
            lines.push((Level::INFO, message_line(classification, text)));
        }
        if !classification.is_known() {
            lines.push((Level::WARN, unknown_line(classification)));
        }
        lines
    }
}

fn message_line(classification: &Classification, text: &str) -> String {
    format!("T3S: {:<8}: {}", classification.as_str(), text)
}

fn unknown_line(classification: &Classification) -> String {
    format!(
        "T3S: debug: got unknown debug message classification: {}. \
         Consider adding this to possible_classifications",
        classification
    )
}

static PRINT_CLASSIFICATIONS: RwLock<Vec<Classification>> = RwLock::new(Vec::new());

/// Replace the process-wide filter
pub fn set_print_classifications<I, S>(labels: I)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let filter = DebugFilter::new(labels);
    for c in filter.classifications() {
        if !c.is_known() {
            tracing::warn!(
                target: "t3s",
                "Unknown debug classification in filter: {}",
                c
            );
        }
    }
    *PRINT_CLASSIFICATIONS
        .write()
        .unwrap_or_else(PoisonError::into_inner) = filter.classifications;
}

/// Snapshot of the process-wide filter
pub fn print_filter() -> DebugFilter {
    DebugFilter {
        classifications: PRINT_CLASSIFICATIONS
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone(),
    }
}

/// Labels of the process-wide filter
pub fn print_classifications() -> Vec<String> {
    print_filter()
        .classifications()
        .iter()
        .map(|c| c.as_str().to_string())
        .collect()
}

/// Print `text` if `classification` passes the process-wide filter
pub fn debug(classification: &str, text: &str) {
    let classification = Classification::from(classification);
    for (level, line) in print_filter().lines(&classification, text) {
        if level == Level::WARN {
            tracing::warn!(target: "t3s", "{}", line);
        } else {
            tracing::info!(target: "t3s", "{}", line);
        }
    }
}

/// `t3s_debug!("tss", "sent {} bytes", n)`
#[macro_export]
macro_rules! t3s_debug {
    ($classification:expr, $($arg:tt)*) => {
        $crate::debug::debug($classification, &format!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification_labels_round_trip() {
        for label in POSSIBLE_CLASSIFICATIONS {
            let c = Classification::from(*label);
            assert!(c.is_known());
            assert_eq!(c.as_str(), *label);
        }
        assert_eq!(
            Classification::from("bogus"),
            Classification::Other("bogus".to_string())
        );
    }

    #[test]
    fn test_empty_filter_prints_nothing() {
        let filter = DebugFilter::default();
        assert!(filter.lines(&Classification::Tss, "hello").is_empty());
    }

    #[test]
    fn test_filter_matches_exact_classification() {
        let filter = DebugFilter::new(["tss", "files"]);
        assert_eq!(
            filter.lines(&Classification::Tss, "started"),
            vec![(Level::INFO, "T3S: tss     : started".to_string())]
        );
        assert!(filter.lines(&Classification::TssPlus, "verbose").is_empty());
    }

    #[test]
    fn test_all_prints_everything() {
        let filter = DebugFilter::new(["all"]);
        assert!(filter.should_print(&Classification::AdapterPlus));
        assert_eq!(
            filter.lines(&Classification::CommandPlus, "x"),
            vec![(Level::INFO, "T3S: command+: x".to_string())]
        );
    }

    #[test]
    fn test_unknown_classification_always_warns() {
        let filter = DebugFilter::default();
        let lines = filter.lines(&Classification::from("nope"), "text");
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].0, Level::WARN);
        assert!(lines[0].1.contains("unknown debug message classification: nope"));

        let filter = DebugFilter::new(["all"]);
        let lines = filter.lines(&Classification::from("nope"), "text");
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], (Level::INFO, "T3S: nope    : text".to_string()));
        assert_eq!(lines[1].0, Level::WARN);
    }

    #[test]
    fn test_long_classification_is_not_truncated() {
        let filter = DebugFilter::new(["all"]);
        let lines = filter.lines(&Classification::from("very-long-label"), "t");
        assert_eq!(lines[0].1, "T3S: very-long-label: t");
    }
}

//! Report Formatting
//!
//! Line formats for the console channel and the append-only log sink.
//! Pure string builders; the scheduler owns the actual IO.

use crate::domain::Candidate;

/// Timestamp format used across report lines
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Console line for one candidate
pub fn candidate_line(candidate: &Candidate) -> String {
    format!(
        "{} ({}): score {:.2} - risk {}\n{}",
        candidate.name, candidate.symbol, candidate.score, candidate.risk_label, candidate.url
    )
}

/// Log-sink line for one candidate; only written when a timestamp is active
pub fn sink_line(timestamp: &str, candidate: &Candidate) -> String {
    format!(
        "{} - {} ({}): {} risk - {}\n",
        timestamp, candidate.name, candidate.symbol, candidate.risk_label, candidate.url
    )
}

/// Report header, with the timestamp prefix when one is active
pub fn header(chain: &str, timestamp: Option<&str>) -> String {
    match timestamp {
        Some(ts) => format!("[{}] Potential {} Memecoins:", ts, capitalize(chain)),
        None => format!("Potential {} Memecoins:", capitalize(chain)),
    }
}

/// Line reported when a run produced no candidates
pub fn empty_line(chain: &str, timestamp: Option<&str>) -> String {
    let prefix = timestamp.map(|ts| format!("[{}] ", ts)).unwrap_or_default();
    format!(
        "{}No high-potential {} memecoins found in trending list.",
        prefix,
        capitalize(chain)
    )
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

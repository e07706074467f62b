//! Cosmetic cleanup of log messages that originated as formatted console
//! output.
//!
//! Best-effort: ANSI color codes, logger tags, printf placeholders and
//! box-drawing borders are removed; anything else passes through
//! unchanged. Not a terminal emulator.

use regex::Regex;
use std::sync::LazyLock;

static ANSI: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1b\[[0-9;]*[A-Za-z]").expect("valid ANSI pattern"));

const TAGS: [&str; 4] = ["[LOG]", "[INFO]", "[DEBUG]", "%s: %s"];

/// Clean one log message for display. Applying the cleaner twice yields
/// the same result as applying it once.
pub fn clean_message(message: &str) -> String {
    let mut text = strip_stable(message.to_string(), |s| {
        ANSI.replace_all(s, "").into_owned()
    });
    for tag in TAGS {
        text = strip_stable(text, |s| s.replace(tag, ""));
    }

    text.lines()
        .filter_map(clean_line)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Apply a removal until it stops changing the string, so removals that
/// splice a new match together still end at a fixed point.
fn strip_stable(mut text: String, strip: impl Fn(&str) -> String) -> String {
    loop {
        let next = strip(&text);
        if next == text {
            return text;
        }
        text = next;
    }
}

fn clean_line(line: &str) -> Option<String> {
    let mut line = line.trim();
    loop {
        if line.starts_with(['┌', '└', '├']) || is_bar_only(line) {
            return None;
        }
        let stripped = line.trim_matches('│').trim();
        if stripped == line {
            break;
        }
        line = stripped;
    }
    (!line.is_empty()).then(|| line.to_string())
}

fn is_bar_only(line: &str) -> bool {
    line.contains('│') && line.chars().all(|c| c == '│' || c.is_whitespace())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_ansi_escape_sequences() {
        assert_eq!(clean_message("\x1b[32mGET /users 200\x1b[0m"), "GET /users 200");
    }

    #[test]
    fn strips_logger_tags_and_placeholders() {
        assert_eq!(clean_message("[LOG] request accepted"), "request accepted");
        assert_eq!(clean_message("[INFO] %s: %s latency ok"), "latency ok");
        assert_eq!(clean_message("[DEBUG]cache miss"), "cache miss");
    }

    #[test]
    fn drops_box_borders_and_bar_lines() {
        let boxed = "┌──────────────┐\n│ GET /users   │\n│              │\n└──────────────┘";
        assert_eq!(clean_message(boxed), "GET /users");
    }

    #[test]
    fn keeps_interior_bars() {
        assert_eq!(clean_message("│ a │ b │"), "a │ b");
    }

    #[test]
    fn trims_lines_and_drops_empties() {
        assert_eq!(clean_message("  first  \n\n  second"), "first\nsecond");
    }

    #[test]
    fn unlisted_content_passes_through() {
        assert_eq!(clean_message("plain message"), "plain message");
        assert_eq!(clean_message("[WARN] stays"), "[WARN] stays");
    }

    #[test]
    fn cleaning_is_idempotent_on_spliced_tags() {
        // Removing the inner tag must not leave a fresh one behind.
        let once = clean_message("[LO[LOG]G] hello");
        assert_eq!(once, "hello");
        assert_eq!(clean_message(&once), once);
    }

    #[test]
    fn cleaning_is_idempotent_on_boxed_output() {
        let boxed = "\x1b[36m┌───┐\x1b[0m\n│ x │\n└───┘";
        let once = clean_message(boxed);
        assert_eq!(clean_message(&once), once);
    }
}

use regex::Regex;

/// Strips a leading code fence (with optional language tag) and a trailing
/// code fence from model output, leaving the candidate JSON string.
pub fn strip_code_fences(raw: &str) -> String {
    let open = Regex::new(r"^```[A-Za-z0-9_-]*[ \t]*\r?\n?").expect("regex");
    let close = Regex::new(r"\r?\n?```\s*$").expect("regex");
    let trimmed = raw.trim();
    let without_open = open.replace(trimmed, "");
    let without_close = close.replace(&without_open, "");
    without_close.trim().to_string()
}

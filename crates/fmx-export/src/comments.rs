use std::sync::OnceLock;

use regex::Regex;

/// Removes `/* ... */` comments and blank lines from raw step text.
///
/// Block comments match non-greedily across line boundaries; an unterminated
/// opener consumes everything to the end of the input. Surviving lines lose
/// trailing whitespace and are rejoined with `\n`.
pub fn strip_script_comments(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }

    let without_blocks = block_comment_regex().replace_all(raw, "");
    let without_blocks = match without_blocks.find("/*") {
        Some(unterminated) => &without_blocks[..unterminated],
        None => &without_blocks[..],
    };

    let mut cleaned_lines = Vec::new();
    for line in without_blocks.split('\n') {
        let line = strip_line_comment(line).trim_end();
        if !line.is_empty() {
            cleaned_lines.push(line);
        }
    }
    cleaned_lines.join("\n")
}

/// Line comment (`// ...`) removal is intentionally disabled; the line passes
/// through unchanged.
fn strip_line_comment(line: &str) -> &str {
    line
}

fn block_comment_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"(?s)/\*.*?\*/").expect("block comment regex"))
}

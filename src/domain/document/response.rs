//! Cleaning of raw generator output before JSON parsing.
//!
//! Language models wrap JSON in Markdown fences or surround it with prose.
//! These helpers recover the JSON payload without interpreting it.

/// Upper bound on raw generator output accepted for parsing (1 MiB).
pub const MAX_RAW_LENGTH: usize = 1024 * 1024;

/// Extracts the JSON object payload from raw generator output.
///
/// # Steps
/// 1. Trim surrounding whitespace
/// 2. Prefer the body of a Markdown code fence if one is present
/// 3. Keep a top-level array intact so the parser rejects it as a whole
/// 4. Otherwise take the first balanced `{ ... }` object
/// 5. Fall back to the trimmed text and let the JSON parser report the error
pub fn extract_json_payload(raw: &str) -> &str {
    let trimmed = raw.trim();

    if let Some(body) = fenced_body(trimmed) {
        return body;
    }

    if trimmed.starts_with('[') {
        return trimmed;
    }

    if let Some(start) = trimmed.find('{') {
        if let Some(object) = balanced_object(trimmed, start) {
            return object;
        }
    }

    trimmed
}

/// Returns the body of a ``` fence, skipping an optional language tag.
///
/// A fence only counts when it opens before the first `{`, so backticks inside
/// JSON string values are left alone. The body runs to the last closing fence
/// for the same reason.
fn fenced_body(s: &str) -> Option<&str> {
    let open = s.find("```")?;
    if s.find('{').is_some_and(|brace| brace < open) {
        return None;
    }
    let after_ticks = &s[open + 3..];
    // The rest of the opening line is the language tag ("json", "JSON", ...).
    let body_start = after_ticks.find('\n').map(|i| i + 1)?;
    let body = &after_ticks[body_start..];
    let close = body.rfind("```")?;
    Some(body[..close].trim())
}

/// Returns the balanced object starting at byte `start`, honoring strings.
fn balanced_object(s: &str, start: usize) -> Option<&str> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escape_next = false;

    for (offset, c) in s[start..].char_indices() {
        if escape_next {
            escape_next = false;
            continue;
        }

        match c {
            '\\' if in_string => escape_next = true,
            '"' => in_string = !in_string,
            _ if in_string => {}
            '{' => depth += 1,
            '}' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    let end = start + offset + c.len_utf8();
                    return Some(&s[start..end]);
                }
            }
            _ => {}
        }
    }
    None
}

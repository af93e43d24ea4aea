use serde_json::Value;

/// Pulls the JSON value out of a model reply.
///
/// Accepts a bare document, a fenced code block, or an object embedded in
/// surrounding prose.
pub fn extract_json(reply: &str) -> Option<Value> {
    let text = reply.trim().trim_matches('\u{feff}');

    if let Ok(value) = serde_json::from_str::<Value>(text) {
        return Some(value);
    }

    if let Some(block) = fenced_block(text) {
        if let Ok(value) = serde_json::from_str::<Value>(block.trim()) {
            return Some(value);
        }
    }

    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if start < end {
        return serde_json::from_str::<Value>(&text[start..=end]).ok();
    }

    None
}

fn fenced_block(text: &str) -> Option<&str> {
    let open = text.find("```")?;
    let body = &text[open + 3..];
    // skip the info string, e.g. ```json
    let body = match body.find('\n') {
        Some(newline) if !body[..newline].contains('{') => &body[newline + 1..],
        _ => body,
    };
    let close = body.find("```")?;
    Some(&body[..close])
}

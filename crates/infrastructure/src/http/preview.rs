/// Bounded rendering of a response body for the attempt log. JSON is
/// pretty-printed before truncation; anything else is shown as lossy text
/// with a flag for bodies that open like markup, the usual shape of a
/// gateway error page.
pub(super) const PREVIEW_MAX_CHARS: usize = 500;

pub(super) struct BodyPreview {
    pub text: String,
    pub looks_like_markup: bool,
}

pub(super) fn render(body: &[u8]) -> BodyPreview {
    if let Ok(value) = serde_json::from_slice::<serde_json::Value>(body) {
        let pretty =
            serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string());
        return BodyPreview {
            text: truncate(&pretty),
            looks_like_markup: false,
        };
    }

    let text = String::from_utf8_lossy(body);
    BodyPreview {
        looks_like_markup: text.trim_start().starts_with('<'),
        text: truncate(&text),
    }
}

fn truncate(text: &str) -> String {
    let mut out: String = text.chars().take(PREVIEW_MAX_CHARS).collect();
    if out.len() < text.len() {
        out.push_str("...");
    }
    out
}

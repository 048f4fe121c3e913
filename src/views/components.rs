//! Minimal HTML building blocks for server-rendered pages.

/// Escape text for safe interpolation into HTML bodies and attribute values
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonVariant {
    Primary,
    Secondary,
    Outline,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn btn-primary",
            ButtonVariant::Secondary => "btn btn-secondary",
            ButtonVariant::Outline => "btn btn-outline",
        }
    }
}

/// Card container. `body` is trusted markup; callers escape their own text.
pub fn card(body: &str) -> String {
    format!(r#"<section class="card">{}</section>"#, body)
}

pub fn button(label: &str, variant: ButtonVariant) -> String {
    format!(
        r#"<button type="button" class="{}">{}</button>"#,
        variant.class(),
        html_escape(label)
    )
}

/// Label/value pair rendered in monospace
pub fn field(label: &str, value: &str) -> String {
    format!(
        r#"<div><span class="muted">{}</span><p class="mono">{}</p></div>"#,
        html_escape(label),
        html_escape(value)
    )
}

pub fn stat(label: &str, value: usize) -> String {
    card(&format!(
        r#"<h3 class="muted small">{}</h3><p class="stat">{}</p>"#,
        html_escape(label),
        value
    ))
}

use axum::http::StatusCode;

use super::components::html_escape;

pub const APP_TITLE: &str = "App Template";
pub const APP_DESCRIPTION: &str = "A template for building apps on the MadeByKav platform";

const STYLES: &str = r#"
body{margin:0;min-height:100vh;font-family:system-ui,sans-serif;background:#fff;color:#0f172a;-webkit-font-smoothing:antialiased}
main{max-width:1100px;margin:0 auto;padding:2rem}
.stack>*+*{margin-top:2rem}
.card{border:1px solid #e2e8f0;border-radius:.5rem;padding:1.5rem}
.grid-2{display:grid;grid-template-columns:1fr 1fr;gap:1rem;font-size:.875rem}
.grid-3{display:grid;grid-template-columns:repeat(3,1fr);gap:1.5rem}
.muted{color:#64748b}.small{font-size:.875rem}.mono{font-family:ui-monospace,monospace}
.stat{font-size:1.875rem;font-weight:700;margin:.5rem 0 0}
.actions{display:flex;gap:1rem}
.btn{padding:.5rem 1rem;border-radius:.375rem;border:1px solid transparent;cursor:pointer}
.btn-primary{background:#0f172a;color:#fff}.btn-secondary{background:#f1f5f9}.btn-outline{background:#fff;border-color:#e2e8f0}
.items{list-style:none;padding:0}.items li{display:flex;justify-content:space-between;padding:.5rem;border:1px solid #e2e8f0;border-radius:.375rem;margin-top:.5rem}
"#;

/// Full HTML document around `body`
pub fn page(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<meta name="description" content="{description}">
<style>{styles}</style>
</head>
<body>
{body}
</body>
</html>"#,
        title = html_escape(title),
        description = html_escape(APP_DESCRIPTION),
        styles = STYLES,
        body = body,
    )
}

pub fn error_page(status: StatusCode, message: &str) -> String {
    page(
        &format!("Error | {}", APP_TITLE),
        &format!(
            r#"<main><h1>{} Error</h1><p>{}</p><a href="/">&larr; Back to Dashboard</a></main>"#,
            status.as_u16(),
            html_escape(message)
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_has_shell() {
        let html = page(APP_TITLE, "<main>hi</main>");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"<html lang="en">"#));
        assert!(html.contains("<title>App Template</title>"));
        assert!(html.contains("<main>hi</main>"));
    }

    #[test]
    fn error_page_escapes_message() {
        let html = error_page(StatusCode::SERVICE_UNAVAILABLE, "<db down>");
        assert!(html.contains("503 Error"));
        assert!(html.contains("&lt;db down&gt;"));
    }
}

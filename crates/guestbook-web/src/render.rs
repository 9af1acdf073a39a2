//! HTML rendering for the guestbook pages.

use std::fmt::Write;

use guestbook_core::Entry;

use crate::flash::Flash;

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; background: #f5f3fa; color: #2d2640; margin: 0; }
main { max-width: 42rem; margin: 2rem auto; padding: 0 1rem; }
h1 { color: #5b3f9e; }
form, .entry { background: #fff; border-radius: 8px; padding: 1rem 1.25rem; margin-bottom: 1rem;
  box-shadow: 0 1px 3px rgba(45, 38, 64, 0.12); }
label { display: block; font-weight: 600; margin-top: 0.75rem; }
input, textarea { width: 100%; box-sizing: border-box; padding: 0.5rem; margin-top: 0.25rem; }
button { margin-top: 1rem; background: #5b3f9e; color: #fff; border: 0; border-radius: 4px;
  padding: 0.5rem 1.25rem; cursor: pointer; }
.flash { padding: 0.75rem 1rem; border-radius: 6px; margin-bottom: 1rem; }
.flash-success { background: #e3f6e8; color: #1d6b34; }
.flash-errors { background: #fde8e8; color: #8a1f1f; }
.meta { color: #6e6585; font-size: 0.875rem; }
.message { white-space: pre-wrap; }
"#;

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{}</title>\n<style>{}</style>\n</head>\n<body>\n<main>\n{}</main>\n</body>\n</html>\n",
        escape_html(title),
        STYLE,
        body
    )
}

fn render_flash(out: &mut String, flash: &Flash) {
    if let Some(success) = &flash.success {
        let _ = writeln!(
            out,
            "<div class=\"flash flash-success\">{}</div>",
            escape_html(success)
        );
    }
    if !flash.errors.is_empty() {
        out.push_str("<div class=\"flash flash-errors\">\n<ul>\n");
        for error in &flash.errors {
            let _ = writeln!(out, "<li>{}</li>", escape_html(error));
        }
        out.push_str("</ul>\n</div>\n");
    }
}

fn render_form(out: &mut String) {
    out.push_str(
        "<form action=\"/entries\" method=\"post\">\n\
         <h2>Sign the guestbook</h2>\n\
         <label for=\"visitor_name\">Name</label>\n\
         <input id=\"visitor_name\" name=\"visitor_name\" type=\"text\" required>\n\
         <label for=\"email\">Email (optional)</label>\n\
         <input id=\"email\" name=\"email\" type=\"email\">\n\
         <label for=\"message\">Message</label>\n\
         <textarea id=\"message\" name=\"message\" rows=\"4\" required></textarea>\n\
         <button type=\"submit\">Sign</button>\n\
         </form>\n",
    );
}

fn render_entry(out: &mut String, entry: &Entry) {
    out.push_str("<article class=\"entry\">\n");
    let _ = write!(out, "<strong>{}</strong>", escape_html(&entry.visitor_name));
    if let Some(email) = entry.email.as_deref().filter(|e| !e.is_empty()) {
        let _ = write!(out, " <span class=\"meta\">&lt;{}&gt;</span>", escape_html(email));
    }
    let _ = writeln!(
        out,
        "\n<div class=\"meta\"><time datetime=\"{}\">{}</time></div>",
        entry.created_at.to_rfc3339(),
        entry.created_at.format("%B %-d, %Y at %-I:%M %p UTC")
    );
    let _ = writeln!(out, "<p class=\"message\">{}</p>", escape_html(&entry.message));
    out.push_str("</article>\n");
}

/// The main page: flash messages, the submission form, and all entries.
pub fn index_page(entries: &[Entry], flash: &Flash) -> String {
    let mut body = String::new();
    body.push_str("<h1>Guestbook</h1>\n");
    render_flash(&mut body, flash);
    render_form(&mut body);

    let _ = writeln!(body, "<h2>Entries ({})</h2>", entries.len());
    if entries.is_empty() {
        body.push_str("<p class=\"meta\">No entries yet. Be the first to sign!</p>\n");
    }
    for entry in entries {
        render_entry(&mut body, entry);
    }

    layout("Guestbook", &body)
}

/// Generic failure page; never includes error details.
pub fn error_page() -> String {
    layout(
        "Guestbook - Error",
        "<h1>Guestbook</h1>\n<div class=\"flash flash-errors\">An error occurred. Please try again later.</div>\n",
    )
}

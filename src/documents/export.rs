// Download and printable-view renderings of extracted text

pub const EXPORT_FILE_NAME: &str = "extracted_notes.txt";
pub const PRINTABLE_TITLE: &str = "Extracted Notes";

/// Minimal HTML page with the text in a single preformatted block.
pub fn render_printable(text: &str) -> String {
    format!(
        "<!doctype html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n</head>\n<body>\n<pre>{body}</pre>\n</body>\n</html>\n",
        title = PRINTABLE_TITLE,
        body = escape_html(text),
    )
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

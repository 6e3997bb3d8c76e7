/// Escape text for a Markdown table cell: pipes are escaped, line breaks become spaces.
pub(crate) fn escape_cell(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '|' => out.push_str("\\|"),
            '\n' | '\r' => out.push(' '),
            _ => out.push(c),
        }
    }
    out
}

/// Flatten a keyword onto one line so it can follow `# ` in a heading.
pub(crate) fn sanitize_heading(s: &str) -> String {
    s.replace(['\n', '\r'], " ")
}

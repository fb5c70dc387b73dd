use otawatch_core::Manifest;

/// Renders the static HTML index as a pure function of manifest state.
///
/// Regenerated in full on every successful merge; never read back or
/// hand-edited.
pub fn render_index(manifest: &Manifest) -> String {
    let mut page = String::new();
    page.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    page.push_str("<meta charset=\"utf-8\">\n<title>OTA updates</title>\n");
    page.push_str("</head>\n<body>\n<h1>OTA updates</h1>\n");

    if manifest.updates.is_empty() {
        page.push_str("<p>No releases processed yet.</p>\n");
    } else {
        page.push_str(&format!(
            "<p>Current build: <strong>{}</strong> (updated {})</p>\n",
            escape_html(&manifest.current_build),
            escape_html(&manifest.last_updated),
        ));
        page.push_str("<table>\n<tr><th>Build</th><th>Recorded</th><th>Size</th><th>SHA-256</th><th>Changes</th><th></th></tr>\n");
        for entry in &manifest.updates {
            page.push_str(&format!(
                "<tr><td>{build}</td><td>{ts}</td><td>{size}</td><td><code>{sha}</code></td><td>{changes}</td><td><a href=\"{href}\">{name}</a></td></tr>\n",
                build = escape_html(&entry.build),
                ts = escape_html(&entry.timestamp),
                size = entry.size_bytes,
                sha = escape_html(&entry.sha256),
                changes = escape_html(&entry.changes.join("; ")),
                href = escape_html(&entry.relative_url),
                name = escape_html(&entry.filename),
            ));
        }
        page.push_str("</table>\n");
    }

    page.push_str("</body>\n</html>\n");
    page
}

fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

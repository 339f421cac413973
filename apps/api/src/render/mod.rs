//! HTML rendering primitives shared by the public site and the admin panel.
//!
//! Pages are assembled as plain strings from the typed document — the same
//! data the JSON API serves. Markup aesthetics are deliberately minimal;
//! class names exist as hooks for the static script, not as styling.

pub mod icons;

/// Escapes text for interpolation into HTML element bodies and attribute
/// values. Everything coming out of the document goes through this.
pub fn esc(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Makes a JSON string safe to embed inside a `<script>` element.
pub fn script_safe_json(json: &str) -> String {
    json.replace('<', "\\u003c")
}

/// Full-page shell. `body` is trusted markup produced by the render layer.
pub fn page(site_name: &str, title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{title} | {site}</title>\n\
         </head>\n\
         <body>\n\
         {body}\n\
         <script src=\"/js/app.js\" defer></script>\n\
         </body>\n\
         </html>\n",
        title = esc(title),
        site = esc(site_name),
        body = body,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_esc_neutralizes_markup() {
        assert_eq!(
            esc(r#"<img src=x onerror="pwn('&')">"#),
            "&lt;img src=x onerror=&quot;pwn(&#39;&amp;&#39;)&quot;&gt;"
        );
    }

    #[test]
    fn test_esc_passes_plain_text_through() {
        assert_eq!(esc("Project A"), "Project A");
    }

    #[test]
    fn test_script_safe_json_blocks_tag_close() {
        let safe = script_safe_json(r#"{"t":"</script>"}"#);
        assert!(!safe.contains("</script>"));
        assert!(safe.contains("\\u003c/script>"));
    }

    #[test]
    fn test_page_escapes_title_but_not_body() {
        let html = page("Showreel", "A&B", "<main>ok</main>");
        assert!(html.contains("A&amp;B | Showreel"));
        assert!(html.contains("<main>ok</main>"));
        assert!(html.contains("/js/app.js"));
    }
}

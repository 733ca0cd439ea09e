use pulldown_cmark::{CowStr, Event, Options, Parser, Tag, html};

const SAFE_SCHEMES: [&str; 4] = ["https:", "http:", "mailto:", "tel:"];

/// Whether a service-provided link target may be placed in an `href`.
pub(crate) fn is_safe_destination(dest: &str) -> bool {
    let lower = dest.trim().to_ascii_lowercase();
    // Relative links have no scheme; a ':' before any '/', '?' or '#' means one is present.
    let scheme_end = lower.find(|c| matches!(c, ':' | '/' | '?' | '#'));
    match scheme_end {
        Some(i) if lower.as_bytes()[i] == b':' => SAFE_SCHEMES.iter().any(|s| lower.starts_with(s)),
        _ => true,
    }
}

/// Renders service-provided markdown to HTML.
///
/// Raw HTML in the source is dropped and links with unexpected schemes lose their target.
pub(crate) fn render_markdown(source: &str) -> String {
    let events = Parser::new_ext(source, Options::ENABLE_STRIKETHROUGH).filter_map(|event| {
        match event {
            Event::Html(_) | Event::InlineHtml(_) => None,
            Event::Start(Tag::Link { link_type, dest_url, title, id })
                if !is_safe_destination(&dest_url) =>
            {
                Some(Event::Start(Tag::Link { link_type, dest_url: CowStr::Borrowed("#"), title, id }))
            },
            other => Some(other),
        }
    });

    let mut out = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut out, events);
    out.truncate(out.trim_end().len());
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_paragraphs_and_links() {
        let html = render_markdown("Book at [your pharmacy](https://www.nhs.uk/pharmacy).");
        assert_eq!(
            html,
            "<p>Book at <a href=\"https://www.nhs.uk/pharmacy\">your pharmacy</a>.</p>"
        );
    }

    #[test]
    fn renders_lists() {
        let html = render_markdown("You can:\n\n- call 111\n- visit your GP");
        assert!(html.contains("<ul>"));
        assert!(html.contains("<li>call 111</li>"));
    }

    #[test]
    fn drops_raw_html() {
        let html = render_markdown("Hello <script>alert(1)</script> world\n\n<div>block</div>");
        assert!(!html.contains("<script>"));
        assert!(!html.contains("<div>"));
        assert!(html.contains("Hello"));
    }

    #[test]
    fn neutralises_script_links() {
        let html = render_markdown("[click](javascript:alert(1))");
        assert_eq!(html, "<p><a href=\"#\">click</a></p>");
    }

    #[test]
    fn keeps_relative_and_known_scheme_links() {
        assert!(is_safe_destination("/vaccines/rsv"));
        assert!(is_safe_destination("#details"));
        assert!(is_safe_destination("tel:111"));
        assert!(is_safe_destination("MAILTO:help@nhs.net"));
        assert!(!is_safe_destination(" JavaScript:alert(1)"));
        assert!(!is_safe_destination("data:text/html;base64,AAAA"));
    }
}

//! HTML pages for the shared report host.
//!
//! Markdown is converted with pulldown-cmark. Report content comes from the
//! link, so raw HTML is shown as text and links and images keep only their
//! text.

use pulldown_cmark::{html, Event, Options, Parser, Tag, TagEnd};

use crate::domain::share::{SharedReport, Theme};

/// Colours for one theme.
struct Palette {
    bg: &'static str,
    text: &'static str,
    card: &'static str,
    border: &'static str,
    sub: &'static str,
}

const LIGHT: Palette = Palette {
    bg: "#fafafa",
    text: "#0b0c10",
    card: "#ffffff",
    border: "#e6e6e6",
    sub: "#444",
};

const DARK: Palette = Palette {
    bg: "#0e1117",
    text: "#e8e9ec",
    card: "#0e1117",
    border: "#262730",
    sub: "#a6a7ab",
};

fn palette(theme: Theme) -> &'static Palette {
    match theme {
        Theme::Light => &LIGHT,
        Theme::Dark => &DARK,
    }
}

/// Converts Markdown to HTML, escaping embedded HTML and dropping link targets.
pub fn markdown_to_html(markdown: &str) -> String {
    let parser = Parser::new_ext(markdown, Options::ENABLE_STRIKETHROUGH).filter_map(|event| {
        match event {
            Event::Html(raw) | Event::InlineHtml(raw) => Some(Event::Text(raw)),
            Event::Start(Tag::Link { .. } | Tag::Image { .. })
            | Event::End(TagEnd::Link | TagEnd::Image) => None,
            other => Some(other),
        }
    });
    let mut body = String::with_capacity(markdown.len() * 2);
    html::push_html(&mut body, parser);
    body
}

/// Full page for a shared report.
pub fn render_report_page(report: &SharedReport) -> String {
    let body = format!(
        r#"<div class="title center">📜 MirrorGarden — Delad insiktskarta</div>
<div class="divider"></div>
<article class="report">
{report}
</article>
<div class="divider"></div>
<a class="button" href="/">Öppna i upplevelse-läge →</a>"#,
        report = markdown_to_html(&report.markdown())
    );
    wrap_page("MirrorGarden — Delad insiktskarta", report.theme(), &body)
}

/// Page shown when a link does not open a report.
pub fn render_landing_page(theme: Theme) -> String {
    let body = r#"<div class="title center">🌿 MirrorGarden</div>
<p class="subtitle center soft">Ett litet, vackert, psykologiskt minispel för självinsikt.<br/>Mobilvänligt. Inget sparas i molnet.</p>
<div class="divider"></div>
<p class="muted center">Den här länken innehåller ingen läsbar insiktskarta. Starta en egen resa i appen och dela din karta därifrån.</p>"#;
    wrap_page("MirrorGarden", theme, body)
}

fn wrap_page(title: &str, theme: Theme, body: &str) -> String {
    let p = palette(theme);
    format!(
        r#"<!DOCTYPE html>
<html lang="sv" data-theme="{theme}">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <meta name="robots" content="noindex">
    <title>{title}</title>
    <style>
        html, body {{ background: {bg}; color: {text}; font-family: system-ui, sans-serif; }}
        main {{ padding: 1rem 1rem 2rem; max-width: 720px; margin: 0 auto; }}
        .report {{ background: {card}; border: 1px solid {border}; border-radius: 16px; padding: 14px; margin: 10px 0; }}
        .soft {{ opacity: 0.92; }}
        .muted {{ color: {sub}; font-size: 0.95rem; }}
        .center {{ text-align: center; }}
        .title {{ font-size: 1.6rem; font-weight: 800; line-height: 1.2; }}
        .subtitle {{ font-size: 1.1rem; opacity: 0.95; }}
        .divider {{ height: 1px; background: {border}; margin: 14px 0; }}
        .button {{ display: block; text-align: center; border: 1px solid {border}; border-radius: 14px; padding: 0.7rem 1rem; font-weight: 600; color: {text}; text-decoration: none; }}
    </style>
</head>
<body>
<main>
{body}
</main>
</body>
</html>"#,
        theme = theme,
        title = title,
        bg = p.bg,
        text = p.text,
        card = p.card,
        border = p.border,
        sub = p.sub,
        body = body
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_report_markdown() {
        let html = markdown_to_html("## Dina toppvärden\nMod, Tillit");
        assert!(html.contains("<h2>Dina toppvärden</h2>"));
        assert!(html.contains("Mod, Tillit"));
    }

    #[test]
    fn embedded_html_is_escaped() {
        let html = markdown_to_html("Hej <script>alert(1)</script>\n\n<div onclick=x>hi</div>");
        assert!(!html.contains("<script>"));
        assert!(!html.contains("<div onclick"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn links_and_images_keep_only_their_text() {
        let html = markdown_to_html(
            "[klicka](javascript:alert(document.cookie))\n\n![spårare](https://tracker.example/p.gif)\n\n<https://garden.example/>",
        );
        assert!(!html.contains("<a "));
        assert!(!html.contains("<img"));
        assert!(!html.contains("javascript:"));
        assert!(!html.contains("tracker.example"));
        assert!(html.contains("klicka"));
        assert!(html.contains("spårare"));
        assert!(html.contains("https://garden.example/"));
    }

    #[test]
    fn landing_page_uses_requested_palette() {
        assert!(render_landing_page(Theme::Light).contains("#fafafa"));
        assert!(render_landing_page(Theme::Dark).contains("#0e1117"));
        assert!(render_landing_page(Theme::Dark).contains(r#"data-theme="dark""#));
    }
}

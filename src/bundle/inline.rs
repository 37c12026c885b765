//! Inlining passes over the UI document.

use super::read;
use crate::error::BundleError;
use crate::widget::MenuWidget;
use base64::{engine::general_purpose, Engine as _};
use regex::{Captures, Regex};
use std::path::Path;
use std::sync::OnceLock;

/// Marker in the source document replaced by the widget's initial render.
pub const WIDGET_PLACEHOLDER: &str = "<!-- menu-widget -->";

fn link_tag() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"(?i)<link\s[^>]*>"#).expect("valid regex"))
}

fn stylesheet_rel() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"(?i)\brel=["']stylesheet["']"#).expect("valid regex"))
}

fn local_href() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"(?i)\bhref=["']([^"':]+)["']"#).expect("valid regex"))
}

fn external_script() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"(?is)<script([^>]*?)\s+src=["']([^"':]+)["']([^>]*)>\s*</script>"#)
            .expect("valid regex")
    })
}

fn asset_src() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"(?i)\bsrc=["']([^"':]+\.(?:png|jpe?g|gif|svg|webp|ico))["']"#)
            .expect("valid regex")
    })
}

fn css_url() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r#"(?i)url\(\s*["']?([^"'():]+\.(?:png|jpe?g|gif|svg|webp|woff2?|ttf))["']?\s*\)"#,
        )
        .expect("valid regex")
    })
}

/// MIME type for an inlined asset, by file extension.
fn mime_type(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("webp") => "image/webp",
        Some("ico") => "image/x-icon",
        Some("woff") => "font/woff",
        Some("woff2") => "font/woff2",
        Some("ttf") => "font/ttf",
        _ => "application/octet-stream",
    }
}

fn data_uri(path: &Path) -> Result<String, BundleError> {
    let bytes = read(path)?;
    Ok(format!(
        "data:{};base64,{}",
        mime_type(path),
        general_purpose::STANDARD.encode(bytes)
    ))
}

fn read_text(path: &Path) -> Result<String, BundleError> {
    let bytes = read(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Like `Regex::replace_all`, but the replacement may fail.
fn try_replace_all<F>(re: &Regex, text: &str, mut replace: F) -> Result<String, BundleError>
where
    F: FnMut(&Captures) -> Result<String, BundleError>,
{
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for caps in re.captures_iter(text) {
        let whole = caps.get(0).expect("group 0 always matches");
        out.push_str(&text[last..whole.start()]);
        out.push_str(&replace(&caps)?);
        last = whole.end();
    }
    out.push_str(&text[last..]);
    Ok(out)
}

/// Replaces `url(...)` references with data URIs, resolved against `base`.
fn inline_css_urls(css: &str, base: &Path) -> Result<String, BundleError> {
    try_replace_all(css_url(), css, |caps| {
        Ok(format!("url({})", data_uri(&base.join(&caps[1]))?))
    })
}

fn minify(html: &str) -> String {
    html.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
        .replace(">\n<", "><")
}

/// Produces a self-contained version of the document at `input`.
///
/// Relative references are resolved against the document's directory, and
/// against the stylesheet's directory for `url(...)` inside stylesheets. A
/// reference that cannot be read fails the whole bundle.
pub fn bundle_document(input: &Path, development: bool) -> Result<String, BundleError> {
    let base = input.parent().unwrap_or_else(|| Path::new("."));
    let html = read_text(input)?;

    // Rendered first so the card images go through the asset pass below.
    let html = html.replace(WIDGET_PLACEHOLDER, &MenuWidget::default().view().to_html());

    let html = try_replace_all(link_tag(), &html, |caps| {
        let tag = &caps[0];
        let href = match local_href().captures(tag) {
            Some(href) if stylesheet_rel().is_match(tag) => href,
            _ => return Ok(tag.to_string()),
        };
        let path = base.join(&href[1]);
        let css = read_text(&path)?;
        let css_base = path.parent().unwrap_or(base);
        Ok(format!("<style>\n{}\n</style>", inline_css_urls(&css, css_base)?))
    })?;

    let html = try_replace_all(asset_src(), &html, |caps| {
        Ok(format!("src=\"{}\"", data_uri(&base.join(&caps[1]))?))
    })?;

    let html = inline_css_urls(&html, base)?;

    // Scripts go last: their text is inlined verbatim.
    let html = try_replace_all(external_script(), &html, |caps| {
        let src = &caps[2];
        let mut script = read_text(&base.join(src))?;
        if development {
            script.push_str(&format!("\n//# sourceURL={}", src));
        }
        Ok(format!("<script{}{}>\n{}\n</script>", &caps[1], &caps[3], script))
    })?;

    Ok(if development { html } else { minify(&html) })
}

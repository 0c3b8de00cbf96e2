//! MOTD handling.
//!
//! The status API hands back the server's message of the day twice: as
//! pre-rendered HTML (`motd.html`, formatting codes turned into styled spans)
//! and as stripped plain text (`motd.clean`). Both are untrusted input. The
//! HTML variant is run through an allowlist sanitizer before it may reach
//! `inner_html`; the plain variant is escaped and line-broken.

/// Message of the day, as delivered by the status endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct Motd {
    pub html: Option<String>,
    pub clean: Option<String>,
}

impl Motd {
    /// Markup safe to inject into the MOTD block, or `None` when there is
    /// nothing to show (the block is hidden). HTML wins over plain text.
    pub fn render(&self) -> Option<String> {
        if let Some(html) = &self.html {
            return Some(sanitize_html(html));
        }
        self.clean.as_deref().map(clean_to_markup)
    }
}

/// Escapes plain MOTD text and turns newlines into `<br>`.
pub fn clean_to_markup(text: &str) -> String {
    escape_html(text).replace('\n', "<br>")
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
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

// Tags the API emits for formatting codes. Anything else is dropped.
const ALLOWED_TAGS: [&str; 6] = ["span", "br", "b", "i", "strong", "em"];

// Containers whose text content must not leak through when the tag is
// dropped.
const DROP_WITH_CONTENT: [&str; 2] = ["script", "style"];

/// Allowlist sanitizer for server-supplied MOTD markup.
///
/// Keeps the formatting vocabulary the status API actually produces
/// (`span`/`br`/bold/italic with inline color styling) and drops every other
/// tag. Dropped `script`/`style` elements lose their content too; any other
/// dropped tag keeps its inner text. A stray `<` with no closing `>` is
/// escaped rather than parsed.
pub fn sanitize_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(lt) = rest.find('<') {
        out.push_str(&escape_html(&rest[..lt]));
        rest = &rest[lt..];

        let Some(gt) = rest.find('>') else {
            out.push_str(&escape_html(rest));
            return out;
        };

        let tag_body = &rest[1..gt];
        rest = &rest[gt + 1..];

        let closing = tag_body.starts_with('/');
        let tag_body = tag_body.trim_start_matches('/').trim_end_matches('/');
        let name = tag_name(tag_body);

        if DROP_WITH_CONTENT.contains(&name.as_str()) && !closing {
            // Skip everything up to and including the matching close tag.
            let close = format!("</{name}");
            if let Some(pos) = rest.to_ascii_lowercase().find(&close) {
                let after = &rest[pos..];
                match after.find('>') {
                    Some(end) => rest = &after[end + 1..],
                    None => return out,
                }
            } else {
                return out;
            }
            continue;
        }

        if !ALLOWED_TAGS.contains(&name.as_str()) {
            continue; // drop the tag, keep surrounding text
        }

        if closing {
            out.push_str(&format!("</{name}>"));
        } else if name == "br" {
            out.push_str("<br>");
        } else {
            match filtered_style(tag_body) {
                Some(style) => out.push_str(&format!("<{name} style=\"{style}\">")),
                None => out.push_str(&format!("<{name}>")),
            }
        }
    }

    out.push_str(&escape_html(rest));
    out
}

fn tag_name(tag_body: &str) -> String {
    tag_body
        .split_whitespace()
        .next()
        .unwrap_or("")
        .to_ascii_lowercase()
}

const ALLOWED_STYLE_PROPS: [&str; 4] = ["color", "font-weight", "font-style", "text-decoration"];

/// Extracts a `style="…"` attribute and keeps only harmless declarations.
fn filtered_style(tag_body: &str) -> Option<String> {
    let lower = tag_body.to_ascii_lowercase();
    let at = lower.find("style=")?;
    let after = &tag_body[at + "style=".len()..];
    let quote = after.chars().next()?;
    if quote != '"' && quote != '\'' {
        return None;
    }
    let inner = &after[1..after[1..].find(quote)? + 1];

    let kept: Vec<String> = inner
        .split(';')
        .filter_map(|decl| {
            let (prop, value) = decl.split_once(':')?;
            let prop = prop.trim().to_ascii_lowercase();
            let value = value.trim();
            if ALLOWED_STYLE_PROPS.contains(&prop.as_str()) && is_safe_style_value(value) {
                Some(format!("{prop}: {value}"))
            } else {
                None
            }
        })
        .collect();

    if kept.is_empty() {
        None
    } else {
        Some(kept.join("; "))
    }
}

fn is_safe_style_value(value: &str) -> bool {
    !value.is_empty()
        && value.chars().all(|c| {
            c.is_ascii_alphanumeric() || matches!(c, '#' | '(' | ')' | ',' | '.' | '%' | '-' | ' ')
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn html_wins_over_clean() {
        let motd = Motd {
            html: Some("<span style=\"color: #55FFFF\">Frostvale</span>".into()),
            clean: Some("Frostvale".into()),
        };
        assert_eq!(
            motd.render().unwrap(),
            "<span style=\"color: #55FFFF\">Frostvale</span>"
        );
    }

    #[test]
    fn clean_text_is_escaped_and_line_broken() {
        let motd = Motd {
            html: None,
            clean: Some("Season 3 <soon>\nJoin now".into()),
        };
        assert_eq!(
            motd.render().unwrap(),
            "Season 3 &lt;soon&gt;<br>Join now"
        );
    }

    #[test]
    fn script_tags_lose_their_content() {
        let out = sanitize_html("hi<script>alert('x')</script>there");
        assert_eq!(out, "hithere");
    }

    #[test]
    fn unknown_tags_are_dropped_but_text_survives() {
        let out = sanitize_html("<img src=x onerror=alert(1)><b>bold</b>");
        assert_eq!(out, "<b>bold</b>");
    }

    #[test]
    fn event_handler_attributes_never_survive() {
        let out = sanitize_html("<span onclick=\"evil()\" style=\"color: red\">x</span>");
        assert_eq!(out, "<span style=\"color: red\">x</span>");
    }

    #[test]
    fn dangerous_style_declarations_are_filtered() {
        let out = sanitize_html(
            "<span style=\"color: #fff; background: url(javascript:x)\">x</span>",
        );
        assert_eq!(out, "<span style=\"color: #fff\">x</span>");
    }

    #[test]
    fn br_and_stray_angle_brackets() {
        assert_eq!(sanitize_html("a<br/>b"), "a<br>b");
        assert_eq!(sanitize_html("1 < 2"), "1 &lt; 2");
    }
}

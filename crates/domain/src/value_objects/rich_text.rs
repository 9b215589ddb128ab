//! Rich-text transforms for tooltip descriptions
//!
//! Descriptions arrive as host rich text (HTML with inline directives). The
//! pieces here are pure string transforms; anything that needs to resolve a
//! document lives in the player's tooltip service.
//!
//! # Directive formats
//!
//! - `@Embed[<uuid> <mode-flags...>]` - inline another document's description
//! - `@UUID[<uuid>]{<label>}` - normalized link marker, rewritten into a
//!   clickable span by [`rewrite_uuid_links`]
//!
//! # Example
//!
//! ```
//! use pde_domain::value_objects::{parse_rendered_links, rewrite_uuid_links};
//!
//! let html = rewrite_uuid_links("See @UUID[Compendium.x.Item.abc]{Dagger}.");
//! let links = parse_rendered_links(&html);
//!
//! assert_eq!(links.len(), 1);
//! assert_eq!(links[0].label, "Dagger");
//! ```

use std::ops::Range;
use std::sync::LazyLock;

use regex_lite::{Captures, Regex};

use super::link_reference::{LinkKind, LinkReference};
use crate::DocumentUuid;

static EMBED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@Embed\[(.*?)\]").expect("valid regex"));
static UUID_MARKER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@UUID\[([^\]]*)\]\{([^}]*)\}").expect("valid regex"));
static STYLE_ATTR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"style="[^"]*""#).expect("valid regex"));
static DATA_UUID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"data-uuid="([^"]*)""#).expect("valid regex"));
static RENDERED_LINK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<span class="(item-tooltip|journal-tooltip) hyperlink-style" data-uuid="([^"]*)">"#)
        .expect("valid regex")
});

/// An `@Embed[...]` directive found in rich text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedDirective {
    /// The directive exactly as written
    pub raw: String,
    /// Byte range of the directive in the scanned text
    pub span: Range<usize>,
    pub uuid: DocumentUuid,
    /// Embed mode tokens following the identifier (e.g. `inline`, `caption=false`)
    pub flags: Vec<String>,
}

/// Scan for embed directives.
///
/// Directives with an empty identifier are skipped, which leaves them
/// verbatim in the text.
pub fn find_embed_directives(text: &str) -> Vec<EmbedDirective> {
    EMBED_RE
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let mut tokens = caps.get(1)?.as_str().split_whitespace();
            let uuid = DocumentUuid::parse(tokens.next()?).ok()?;
            Some(EmbedDirective {
                raw: whole.as_str().to_string(),
                span: whole.range(),
                uuid,
                flags: tokens.map(str::to_string).collect(),
            })
        })
        .collect()
}

/// Build a normalized link marker.
pub fn uuid_marker(uuid: &str, label: &str) -> String {
    format!("@UUID[{uuid}]{{{label}}}")
}

/// Rewrite every `@UUID[id]{label}` marker into its rendered span.
pub fn rewrite_uuid_links(text: &str) -> String {
    UUID_MARKER_RE
        .replace_all(text, |caps: &Captures<'_>| {
            let raw_uuid = caps.get(1).map_or("", |m| m.as_str());
            let label = caps.get(2).map_or("", |m| m.as_str());
            render_link(&LinkReference::from_raw(raw_uuid, label))
        })
        .into_owned()
}

/// Render a single link reference as markup.
pub fn render_link(link: &LinkReference) -> String {
    match (link.kind.css_class(), &link.uuid) {
        (Some(class), Some(uuid)) => format!(
            r#"<span class="{class} hyperlink-style" data-uuid="{}">{}</span>"#,
            escape_attr(uuid.as_str()),
            link.label
        ),
        _ => format!("<span><b>{}</b></span>", link.label),
    }
}

/// Recover clickable links from rendered markup.
///
/// A label may carry its own `<span>` markup; the label runs to the
/// `</span>` that balances the link's opening tag.
pub fn parse_rendered_links(html: &str) -> Vec<LinkReference> {
    RENDERED_LINK_RE
        .captures_iter(html)
        .filter_map(|caps| {
            let kind = LinkKind::from_css_class(caps.get(1)?.as_str())?;
            let uuid = DocumentUuid::parse(unescape_attr(caps.get(2)?.as_str())).ok()?;
            let label = span_body(&html[caps.get(0)?.end()..])?;
            Some(LinkReference {
                kind,
                uuid: Some(uuid),
                label: label.to_string(),
            })
        })
        .collect()
}

/// Text up to the `</span>` closing an already-opened span.
fn span_body(html: &str) -> Option<&str> {
    const OPEN: &str = "<span";
    const CLOSE: &str = "</span>";

    let mut depth = 0usize;
    let mut pos = 0;
    loop {
        let rest = &html[pos..];
        let close = rest.find(CLOSE)?;
        match rest.find(OPEN) {
            Some(open) if open < close => {
                depth += 1;
                pos += open + OPEN.len();
            }
            _ if depth == 0 => return Some(&html[..pos + close]),
            _ => {
                depth -= 1;
                pos += close + CLOSE.len();
            }
        }
    }
}

/// Drop every inline `style="..."` attribute.
pub fn clear_styles(html: &str) -> String {
    STYLE_ATTR_RE.replace_all(html, "").into_owned()
}

/// First `data-uuid` attribute value in a fragment, if any.
pub fn extract_data_uuid(html: &str) -> Option<String> {
    DATA_UUID_RE
        .captures(html)
        .and_then(|caps| caps.get(1))
        .map(|m| unescape_attr(m.as_str()))
        .filter(|uuid| !uuid.is_empty())
}

pub fn unescape_ampersands(text: &str) -> String {
    text.replace("&amp;", "&")
}

/// Wrap an enhanced description; an empty body still yields the container.
pub fn wrap_description(body: Option<&str>) -> String {
    match body {
        Some(body) if !body.is_empty() => format!("<div class='description'> {body} </div>"),
        _ => "<div class='description'></div>".to_string(),
    }
}

/// Tooltip header: image plus a disabled name field.
pub fn render_header(img: &str, name: &str) -> String {
    let img = escape_attr(img);
    let name = escape_attr(name);
    format!(
        "\n    <img class=\"image\" src=\"{img}\"/>\n    <input disabled value=\"{name}\" data-tooltip=\"{name}\"/>\n  "
    )
}

pub fn escape_attr(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn unescape_attr(value: &str) -> String {
    value
        .replace("&quot;", "\"")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_embed_directives_with_flags() {
        let text = "<p>Intro</p>@Embed[Compendium.x.JournalEntryPage.y inline caption=false] tail";
        let directives = find_embed_directives(text);

        assert_eq!(directives.len(), 1);
        assert_eq!(directives[0].uuid.as_str(), "Compendium.x.JournalEntryPage.y");
        assert_eq!(directives[0].flags, vec!["inline", "caption=false"]);
        assert_eq!(
            directives[0].raw,
            "@Embed[Compendium.x.JournalEntryPage.y inline caption=false]"
        );
    }

    #[test]
    fn embed_spans_point_at_each_occurrence() {
        let text = "@Embed[Item.a] and @Embed[Item.a]";
        let directives = find_embed_directives(text);

        assert_eq!(directives.len(), 2);
        assert_eq!(directives[0].span, 0..14);
        assert_eq!(directives[1].span, 19..33);
        assert_eq!(&text[directives[1].span.clone()], "@Embed[Item.a]");
    }

    #[test]
    fn empty_embed_identifier_is_skipped() {
        assert!(find_embed_directives("@Embed[] and @Embed[   ]").is_empty());
    }

    #[test]
    fn rewrites_each_link_kind() {
        let text = "@UUID[Actor.a.Item.i]{Sword} @UUID[JournalEntry.j.JournalEntryPage.p]{Rules} @UUID[Actor.a]{Bob}";
        let html = rewrite_uuid_links(text);

        assert!(html.contains(
            r#"<span class="item-tooltip hyperlink-style" data-uuid="Actor.a.Item.i">Sword</span>"#
        ));
        assert!(html.contains(
            r#"<span class="journal-tooltip hyperlink-style" data-uuid="JournalEntry.j.JournalEntryPage.p">Rules</span>"#
        ));
        assert!(html.contains("<span><b>Bob</b></span>"));
        assert!(!html.contains("@UUID"));
    }

    #[test]
    fn rewritten_links_parse_back_to_id_and_label() {
        let samples = [
            ("Compendium.pf2e.spells.Item.abc", "Fireball"),
            ("JournalEntry.j.JournalEntryPage.p", "Conditions <i>(core)</i>"),
            ("Item.x", "Rope & Hook"),
        ];
        for (id, label) in samples {
            let html = rewrite_uuid_links(&format!("before {} after", uuid_marker(id, label)));
            let links = parse_rendered_links(&html);
            assert_eq!(links.len(), 1, "{html}");
            assert_eq!(links[0].uuid.as_ref().unwrap().as_str(), id);
            assert_eq!(links[0].label, label);
        }
    }

    #[test]
    fn labels_with_nested_spans_parse_back_whole() {
        let label = r#"<span class="action-glyph">1</span> Strike"#;
        let html = rewrite_uuid_links(&format!(
            "{} then {}",
            uuid_marker("Item.strike", label),
            uuid_marker("Item.rope", "Rope")
        ));
        let links = parse_rendered_links(&html);

        assert_eq!(links.len(), 2);
        assert_eq!(links[0].label, label);
        assert_eq!(links[1].label, "Rope");
    }

    #[test]
    fn unterminated_link_is_skipped() {
        let html = r#"<span class="item-tooltip hyperlink-style" data-uuid="Item.x">Rope"#;
        assert!(parse_rendered_links(html).is_empty());
    }

    #[test]
    fn plain_labels_are_not_parsed_as_links() {
        let html = rewrite_uuid_links("@UUID[Scene.s]{Tavern}");
        assert!(parse_rendered_links(&html).is_empty());
    }

    #[test]
    fn clear_styles_strips_inline_styles() {
        let html = r#"<p style="color: red">Hot</p><span style="">x</span>"#;
        assert_eq!(clear_styles(html), "<p >Hot</p><span >x</span>");
    }

    #[test]
    fn extract_data_uuid_finds_nested_attribute() {
        let fragment = r#"<a class="content-link"><span data-uuid="Compendium.x.Item.y">Ref</span></a>"#;
        assert_eq!(extract_data_uuid(fragment).as_deref(), Some("Compendium.x.Item.y"));
        assert_eq!(extract_data_uuid("<a>no ref</a>"), None);
        assert_eq!(extract_data_uuid(r#"<a data-uuid="">x</a>"#), None);
    }

    #[test]
    fn wrap_description_always_emits_container() {
        assert_eq!(wrap_description(None), "<div class='description'></div>");
        assert_eq!(wrap_description(Some("")), "<div class='description'></div>");
        assert_eq!(
            wrap_description(Some("<p>x</p>")),
            "<div class='description'> <p>x</p> </div>"
        );
    }

    #[test]
    fn header_escapes_attribute_values() {
        let header = render_header("a.png", r#"The "Best" Sword"#);
        assert!(header.contains(r#"value="The &quot;Best&quot; Sword""#));
        assert!(header.contains(r#"src="a.png""#));
    }
}

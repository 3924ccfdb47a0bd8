extern crate regex;

use regex::{Captures, Regex};

/// Converts the site's description HTML into plain markdown. Code blocks are
/// fenced with `[code]`/`[/code]` markers, inline code becomes backticks, and
/// entities decode to their real Unicode characters.
///
/// The rules cover the constrained markup the description endpoint actually
/// emits, not arbitrary HTML.
pub struct TextConverter {
    line_break: Regex,
    pre_open: Regex,
    pre_close: Regex,
    code_mark: Regex,
    strong: Regex,
    emphasis: Regex,
    li_open: Regex,
    li_close: Regex,
    block: Regex,
    tag: Regex,
    numeric_entity: Regex,
    blank_lines: Regex,
}
impl TextConverter {
    pub fn new() -> Self {
        TextConverter {
            line_break: Regex::new(r"(?i)<br\s*/?>").unwrap(),
            pre_open: Regex::new(r"(?i)<pre\b[^>]*>").unwrap(),
            pre_close: Regex::new(r"(?i)</pre>").unwrap(),
            code_mark: Regex::new(r"(?i)</?code\b[^>]*>").unwrap(),
            strong: Regex::new(r"(?i)</?(strong|b)>").unwrap(),
            emphasis: Regex::new(r"(?i)</?(em|i)>").unwrap(),
            li_open: Regex::new(r"(?i)<li\b[^>]*>").unwrap(),
            li_close: Regex::new(r"(?i)</li>").unwrap(),
            block: Regex::new(r"(?i)</?(p|ul|ol|div|blockquote)\b[^>]*>").unwrap(),
            tag: Regex::new(r"<[^>]+>").unwrap(),
            numeric_entity: Regex::new(r"&#(x?)([0-9a-fA-F]+);").unwrap(),
            blank_lines: Regex::new(r"\n{3,}").unwrap(),
        }
    }

    pub fn convert(&self, html: &str) -> String {
        let text = self.line_break.replace_all(html, "\n");
        let text = self.pre_open.replace_all(&text, "\n[code]\n");
        let text = self.pre_close.replace_all(&text, "\n[/code]\n");
        let text = self.code_mark.replace_all(&text, "`");
        let text = self.strong.replace_all(&text, "**");
        let text = self.emphasis.replace_all(&text, "*");
        let text = self.li_open.replace_all(&text, "* ");
        let text = self.li_close.replace_all(&text, "\n");
        let text = self.block.replace_all(&text, "\n\n");
        let text = self.tag.replace_all(&text, "");
        let text = self.decode_entities(&text);
        let text = self.blank_lines.replace_all(&text, "\n\n");
        format!("{}\n", text.trim())
    }

    fn decode_entities(&self, text: &str) -> String {
        let text = self
            .numeric_entity
            .replace_all(text, |caps: &Captures<'_>| {
                let radix = if caps[1].is_empty() { 10 } else { 16 };
                match u32::from_str_radix(&caps[2], radix)
                    .ok()
                    .and_then(std::char::from_u32)
                {
                    Some(c) => c.to_string(),
                    None => caps[0].to_owned(),
                }
            });
        NAMED_ENTITIES
            .iter()
            .fold(text.into_owned(), |acc, &(name, value)| {
                acc.replace(name, value)
            })
    }
}

// `&amp;` must decode last so "&amp;lt;" comes out as a literal "&lt;".
const NAMED_ENTITIES: &[(&str, &str)] = &[
    ("&nbsp;", "\u{a0}"),
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&quot;", "\""),
    ("&apos;", "'"),
    ("&hellip;", "…"),
    ("&ldquo;", "“"),
    ("&rdquo;", "”"),
    ("&lsquo;", "‘"),
    ("&rsquo;", "’"),
    ("&ndash;", "–"),
    ("&mdash;", "—"),
    ("&le;", "≤"),
    ("&ge;", "≥"),
    ("&ne;", "≠"),
    ("&larr;", "←"),
    ("&rarr;", "→"),
    ("&times;", "×"),
    ("&minus;", "−"),
    ("&plusmn;", "±"),
    ("&middot;", "·"),
    ("&amp;", "&"),
];

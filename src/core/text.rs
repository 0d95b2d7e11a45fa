// src/core/text.rs
// Rendered-text walker for a single element, roughly what a browser would
// report as the element's visible text.
//
// - Skips non-rendered subtrees (<script>, <style>, ...).
// - Collapses ASCII whitespace runs to one ' ', drops it at line edges.
// - <br> is a hard '\n'; block elements ask for 1 line break, <p> for 2.
//   Adjacent break requests merge to the largest; leading/trailing ones vanish.
// - Table cells after the first in a row are separated by '\t'.
// - `text-capitalize` / `text-uppercase` / `text-lowercase` class tokens
//   apply their `text-transform` to the subtree, nearest ancestor wins.

use scraper::{ElementRef, Node};

const SKIPPED: &[&str] = &["head", "script", "style", "template", "noscript", "title"];

const BLOCKS: &[&str] = &[
    "address", "article", "aside", "blockquote", "dd", "div", "dl", "dt", "fieldset",
    "figcaption", "figure", "footer", "form", "h1", "h2", "h3", "h4", "h5", "h6", "header",
    "hr", "li", "main", "nav", "ol", "section", "table", "tr", "ul",
];

const TRANSFORMS: &[(&str, Transform)] = &[
    ("text-capitalize", Transform::Capitalize),
    ("text-uppercase", Transform::Uppercase),
    ("text-lowercase", Transform::Lowercase),
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum Transform {
    #[default]
    None,
    Capitalize,
    Uppercase,
    Lowercase,
}

enum Piece<'a> {
    Text(&'a str, Transform),
    Newline,
    Tab,
    Break(u8),
}

/// Full rendered text of `el`, including all descendants.
pub fn rendered_text(el: ElementRef<'_>) -> String {
    let mut pieces = Vec::new();
    walk(el, Transform::None, &mut pieces);
    assemble(&pieces)
}

fn required_breaks(tag: &str) -> u8 {
    if tag == "p" { 2 }
    else if BLOCKS.contains(&tag) { 1 }
    else { 0 }
}

fn transform_of(el: ElementRef<'_>, inherited: Transform) -> Transform {
    el.value()
        .classes()
        .find_map(|c| TRANSFORMS.iter().find(|(name, _)| *name == c).map(|(_, t)| *t))
        .unwrap_or(inherited)
}

fn walk<'a>(el: ElementRef<'a>, inherited: Transform, out: &mut Vec<Piece<'a>>) {
    let tag = el.value().name();
    if SKIPPED.contains(&tag) { return; }
    if tag == "br" {
        out.push(Piece::Newline);
        return;
    }

    if (tag == "td" || tag == "th") && el.prev_siblings().any(|n| n.value().is_element()) {
        out.push(Piece::Tab);
    }

    let breaks = required_breaks(tag);
    if breaks > 0 { out.push(Piece::Break(breaks)); }

    let transform = transform_of(el, inherited);
    for child in el.children() {
        match child.value() {
            Node::Text(t) => out.push(Piece::Text(&**t, transform)),
            Node::Element(_) => {
                if let Some(child_el) = ElementRef::wrap(child) {
                    walk(child_el, transform, out);
                }
            }
            _ => {}
        }
    }

    if breaks > 0 { out.push(Piece::Break(breaks)); }
}

#[inline]
fn is_collapsible(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n' | '\r' | '\x0c')
}

fn assemble(pieces: &[Piece<'_>]) -> String {
    let mut out = String::new();
    let mut pending_breaks = 0u8;
    let mut pending_space = false;

    for piece in pieces {
        match piece {
            Piece::Break(n) => {
                pending_breaks = pending_breaks.max(*n);
                pending_space = false;
            }
            Piece::Newline => {
                flush_breaks(&mut out, &mut pending_breaks);
                out.push('\n');
                pending_space = false;
            }
            Piece::Tab => {
                flush_breaks(&mut out, &mut pending_breaks);
                out.push('\t');
                pending_space = false;
            }
            Piece::Text(t, transform) => {
                for ch in t.chars() {
                    if is_collapsible(ch) {
                        pending_space = true;
                        continue;
                    }
                    if flush_breaks(&mut out, &mut pending_breaks) {
                        pending_space = false;
                    }
                    if pending_space && !at_line_start(&out) {
                        out.push(' ');
                    }
                    pending_space = false;
                    push_transformed(&mut out, ch, *transform);
                }
            }
        }
    }
    out
}

/// Emit queued line breaks unless nothing has been written yet.
/// Returns true if any were written.
fn flush_breaks(out: &mut String, pending: &mut u8) -> bool {
    let n = std::mem::take(pending);
    if n == 0 || out.is_empty() { return false; }
    for _ in 0..n { out.push('\n'); }
    true
}

/// Capitalize looks at what was already written, so a word split across
/// inline elements (`<b>free</b>hold`) is only capitalized once.
fn push_transformed(out: &mut String, ch: char, transform: Transform) {
    match transform {
        Transform::None => out.push(ch),
        Transform::Uppercase => out.extend(ch.to_uppercase()),
        Transform::Lowercase => out.extend(ch.to_lowercase()),
        Transform::Capitalize => {
            if starts_word(out) { out.extend(ch.to_uppercase()) } else { out.push(ch) }
        }
    }
}

fn starts_word(out: &str) -> bool {
    match out.chars().last() {
        None => true,
        Some(prev) => !(prev.is_alphanumeric() || prev == '\'' || prev == '\u{2019}'),
    }
}

fn at_line_start(out: &str) -> bool {
    matches!(out.chars().last(), None | Some('\n') | Some('\t'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::{Html, Selector};

    fn render(html: &str) -> String {
        let doc = Html::parse_fragment(html);
        let sel = Selector::parse("#root").unwrap();
        rendered_text(doc.select(&sel).next().unwrap())
    }

    #[test]
    fn collapses_whitespace_and_trims_edges() {
        assert_eq!(render("<div id=root>\n   Hello \n   <b>big</b>   world  </div>"), "Hello big world");
    }

    #[test]
    fn br_is_a_hard_newline() {
        assert_eq!(render("<div id=root>a<br>b<br><br>c</div>"), "a\nb\n\nc");
    }

    #[test]
    fn paragraphs_ask_for_blank_line() {
        assert_eq!(render("<div id=root><p>one</p><p>two</p></div>"), "one\n\ntwo");
    }

    #[test]
    fn nested_blocks_merge_breaks() {
        let html = "<div id=root>\n  <div>a</div>\n  <div><div>b</div></div>\n</div>";
        assert_eq!(render(html), "a\nb");
    }

    #[test]
    fn empty_paragraph_still_separates() {
        assert_eq!(render("<div id=root>x<br>y<br><p></p><a>z</a></div>"), "x\ny\n\n\nz");
    }

    #[test]
    fn skips_scripts_and_styles() {
        assert_eq!(render("<div id=root>a<script>var x = 1;</script><style>p{}</style>b</div>"), "ab");
    }

    #[test]
    fn entities_decoded_and_nbsp_kept() {
        assert_eq!(render("<div id=root>A &amp; B&nbsp;C</div>"), "A & B\u{a0}C");
    }

    #[test]
    fn capitalize_class_uppercases_word_starts() {
        let html = "<div id=root class=\"text-capitalize\">freehold - license renewal<br>\
                    811 okerson road<br>freehold, NJ 07728</div>";
        assert_eq!(render(html), "Freehold - License Renewal\n811 Okerson Road\nFreehold, NJ 07728");
    }

    #[test]
    fn capitalize_is_inherited_and_spans_inline_elements() {
        let html = "<div id=root class=\"text-capitalize col-md-4\"><span><b>free</b>hold</span> o'neill 3rd ave</div>";
        assert_eq!(render(html), "Freehold O'neill 3rd Ave");
    }

    #[test]
    fn nearest_transform_class_wins() {
        let html = "<div id=root class=text-capitalize>main st <span class=text-uppercase>nj</span> \
                    <span class=text-lowercase>ZIP</span></div>";
        assert_eq!(render(html), "Main St NJ zip");
    }

    #[test]
    fn no_transform_class_keeps_case() {
        assert_eq!(render("<div id=root>freehold road</div>"), "freehold road");
    }

    #[test]
    fn table_cells_tab_separated() {
        let html = "<div id=root><table><tr><td>a</td><td>b</td></tr><tr><td>c</td></tr></table></div>";
        assert_eq!(render(html), "a\tb\nc");
    }
}

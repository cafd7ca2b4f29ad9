// SPDX-License-Identifier: PMPL-1.0-or-later
//! Page scanning: yields the resolved text and background color of every
//! element in a rendered document.
//!
//! `StaticPageScanner` works on parsed static HTML. Colors come from inline
//! `style` attributes; an element without its own declaration takes the
//! nearest ancestor's, and the page falls back to black text on a white
//! canvas. CSS keywords that defer to an ancestor (`inherit`, `transparent`,
//! zero-alpha backgrounds) are resolved here. Any other value is passed
//! through untouched, so malformed or unsupported colors reach the evaluator
//! and are reported there.

use crate::contrast::color::is_zero_alpha;
use scraper::{ElementRef, Html, Selector};

pub const DEFAULT_FOREGROUND: &str = "#000000";
pub const DEFAULT_BACKGROUND: &str = "#ffffff";

/// `color` values that take the parent's text color
const DEFERRING_FOREGROUND: &[&str] = &["inherit", "currentcolor", "unset"];

/// Background values that paint nothing of their own
const SEE_THROUGH_BACKGROUND: &[&str] = &["inherit", "transparent", "initial", "unset"];

/// Colors resolved for one element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementColors {
    /// Descriptor like `p#intro.lead`
    pub element: String,
    pub foreground: String,
    pub background: String,
}

/// Source of per-element color pairs.
///
/// The sequence is finite and produced lazily from the current state of the
/// document; it is not restartable across document changes.
pub trait PageScanner {
    fn elements(&self) -> Box<dyn Iterator<Item = ElementColors> + '_>;
}

/// Scanner over a parsed static HTML document
pub struct StaticPageScanner<'a> {
    document: &'a Html,
    selector: Selector,
}

impl<'a> StaticPageScanner<'a> {
    pub fn new(document: &'a Html) -> Self {
        Self {
            document,
            selector: Selector::parse("body, body *").expect("valid selector"),
        }
    }
}

impl PageScanner for StaticPageScanner<'_> {
    fn elements(&self) -> Box<dyn Iterator<Item = ElementColors> + '_> {
        Box::new(self.document.select(&self.selector).map(resolve_colors))
    }
}

fn resolve_colors(element: ElementRef<'_>) -> ElementColors {
    ElementColors {
        element: describe_element(element),
        foreground: foreground_of(element).unwrap_or_else(|| DEFAULT_FOREGROUND.to_string()),
        background: background_of(element).unwrap_or_else(|| DEFAULT_BACKGROUND.to_string()),
    }
}

/// The element itself, then its element ancestors up to the root
fn lineage<'a>(element: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> {
    std::iter::once(element).chain(element.ancestors().filter_map(ElementRef::wrap))
}

fn inline_declarations(element: ElementRef<'_>) -> Vec<(String, String)> {
    element
        .value()
        .attr("style")
        .map(parse_inline_style)
        .unwrap_or_default()
}

/// Text color in effect on `element`, if any element in its lineage sets one
fn foreground_of(element: ElementRef<'_>) -> Option<String> {
    lineage(element).find_map(|el| {
        let declarations = inline_declarations(el);
        declaration(&declarations, "color")
            .filter(|v| !is_keyword(v, DEFERRING_FOREGROUND))
            .map(String::from)
    })
}

/// First opaque background in the lineage. See-through values let the
/// ancestor's background show, and `currentColor` takes the text color of
/// the element that declares it.
fn background_of(element: ElementRef<'_>) -> Option<String> {
    lineage(element).find_map(|el| {
        let declarations = inline_declarations(el);
        let value = declaration(&declarations, "background-color")
            .or_else(|| declaration(&declarations, "background").filter(|v| is_color_like(v)))?;

        if is_keyword(value, SEE_THROUGH_BACKGROUND) || is_zero_alpha(value) {
            None
        } else if is_keyword(value, &["currentcolor"]) {
            Some(foreground_of(el).unwrap_or_else(|| DEFAULT_FOREGROUND.to_string()))
        } else {
            Some(value.to_string())
        }
    })
}

fn is_keyword(value: &str, keywords: &[&str]) -> bool {
    keywords.contains(&value.trim().to_ascii_lowercase().as_str())
}

/// Split an inline style into lowercase property / trimmed value pairs
pub fn parse_inline_style(style: &str) -> Vec<(String, String)> {
    style
        .split(';')
        .filter_map(|decl| decl.split_once(':'))
        .map(|(prop, value)| {
            let value = value.trim();
            let value = value
                .strip_suffix("!important")
                .map(str::trim_end)
                .unwrap_or(value);
            (prop.trim().to_ascii_lowercase(), value.to_string())
        })
        .filter(|(prop, value)| !prop.is_empty() && !value.is_empty())
        .collect()
}

/// Last declaration of `property` wins, as in CSS
fn declaration<'d>(declarations: &'d [(String, String)], property: &str) -> Option<&'d str> {
    declarations
        .iter()
        .rev()
        .find(|(prop, _)| prop == property)
        .map(|(_, value)| value.as_str())
}

/// The `background` shorthand often carries images or positions; only a
/// bare color value is taken from it.
fn is_color_like(value: &str) -> bool {
    let v = value.trim_start().to_ascii_lowercase();
    v.starts_with('#') || v.starts_with("rgb")
}

/// Short CSS-style descriptor for an element
pub fn describe_element(element: ElementRef<'_>) -> String {
    let value = element.value();
    let mut out = value.name().to_string();
    if let Some(id) = value.id() {
        out.push('#');
        out.push_str(id);
    }
    for class in value.classes() {
        out.push('.');
        out.push_str(class);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(html: &str) -> Vec<ElementColors> {
        let document = Html::parse_document(html);
        let scanner = StaticPageScanner::new(&document);
        scanner.elements().collect()
    }

    fn find<'a>(elements: &'a [ElementColors], descriptor: &str) -> &'a ElementColors {
        elements
            .iter()
            .find(|e| e.element == descriptor)
            .unwrap_or_else(|| panic!("no element {} in {:?}", descriptor, elements))
    }

    #[test]
    fn test_defaults_without_styles() {
        let elements = scan("<html><body><p id=\"a\">hi</p></body></html>");
        let p = find(&elements, "p#a");
        assert_eq!(p.foreground, DEFAULT_FOREGROUND);
        assert_eq!(p.background, DEFAULT_BACKGROUND);
    }

    #[test]
    fn test_every_body_element_is_yielded() {
        let elements = scan("<html><head><title>t</title></head><body><div><p>a</p><span>b</span></div></body></html>");
        let names: Vec<&str> = elements.iter().map(|e| e.element.as_str()).collect();
        assert_eq!(names, vec!["body", "div", "p", "span"]);
    }

    #[test]
    fn test_inherits_from_ancestors() {
        let html = r#"<html><body style="background-color: #222222">
            <div class="card" style="color: #eeeeee"><p class="lead x">text</p></div>
        </body></html>"#;
        let elements = scan(html);
        let p = find(&elements, "p.lead.x");
        assert_eq!(p.foreground, "#eeeeee");
        assert_eq!(p.background, "#222222");
    }

    #[test]
    fn test_own_declaration_overrides_ancestor() {
        let html = r#"<html><body style="color: #111111; background: #ffffff">
            <p id="warn" style="color: rgb(200, 0, 0) !important">text</p>
        </body></html>"#;
        let p = find(&scan(html), "p#warn").clone();
        assert_eq!(p.foreground, "rgb(200, 0, 0)");
        assert_eq!(p.background, "#ffffff");
    }

    #[test]
    fn test_background_shorthand_with_image_is_skipped() {
        let html = r#"<html><body style="background-color: #000000">
            <div id="hero" style="background: url(hero.png) no-repeat">x</div>
        </body></html>"#;
        assert_eq!(find(&scan(html), "div#hero").background, "#000000");
    }

    #[test]
    fn test_unsupported_values_pass_through() {
        let html = r#"<html><body><p id="n" style="color: navy">x</p></body></html>"#;
        assert_eq!(find(&scan(html), "p#n").foreground, "navy");
    }

    #[test]
    fn test_transparent_background_shows_ancestor() {
        let html = r#"<html><body style="color: #000; background-color: #fff">
            <button id="b" style="background-color: transparent; color: #777777">Go</button>
        </body></html>"#;
        let button = find(&scan(html), "button#b").clone();
        assert_eq!(button.foreground, "#777777");
        assert_eq!(button.background, "#fff");
    }

    #[test]
    fn test_zero_alpha_background_shows_ancestor() {
        let html = r#"<html><body style="background-color: #123456">
            <div id="d" style="background: rgba(255, 255, 255, 0)">x</div>
        </body></html>"#;
        assert_eq!(find(&scan(html), "div#d").background, "#123456");
    }

    #[test]
    fn test_inherit_defers_to_ancestor() {
        let html = r#"<html><body style="color: #333333; background-color: #eeeeee">
            <p id="p" style="color: inherit; background-color: inherit">x</p>
        </body></html>"#;
        let p = find(&scan(html), "p#p").clone();
        assert_eq!(p.foreground, "#333333");
        assert_eq!(p.background, "#eeeeee");
    }

    #[test]
    fn test_current_color_foreground_defers_to_ancestor() {
        let html = r#"<html><body style="color: rgb(10, 20, 30)">
            <span id="s" style="color: currentColor">x</span>
        </body></html>"#;
        assert_eq!(find(&scan(html), "span#s").foreground, "rgb(10, 20, 30)");
    }

    #[test]
    fn test_current_color_background_uses_declaring_text_color() {
        let html = r#"<html><body style="color: #0000ff">
            <div style="color: #ff0000; background-color: currentColor">
                <em id="e" style="color: #ffffff">x</em>
            </div>
        </body></html>"#;
        let em = find(&scan(html), "em#e").clone();
        assert_eq!(em.foreground, "#ffffff");
        assert_eq!(em.background, "#ff0000");
    }

    #[test]
    fn test_keywords_without_ancestor_fall_back_to_defaults() {
        let html = r#"<html><body><p id="k" style="color: inherit; background-color: transparent">x</p></body></html>"#;
        let p = find(&scan(html), "p#k").clone();
        assert_eq!(p.foreground, DEFAULT_FOREGROUND);
        assert_eq!(p.background, DEFAULT_BACKGROUND);
    }

    #[test]
    fn test_parse_inline_style() {
        let decls = parse_inline_style(" COLOR : #fff ;; background-color:rgb(0, 0, 0); broken");
        assert_eq!(
            decls,
            vec![
                ("color".to_string(), "#fff".to_string()),
                ("background-color".to_string(), "rgb(0, 0, 0)".to_string()),
            ]
        );
    }
}

//! XML text form of [`Element`] trees, via `quick-xml`
//!
//! Rendering emits an XML declaration followed by the root element. Leaves
//! without text are written as empty elements. When an indent width is given,
//! nested elements are placed on their own lines; that whitespace is dropped
//! again on parsing, as is any whitespace-only text inside an element that
//! has children. Text of leaf elements is preserved exactly.

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};

use super::Element;
use crate::tree::{TreeError, TreeResult};

/// Renders `root` as an XML document
///
/// # Errors
///
/// Writing into memory does not fail in practice; any error reported by the
/// writer is surfaced as [`TreeError::Syntax`].
pub fn render(root: &Element, indent: Option<usize>) -> TreeResult<String> {
    let mut writer = Writer::new(Vec::new());
    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
        .map_err(TreeError::syntax)?;
    if indent.is_some() {
        newline(&mut writer, 0, indent)?;
    }
    write_element(&mut writer, root, 0, indent)?;
    String::from_utf8(writer.into_inner()).map_err(TreeError::syntax)
}

fn newline(writer: &mut Writer<Vec<u8>>, depth: usize, indent: Option<usize>) -> TreeResult<()> {
    if let Some(width) = indent {
        let pad = format!("\n{}", " ".repeat(width * depth));
        writer
            .write_event(Event::Text(BytesText::from_escaped(pad)))
            .map_err(TreeError::syntax)?;
    }
    Ok(())
}

fn write_element(
    writer: &mut Writer<Vec<u8>>,
    el: &Element,
    depth: usize,
    indent: Option<usize>,
) -> TreeResult<()> {
    let name = el.name();
    if el.children().is_empty() && el.text().is_none() {
        return writer
            .write_event(Event::Empty(BytesStart::new(name)))
            .map_err(TreeError::syntax);
    }
    writer
        .write_event(Event::Start(BytesStart::new(name)))
        .map_err(TreeError::syntax)?;
    if let Some(text) = el.text() {
        writer
            .write_event(Event::Text(BytesText::new(text)))
            .map_err(TreeError::syntax)?;
    }
    if !el.children().is_empty() {
        for child in el.children() {
            newline(writer, depth + 1, indent)?;
            write_element(writer, child, depth + 1, indent)?;
        }
        newline(writer, depth, indent)?;
    }
    writer
        .write_event(Event::End(BytesEnd::new(name)))
        .map_err(TreeError::syntax)
}

/// Partially-read element along with the raw text accumulated inside it
struct Open {
    el: Element,
    text: String,
}

impl Open {
    fn new(name: &[u8]) -> TreeResult<Self> {
        let name = std::str::from_utf8(name).map_err(TreeError::syntax)?;
        Ok(Self {
            el: Element::new(name),
            text: String::new(),
        })
    }

    fn close(self) -> Element {
        let Open { mut el, text } = self;
        let blank = text.chars().all(char::is_whitespace);
        if text.is_empty() || (blank && !el.children().is_empty()) {
            el.clear_text();
        } else {
            el.set_text(text);
        }
        el
    }
}

/// Parses an XML document into its root [`Element`]
///
/// # Errors
///
/// Returns [`TreeError::Syntax`] if the text is not well-formed, has no root
/// element, or has content outside the root element.
pub fn parse(text: &str) -> TreeResult<Element> {
    let mut reader = Reader::from_str(text);
    let mut stack: Vec<Open> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        match reader.read_event().map_err(TreeError::syntax)? {
            Event::Start(e) => {
                if root.is_some() {
                    return Err(TreeError::syntax("content after root element"));
                }
                stack.push(Open::new(e.name().as_ref())?);
            }
            Event::Empty(e) => {
                let el = Open::new(e.name().as_ref())?.close();
                attach(&mut stack, &mut root, el)?;
            }
            Event::End(_) => match stack.pop() {
                Some(open) => attach(&mut stack, &mut root, open.close())?,
                None => return Err(TreeError::syntax("unbalanced end tag")),
            },
            Event::Text(t) => {
                let t = t.unescape().map_err(TreeError::syntax)?;
                match stack.last_mut() {
                    Some(open) => open.text.push_str(&t),
                    None if t.trim().is_empty() => {}
                    None => return Err(TreeError::syntax("text outside root element")),
                }
            }
            Event::CData(c) => {
                let raw = c.into_inner();
                let t = std::str::from_utf8(&raw).map_err(TreeError::syntax)?;
                match stack.last_mut() {
                    Some(open) => open.text.push_str(t),
                    None => return Err(TreeError::syntax("text outside root element")),
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !stack.is_empty() {
        return Err(TreeError::syntax("unexpected end of document"));
    }
    root.ok_or_else(|| TreeError::syntax("document has no root element"))
}

fn attach(stack: &mut [Open], root: &mut Option<Element>, el: Element) -> TreeResult<()> {
    match stack.last_mut() {
        Some(parent) => {
            parent.el.push(el);
            Ok(())
        }
        None if root.is_none() => {
            *root = Some(el);
            Ok(())
        }
        None => Err(TreeError::syntax("content after root element")),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn sample() -> Element {
        let mut root = Element::new("serialization");
        let list = root.push(Element::new("vec"));
        list.push(Element::new("size")).set_text("2");
        list.push(Element::new("index_0"))
            .push(Element::new("string"))
            .set_text("a < b & \"c\"");
        list.push(Element::new("index_1"))
            .push(Element::new("string"))
            .set_text("  padded  ");
        root.push(Element::new("empty"));
        root
    }

    #[test]
    fn compact_roundtrip() {
        let root = sample();
        let text = render(&root, None).unwrap();
        assert!(!text.contains('\n'));
        assert_eq!(parse(&text).unwrap(), root);
    }

    #[test]
    fn indented_roundtrip() {
        let root = sample();
        let text = render(&root, Some(2)).unwrap();
        assert!(text.contains("\n  <vec>\n    <size>2</size>"));
        assert_eq!(parse(&text).unwrap(), root);
    }

    #[test]
    fn empty_leaf_has_no_text() {
        let root = parse("<r><string></string><value/></r>").unwrap();
        assert_eq!(root.child("string").and_then(Element::text), None);
        assert_eq!(root.child("value").and_then(Element::text), None);
    }

    #[test]
    fn rejects_non_document() {
        assert!(matches!(
            parse("PD94bWwgdmVyc2lvbj0iMS4wIj8+"),
            Err(TreeError::Syntax(_))
        ));
        assert!(matches!(parse(""), Err(TreeError::Syntax(_))));
        assert!(matches!(parse("<a><b></a>"), Err(TreeError::Syntax(_))));
        assert!(matches!(parse("<a/><b/>"), Err(TreeError::Syntax(_))));
    }
}

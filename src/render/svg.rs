//! Retained SVG Scene
//!
//! A small element tree that the renderers rebuild from scratch on every
//! redraw and then serialize. Keeping the tree (instead of writing markup
//! straight into a string) lets tests and callers inspect what was drawn.

use std::fmt::{self, Write};

/// SVG namespace written on the root element
pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// A node in the scene: either an element or character data
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

/// An SVG element with ordered attributes
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub name: String,
    pub attrs: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Element {
    /// Create an empty element
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Set an attribute, replacing any previous value for the same key
    pub fn attr(mut self, key: &str, value: impl Into<String>) -> Self {
        self.set_attr(key, value);
        self
    }

    /// Set a numeric attribute using the scene's number formatting
    pub fn num(self, key: &str, value: f64) -> Self {
        self.attr(key, fmt_num(value))
    }

    /// Set an attribute in place
    pub fn set_attr(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        match self.attrs.iter_mut().find(|(k, _)| k == key) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((key.to_string(), value)),
        }
    }

    /// Append a child element
    pub fn child(mut self, element: Element) -> Self {
        self.children.push(Node::Element(element));
        self
    }

    /// Append character data
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    /// Append a child element in place
    pub fn push(&mut self, element: Element) {
        self.children.push(Node::Element(element));
    }

    /// Look up an attribute value
    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Whether the element carries `class` among its classes
    pub fn has_class(&self, class: &str) -> bool {
        self.get_attr("class")
            .map(|c| c.split_whitespace().any(|c| c == class))
            .unwrap_or(false)
    }

    /// All descendant elements in document order (self excluded)
    pub fn descendants(&self) -> Vec<&Element> {
        let mut out = Vec::new();
        collect(self, &mut out);
        out
    }

    /// Descendant elements with the given tag name
    pub fn find_all(&self, name: &str) -> Vec<&Element> {
        self.descendants()
            .into_iter()
            .filter(|e| e.name == name)
            .collect()
    }

    /// Descendant elements carrying the given class
    pub fn find_class(&self, class: &str) -> Vec<&Element> {
        self.descendants()
            .into_iter()
            .filter(|e| e.has_class(class))
            .collect()
    }

    /// Concatenated character data of this element and its descendants
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for node in &self.children {
            match node {
                Node::Text(t) => out.push_str(t),
                Node::Element(e) => out.push_str(&e.text_content()),
            }
        }
        out
    }

    fn write_markup(&self, out: &mut String) -> fmt::Result {
        write!(out, "<{}", self.name)?;
        for (key, value) in &self.attrs {
            write!(out, " {}=\"{}\"", key, escape(value))?;
        }
        if self.children.is_empty() {
            return out.write_str("/>");
        }
        out.write_char('>')?;
        for node in &self.children {
            match node {
                Node::Element(e) => e.write_markup(out)?,
                Node::Text(t) => out.write_str(&escape(t))?,
            }
        }
        write!(out, "</{}>", self.name)
    }
}

fn collect<'a>(element: &'a Element, out: &mut Vec<&'a Element>) {
    for node in &element.children {
        if let Node::Element(e) = node {
            out.push(e);
            collect(e, out);
        }
    }
}

/// A complete drawing: an `<svg>` root with fixed pixel dimensions
#[derive(Debug, Clone, PartialEq)]
pub struct Svg {
    root: Element,
}

impl Svg {
    /// Create a blank drawing of the given size
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            root: Element::new("svg")
                .attr("xmlns", SVG_NS)
                .num("width", width)
                .num("height", height),
        }
    }

    /// Append a top-level element
    pub fn push(&mut self, element: Element) {
        self.root.push(element);
    }

    /// The `<svg>` root element
    pub fn root(&self) -> &Element {
        &self.root
    }

    /// True when nothing has been drawn
    pub fn is_blank(&self) -> bool {
        self.root.children.is_empty()
    }

    /// Serialize to SVG markup
    pub fn to_markup(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail
        let _ = self.root.write_markup(&mut out);
        out
    }
}

impl fmt::Display for Svg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_markup())
    }
}

/// Path data builder producing `d` attribute strings
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathData {
    d: String,
}

impl PathData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(&mut self, x: f64, y: f64) {
        let _ = write!(self.d, "M{},{}", fmt_num(x), fmt_num(y));
    }

    pub fn line_to(&mut self, x: f64, y: f64) {
        let _ = write!(self.d, "L{},{}", fmt_num(x), fmt_num(y));
    }

    pub fn bezier_curve_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x: f64, y: f64) {
        let _ = write!(
            self.d,
            "C{},{},{},{},{},{}",
            fmt_num(x1),
            fmt_num(y1),
            fmt_num(x2),
            fmt_num(y2),
            fmt_num(x),
            fmt_num(y)
        );
    }

    pub fn close_path(&mut self) {
        self.d.push('Z');
    }

    pub fn is_empty(&self) -> bool {
        self.d.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.d
    }

    pub fn into_string(self) -> String {
        self.d
    }
}

/// Format a coordinate: at most three decimals, no trailing zeros
pub fn fmt_num(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }
    let rounded = (value * 1000.0).round() / 1000.0;
    if rounded == 0.0 {
        return "0".to_string();
    }
    let s = format!("{:.3}", rounded);
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Escape text for use in markup content or attribute values
pub fn escape(text: &str) -> String {
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

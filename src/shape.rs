//! Shape descriptors and their SVG serialization.
//!
//! A [`Shape`] is one SVG element: a [`Tag`], an ordered attribute list and
//! optional children. Generators build shapes with the chained helpers and
//! never touch markup text directly; the element is only turned into a
//! string by its [`Display`](fmt::Display) implementation.

use std::fmt::{self, Write};

// ============================================================================
// Tag
// ============================================================================

/// The SVG element kinds avatars are made of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Rect,
    Circle,
    Path,
    Line,
    Group,
    Filter,
    FeFlood,
    FeBlend,
    FeGaussianBlur,
    LinearGradient,
    Stop,
}

impl Tag {
    /// Returns the element name as written in markup.
    pub fn name(self) -> &'static str {
        match self {
            Tag::Rect => "rect",
            Tag::Circle => "circle",
            Tag::Path => "path",
            Tag::Line => "line",
            Tag::Group => "g",
            Tag::Filter => "filter",
            Tag::FeFlood => "feFlood",
            Tag::FeBlend => "feBlend",
            Tag::FeGaussianBlur => "feGaussianBlur",
            Tag::LinearGradient => "linearGradient",
            Tag::Stop => "stop",
        }
    }
}

// ============================================================================
// Shape
// ============================================================================

/// A single SVG element with ordered attributes.
///
/// Attribute order is preserved exactly as added, so two shapes built by the
/// same calls always serialize to the same bytes.
///
/// # Example
///
/// ```
/// use boring_avatars::{Shape, Transform};
///
/// let circle = Shape::circle()
///     .attr("cx", 40)
///     .attr("cy", 40)
///     .attr("fill", "#FF005B")
///     .transform(Transform::new().translate(-3.0, 3.0));
///
/// assert_eq!(
///     circle.to_string(),
///     r##"<circle cx="40" cy="40" fill="#FF005B" transform="translate(-3 3)"></circle>"##
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    tag: Tag,
    attributes: Vec<(&'static str, String)>,
    children: Vec<Shape>,
}

impl Shape {
    /// Creates an element with no attributes or children.
    pub fn new(tag: Tag) -> Self {
        Self {
            tag,
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn rect() -> Self {
        Self::new(Tag::Rect)
    }

    pub fn circle() -> Self {
        Self::new(Tag::Circle)
    }

    pub fn path() -> Self {
        Self::new(Tag::Path)
    }

    pub fn line() -> Self {
        Self::new(Tag::Line)
    }

    pub fn group() -> Self {
        Self::new(Tag::Group)
    }

    /// Appends an attribute.
    pub fn attr(mut self, name: &'static str, value: impl fmt::Display) -> Self {
        self.attributes.push((name, value.to_string()));
        self
    }

    /// Appends an attribute only when `value` is present.
    pub fn attr_opt(self, name: &'static str, value: Option<impl fmt::Display>) -> Self {
        match value {
            Some(value) => self.attr(name, value),
            None => self,
        }
    }

    /// Appends a `transform` attribute.
    pub fn transform(self, transform: Transform) -> Self {
        self.attr("transform", transform)
    }

    /// Appends a child element.
    pub fn child(mut self, child: Shape) -> Self {
        self.children.push(child);
        self
    }

    pub fn tag(&self) -> Tag {
        self.tag
    }

    /// Looks up an attribute value by name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Shorthand for `get("fill")`.
    pub fn fill(&self) -> Option<&str> {
        self.get("fill")
    }

    pub fn children(&self) -> &[Shape] {
        &self.children
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.tag.name();

        f.write_char('<')?;
        f.write_str(name)?;
        for (key, value) in &self.attributes {
            write!(f, " {key}=\"")?;
            write_escaped(f, value)?;
            f.write_char('"')?;
        }
        f.write_char('>')?;

        for child in &self.children {
            write!(f, "{child}")?;
        }

        write!(f, "</{name}>")
    }
}

// ============================================================================
// Transform
// ============================================================================

/// A `translate`/`rotate`/`scale` transform list.
///
/// Translations and angles are printed rounded to whole numbers (a negative
/// zero keeps its sign), scales with one decimal and a trailing `.0`
/// dropped.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Transform {
    translate: Option<(f64, f64)>,
    rotate: Option<(f64, u32, u32)>,
    scale: Option<f64>,
}

impl Transform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn translate(mut self, x: f64, y: f64) -> Self {
        self.translate = Some((x, y));
        self
    }

    /// Rotates by `degrees` around `(cx, cy)`.
    pub fn rotate(mut self, degrees: f64, cx: u32, cy: u32) -> Self {
        self.rotate = Some((degrees, cx, cy));
        self
    }

    pub fn scale(mut self, factor: f64) -> Self {
        self.scale = Some(factor);
        self
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::with_capacity(3);

        if let Some((x, y)) = self.translate {
            parts.push(format!("translate({} {})", whole(x), whole(y)));
        }
        if let Some((degrees, cx, cy)) = self.rotate {
            parts.push(format!("rotate({} {cx} {cy})", whole(degrees)));
        }
        if let Some(factor) = self.scale {
            parts.push(format!("scale({})", tenths(factor)));
        }

        f.write_str(&parts.join(" "))
    }
}

// ============================================================================
// Number formatting
// ============================================================================

/// Formats a value rounded to a whole number.
pub fn whole(value: f64) -> String {
    format!("{value:.0}")
}

/// Formats a value with one decimal, dropping a trailing `.0`.
pub fn tenths(value: f64) -> String {
    let formatted = format!("{value:.1}");
    match formatted.strip_suffix(".0") {
        Some(trimmed) => trimmed.to_string(),
        None => formatted,
    }
}

// ============================================================================
// Escaping
// ============================================================================

/// Writes `text` with the five XML special characters escaped.
pub fn write_escaped(out: &mut impl Write, text: &str) -> fmt::Result {
    for ch in text.chars() {
        match ch {
            '&' => out.write_str("&amp;")?,
            '<' => out.write_str("&lt;")?,
            '>' => out.write_str("&gt;")?,
            '"' => out.write_str("&quot;")?,
            '\'' => out.write_str("&apos;")?,
            other => out.write_char(other)?,
        }
    }
    Ok(())
}

/// Returns `text` with the five XML special characters escaped.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    // Writing into a String cannot fail.
    let _ = write_escaped(&mut out, text);
    out
}

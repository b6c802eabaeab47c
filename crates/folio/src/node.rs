//! Intermediate view tree.
//!
//! Renderers produce [`Node`] trees instead of markup text so that card,
//! filter and page output can be inspected in tests without a browser. The
//! [`html`](crate::render::html) adapter turns a tree into HTML.

/// A node in the view tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// An element with classes, attributes and children.
    Element(Element),
    /// A text run. Escaped by adapters, never interpreted as markup.
    Text(String),
}

impl Node {
    /// Create a text node.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// The element, if this node is one.
    #[must_use]
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(element) => Some(element),
            Self::Text(_) => None,
        }
    }

    /// Mutable access to the element, if this node is one.
    pub fn as_element_mut(&mut self) -> Option<&mut Element> {
        match self {
            Self::Element(element) => Some(element),
            Self::Text(_) => None,
        }
    }

    /// Concatenated text of this node and its descendants.
    #[must_use]
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Self::Text(text) => out.push_str(text),
            Self::Element(element) => {
                for child in &element.children {
                    child.collect_text(out);
                }
            }
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

/// An element node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// Tag name (e.g. `"article"`).
    pub tag: &'static str,
    /// Class list, in insertion order, without duplicates.
    pub classes: Vec<String>,
    /// Attributes, in insertion order, keys unique.
    pub attrs: Vec<(String, String)>,
    /// Child nodes.
    pub children: Vec<Node>,
}

impl Element {
    /// Create an empty element.
    #[must_use]
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            classes: Vec::new(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Add a class.
    #[must_use]
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.set_class(class, true);
        self
    }

    /// Add a class when `on` is true.
    #[must_use]
    pub fn class_if(mut self, class: impl Into<String>, on: bool) -> Self {
        if on {
            self.set_class(class, true);
        }
        self
    }

    /// Set an attribute.
    #[must_use]
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(key, value);
        self
    }

    /// Append a child.
    #[must_use]
    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Append several children.
    #[must_use]
    pub fn children<I, N>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    /// Append a text child.
    #[must_use]
    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::text(text))
    }

    /// Check for a class.
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Add or remove a class.
    pub fn set_class(&mut self, class: impl Into<String>, on: bool) {
        let class = class.into();
        let present = self.has_class(&class);
        if on && !present {
            self.classes.push(class);
        } else if !on && present {
            self.classes.retain(|c| *c != class);
        }
    }

    /// Look up an attribute value.
    #[must_use]
    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Set an attribute, replacing any previous value.
    pub fn set_attr(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.attrs.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((key, value)),
        }
    }

    /// Remove an attribute.
    pub fn remove_attr(&mut self, key: &str) {
        self.attrs.retain(|(k, _)| k != key);
    }

    /// Concatenated text of all descendants.
    #[must_use]
    pub fn text_content(&self) -> String {
        self.children.iter().map(Node::text_content).collect()
    }

    /// All elements in this subtree (self included) matching `pred`, depth-first.
    pub fn find_all<'a>(&'a self, pred: &impl Fn(&Element) -> bool) -> Vec<&'a Element> {
        let mut found = Vec::new();
        self.walk(pred, &mut found);
        found
    }

    fn walk<'a>(&'a self, pred: &impl Fn(&Element) -> bool, found: &mut Vec<&'a Element>) {
        if pred(self) {
            found.push(self);
        }
        for child in &self.children {
            if let Node::Element(element) = child {
                element.walk(pred, found);
            }
        }
    }

    /// All elements carrying `class`, depth-first.
    #[must_use]
    pub fn find_by_class(&self, class: &str) -> Vec<&Element> {
        self.find_all(&|e: &Element| e.has_class(class))
    }

    /// All elements with tag name `tag`, depth-first.
    #[must_use]
    pub fn find_by_tag(&self, tag: &str) -> Vec<&Element> {
        self.find_all(&|e: &Element| e.tag == tag)
    }

    /// First element carrying `class`, depth-first.
    #[must_use]
    pub fn first_by_class(&self, class: &str) -> Option<&Element> {
        self.find_by_class(class).into_iter().next()
    }

    /// Apply `f` to every element in this subtree, parents before children.
    pub fn visit_mut(&mut self, f: &mut impl FnMut(&mut Element)) {
        f(self);
        for child in &mut self.children {
            if let Node::Element(element) = child {
                element.visit_mut(f);
            }
        }
    }
}

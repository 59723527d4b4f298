//! Style targets that receive the display mode classes.

/// Something with a class list the apply step can reconcile.
///
/// This mirrors a document root element's class list: adding a present class
/// and removing an absent one are both no-ops.
pub trait StyleTarget {
    fn add_class(&mut self, name: &str);
    fn remove_class(&mut self, name: &str);
}

impl<T: StyleTarget + ?Sized> StyleTarget for Box<T> {
    fn add_class(&mut self, name: &str) {
        (**self).add_class(name)
    }

    fn remove_class(&mut self, name: &str) {
        (**self).remove_class(name)
    }
}

/// An in-memory root element class list.
///
/// Classes keep insertion order and never repeat, the way a DOM token list
/// behaves.
///
/// # Example
///
/// ```rust
/// use duskmode::{RootElement, StyleTarget};
///
/// let mut root = RootElement::with_classes(["app"]);
/// root.add_class("dark-mode");
/// root.add_class("dark-mode");
/// assert_eq!(root.class_attr(), "app dark-mode");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RootElement {
    classes: Vec<String>,
}

impl RootElement {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an element that already carries `classes`, dropping repeats.
    pub fn with_classes<I, S>(classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut root = Self::new();
        for class in classes {
            root.add_class(class.as_ref());
        }
        root
    }

    pub fn contains(&self, name: &str) -> bool {
        self.classes.iter().any(|c| c == name)
    }

    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Returns the classes joined the way a `class` attribute spells them.
    pub fn class_attr(&self) -> String {
        self.classes.join(" ")
    }
}

impl StyleTarget for RootElement {
    fn add_class(&mut self, name: &str) {
        if !self.contains(name) {
            self.classes.push(name.to_string());
        }
    }

    fn remove_class(&mut self, name: &str) {
        self.classes.retain(|c| c != name);
    }
}

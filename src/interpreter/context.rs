use std::collections::HashMap;

use crate::{interpreter::value::Value, util::text::strip_affixes};

/// Identifies one of the three ArSharp storage classes.
///
/// Each namespace has its own marker substring and its own fixed
/// name-extraction offsets; apart from that the three behave identically.
/// The keyspaces are independent: `var{x}`, `const{x}`, and `g[x]` are three
/// unrelated entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Namespace {
    /// Mutable values declared with `var{name}`.
    Variable,
    /// Values declared with `const{name}`. Despite the keyword, the language
    /// does not enforce immutability; re-declaration silently overwrites.
    Constant,
    /// "Grand values" declared with `g[name]`, a second mutable keyspace.
    Grand,
}

impl Namespace {
    /// The substring whose presence anywhere in a line (or expression)
    /// selects this namespace.
    #[must_use]
    pub const fn marker(self) -> &'static str {
        match self {
            Self::Variable => "var{",
            Self::Constant => "const{",
            Self::Grand => "g[",
        }
    }

    /// Characters sliced off the front of the text before the name.
    ///
    /// Note the `Constant` offset is 5, one short of the `const{` marker
    /// length, so constant names carry a leading `{`. Declaration and lookup
    /// share this function, so the mismatch round-trips consistently.
    const fn head_offset(self) -> usize {
        match self {
            Self::Variable => 4,
            Self::Constant => 5,
            Self::Grand => 2,
        }
    }

    /// Extracts the storage key from a declaration head or a reference.
    ///
    /// The slice is positional, not syntactic: the first `head_offset`
    /// characters and the last character are dropped, then surrounding
    /// whitespace is trimmed. The text is assumed to be exactly a
    /// `var{name}`-shaped reference; anything else yields a garbage key.
    ///
    /// # Examples
    /// ```
    /// use arsharp::interpreter::context::Namespace;
    ///
    /// assert_eq!(Namespace::Variable.extract_name("var{total}"), "total");
    /// assert_eq!(Namespace::Grand.extract_name("g[score]"), "score");
    /// // Constant keys keep their leading brace on both sides of the store.
    /// assert_eq!(Namespace::Constant.extract_name("const{pi}"), "{pi");
    /// ```
    #[must_use]
    pub fn extract_name(self, text: &str) -> &str {
        strip_affixes(text, self.head_offset(), 1).trim()
    }
}

/// Stores the runtime state of one program execution.
///
/// This struct holds the three namespaces. An entry maps a name to either a
/// computed [`Value`] or, for declarations without an initializer, to an
/// absent value. Entries live for the whole run; nothing ever removes them.
#[derive(Debug, Default)]
pub struct Context {
    variables: HashMap<String, Option<Value>>,
    constants: HashMap<String, Option<Value>>,
    grand_values: HashMap<String, Option<Value>>,
}

impl Context {
    /// Creates an empty context with all three namespaces blank.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares `name` in the given namespace, overwriting any previous
    /// entry. `None` records a declaration without an initializer.
    pub fn declare(&mut self, namespace: Namespace, name: String, value: Option<Value>) {
        self.entries_mut(namespace).insert(name, value);
    }

    /// Resolves `name` in the given namespace.
    ///
    /// Returns `None` both for names that were never declared and for names
    /// declared without an initializer; callers cannot tell the two apart.
    /// A failed lookup never creates an entry.
    #[must_use]
    pub fn lookup(&self, namespace: Namespace, name: &str) -> Option<&Value> {
        self.entries(namespace).get(name).and_then(Option::as_ref)
    }

    const fn entries(&self, namespace: Namespace) -> &HashMap<String, Option<Value>> {
        match namespace {
            Namespace::Variable => &self.variables,
            Namespace::Constant => &self.constants,
            Namespace::Grand => &self.grand_values,
        }
    }

    fn entries_mut(&mut self, namespace: Namespace) -> &mut HashMap<String, Option<Value>> {
        match namespace {
            Namespace::Variable => &mut self.variables,
            Namespace::Constant => &mut self.constants,
            Namespace::Grand => &mut self.grand_values,
        }
    }
}

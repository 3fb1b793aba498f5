//! Classes, functions and the explicit inheritance chain
//!
//! A [`Class`] is a constructor identity with an optional parent. Instance
//! fields declared by a class become *own* properties of objects built from
//! that class; fields declared by its ancestors are *inherited*. Walking
//! [`Class::parent`] is the only way inherited properties are found.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Arc, LazyLock};

use super::object::Property;
use super::Value;

static ERROR_CLASS: LazyLock<Class> = LazyLock::new(|| Class::builder("Error").build());

struct ClassInner {
    name: String,
    parent: Option<Class>,
    fields: BTreeMap<String, Property>,
}

/// A constructor identity in an explicit base-class chain.
///
/// Classes compare by identity: two separately built classes with the same
/// name and fields are different classes.
///
/// # Example
///
/// ```rust
/// use valcheck::value::{Class, Value};
///
/// let parent = Class::builder("Parent").field("a", Value::Undefined).build();
/// let child = Class::builder("Child")
///     .extends(&parent)
///     .field("b", Value::Undefined)
///     .build();
///
/// assert!(child.descends_from(&parent));
/// assert!(!parent.descends_from(&child));
/// ```
#[derive(Clone)]
pub struct Class(Arc<ClassInner>);

impl Class {
    /// Start building a class with the given name.
    pub fn builder(name: impl Into<String>) -> ClassBuilder {
        ClassBuilder {
            name: name.into(),
            parent: None,
            fields: BTreeMap::new(),
        }
    }

    /// The built-in root error class.
    ///
    /// Every error object descends from it; custom error classes should
    /// extend it.
    pub fn error() -> Class {
        ERROR_CLASS.clone()
    }

    /// The class name.
    pub fn name(&self) -> &str {
        &self.0.name
    }

    /// The direct parent class, if any.
    pub fn parent(&self) -> Option<&Class> {
        self.0.parent.as_ref()
    }

    /// Fields this class itself declares (not those of its ancestors).
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Property)> {
        self.0.fields.iter().map(|(k, p)| (k.as_str(), p))
    }

    /// Iterate this class followed by each ancestor, nearest first.
    pub fn ancestry(&self) -> impl Iterator<Item = &Class> {
        std::iter::successors(Some(self), |class| class.parent())
    }

    /// True if `other` is this class or one of its ancestors.
    pub fn descends_from(&self, other: &Class) -> bool {
        self.ancestry().any(|class| class == other)
    }
}

impl PartialEq for Class {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for Class {}

impl fmt::Debug for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("Class");
        s.field("name", &self.0.name);
        if let Some(parent) = &self.0.parent {
            s.field("extends", &parent.0.name);
        }
        s.finish()
    }
}

/// Builder for [`Class`].
#[derive(Debug)]
pub struct ClassBuilder {
    name: String,
    parent: Option<Class>,
    fields: BTreeMap<String, Property>,
}

impl ClassBuilder {
    /// Set the parent class.
    pub fn extends(mut self, parent: &Class) -> Self {
        self.parent = Some(parent.clone());
        self
    }

    /// Declare an enumerable instance field with its initial value.
    pub fn field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields
            .insert(name.into(), Property::enumerable(value.into()));
        self
    }

    /// Declare a non-enumerable instance field with its initial value.
    pub fn hidden_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), Property::hidden(value.into()));
        self
    }

    /// Finish the class.
    pub fn build(self) -> Class {
        Class(Arc::new(ClassInner {
            name: self.name,
            parent: self.parent,
            fields: self.fields,
        }))
    }
}

/// Declaration form of a callable, fixed when the function is created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FunctionKind {
    /// `function f() {}`
    Function,
    /// `() => {}`
    Arrow,
    /// `async function f() {}`
    Async,
    /// `async () => {}`
    AsyncArrow,
    /// `function* f() {}`
    Generator,
    /// `async function* f() {}`
    AsyncGenerator,
    /// `class C {}`
    Class(Class),
}

impl FunctionKind {
    /// True for the forms whose runtime category is the async function type.
    pub fn is_async(&self) -> bool {
        matches!(self, FunctionKind::Async | FunctionKind::AsyncArrow)
    }
}

/// Callable metadata: a name and its declaration form.
///
/// Functions are never invoked by this crate; only the declaration form is
/// inspected.
///
/// # Example
///
/// ```rust
/// use valcheck::value::{Function, FunctionKind};
///
/// let f = Function::new("load", FunctionKind::Async);
/// assert!(f.kind().is_async());
/// ```
#[derive(Debug, Clone)]
pub struct Function(Arc<FunctionInner>);

#[derive(Debug)]
struct FunctionInner {
    name: String,
    kind: FunctionKind,
}

impl Function {
    /// Create a function with the given name and declaration form.
    pub fn new(name: impl Into<String>, kind: FunctionKind) -> Self {
        Self(Arc::new(FunctionInner {
            name: name.into(),
            kind,
        }))
    }

    /// An anonymous arrow function.
    pub fn arrow() -> Self {
        Self::new("", FunctionKind::Arrow)
    }

    /// An anonymous async arrow function.
    pub fn async_arrow() -> Self {
        Self::new("", FunctionKind::AsyncArrow)
    }

    /// The constructor function of `class`.
    pub fn class(class: &Class) -> Self {
        Self::new(class.name(), FunctionKind::Class(class.clone()))
    }

    /// The function name; empty for anonymous functions.
    pub fn name(&self) -> &str {
        &self.0.name
    }

    /// The declaration form.
    pub fn kind(&self) -> &FunctionKind {
        &self.0.kind
    }

    /// The class this function constructs, if it is a class constructor.
    pub fn as_class(&self) -> Option<&Class> {
        match &self.0.kind {
            FunctionKind::Class(class) => Some(class),
            _ => None,
        }
    }
}

// Constructors of the same class are the same function.
impl PartialEq for Function {
    fn eq(&self, other: &Self) -> bool {
        match (self.as_class(), other.as_class()) {
            (Some(a), Some(b)) => a == b,
            _ => Arc::ptr_eq(&self.0, &other.0),
        }
    }
}

impl From<&Class> for Function {
    fn from(class: &Class) -> Self {
        Function::class(class)
    }
}

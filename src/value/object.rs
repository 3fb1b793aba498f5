//! Object records
//!
//! An [`Object`] is an immutable, shared record made of a builtin tag, a table
//! of own properties and an optional class. Objects compare by identity.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use std::time::SystemTime;

use super::class::Class;
use super::promise::Promise;
use super::regexp::RegExp;
use super::Value;

/// A property slot: its value and whether it shows up in key enumeration.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    /// The stored value.
    pub value: Value,
    /// Whether the key is listed by enumeration.
    pub enumerable: bool,
}

impl Property {
    /// An enumerable property.
    pub fn enumerable(value: Value) -> Self {
        Self {
            value,
            enumerable: true,
        }
    }

    /// A non-enumerable property.
    pub fn hidden(value: Value) -> Self {
        Self {
            value,
            enumerable: false,
        }
    }
}

/// Payload of an error object.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorData {
    /// The `name` field. Usually text, but callers may store anything.
    pub name: Value,
    /// The `message` field. Usually text, but callers may store anything.
    pub message: Value,
}

/// Built-in object category.
#[derive(Debug, Clone, PartialEq)]
pub enum Builtin {
    /// An ordinary object.
    Plain,
    /// A point in time.
    Date(SystemTime),
    /// Key/value entries in insertion order.
    Map(Vec<(Value, Value)>),
    /// Members in insertion order.
    Set(Vec<Value>),
    /// A regular expression.
    RegExp(RegExp),
    /// An error.
    Error(ErrorData),
    /// A deferred result.
    Promise(Promise),
}

struct ObjectInner {
    builtin: Builtin,
    class: Option<Class>,
    properties: BTreeMap<String, Property>,
}

/// A shared object record.
///
/// # Example
///
/// ```rust
/// use valcheck::value::Object;
///
/// let user = Object::builder()
///     .property("name", "Ada")
///     .hidden("secret", 42)
///     .build();
///
/// assert!(user.owns("name"));
/// assert!(user.owns("secret"));
/// assert_eq!(user.own_keys().collect::<Vec<_>>(), vec!["name"]);
/// ```
#[derive(Clone)]
pub struct Object(Arc<ObjectInner>);

impl Object {
    /// Start building a plain object.
    pub fn builder() -> ObjectBuilder {
        ObjectBuilder::new(Builtin::Plain)
    }

    /// An empty plain object.
    pub fn plain() -> Object {
        Self::builder().build()
    }

    /// Start building an instance of `class`.
    ///
    /// The fields `class` itself declares become own properties; fields of
    /// its ancestors stay inherited.
    pub fn instance(class: &Class) -> ObjectBuilder {
        Self::builder().class(class)
    }

    /// A date object.
    pub fn date(at: SystemTime) -> Object {
        ObjectBuilder::new(Builtin::Date(at)).build()
    }

    /// A map object holding `entries`.
    pub fn map(entries: Vec<(Value, Value)>) -> Object {
        ObjectBuilder::new(Builtin::Map(entries)).build()
    }

    /// A set object holding `members`.
    pub fn set(members: Vec<Value>) -> Object {
        ObjectBuilder::new(Builtin::Set(members)).build()
    }

    /// A regular-expression object.
    pub fn regexp(regexp: RegExp) -> Object {
        ObjectBuilder::new(Builtin::RegExp(regexp)).build()
    }

    /// A promise object.
    pub fn promise(promise: Promise) -> Object {
        ObjectBuilder::new(Builtin::Promise(promise)).build()
    }

    /// An error of the built-in error class.
    pub fn error(message: impl Into<Value>) -> Object {
        Self::error_builder(&Class::error(), message).build()
    }

    /// Start building an error object of `class`.
    ///
    /// The `name` field defaults to `"Error"`; override it with
    /// [`ObjectBuilder::error_name`]. A `class` that does not descend from
    /// [`Class::error()`] is replaced by it, so every error object is an
    /// instance of the error class.
    pub fn error_builder(class: &Class, message: impl Into<Value>) -> ObjectBuilder {
        ObjectBuilder::new(Builtin::Error(ErrorData {
            name: Value::from("Error"),
            message: message.into(),
        }))
        .class(class)
    }

    /// The builtin category and its payload.
    pub fn builtin(&self) -> &Builtin {
        &self.0.builtin
    }

    /// The class this object was built from, if any.
    pub fn class(&self) -> Option<&Class> {
        self.0.class.as_ref()
    }

    /// The own property called `name`, enumerable or not.
    pub fn own_property(&self, name: &str) -> Option<&Property> {
        self.0.properties.get(name)
    }

    /// True if `name` is an own property, enumerable or not.
    pub fn owns(&self, name: &str) -> bool {
        self.0.properties.contains_key(name)
    }

    /// Own enumerable keys.
    pub fn own_keys(&self) -> impl Iterator<Item = &str> {
        self.0
            .properties
            .iter()
            .filter(|(_, p)| p.enumerable)
            .map(|(k, _)| k.as_str())
    }

    /// Enumerable keys reachable from this object: own first, then the
    /// fields inherited from each ancestor class, nearest first.
    ///
    /// A key shadowed by a nearer declaration may appear more than once.
    pub fn enumerable_keys(&self) -> impl Iterator<Item = &str> {
        let inherited = self
            .class()
            .and_then(Class::parent)
            .into_iter()
            .flat_map(Class::ancestry)
            .flat_map(|class| class.fields())
            .filter(|(_, p)| p.enumerable)
            .map(|(k, _)| k);
        self.own_keys().chain(inherited)
    }

    /// True if this object's class is `class` or descends from it.
    pub fn is_instance_of(&self, class: &Class) -> bool {
        self.class().is_some_and(|own| own.descends_from(class))
    }
}

impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("Object");
        s.field("builtin", &self.0.builtin);
        if let Some(class) = &self.0.class {
            s.field("class", &class.name());
        }
        s.field("properties", &self.0.properties);
        s.finish()
    }
}

/// Builder for [`Object`].
#[derive(Debug)]
pub struct ObjectBuilder {
    builtin: Builtin,
    class: Option<Class>,
    properties: BTreeMap<String, Property>,
}

impl ObjectBuilder {
    fn new(builtin: Builtin) -> Self {
        Self {
            builtin,
            class: None,
            properties: BTreeMap::new(),
        }
    }

    /// Attach `class` and copy the fields it declares as own properties.
    ///
    /// Properties set earlier with the same name are overwritten. A plain
    /// object attached to a descendant of [`Class::error`] becomes an error
    /// with an empty message. An error object attached to any other class
    /// gets [`Class::error`] instead.
    pub fn class(mut self, class: &Class) -> Self {
        let root = Class::error();
        let class = match self.builtin {
            Builtin::Error(_) if !class.descends_from(&root) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(class = class.name(), "error class outside the error hierarchy");
                root
            }
            Builtin::Plain if class.descends_from(&root) => {
                self.builtin = Builtin::Error(ErrorData {
                    name: Value::from("Error"),
                    message: Value::from(""),
                });
                class.clone()
            }
            _ => class.clone(),
        };
        for (name, property) in class.fields() {
            self.properties.insert(name.to_string(), property.clone());
        }
        self.class = Some(class);
        self
    }

    /// Set an enumerable own property.
    pub fn property(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties
            .insert(name.into(), Property::enumerable(value.into()));
        self
    }

    /// Set a non-enumerable own property.
    pub fn hidden(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties
            .insert(name.into(), Property::hidden(value.into()));
        self
    }

    /// Override the `name` field of an error object. No effect on other objects.
    pub fn error_name(mut self, name: impl Into<Value>) -> Self {
        if let Builtin::Error(data) = &mut self.builtin {
            data.name = name.into();
        }
        self
    }

    /// Finish the object.
    pub fn build(self) -> Object {
        Object(Arc::new(ObjectInner {
            builtin: self.builtin,
            class: self.class,
            properties: self.properties,
        }))
    }
}

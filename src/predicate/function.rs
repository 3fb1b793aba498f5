//! Function, class and variadic predicates
//!
//! Declaration forms are read from the [`FunctionKind`] tag attached when a
//! [`Function`](crate::value::Function) is created; callables are never
//! invoked.

use crate::value::{FunctionKind, Value};

/// True if `value` is callable, class constructors included.
pub fn is_function(value: &Value) -> bool {
    matches!(value, Value::Function(_))
}

/// True if `value` is an `async` function or `async` arrow function.
///
/// Async generators are not async functions.
pub fn is_async_function(value: &Value) -> bool {
    value.as_function().is_some_and(|f| f.kind().is_async())
}

/// True if `value` was declared as a class.
///
/// # Example
///
/// ```rust
/// use valcheck::predicate::is_class;
/// use valcheck::value::{Class, Function, FunctionKind, Value};
///
/// let my_class = Class::builder("MyClass").build();
/// assert!(is_class(&Value::from(&my_class)));
/// assert!(!is_class(&Value::from(Function::new("myFunction", FunctionKind::Function))));
/// ```
pub fn is_class(value: &Value) -> bool {
    value
        .as_function()
        .is_some_and(|f| matches!(f.kind(), FunctionKind::Class(_)))
}

/// True if `child` is an object built from the class constructor `parent` or
/// from one of its descendants. False when `parent` is not a class.
///
/// # Example
///
/// ```rust
/// use valcheck::predicate::is_child_of;
/// use valcheck::value::{Class, Object, Value};
///
/// let parent = Class::builder("Parent").build();
/// let child = Class::builder("Child").extends(&parent).build();
/// let other = Class::builder("Other").build();
///
/// assert!(is_child_of(&Value::from(Object::instance(&child).build()), &Value::from(&parent)));
/// assert!(!is_child_of(&Value::from(Object::instance(&other).build()), &Value::from(&parent)));
/// ```
pub fn is_child_of(child: &Value, parent: &Value) -> bool {
    match (child.as_object(), parent.as_class()) {
        (Some(obj), Some(class)) => obj.is_instance_of(class),
        _ => false,
    }
}

/// True if at least one value is given and every value is a function.
pub fn are_functions(values: &[Value]) -> bool {
    !values.is_empty() && values.iter().all(is_function)
}

/// True if at least one value is given and none is undefined.
pub fn are_defined(values: &[Value]) -> bool {
    !values.is_empty() && values.iter().all(super::is_defined)
}

//! End-to-end checks over the public predicate surface

use std::time::SystemTime;

use valcheck::predicate::*;
use valcheck::value::{Class, Function, FunctionKind, Object, RegExp, Symbol};
use valcheck::{assert_holds, assert_rejects, is_of_kind_name, kind_of, Kind, Value};

fn v(x: impl Into<Value>) -> Value {
    x.into()
}

fn arr(items: Vec<Value>) -> Value {
    Value::Array(items)
}

fn obj(members: &[(&str, Value)]) -> Value {
    members
        .iter()
        .fold(Object::builder(), |b, (k, val)| b.property(*k, val.clone()))
        .build()
        .into()
}

#[test]
fn kind_names_and_classification() {
    assert!(is_of_kind_name(&v("string"), "string"));
    assert!(is_of_kind_name(&v(4), "number"));
    assert!(is_of_kind_name(&arr(vec![]), "array"));
    assert!(!is_of_kind_name(&v(4), "string"));
    assert!(!is_of_kind_name(&v(4), "integer"));

    assert_eq!(kind_of(&v("hello")), Kind::String);
    assert_eq!(kind_of(&v(123)), Kind::Number);
    assert_eq!(kind_of(&arr(vec![])), Kind::Array);
    assert_eq!(kind_of(&obj(&[])), Kind::Object);
    assert_eq!(kind_of(&Value::Null), Kind::Null);
    assert_eq!(kind_of(&Value::Undefined), Kind::Undefined);
    assert_eq!(kind_of(&v(Function::arrow())), Kind::Function);
    assert_eq!(kind_of(&v(Symbol::anonymous())), Kind::Symbol);
}

#[test]
fn object_shapes() {
    assert!(is_object(&obj(&[])));
    for other in [arr(vec![]), Value::Null, v(123), v("text")] {
        assert_rejects!(is_object, other);
    }

    for like in [
        obj(&[]),
        v(Object::date(SystemTime::now())),
        v(Object::map(vec![])),
        v(Object::set(vec![])),
        arr(vec![]),
    ] {
        assert_holds!(is_object_like, like);
    }
    for other in [
        v(Function::arrow()),
        v("string"),
        v(123),
        v(Symbol::new("symbol")),
        v(true),
        Value::Undefined,
        Value::Null,
    ] {
        assert_rejects!(is_object_like, other);
    }

    assert!(is_empty_object(&obj(&[])));
    assert!(!is_empty_object(&obj(&[("key", v("value"))])));
    assert!(is_non_empty_object(&obj(&[("key", v("value"))])));
    for other in [obj(&[]), Value::Null, arr(vec![]), v("string"), v(123)] {
        assert_rejects!(is_non_empty_object, other);
    }
}

#[test]
fn own_and_inherited_properties() {
    let single = obj(&[("key", v("value"))]);
    assert!(!owns_property(&obj(&[]), &v(123)));
    assert!(owns_property(&single, &v("key")));
    assert!(!owns_property(&single, &v("missing")));
    assert!(!owns_property(&Value::Null, &v("key")));
    assert!(!owns_property(&obj(&[]), &v("")));

    assert!(!has_property(&obj(&[]), &v(123)));
    assert!(has_property(&single, &v("key")));
    assert!(!has_property(&single, &v("missing")));
    assert!(!has_property(&Value::Null, &v("key")));

    let parent = Class::builder("Parent")
        .field("parentProp", Value::Undefined)
        .build();
    let child = Class::builder("Child")
        .extends(&parent)
        .field("childProp", Value::Undefined)
        .build();
    let instance = v(Object::instance(&child).build());
    assert!(!owns_property(&instance, &v("parentProp")));
    assert!(has_property(&instance, &v("parentProp")));
    assert!(owns_property(&instance, &v("childProp")));

    let both = obj(&[("key1", v("value1")), ("key2", v("value2"))]);
    let names = v(vec!["key1", "key2"]);
    assert!(owns_all_properties(&both, &names));
    assert!(has_all_properties(&both, &names));
    let one = obj(&[("key1", v("value1"))]);
    assert!(!owns_all_properties(&one, &names));
    assert!(!has_all_properties(&one, &names));
    assert!(!owns_all_properties(&Value::Null, &v(vec!["key1"])));
    assert!(!owns_all_properties(&obj(&[]), &arr(vec![])));
    assert!(!has_all_properties(&obj(&[]), &arr(vec![])));
}

#[test]
fn lengths_and_indices() {
    let pair = obj(&[("key1", v("value1")), ("key2", v("value2"))]);
    assert!(!has_length(&pair, &v(1)));
    assert!(has_length(&pair, &v(2)));
    assert!(!has_length(&v("test"), &v(f64::NAN)));
    assert!(!has_length(&arr(vec![]), &v(1.5)));
    assert!(!has_length(&obj(&[]), &v(2.5)));
    assert!(has_length(&arr(vec![]), &v(0)));
    assert!(has_length(&v(vec![1, 2, 3]), &v(3)));
    assert!(has_length(&obj(&[("age", v(24))]), &v(1)));
    assert!(has_length(&v("hello"), &v(5)));
    assert!(!has_length(&v("hello"), &v(4)));

    assert!(has_index(&v(vec![1, 2, 3]), &v(1)));
    assert!(has_index(&v("hello"), &v(4)));
    assert!(!has_index(&v(vec![1, 2, 3]), &v(3)));
    assert!(!has_index(&v("hello"), &v(5)));
    for target in [obj(&[]), Value::Null, Value::Undefined, v(123)] {
        assert!(!has_index(&target, &v(0)));
    }
    assert!(!has_index(&v(vec![1, 2, 3]), &v("1")));
    assert!(!has_index(&v("hello"), &v(1.5)));
    assert!(!has_index(&v(vec![1, 2, 3]), &Value::Null));
    assert!(!has_index(&v("hello"), &Value::Undefined));
}

#[test]
fn arrays_of_kind() {
    assert!(!is_array_of_kind_name(&v("not an array"), "string"));
    assert!(!is_array_of_kind_name(&v(123), "number"));
    assert!(!is_array_of_kind_name(&obj(&[]), "object"));
    assert!(!is_array_of_kind_name(&arr(vec![]), "invalidType"));
    assert!(!is_array_of_kind_name(&arr(vec![]), "string"));
    assert!(!is_array_of_kind_name(&arr(vec![v("hello"), v(123)]), "string"));
    assert!(!is_array_of_kind_name(&arr(vec![v(1), v("hello")]), "number"));
    assert!(is_array_of_kind_name(&v(vec!["hello", "world"]), "string"));
    assert!(is_array_of_kind_name(&v(vec![1, 2, 3]), "number"));
    assert!(is_array_of_kind_name(&v(vec![true, false]), "boolean"));

    assert!(is_iterable(&arr(vec![])));
    assert!(is_iterable(&v("string")));
    assert!(is_iterable(&v(Object::set(vec![]))));
    assert!(is_iterable(&v(Object::map(vec![]))));
    for other in [obj(&[]), v(123), Value::Null, Value::Undefined] {
        assert_rejects!(is_iterable, other);
    }
}

#[test]
fn numeric_checks() {
    assert!(is_even(&v(4)) && is_even(&v(0)) && is_even(&v(-2)));
    assert!(!is_even(&v(3)) && !is_even(&v(4.5)) && !is_even(&v("4")));
    assert!(is_odd(&v(3)) && is_odd(&v(-1)));
    assert!(!is_odd(&v(4)) && !is_odd(&v(3.5)) && !is_odd(&Value::Null));

    assert!(is_between(&v(5), &v(1), &v(10)));
    assert!(!is_between(&v(1), &v(1), &v(10)));
    assert!(!is_between(&v(10), &v(1), &v(10)));
    assert!(!is_between(&v("5"), &v(1), &v(10)));
    assert!(is_between_inclusive(&v(10), &v(1), &v(10)));

    assert!(is_less_than(&v(1), &v(2)));
    assert!(!is_less_than(&v(2), &v(2)));
    assert!(!is_less_than(&v("1"), &v(2)));
    assert!(is_less_than_or_equal(&v(2), &v(2)));
    assert!(!is_less_than_or_equal(&v(3), &v(2)));
    assert!(is_greater_than(&v(3), &v(2)));
    assert!(!is_greater_than(&v(2), &v(2)));
    assert!(is_greater_than_or_equal(&v(2), &v(2)));
    assert!(!is_greater_than_or_equal(&v(1), &v(2)));
    assert!(!is_greater_than_or_equal(&v(1), &Value::Null));

    assert!(is_negative_infinity(&v(f64::NEG_INFINITY)));
    assert!(!is_negative_infinity(&v(f64::INFINITY)));
    assert!(is_infinity(&v(f64::INFINITY)));
    assert!(!is_infinity(&v(f64::NEG_INFINITY)));
    assert!(is_finite(&v(42)) && is_finite(&v(-0.5)));
    assert!(!is_finite(&v(f64::INFINITY)) && !is_finite(&v("42")));
    assert!(is_nan(&v(f64::NAN)));
    assert!(!is_nan(&v(1)) && !is_nan(&v("NaN")));
}

#[test]
fn builtins_and_regexps() {
    assert!(is_date(&v(Object::date(SystemTime::now()))));
    assert!(!is_date(&v("2024-01-01")));
    assert!(is_map(&v(Object::map(vec![]))));
    assert!(!is_map(&obj(&[])));

    let plain = v(RegExp::new("test", "").unwrap());
    let insensitive = v(RegExp::new("abc", "i").unwrap());
    assert!(is_regexp(&plain));
    assert!(!is_regexp(&v("/abc/")));
    assert!(!has_flag(&v("invalid regex"), &v("i")));
    assert!(!has_flag(&plain, &v(123)));
    assert!(has_flag(&insensitive, &v("i")));
    assert!(!has_flag(&plain, &v("i")));
}

#[test]
fn encodings() {
    assert!(!is_encoding(&v(123)));
    for name in ["ascii", "utf8", "base64"] {
        assert!(is_encoding(&v(name)));
    }
    for name in ["unknown", "utf", ""] {
        assert!(!is_encoding(&v(name)));
    }
}

#[test]
fn classes_and_functions() {
    let my_class = Class::builder("MyClass").build();
    assert!(is_class(&v(&my_class)));
    assert!(!is_class(&v(Function::new("myFunction", FunctionKind::Function))));
    assert!(!is_class(&obj(&[])));

    let parent = Class::builder("Parent").build();
    let child = Class::builder("Child").extends(&parent).build();
    let other = Class::builder("Other").build();
    assert!(is_child_of(&v(Object::instance(&child).build()), &v(&parent)));
    assert!(!is_child_of(&v(Object::instance(&other).build()), &v(&parent)));

    assert!(is_async_function(&v(Function::async_arrow())));
    assert!(!is_async_function(&v(Function::arrow())));

    assert!(are_functions(&[
        v(Function::arrow()),
        v(Function::new("", FunctionKind::Function)),
        v(Class::builder("").build()),
    ]));
    assert!(!are_functions(&[v(Function::arrow()), v("string")]));
    assert!(!are_functions(&[]));

    assert!(are_defined(&[v("value"), v(123), obj(&[])]));
    assert!(!are_defined(&[v("value"), v(123), Value::Undefined]));
    assert!(!are_defined(&[]));
}

#[test]
fn errors() {
    assert!(is_error(&v(Object::error("")), None));

    let custom = Class::builder("CustomError")
        .extends(&Class::error())
        .build();
    let custom_err = v(Object::instance(&custom).build());
    assert!(is_error(&custom_err, Some(&v(&custom))));
    assert!(is_error(&custom_err, None));

    let shape = Class::builder("Shape").build();
    let misfiled = v(Object::error_builder(&shape, "boom").build());
    assert!(is_error(&misfiled, None));
    assert!(is_error(&misfiled, Some(&v(&Class::error()))));
    assert!(!is_error(&misfiled, Some(&v(&shape))));

    for other in [v("string"), v(123), obj(&[]), v(Object::date(SystemTime::now()))] {
        assert!(!is_error(&other, None));
    }

    assert!(has_message(&v(Object::error("message"))));
    assert!(!has_message(&v(Object::error(""))));
    assert!(!has_message(&obj(&[("message", v("not an error"))])));

    assert!(has_name(&v(Object::error("message"))));
    let unnamed = Object::error_builder(&Class::error(), "message")
        .error_name("")
        .build();
    assert!(!has_name(&v(unnamed)));
    assert!(!has_name(&obj(&[("name", v("Error"))])));
}

#[test]
fn notation_grammars() {
    assert!(is_prop_name(&v("$prop")));
    assert!(!is_prop_name(&v("1prop")));
    assert!(is_number_literal(&v("123.45")));
    assert!(!is_number_literal(&v("123.")));
    assert!(is_integer_literal(&v("0")));
    assert!(!is_integer_literal(&v("123.45")));
    assert!(is_float_literal(&v("0.01")));
    assert!(!is_float_literal(&v("123")));
    assert!(is_text_literal(&v("'hello'")));
    assert!(!is_text_literal(&v("hello")));
    assert!(is_dot_notation(&v("prop.sub1.sub2")));
    assert!(!is_dot_notation(&v("prop..sub")));
    assert!(is_bracket_notation(&v(r#"prop["key"][0]"#)));
    assert!(!is_bracket_notation(&v("prop[]")));
    assert!(is_notation(&v(r#"prop["key"].sub[1]"#)));
    assert!(!is_notation(&v(r#"prop["key"sub]"#)));
}

#[test]
fn composed_predicates() {
    let user_class = Class::builder("User").field("id", 1).build();
    let admin_class = Class::builder("Admin")
        .extends(&user_class)
        .field("role", "admin")
        .build();

    let is_user_record = is_plain_object.and(has("id"));
    let is_admin = is_user_record.and(owns("role"));

    let admin = v(Object::instance(&admin_class).build());
    let user = v(Object::instance(&user_class).build());
    assert_holds!(is_admin, admin);
    assert_rejects!(is_admin, user);

    let sortable = any_of([array_of(Kind::Number), array_of(Kind::String)]);
    assert_holds!(sortable, v(vec![3, 1, 2]));
    assert_holds!(sortable, v(vec!["b", "a"]));
    assert_rejects!(sortable, arr(vec![v(1), v("a")]));

    let blanks: [fn(&Value) -> bool; 3] = [is_null, is_undefined, is_empty_text];
    let nothing_useful = none_of(blanks);
    assert_holds!(nothing_useful, v("x"));
    assert_rejects!(nothing_useful, v("   "));
}

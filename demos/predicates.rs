//! Value Predicates Example
//!
//! Walks through classification, object and array checks, the notation
//! grammars and predicate composition over dynamic values.
//!
//! Run with: cargo run --example predicates

use std::time::SystemTime;

use valcheck::predicate::*;
use valcheck::value::{Class, Object, RegExp};
use valcheck::{kind_of, Kind, Value};

fn main() {
    println!("=== Value Predicates Example ===\n");

    classification();
    objects_and_classes();
    arrays_and_numbers();
    notation();
    composition();
    real_world_example();
}

/// Demonstrates kind classification
fn classification() {
    println!("--- Classification ---\n");

    let samples = [
        Value::from("hello"),
        Value::from(42),
        Value::Null,
        Value::Undefined,
        Value::from(vec![1, 2]),
        Value::from(Object::date(SystemTime::now())),
    ];
    for sample in &samples {
        println!("  {:?} -> {}", sample, kind_of(sample));
    }

    // Names parse back into kinds; unknown names are errors
    println!("\n'array'.parse(): {:?}", "array".parse::<Kind>());
    println!("'Array'.parse(): {:?}", "Array".parse::<Kind>());
    println!();
}

/// Demonstrates own versus inherited properties
fn objects_and_classes() {
    println!("--- Objects and Classes ---\n");

    let animal = Class::builder("Animal").field("legs", 4).build();
    let dog = Class::builder("Dog")
        .extends(&animal)
        .field("name", "Rex")
        .build();
    let rex = Value::from(Object::instance(&dog).build());

    println!("owns 'name': {}", owns_property(&rex, &Value::from("name"))); // true
    println!("owns 'legs': {}", owns_property(&rex, &Value::from("legs"))); // false - inherited
    println!("has 'legs': {}", has_property(&rex, &Value::from("legs"))); // true
    println!("child of Animal: {}", is_child_of(&rex, &Value::from(&animal))); // true
    println!("Dog is a class: {}", is_class(&Value::from(&dog))); // true

    let boom = Value::from(Object::error("disk full"));
    println!("\nis_error: {}", is_error(&boom, None)); // true
    println!("has_message: {}", has_message(&boom)); // true

    let re = Value::from(RegExp::new("^[a-z]+$", "gi").unwrap_or_else(|e| panic!("{e}")));
    println!("regex has 'i': {}", has_flag(&re, &Value::from("i"))); // true
    println!();
}

/// Demonstrates array and number predicates
fn arrays_and_numbers() {
    println!("--- Arrays and Numbers ---\n");

    let scores = Value::from(vec![90, 85, 77]);
    println!("array of numbers: {}", is_array_of_kind(&scores, Kind::Number)); // true
    println!("has index 2: {}", has_index(&scores, &Value::from(2))); // true
    println!("has length 3: {}", has_length(&scores, &Value::from(3))); // true
    println!(
        "empty array of anything: {}",
        is_array_of_kind(&Value::Array(vec![]), Kind::Number)
    ); // false

    let (lo, hi) = (Value::from(0), Value::from(10));
    println!("\nis_between(10, 0, 10): {}", is_between(&Value::from(10), &lo, &hi)); // false - open
    println!(
        "is_between_inclusive(10, 0, 10): {}",
        is_between_inclusive(&Value::from(10), &lo, &hi)
    ); // true
    println!("is_nan(NaN): {}", is_nan(&Value::from(f64::NAN))); // true
    println!("is_integer(\"5\"): {}", is_integer(&Value::from("5"))); // false - text
    println!();
}

/// Demonstrates the lexical grammars
fn notation() {
    println!("--- Notation ---\n");

    for path in ["user.address.city", "items[0]", r#"items[0]["sku"].price"#, "items[0]sku", "a..b"] {
        let v = Value::from(path);
        println!(
            "  {:<24} dot={:<5} bracket={:<5} notation={}",
            path,
            is_dot_notation(&v),
            is_bracket_notation(&v),
            is_notation(&v)
        );
    }
    println!();
}

/// Demonstrates composing predicates
fn composition() {
    println!("--- Composition ---\n");

    let positive_integer = is_integer.and(|v: &Value| is_greater_than(v, &Value::from(0)));
    println!("positive_integer(5): {}", positive_integer.check(&Value::from(5))); // true
    println!("positive_integer(-5): {}", positive_integer.check(&Value::from(-5))); // false

    let present = is_null.or(is_undefined).not();
    println!("present(0): {}", present.check(&Value::from(0))); // true
    println!("present(null): {}", present.check(&Value::Null)); // false

    let scalar = any_of([of_kind(Kind::String), of_kind(Kind::Number), of_kind(Kind::Boolean)]);
    println!("scalar(true): {}", scalar.check(&Value::from(true))); // true
    println!();
}

/// A request body checked field by field
fn real_world_example() {
    println!("--- Real World: Request Body ---\n");

    fn check_body(body: Value) -> Result<Value, String> {
        let body = validate(body, is_plain_object, "body must be an object".to_string())?;
        let body = validate(
            body,
            has("email").and(has("tags")),
            "email and tags are required".to_string(),
        )?;
        let field = |name: &str| {
            body.as_object()
                .and_then(|obj| obj.own_property(name))
                .map(|p| p.value.clone())
                .unwrap_or_default()
        };
        validate_with(field("email"), is_non_empty_text, |v| {
            format!("email must be non-empty text, got {}", kind_of(v))
        })?;
        validate_with(field("tags"), array_of(Kind::String), |v| {
            format!("tags must be a non-empty array of text, got {:?}", v)
        })?;
        Ok(body)
    }

    let good = Value::from(
        Object::builder()
            .property("email", "ada@example.com")
            .property("tags", vec!["admin"])
            .build(),
    );
    let bad = Value::from(
        Object::builder()
            .property("email", "   ")
            .property("tags", vec!["admin"])
            .build(),
    );
    println!("good: {:?}", check_body(good).is_ok());
    println!("bad: {:?}", check_body(bad));
    println!("not an object: {:?}", check_body(Value::from(3)));
}

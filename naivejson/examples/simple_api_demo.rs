// Example demonstrating the parse API on a few scalar documents

use naivejson::{parse, ParseError, Value, ValueKind};

fn describe(v: &Value) -> String {
    match v.kind() {
        ValueKind::Number => format!("Number: {}", v.number()),
        ValueKind::String => format!(
            "String: {:?} ({} bytes)",
            v.json_string(),
            v.string_len()
        ),
        other => format!("{:?}", other),
    }
}

fn main() -> Result<(), ParseError> {
    let inputs = ["null", " true ", "-12.75", "\"hello\"", "1e5", "\"open"];

    let mut value = Value::default();
    for input in inputs {
        print!("Input: {:<12} => ", format!("{:?}", input));
        match parse(&mut value, input) {
            Ok(()) => println!("{}", describe(&value)),
            Err(e) => println!("Error: {}", e),
        }
    }
    value.release();

    // Values can also be built directly.
    let parsed: Value = "\"direct\"".parse()?;
    println!();
    println!("Parsed with FromStr: {}", describe(&parsed));
    Ok(())
}

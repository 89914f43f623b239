#![no_main]
use jsonbump::{Arena, Printer, Value, parse_slice};
use libfuzzer_sys::fuzz_target;

/// Trees holding non-finite numbers print as `inf`/`NaN`, which the number
/// grammar cannot read back.
fn all_finite(value: &Value<'_>) -> bool {
    match value {
        Value::Number(n) => n.is_finite(),
        Value::Array(items) => items.iter().all(all_finite),
        Value::Object(map) => map.iter().all(|(_, v)| all_finite(v)),
        Value::Null | Value::Boolean(_) | Value::String(_) => true,
    }
}

fn parser(data: &[u8]) {
    let arena = Arena::new();
    let Ok(value) = parse_slice(data, &arena) else {
        return;
    };
    if !all_finite(&value) {
        return;
    }

    // Whatever parsed must survive a print/reparse cycle unchanged.
    let printed = Printer::new(2).to_vec(&value);
    let arena2 = Arena::new();
    let reparsed = parse_slice(&printed, &arena2).expect("printed output must reparse");
    assert_eq!(value, reparsed);
}

fuzz_target!(|data: &[u8]| parser(data));

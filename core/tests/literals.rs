//! Public surface of sqlforge-core used together: values, literals,
//! identifiers and parameter sinks.

use sqlforge_core::{
    IdentQuote, ParamList, ParameterSink, Placeholder, RawLiteral, Value, escape_identifier,
    format_literal,
};

#[test]
fn test_quoted_text_has_no_unpaired_quote() {
    for input in ["'", "a'b", "''x'", "no quotes"] {
        let literal = format_literal(&Value::from(input));
        let body = &literal[1..literal.len() - 1];
        assert_eq!(body.matches('\'').count() % 2, 0, "{literal}");
        assert_eq!(body.replace("''", "'"), input);
    }
}

#[test]
fn test_escape_identifier_presets() {
    assert_eq!(escape_identifier("order"), "`order`");
    assert_eq!(IdentQuote::double_quote().escape("order"), "\"order\"");
    assert_eq!(IdentQuote::brackets().escape("[order]"), "[order]");

    let quote = IdentQuote::new('<', '>');
    assert_eq!(quote.escape(&quote.escape("x")), "<x>");
}

#[test]
fn test_bound_placeholders_are_raw_literals() {
    let mut params = ParamList::new();
    let placeholder = params.bind(Value::from("O'Brien"));

    assert_eq!(placeholder, RawLiteral::new(Placeholder::indexed(0).to_string()));
    // A placeholder formats verbatim, never quoted.
    assert_eq!(format_literal(&Value::from(placeholder)), "@P0");
    assert_eq!(params.get("@P0"), Some(&Value::from("O'Brien")));
}

#[test]
fn test_values_display_as_literals() {
    assert_eq!(Value::from(Some("x")).to_string(), "'x'");
    assert_eq!(Value::from(None::<&str>).to_string(), "NULL");
    assert_eq!(Value::from(-3_i8).to_literal(), "-3");
}

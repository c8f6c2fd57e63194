use defaults_and_capture as dac;
use dac::capture::Outer;
use dac::select::SelectOptions;

fn triple(opts: SelectOptions) -> (i64, i64, i64) {
    (opts.start, opts.end, opts.step)
}

#[test]
fn test_full_mapping() {
    let opts = dac::resolve_json(r#"{"start":10,"end":30,"step":2}"#).unwrap();
    assert_eq!(triple(opts), (10, 30, 2));
}

#[test]
fn test_partial_mapping_step_only() {
    let opts = dac::resolve_json(r#"{"step":3}"#).unwrap();
    assert_eq!(triple(opts), (0, -1, 3));
}

#[test]
fn test_empty_mapping() {
    let opts = dac::resolve_json("{}").unwrap();
    assert_eq!(triple(opts), (0, -1, 1));
}

#[test]
fn test_no_argument() {
    // An empty string stands in for the no-argument call.
    let opts = dac::resolve_json("").unwrap();
    assert_eq!(triple(opts), (0, -1, 1));
}

// The method creates an inner record with foo=234 and a fixed-context
// field-function; invoking that function through the inner record still
// reports the outer record's foo.
#[test]
fn test_capture_scenario() {
    let obj = Outer { foo: 123 };
    assert_eq!(obj.bar(), (123, 123));
}

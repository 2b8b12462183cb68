use weft::{DefaultValue, Kind, ObjectAtPath, Path, ROOT, Value, ValueSource, ValueSources};

use crate::fixtures::{CONTACT, parsed_integer, raw};

#[test]
fn object_at_path_needs_path_and_kind() {
    weft_testhelpers::setup();

    let data = raw(&[("name", Value::from("Ada")), ("age", Value::from("36"))]);

    let name = ObjectAtPath::new(Path::new().then("name"), Kind::String);
    assert_eq!(name.extract(&data), Some(Value::from("Ada")));

    let missing = ObjectAtPath::new(Path::new().then("email"), Kind::String);
    assert_eq!(missing.extract(&data), None);

    let wrong_kind = ObjectAtPath::new(Path::new().then("age"), Kind::I64);
    assert_eq!(wrong_kind.extract(&data), None);

    let converted = ObjectAtPath::new(Path::new().then("age"), parsed_integer());
    assert_eq!(converted.extract(&data), Some(Value::I64(36)));

    let no_kind = ObjectAtPath::without_kind(Path::new().then("name"));
    assert_eq!(no_kind.extract(&data), None);
}

#[test]
fn object_at_root_reads_the_whole_input() {
    weft_testhelpers::setup();

    let source = ObjectAtPath::new(ROOT, Kind::String);
    assert_eq!(source.extract(&Value::from("whole")), Some(Value::from("whole")));
    assert_eq!(source.extract(&Value::Nil), None);
}

#[test]
fn private_fields_in_the_input_are_unreadable() {
    weft_testhelpers::setup();

    let data = Value::structure(&CONTACT, [("token", Value::from("s3cret"))]).unwrap();
    let source = ObjectAtPath::new(Path::new().then("token"), Kind::String);
    assert_eq!(source.extract(&data), None);
}

#[test]
fn fallback_list_yields_first_success() {
    weft_testhelpers::setup();

    let data = raw(&[]);
    let sources = ValueSources::new()
        .or(ObjectAtPath::new(Path::new().then("missing"), Kind::I64))
        .or(DefaultValue::new(42_i64));
    assert_eq!(sources.extract(&data), Some(Value::I64(42)));

    let first = ValueSources::new()
        .or(DefaultValue::new(1_i64))
        .or(DefaultValue::new(2_i64));
    assert_eq!(first.extract(&data), Some(Value::I64(1)));
}

#[test]
fn fallback_list_can_fail() {
    weft_testhelpers::setup();

    let data = raw(&[("age", Value::from(true))]);
    assert_eq!(ValueSources::new().extract(&data), None);

    let sources = ValueSources::new()
        .or(ObjectAtPath::new(Path::new().then("age"), Kind::I64))
        .or(ObjectAtPath::new(Path::new().then("age"), parsed_integer()));
    assert_eq!(sources.extract(&data), None);
}

#[test]
fn absent_sources_are_skipped() {
    weft_testhelpers::setup();

    let sources = ValueSources::new()
        .or(None::<DefaultValue>)
        .or(Some(DefaultValue::new("present")));
    assert_eq!(sources.extract(&Value::Nil), Some(Value::from("present")));
}

#[test]
fn sources_nest() {
    weft_testhelpers::setup();

    let inner = ValueSources::new().or(ObjectAtPath::new(Path::new().then("nick"), Kind::String));
    let outer = ValueSources::new()
        .or(inner)
        .or(ObjectAtPath::new(Path::new().then("name"), Kind::String));

    let data = raw(&[("name", Value::from("Ada"))]);
    assert_eq!(outer.extract(&data), Some(Value::from("Ada")));
}

#[test]
fn interface_input_is_read_through_at_the_root() {
    weft_testhelpers::setup();

    let data = Value::from(12_i64).into_interface().unwrap();
    let source = ObjectAtPath::new(ROOT, Kind::I64);
    assert_eq!(source.extract(&data), Some(Value::I64(12)));
    assert_eq!(
        ObjectAtPath::new(Path::new(), Kind::I64).extract(&data),
        Some(Value::I64(12))
    );
}

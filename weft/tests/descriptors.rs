use weft::{
    DefaultValue, Describable, Descriptor, Fillers, Kind, ObjectAtPath, ObjectFiller, Path, Shape,
    Tally, Value, ValueSources, kind_of, pointer_of, shapes, type_of_new,
};

use crate::fixtures::{ADDRESS, ADDRESS_PTR, CONTACT, parsed_integer, raw};

/// Read `name` from the input if it is a string, else fall back.
fn string_field(name: &'static str, fallback: &'static str) -> ObjectFiller {
    ObjectFiller::new(
        ValueSources::new()
            .or(ObjectAtPath::new(Path::new().then(name), Kind::String))
            .or(DefaultValue::new(fallback)),
    )
    .at(Path::new().then(name))
}

fn contact_descriptor() -> Descriptor {
    Descriptor::new(
        &CONTACT,
        Fillers::new()
            .with(string_field("name", "anonymous"))
            .with(string_field("email", "nobody@example.com")),
    )
}

#[test]
fn present_and_defaulted_fields() {
    weft_testhelpers::setup();

    let data = raw(&[("name", Value::from("Ada"))]);
    let (contact, tally) = contact_descriptor().describe(&data);
    let contact = contact.unwrap();

    assert_eq!(tally, Tally::new(2, 0));
    assert_eq!(contact.field("name"), Some(&Value::from("Ada")));
    assert_eq!(contact.field("email"), Some(&Value::from("nobody@example.com")));
    insta::assert_snapshot!(
        contact,
        @r#"Contact { name: "Ada", email: "nobody@example.com", age: 0, home: nil, extra: nil, token: "" }"#
    );
}

#[test]
fn partial_failure_still_builds() {
    weft_testhelpers::setup();

    let descriptor = Descriptor::new(
        &CONTACT,
        Fillers::new()
            .with(string_field("name", "anonymous"))
            .with(
                ObjectFiller::new(ObjectAtPath::new(Path::new().then("age"), Kind::I64))
                    .at(Path::new().then("age")),
            ),
    );

    let (contact, tally) = descriptor.describe(&raw(&[("age", Value::from("36"))]));
    assert_eq!(tally, Tally::new(1, 1));
    let contact = contact.unwrap();
    assert_eq!(contact.field("name"), Some(&Value::from("anonymous")));
    assert_eq!(contact.field("age"), Some(&Value::I64(0)));
}

#[test]
fn each_build_starts_from_zero() {
    weft_testhelpers::setup();

    let descriptor = Descriptor::new(
        &CONTACT,
        ObjectFiller::new(ObjectAtPath::new(Path::new().then("age"), parsed_integer()))
            .at(Path::new().then("age")),
    );

    let (first, _) = descriptor.describe(&raw(&[("age", Value::from("7"))]));
    let (second, tally) = descriptor.describe(&raw(&[]));
    assert_eq!(first.unwrap().field("age"), Some(&Value::I64(7)));
    assert_eq!(second.unwrap().field("age"), Some(&Value::I64(0)));
    assert_eq!(tally, Tally::FAILURE);
}

#[test]
fn unconfigured_descriptors_report_the_sentinel() {
    weft_testhelpers::setup();

    let data = raw(&[("name", Value::from("Ada"))]);
    let no_shape = Descriptor {
        shape: None,
        ..contact_descriptor()
    };
    let no_filler = Descriptor {
        shape: Some(&CONTACT),
        filler: None,
    };

    for describable in [Descriptor::default(), no_shape, no_filler] {
        let (built, tally) = describable.describe(&data);
        assert_eq!(built, None);
        assert_eq!(tally, Tally::NOT_CONFIGURED);
        assert_eq!(tally, Tally::new(0, 0x7fff));
        assert!(tally.is_not_configured());
    }

    assert_eq!(None::<Descriptor>.describe(&data), (None, Tally::NOT_CONFIGURED));
}

#[test]
fn prototypes_are_zero_values() {
    weft_testhelpers::setup();

    assert_eq!(contact_descriptor().prototype(), Some(Value::zero(&CONTACT)));

    let shape_only = Descriptor {
        shape: Some(&ADDRESS),
        filler: None,
    };
    assert_eq!(shape_only.prototype(), Some(Value::zero(&ADDRESS)));
    assert_eq!(Descriptor::default().prototype(), None);
    assert_eq!(None::<Descriptor>.prototype(), None);
}

#[test]
fn pointer_targets_are_allocated() {
    weft_testhelpers::setup();

    let descriptor = Descriptor::new(
        &ADDRESS_PTR,
        ObjectFiller::new(DefaultValue::new("York")).at(Path::new().then("city")),
    );
    let (address, tally) = descriptor.describe(&Value::Nil);
    assert_eq!(tally, Tally::SUCCESS);
    insta::assert_snapshot!(address.unwrap(), @r#"&Address { city: "York" }"#);
}

#[test]
fn pointer_helpers_round_trip() {
    weft_testhelpers::setup();

    let address = Value::zero(&ADDRESS);
    let pointer = pointer_of(address.clone()).unwrap();
    let pointee: &'static Shape = type_of_new(&pointer).unwrap();

    assert_eq!(pointee, &ADDRESS);
    assert_eq!(kind_of(&pointer), Kind::Pointer);
    assert_eq!(pointer.pointee(), Some(&address));
    assert!(core::ptr::eq(
        pointer.shape().unwrap(),
        pointer_of(Value::zero(&ADDRESS)).unwrap().shape().unwrap()
    ));

    assert_eq!(type_of_new(&address), None);
    assert_eq!(pointer_of(Value::Nil), None);
    assert_eq!(type_of_new(&pointer_of(Value::from(1_u8)).unwrap()), Some(&shapes::U8));
}

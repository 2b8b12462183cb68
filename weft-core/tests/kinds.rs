use weft_core::{Kind, Shape, Value, classify, shapes};

static COUNTS: Shape = Shape::map("HashMap<String, u32>", &shapes::STRING, &shapes::U32);

#[test]
fn scalars_classify_by_width() {
    weft_testhelpers::setup();

    assert_eq!(classify(&Value::from(true)), Kind::Bool);
    assert_eq!(classify(&Value::from(1_i8)), Kind::I8);
    assert_eq!(classify(&Value::from(1_i32)), Kind::I32);
    assert_eq!(classify(&Value::from(1_isize)), Kind::Isize);
    assert_eq!(classify(&Value::from(1_u64)), Kind::U64);
    assert_eq!(classify(&Value::Uintptr(1)), Kind::Uintptr);
    assert_eq!(classify(&Value::from(1.5_f32)), Kind::F32);
    assert_eq!(classify(&Value::Complex128(1.0, 2.0)), Kind::Complex128);
    assert_eq!(classify(&Value::from("text")), Kind::String);
}

#[test]
fn nil_is_invalid() {
    weft_testhelpers::setup();

    assert_eq!(classify(&Value::Nil), Kind::Invalid);
    assert_eq!(classify(&Value::default()), Kind::Invalid);
}

#[test]
fn composites_classify_by_shape() {
    weft_testhelpers::setup();

    assert_eq!(classify(&Value::zero(&COUNTS)), Kind::Map);
    assert_eq!(classify(&Value::zero(&shapes::ANY)), Kind::Interface);
    assert_eq!(
        classify(&Value::from(3_u8).into_pointer().unwrap()),
        Kind::Pointer
    );
}

#[test]
fn opaque_handles_classify_by_their_shape() {
    weft_testhelpers::setup();

    static CALLBACK: Shape = Shape::new("fn()", weft_core::Def::Function);
    static EVENTS: Shape = Shape::new("chan Event", weft_core::Def::Channel);

    assert_eq!(classify(&Value::zero(&CALLBACK)), Kind::Function);
    assert_eq!(classify(&Value::zero(&EVENTS)), Kind::Channel);
}

#[test]
fn kind_names() {
    weft_testhelpers::setup();

    let names = [
        Kind::Invalid,
        Kind::Uintptr,
        Kind::Complex64,
        Kind::List,
        Kind::Interface,
        Kind::UnsafePointer,
    ]
    .map(|kind| kind.to_string())
    .join(", ");
    insta::assert_snapshot!(names, @"invalid, uintptr, complex64, list, interface, unsafe pointer");
}

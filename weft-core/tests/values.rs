use weft_core::{Field, Shape, Value, Visibility, shapes};

static INNER_FIELDS: [Field; 1] = [Field::new("flag", &shapes::BOOL)];
static INNER: Shape = Shape::structure("Inner", &INNER_FIELDS);
static INNER_PTR: Shape = Shape::pointer("*Inner", &INNER);
static TRIPLE: Shape = Shape::array("[i32; 3]", &shapes::I32, 3);
static NAMES: Shape = Shape::list("Vec<String>", &shapes::STRING);
static SCORES: Shape = Shape::map("HashMap<String, f64>", &shapes::STRING, &shapes::F64);

static OUTER_FIELDS: [Field; 6] = [
    Field::new("triple", &TRIPLE),
    Field::new("names", &NAMES),
    Field::new("scores", &SCORES),
    Field::new("inner", &INNER),
    Field::new("next", &INNER_PTR),
    Field::private("any", &shapes::ANY),
];
static OUTER: Shape = Shape::structure("Outer", &OUTER_FIELDS);

static OTHER_FIELDS: [Field; 1] = [Field::new("flag", &shapes::BOOL)];
static OTHER: Shape = Shape::structure("Other", &OTHER_FIELDS);

#[test]
fn zero_values_are_built_from_shapes() {
    weft_testhelpers::setup();

    let outer = Value::zero(&OUTER);
    insta::assert_snapshot!(
        outer.to_string(),
        @"Outer { triple: [0, 0, 0], names: [], scores: {}, inner: Inner { flag: false }, next: nil, any: nil }"
    );
    assert_eq!(outer.field("triple").and_then(|t| t.get(2)), Some(&Value::I32(0)));
    assert_eq!(OUTER.field("any").map(|(i, f)| (i, f.visibility)), Some((5, Visibility::Private)));
}

#[test]
fn structurally_identical_structs_are_distinct_types() {
    weft_testhelpers::setup();

    assert!(!INNER.is_assignable_to(&OTHER));
    assert_eq!(Value::zero(&INNER).fit(&OTHER), None);
    assert_eq!(
        Value::zero(&INNER).fit(&INNER),
        Some(Value::zero(&INNER))
    );
}

#[test]
fn anything_fits_an_interface() {
    weft_testhelpers::setup();

    let wrapped = Value::from(5_u16).fit(&shapes::ANY).unwrap();
    assert_eq!(wrapped.content(), Some(&Value::U16(5)));
    assert_eq!(wrapped.shape(), Some(&shapes::ANY));

    // already an interface: re-wrapped, not nested
    static ERROR: Shape = Shape::interface("error");
    let rewrapped = wrapped.fit(&ERROR).unwrap();
    assert_eq!(rewrapped.shape(), Some(&ERROR));
    assert_eq!(rewrapped.content(), Some(&Value::U16(5)));
}

#[test]
fn nil_fits_nowhere() {
    weft_testhelpers::setup();

    assert_eq!(Value::Nil.fit(&shapes::ANY), None);
    assert_eq!(Value::Nil.fit(&shapes::STRING), None);
}

#[test]
fn builders_check_child_shapes() {
    weft_testhelpers::setup();

    assert!(Value::list(&NAMES, [Value::from("a"), Value::from("b")]).is_some());
    assert_eq!(Value::list(&NAMES, [Value::from(1_i32)]), None);
    assert_eq!(Value::array(&TRIPLE, [Value::from(1_i32)]), None);
    assert_eq!(Value::list(&TRIPLE, Vec::new()), None);
    assert_eq!(
        Value::structure(&INNER, [("missing", Value::from(true))]),
        None
    );

    let scores = Value::map(&SCORES, [(Value::from("ada"), Value::from(9.5_f64))]).unwrap();
    assert_eq!(scores.get_key(&Value::from("ada")), Some(&Value::F64(9.5)));
    insta::assert_snapshot!(scores.to_string(), @r#"{"ada": 9.5}"#);
}

#[test]
fn scalars_display_plainly() {
    weft_testhelpers::setup();

    let shown = [
        Value::from(-3_i8),
        Value::from(true),
        Value::Complex64(1.0, -2.0),
        Value::from("quoted"),
        Value::Nil,
    ]
    .iter()
    .map(ToString::to_string)
    .collect::<Vec<_>>()
    .join(" ");
    insta::assert_snapshot!(shown, @r#"-3 true (1-2i) "quoted" nil"#);
}

#[test]
fn values_key_maps() {
    weft_testhelpers::setup();

    let mut seen = std::collections::HashSet::new();
    assert!(seen.insert(Value::from("a")));
    assert!(seen.insert(Value::from(1_i32)));
    assert!(seen.insert(Value::from(1_i64)));
    assert!(!seen.insert(Value::from("a")));
    assert!(seen.insert(Value::zero(&INNER)));
}

#[test]
fn typed_accessors() {
    weft_testhelpers::setup();

    assert_eq!(Value::from(true).as_bool(), Some(true));
    assert_eq!(Value::from(1_i32).as_bool(), None);
    assert_eq!(Value::from(0.5_f32).as_f64(), Some(0.5));
    assert_eq!(Value::from(2.5_f64).as_f64(), Some(2.5));
    assert_eq!(Value::from("2.5").as_f64(), None);

    let boxed = Value::from(7_u32).into_interface().unwrap();
    assert_eq!(boxed.shape(), Some(&shapes::ANY));
    assert_eq!(boxed.content(), Some(&Value::U32(7)));
    assert_eq!(Value::Nil.into_interface(), None);
}

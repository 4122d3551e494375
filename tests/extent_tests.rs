use xygraph_rs::core::{Datum, Extent, categories, extent};

#[test]
fn extent_spans_finite_values_across_series() {
    let first = vec![Datum::Number(3.0), Datum::Number(-2.5), Datum::Undefined];
    let second = vec![
        Datum::Number(f64::NAN),
        Datum::Number(f64::INFINITY),
        Datum::Category("x".to_owned()),
        Datum::Number(12.0),
    ];

    let result = extent([first.as_slice(), second.as_slice()]);
    assert_eq!(result, Extent::new(-2.5, 12.0));
}

#[test]
fn extent_of_nothing_is_empty() {
    assert!(extent(std::iter::empty::<&[Datum]>()).is_empty());

    let empty: Vec<Datum> = Vec::new();
    assert_eq!(extent([empty.as_slice()]), Extent::empty());

    let non_finite = vec![Datum::Undefined, Datum::Number(f64::NEG_INFINITY)];
    let result = extent([non_finite.as_slice()]);
    assert_eq!(result.as_pair(), None);
}

#[test]
fn single_point_extent_is_degenerate() {
    let values = vec![Datum::Number(4.0)];
    assert_eq!(extent([values.as_slice()]), Extent::new(4.0, 4.0));
}

#[test]
fn categories_are_distinct_in_first_seen_order() {
    let first = vec![
        Datum::Category("b".to_owned()),
        Datum::Category("a".to_owned()),
    ];
    let second = vec![
        Datum::Category("b".to_owned()),
        Datum::Number(1.0),
        Datum::Undefined,
    ];

    assert_eq!(
        categories([first.as_slice(), second.as_slice()]),
        vec!["b", "a", "1", "undefined"]
    );
}

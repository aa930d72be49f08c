//! Property tests for argument binding and record mutation.
//!
//! These tests use `proptest` to generate argument lists and sequences of
//! field updates, and check that the record always reflects the last value
//! written to each field.

use person_record::prelude::*;
use proptest::prelude::*;

/// Operations we can perform on a record.
#[derive(Debug, Clone)]
enum PersonOp {
    SetFirst(String),
    SetLast(String),
    SetNumber(i64),
    ClearFirst,
    ClearLast,
}

fn name_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z][a-z]{0,11}"
}

fn person_op_strategy() -> impl Strategy<Value = PersonOp> {
    prop_oneof![
        name_strategy().prop_map(PersonOp::SetFirst),
        name_strategy().prop_map(PersonOp::SetLast),
        any::<i64>().prop_map(PersonOp::SetNumber),
        Just(PersonOp::ClearFirst),
        Just(PersonOp::ClearLast),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(2_000))]

    #[test]
    fn any_keyword_subset_keeps_unspecified_defaults(
        first in proptest::option::of(name_strategy()),
        last in proptest::option::of(name_strategy()),
        number in proptest::option::of(any::<i64>()),
    ) {
        let mut keywords = Vec::new();
        if let Some(f) = &first {
            keywords.push(("first_name", FieldValue::from(f.as_str())));
        }
        if let Some(l) = &last {
            keywords.push(("last_name", FieldValue::from(l.as_str())));
        }
        if let Some(n) = number {
            keywords.push(("number", FieldValue::Int(n)));
        }

        let person = Person::from_config(bind_arguments(Vec::new(), keywords).unwrap());
        let expected_first = first.unwrap_or_else(|| DEFAULT_FIRST_NAME.to_owned());
        let expected_last = last.unwrap_or_else(|| DEFAULT_LAST_NAME.to_owned());
        let expected_number = number.unwrap_or(DEFAULT_NUMBER);

        prop_assert_eq!(&**person.first_name().unwrap(), expected_first.as_str());
        prop_assert_eq!(&**person.last_name().unwrap(), expected_last.as_str());
        prop_assert_eq!(person.number(), expected_number);
        prop_assert_eq!(
            person.describe().unwrap(),
            format!(
                "Person(first_name={expected_first}, last_name={expected_last}, number={expected_number})"
            )
        );
    }

    #[test]
    fn more_than_three_positionals_always_fail(extra in 1usize..8) {
        let positional: Vec<FieldValue> = (0..3 + extra as i64).map(FieldValue::Int).collect();
        prop_assert_eq!(
            bind_arguments(positional, Vec::<(&str, FieldValue)>::new()),
            Err(PersonError::Arity { given: 3 + extra, max: 3 })
        );
    }

    #[test]
    fn mutation_sequences_track_last_write(ops in prop::collection::vec(person_op_strategy(), 1..40)) {
        let mut person = Person::new();
        let mut first = Some(DEFAULT_FIRST_NAME.to_owned());
        let mut last = Some(DEFAULT_LAST_NAME.to_owned());
        let mut number = DEFAULT_NUMBER;

        for op in ops {
            match op {
                PersonOp::SetFirst(v) => {
                    person.set_first_name(v.as_str());
                    first = Some(v);
                }
                PersonOp::SetLast(v) => {
                    person.set_last_name(v.as_str());
                    last = Some(v);
                }
                PersonOp::SetNumber(n) => {
                    person.set_number(n);
                    number = n;
                }
                PersonOp::ClearFirst => {
                    person.clear_first_name();
                    first = None;
                }
                PersonOp::ClearLast => {
                    person.clear_last_name();
                    last = None;
                }
            }
        }

        prop_assert_eq!(person.number(), number);
        match (&first, &last) {
            (Some(f), Some(l)) => {
                prop_assert_eq!(person.name().unwrap(), format!("{f} {l}"));
            }
            (None, _) => {
                prop_assert_eq!(
                    person.name(),
                    Err(PersonError::MissingField { field: "first_name" })
                );
            }
            (Some(_), None) => {
                prop_assert_eq!(
                    person.name(),
                    Err(PersonError::MissingField { field: "last_name" })
                );
            }
        }
    }
}

/*!
 * Pointer Setter Tests
 */

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use scoped_guards::core::guard::*;

/// Classify with several exit paths and a single write-back point
fn classify(n: i64, out: Option<&mut String>) -> bool {
    let mut label = PointerSetter::new(out);
    if n == 0 {
        return false;
    }
    label.set("nonzero".into());
    if n < 0 {
        label.set("negative".into());
        return true;
    }
    if n % 2 == 0 {
        label.set("even".into());
    }
    true
}

#[test]
fn test_multiple_exit_paths() {
    let mut out = String::from("unset");

    assert!(!classify(0, Some(&mut out)));
    assert_eq!(out, "unset");

    assert!(classify(-3, Some(&mut out)));
    assert_eq!(out, "negative");

    assert!(classify(4, Some(&mut out)));
    assert_eq!(out, "even");

    assert!(classify(7, Some(&mut out)));
    assert_eq!(out, "nonzero");
}

#[test]
fn test_null_destination_is_harmless() {
    assert!(classify(-1, None));
    assert!(!classify(0, None));
}

#[test]
fn test_struct_destination() {
    #[derive(Debug, Clone, PartialEq, Default)]
    struct Geometry {
        width: u32,
        height: u32,
    }

    let mut geometry = Geometry::default();
    {
        let mut setter = PointerSetter::to(&mut geometry);
        setter.set(Geometry { width: 10, height: 20 });
        setter.set(Geometry { width: 640, height: 480 });
    }
    assert_eq!(geometry, Geometry { width: 640, height: 480 });
}

#[test]
fn test_write_back_on_panic() {
    let mut out = 0u32;

    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        let mut setter = PointerSetter::to(&mut out);
        setter.set(11);
        panic!("after assignment");
    }));

    assert!(result.is_err());
    assert_eq!(out, 11);
}

proptest! {
    #[test]
    fn prop_last_assignment_written(
        initial in any::<i32>(),
        values in proptest::collection::vec(any::<i32>(), 0..32),
    ) {
        let mut out = initial;
        {
            let mut setter = PointerSetter::to(&mut out);
            for v in &values {
                setter.set(*v);
            }
        }
        prop_assert_eq!(out, values.last().copied().unwrap_or(initial));
    }

    #[test]
    fn prop_null_destination_accepts_everything(
        values in proptest::collection::vec(any::<i32>(), 0..32),
    ) {
        let mut setter = PointerSetter::null();
        for v in &values {
            prop_assert_eq!(*setter.set(*v), *v);
        }
        prop_assert_eq!(setter.value().copied(), values.last().copied());
    }
}

#![no_main]

use libfuzzer_sys::fuzz_target;
use picotime::{
    fuzz::is_canonical,
    time::{combine, Duration, Moment},
};

fuzz_target!(|input: (i64, i64, i64, i64, i64)| {
    let (a_seconds, a_picos, b_seconds, b_picos, factor) = input;
    let a = Duration::new(a_seconds, a_picos);
    let b = Duration::new(b_seconds, b_picos);

    let sum = a + b;
    let difference = a - b;
    let product = a * factor;

    for value in [a, b, sum, difference, product, -a] {
        assert!(is_canonical(&value.as_scalar()));
    }

    if a.is_special() || b.is_special() {
        assert_eq!(sum.category(), combine(a.category(), b.category()));
    }

    let reversed = b + a;
    if sum.is_nan() {
        assert!(reversed.is_nan());
    } else {
        assert_eq!(sum, reversed);
    }

    if !a.is_nan() {
        assert_eq!(-(-a), a);
        let parsed: Duration = a.to_string().parse().unwrap();
        assert_eq!(parsed, a);
    }

    if factor == 0 {
        assert!(product.is_zero());
    }

    let start = Moment::from_since_epoch(a);
    let end = start + b;
    if start.is_number() && end.is_number() {
        assert_eq!(end - start, b);
    }

    let narrow = a.convert::<i16>();
    assert!(is_canonical(&narrow.as_scalar()));
    assert!(is_canonical(&(narrow + b.convert()).as_scalar()));
});

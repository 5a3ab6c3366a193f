use proptest::prelude::*;

use super::*;

fn fraction() -> impl Strategy<Value = Fraction> {
    (-1_000_000i64..=1_000_000, -1_000_000i64..=1_000_000)
        .prop_filter("zero denominator", |(_, d)| *d != 0)
        .prop_map(|(n, d)| Fraction::new(n, d).unwrap())
}

proptest! {
    #[test]
    fn zero_denominator_is_rejected(n in any::<i64>()) {
        prop_assert_eq!(Fraction::new(n, 0), Err(FractionError::ZeroDenominator));
    }

    #[test]
    fn construction_is_canonical(n in (i64::MIN + 1)..=i64::MAX, d in (i64::MIN + 1)..=i64::MAX) {
        prop_assume!(d != 0);
        let value = Fraction::new(n, d).unwrap();

        prop_assert!(value.denominator() > 0);
        prop_assert_eq!(
            gcd(value.numerator().unsigned_abs().into(), value.denominator().unsigned_abs().into()),
            1
        );
    }

    #[test]
    fn sign_moves_to_numerator(n in (i64::MIN + 1)..=i64::MAX, d in (i64::MIN + 1)..=i64::MAX) {
        prop_assume!(d != 0);

        prop_assert_eq!(Fraction::new(n, d), Fraction::new(-n, -d));
    }

    #[test]
    fn exactly_one_ordering_holds(a in fraction(), b in fraction()) {
        let held = [a < b, a == b, a > b].iter().filter(|held| **held).count();

        prop_assert_eq!(held, 1);
        prop_assert_eq!(a <= b, !(a > b));
        prop_assert_eq!(a >= b, !(a < b));
        prop_assert_eq!(a != b, !(a == b));
    }

    #[test]
    fn ordering_agrees_with_subtraction(a in fraction(), b in fraction()) {
        prop_assert_eq!(a.cmp(&b), (a - b).signum().cmp(&0));
    }

    #[test]
    fn mixed_integer_is_symmetric(a in fraction(), k in -1_000_000i64..=1_000_000) {
        prop_assert_eq!(a + k, k + a);
        prop_assert_eq!(a * k, k * a);
        prop_assert_eq!(a - k, -(k - a));
        prop_assert_eq!(a + k, a + Fraction::from(k));
    }

    #[test]
    fn compound_matches_binary(a in fraction(), b in fraction()) {
        let mut sum = a;
        sum += b;
        prop_assert_eq!(sum, a + b);

        let mut product = a;
        product *= b;
        prop_assert_eq!(product, a * b);

        if b != 0i64 {
            let mut quotient = a;
            quotient /= b;
            prop_assert_eq!(quotient * b, a);
        }
    }

    #[test]
    fn increment_steps_by_one(a in fraction()) {
        let mut value = a;

        prop_assert_eq!(value.post_increment(), a);
        prop_assert_eq!(value, a + 1i64);
        prop_assert_eq!(value.pre_decrement(), a);
    }

    #[test]
    fn hundredths_convert_exactly(k in -100_000i64..100_000) {
        prop_assert_eq!(Fraction::approximate(k as f64 / 100.0), Fraction::new(k, 100));
    }

    #[test]
    fn thousandths_below_one_convert_exactly(k in -999i64..=999) {
        prop_assert_eq!(Fraction::approximate(k as f64 / 1000.0), Fraction::new(k, 1000));
    }

    #[test]
    fn display_reads_back(a in fraction()) {
        let text = a.to_string();
        let (numerator, denominator) = text.split_once('/').unwrap();

        prop_assert_eq!(read_fraction(&format!("{} {}", numerator, denominator)), Ok(a));
    }
}

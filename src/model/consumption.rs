use super::tariff::{MONTHS_PER_YEAR, SAMPLE_MONTHS};

/// Billed quantities for the last three months, oldest first.
pub type MonthlySamples = [f64; SAMPLE_MONTHS];

/// Projects three monthly samples onto a full year.
///
/// Works the same for kWh and for money. No bounds checking: zero or
/// negative samples flow through arithmetically.
pub fn annualize(samples: &MonthlySamples) -> f64 {
    let total: f64 = samples.iter().sum();
    (total / SAMPLE_MONTHS as f64) * MONTHS_PER_YEAR
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case([100.0, 120.0, 110.0], 1320.0)]
    #[case([200.0, 240.0, 220.0], 2640.0)]
    #[case([0.0, 0.0, 0.0], 0.0)]
    #[case([-30.0, 0.0, 0.0], -120.0)]
    fn test_annualize(#[case] samples: MonthlySamples, #[case] expected: f64) {
        assert!((annualize(&samples) - expected).abs() < 1e-9);
    }

    proptest! {
        #[test]
        fn annualize_is_four_times_the_quarter(a in 0.0f64..1e6, b in 0.0f64..1e6, c in 0.0f64..1e6) {
            let expected = ((a + b + c) / 3.0) * 12.0;
            prop_assert!((annualize(&[a, b, c]) - expected).abs() <= 1e-9 * expected.max(1.0));
        }
    }
}

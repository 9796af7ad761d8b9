use super::*;

#[test]
fn zero_based_scale_includes_zero() {
    let scale = LinearScale::zero_based(&[DataPoint::new("a", 5.0), DataPoint::new("b", 10.0)]);
    assert!((scale.domain_min - 0.0).abs() < f64::EPSILON);
    assert!((scale.domain_max - 10.0).abs() < f64::EPSILON);
}

#[test]
fn zero_based_scale_covers_negative_values() {
    let scale = LinearScale::zero_based(&[DataPoint::new("a", -4.0), DataPoint::new("b", 2.0)]);
    assert!((scale.domain_min + 4.0).abs() < f64::EPSILON);
    assert!((scale.fraction(-4.0)).abs() < f64::EPSILON);
    assert!((scale.fraction(2.0) - 1.0).abs() < f64::EPSILON);
}

#[test]
fn flat_domain_is_widened() {
    let scale = LinearScale::zero_based(&[DataPoint::new("a", 0.0)]);
    assert!((scale.domain_max - 1.0).abs() < f64::EPSILON);
}

#[test]
fn ticks_include_both_ends() {
    let scale = LinearScale {
        domain_min: 0.0,
        domain_max: 100.0,
    };
    assert_eq!(scale.ticks(4), vec![0.0, 25.0, 50.0, 75.0, 100.0]);
}

use ni::interpolation::errors::InterpolationError;
use ni::interpolation::linear::LinearInterpolant;
use ni::interpolation::Interpolator;

type NiResult = Result<(), InterpolationError>;

const ATOL: f64 = 1e-12;
const RTOL: f64 = 0.0;

#[inline]
fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= ATOL + RTOL * b.abs()
}

#[inline]
fn assert_vec_close(a: &[f64], b: &[f64]) {
    assert_eq!(a.len(), b.len());
    for (i, (ai, bi)) in a.iter().zip(b.iter()).enumerate() {
        assert!(
            approx_eq(*ai, *bi),
            "mismatch at index {}: left={}, right={}, ATOL={}, RTOL={}",
            i, ai, bi, ATOL, RTOL
        );
    }
}

#[test]
fn report_metadata() -> NiResult {
    let x      = [0.0, 1.0, 2.0];
    let y      = [0.0, 1.0, 4.0];
    let x_eval = [0.5, 1.5];

    let lin = LinearInterpolant::with_data_points(&x, &y)?;
    let rep = lin.report(&x_eval);

    assert_eq!(rep.algorithm_name, "linear");
    assert_eq!(rep.n_provided, 3);
    assert_eq!(rep.domain, Some((0.0, 2.0)));
    assert_eq!(rep.n_out_of_domain, 0);
    assert_vec_close(&rep.evaluated, &[0.5, 2.5]);
    Ok(())
}

#[test]
fn exact_hits() -> NiResult {
    let x = [0.0, 1.0, 2.0];
    let y = [0.0, 10.0, 5.0];

    let lin = LinearInterpolant::with_data_points(&x, &y)?;
    assert_eq!(lin.eval(1.0), 10.0);
    assert_vec_close(&lin.eval_many(&x), &y);
    Ok(())
}

#[test]
fn exact_hits_uneven_spacing() -> NiResult {
    let x = [-2.0, -0.3, 0.7, 3.1, 10.0];
    let y = [4.2, -1.5, 0.25, 7.75, 3.0];

    let lin = LinearInterpolant::with_data_points(&x, &y)?;
    assert_vec_close(&lin.eval_many(&x), &y);
    Ok(())
}

#[test]
fn midpoint() -> NiResult {
    let mut lin = LinearInterpolant::new();
    lin.set_data_points(&[0.0, 2.0], &[0.0, 10.0])?;

    assert!(approx_eq(lin.eval(1.0), 5.0));
    Ok(())
}

#[test]
fn reproduces_linear_function() -> NiResult {
    let x = [-2.0, 0.0, 0.3, 1.7, 4.2];
    let y: Vec<f64> = x.iter().map(|&xi| 3.0*xi - 1.0).collect();
    let x_eval = [-2.0, -1.0, 0.0, 0.3, 1.0, 1.7, 3.0, 4.2];
    let y_expected: Vec<f64> = x_eval.iter().map(|&t| 3.0*t - 1.0).collect();

    let lin = LinearInterpolant::with_data_points(&x, &y)?;
    assert_vec_close(&lin.eval_many(&x_eval), &y_expected);
    Ok(())
}

#[test]
fn out_of_domain_is_zero() -> NiResult {
    let lin = LinearInterpolant::with_data_points(&[0.0, 2.0], &[0.0, 10.0])?;

    assert_eq!(lin.eval(-1.0), 0.0);
    assert_eq!(lin.eval(3.0), 0.0);
    assert_eq!(lin.eval(f64::INFINITY), 0.0);
    assert_eq!(lin.eval(f64::NEG_INFINITY), 0.0);
    Ok(())
}

#[test]
fn report_counts_out_of_domain() -> NiResult {
    let lin = LinearInterpolant::with_data_points(&[0.0, 2.0], &[0.0, 10.0])?;
    let rep = lin.report(&[-1.0, 0.0, 1.0, 2.0, 3.0]);

    assert_eq!(rep.n_out_of_domain, 2);
    assert_vec_close(&rep.evaluated, &[0.0, 0.0, 5.0, 10.0, 0.0]);
    Ok(())
}

#[test]
fn out_of_domain_ignores_sample_values() -> NiResult {
    let lin = LinearInterpolant::with_data_points(&[1.0, 2.0, 3.0], &[7.0, 8.0, 9.0])?;

    assert_eq!(lin.eval(0.999), 0.0);
    assert_eq!(lin.eval(3.001), 0.0);
    Ok(())
}

#[test]
fn duplicate_x_propagates_nan() -> NiResult {
    let lin = LinearInterpolant::with_data_points(&[0.0, 0.0, 1.0], &[0.0, 5.0, 10.0])?;

    let v = lin.eval(0.0);
    assert!(v.is_nan() || v.is_infinite(), "expected special value, got {v}");
    Ok(())
}

#[test]
fn duplicate_x_does_not_poison_other_segments() -> NiResult {
    let lin = LinearInterpolant::with_data_points(&[0.0, 0.0, 1.0], &[0.0, 5.0, 10.0])?;

    assert!(approx_eq(lin.eval(0.5), 7.5));
    Ok(())
}

#[test]
fn nan_query_propagates() -> NiResult {
    let lin = LinearInterpolant::with_data_points(&[0.0, 1.0], &[0.0, 1.0])?;

    assert!(lin.eval(f64::NAN).is_nan());
    Ok(())
}

#[test]
fn fewer_than_two_samples_is_nan() -> NiResult {
    let lin = LinearInterpolant::with_data_points(&[1.0], &[3.0])?;

    assert!(lin.eval(1.0).is_nan());
    assert!(LinearInterpolant::new().eval(0.0).is_nan());
    Ok(())
}

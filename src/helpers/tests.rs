use super::helpers::*;
use super::test_helpers::*;
use crate::estimators::error::EstimatorError;
use approx::assert_abs_diff_eq;
use ndarray::{array, Array2};

#[test]
fn solve_lin_sys_works() {
    let mat = array![[26., 8., 15.], [8., 14., 5.], [15., 5., 14.]];
    let b = array![1., 2., 3.];
    let res = solve_lin_sys(mat.view(), b.view()).unwrap();
    let back = mat.dot(&res);
    assert_array_all_close(back.view(), b.view(), 1e-10);
}

#[test]
fn solve_lin_sys_needs_pivoting() {
    let mat = array![[0., 1.], [1., 0.]];
    let b = array![3., 5.];
    let res = solve_lin_sys(mat.view(), b.view()).unwrap();
    assert_array_all_close(res.view(), array![5., 3.].view(), 1e-12);
}

#[test]
fn solve_lin_sys_returns_error() {
    let mat = Array2::<f64>::zeros((3, 3));
    let b = array![1., 1., 1.];
    match solve_lin_sys(mat.view(), b.view()) {
        Err(EstimatorError::SingularMatrix) => println!("Good"),
        _ => panic!("Should return an error but didn't"),
    }
}

#[test]
fn r2_score_perfect_and_mean_predictions() {
    let y = array![1., 2., 3., 4.];
    assert_abs_diff_eq!(r2_score(y.view(), y.view()).unwrap(), 1.);
    let mean = array![2.5, 2.5, 2.5, 2.5];
    assert_abs_diff_eq!(r2_score(y.view(), mean.view()).unwrap(), 0.);
}

#[test]
fn r2_score_known_value() {
    let y = array![3., -0.5, 2., 7.];
    let y_pred = array![2.5, 0., 2., 8.];
    assert_abs_diff_eq!(
        r2_score(y.view(), y_pred.view()).unwrap(),
        0.9486081370449679,
        epsilon = 1e-12
    );
}

#[test]
fn r2_score_constant_target() {
    let y = array![2., 2., 2.];
    assert_eq!(r2_score(y.view(), y.view()).unwrap(), 1.);
    let off = array![2., 2., 3.];
    assert_eq!(r2_score(y.view(), off.view()).unwrap(), 0.);
}

#[test]
fn r2_score_rejects_mismatched_lengths() {
    let y = array![1., 2.];
    let y_pred = array![1.];
    match r2_score(y.view(), y_pred.view()) {
        Err(EstimatorError::DimensionMismatch { .. }) => println!("Good"),
        _ => panic!("Should return an error but didn't"),
    }
}

#[test]
fn linspace_includes_both_ends() {
    let xs = linspace(0., 1., 5);
    assert_array_all_close(xs.view(), array![0., 0.25, 0.5, 0.75, 1.].view(), 1e-12);
    assert_eq!(linspace(3., 4., 1), array![3.]);
    assert_eq!(linspace(3., 4., 0).len(), 0);
}

#[test]
fn random_data_is_reproducible() {
    let (X1, y1) = generate_random_data(5, 2);
    let (X2, y2) = generate_random_data(5, 2);
    assert_eq!(X1, X2);
    assert_eq!(y1, y2);
    assert_eq!(X1.shape(), &[5, 2]);
}

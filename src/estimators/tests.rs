use ndarray::{array, Array1, Array2};

use crate::datasets::DatasetBase;
use crate::estimators::error::EstimatorError;
use crate::estimators::linear::LinearRegression;
use crate::estimators::traits::{Fit, Regressor};
use crate::helpers::test_helpers::*;
use crate::param_guard::ParamGuard;
use approx::assert_abs_diff_eq;

#[test]
fn test_recovers_exact_linear_relation() {
    let X = array![[1., 0.], [2., 1.], [3., 5.], [4., 2.], [5., -1.]];
    let y = X.dot(&array![2., -3.]) + 1.;

    let mut model = LinearRegression::default();
    model.fit(X.view(), y.view()).unwrap();

    let fitted = model.fitted().unwrap();
    assert_array_all_close(fitted.coefficients(), array![2., -3.].view(), 1e-9);
    assert_abs_diff_eq!(fitted.intercept(), 1., epsilon = 1e-9);
    assert_abs_diff_eq!(model.score(X.view(), y.view()).unwrap(), 1., epsilon = 1e-9);
}

#[test]
fn test_without_intercept_goes_through_origin() {
    let X = array![[1.], [2.], [3.]];
    let y = array![2., 4., 6.];
    let params = LinearRegression::params().fit_intercept(false);
    let fitted = params.fit(&DatasetBase::from((X.view(), y.view()))).unwrap();
    assert_eq!(fitted.intercept(), 0.);
    assert_abs_diff_eq!(fitted.coefficients()[0], 2., epsilon = 1e-12);
}

#[test]
fn test_ridge_shrinks_coefficients() {
    let (X, y) = generate_random_data(50, 3);
    let ols = LinearRegression::params()
        .fit(&DatasetBase::from((X.view(), y.view())))
        .unwrap();
    let ridge = LinearRegression::params()
        .alpha(100.)
        .fit(&DatasetBase::from((X.view(), y.view())))
        .unwrap();

    let norm = |w: Array1<f64>| w.dot(&w);
    assert!(norm(ridge.coefficients().to_owned()) < norm(ols.coefficients().to_owned()));
}

#[test]
fn test_negative_alpha_is_rejected() {
    match LinearRegression::<f64>::params().alpha(-1.).check() {
        Err(EstimatorError::InvalidRegularization(a)) => assert_eq!(a, -1.),
        _ => panic!("Should return an error but didn't"),
    }
    assert!(LinearRegression::new(LinearRegression::params().alpha(f64::NAN)).is_err());
}

#[test]
fn test_predict_before_fit_fails() {
    let model = LinearRegression::<f64>::default();
    let X = Array2::zeros((2, 1));
    match model.predict(X.view()) {
        Err(EstimatorError::NotFitted) => println!("Good"),
        _ => panic!("Should return an error but didn't"),
    }
}

#[test]
fn test_predict_checks_feature_count() {
    let X = array![[1.], [2.], [3.]];
    let y = array![1., 2., 3.];
    let mut model = LinearRegression::default();
    model.fit(X.view(), y.view()).unwrap();
    let wrong = Array2::<f64>::zeros((2, 2));
    match model.predict(wrong.view()) {
        Err(EstimatorError::DimensionMismatch { expected, found }) => {
            assert_eq!(expected, 1);
            assert_eq!(found, 2);
        }
        _ => panic!("Should return an error but didn't"),
    }
}

#[test]
fn test_fit_rejects_mismatched_targets() {
    let X = array![[1.], [2.], [3.]];
    let y = array![1., 2.];
    let mut model = LinearRegression::default();
    assert!(matches!(
        model.fit(X.view(), y.view()),
        Err(EstimatorError::DimensionMismatch { .. })
    ));
}

#[test]
fn test_display_name() {
    let ols = LinearRegression::<f64>::default();
    assert_eq!(ols.name(), "LinearRegression");
    let ridge = LinearRegression::new(LinearRegression::<f64>::params().alpha(0.5)).unwrap();
    assert_eq!(ridge.name(), "Ridge");
}

#[test]
fn test_default_score_is_r2() {
    let X = array![[1.], [2.], [3.], [4.]];
    let y = array![3., -0.5, 2., 7.];
    let regressor = FixedRegressor::new(array![2.5, 0., 2., 8.], 0.);
    struct DefaultScore(FixedRegressor<f64>);
    impl Regressor<f64> for DefaultScore {
        fn fit(
            &mut self,
            X: ndarray::ArrayView2<f64>,
            y: ndarray::ArrayView1<f64>,
        ) -> crate::estimators::error::Result<()> {
            self.0.fit(X, y)
        }
        fn predict(
            &self,
            X: ndarray::ArrayView2<f64>,
        ) -> crate::estimators::error::Result<Array1<f64>> {
            self.0.predict(X)
        }
        fn name(&self) -> String {
            "DefaultScore".to_string()
        }
    }
    let model = DefaultScore(regressor);
    assert_abs_diff_eq!(
        model.score(X.view(), y.view()).unwrap(),
        0.9486081370449679,
        epsilon = 1e-12
    );
}

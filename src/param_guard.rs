use std::error::Error;

use crate::datasets::{DatasetBase, DesignMatrix, Targets};
use crate::estimators::traits::Fit;

/// Parameters built through a builder and validated once before use.
///
/// Estimator and figure parameters are assembled freely, then turned into
/// their `Checked` form, which is the only form the fitting and rendering
/// code accepts. `check_ref()` and `check()` must apply the same rules.
pub trait ParamGuard {
    /// The validated parameters
    type Checked;
    /// Error returned when a parameter is out of range
    type Error: Error;

    /// Validates and borrows the checked parameters
    fn check_ref(&self) -> Result<&Self::Checked, Self::Error>;

    /// Validates and converts into the checked parameters
    fn check(self) -> Result<Self::Checked, Self::Error>;

    /// `check()`, panicking on invalid parameters. Only meant for defaults
    /// known to be valid.
    fn check_unwrap(self) -> Self::Checked
    where
        Self: Sized,
    {
        self.check().unwrap()
    }
}

/// Unchecked parameters can be fitted directly: they are validated first and
/// a validation failure is returned through the `Fit` error type.
impl<DM: DesignMatrix, T: Targets, E, P: ParamGuard> Fit<DM, T, E> for P
where
    P::Checked: Fit<DM, T, E>,
    E: Error + From<P::Error>,
{
    type Object = <<P as ParamGuard>::Checked as Fit<DM, T, E>>::Object;

    fn fit(&self, dataset: &DatasetBase<DM, T>) -> Result<Self::Object, E> {
        let checked = self.check_ref()?;
        checked.fit(dataset)
    }
}

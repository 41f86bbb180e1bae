
mod impl_datasets;
mod impl_design_matrix;
mod impl_targets;
pub mod split;

/// A design matrix paired with its targets. Visualizers and estimators only
/// read from it.
pub struct DatasetBase<DM, T>
where
    DM: DesignMatrix,
{
    pub design_matrix: DM,
    pub targets: T,
}

pub trait DesignMatrix: Sized {
    type Elem;

    fn n_samples(&self) -> usize;
    fn n_features(&self) -> usize;
}

pub trait Targets: Sized {
    type Elem;

    fn n_samples(&self) -> usize;
}

use super::Targets;
use ndarray::{ArrayBase, Axis, Data, Ix1};

impl<F, S: Data<Elem = F>> Targets for ArrayBase<S, Ix1> {
    type Elem = F;

    fn n_samples(&self) -> usize {
        self.len_of(Axis(0))
    }
}

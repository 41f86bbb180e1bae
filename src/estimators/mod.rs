#[cfg(test)]
mod tests;

pub mod error;
pub mod hyperparams;
pub mod linear;
pub mod traits;

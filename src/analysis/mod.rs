pub mod decoder;
pub mod estimator;

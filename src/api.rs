pub mod climatiq;
mod client;
mod estimator;

pub use self::estimator::{Disabled, EstimateError, Estimator, FactorMetadata, RemoteEstimate};

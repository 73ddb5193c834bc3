// Domain types and value objects
mod input_vector;
mod observation;
mod predictor;

pub use input_vector::InputVector;
pub use observation::Observation;
pub use predictor::{PREDICTOR_COUNT, Predictor};

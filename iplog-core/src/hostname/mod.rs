pub use normalize::normalize;
pub use validate::{Rejection, Validator};

mod normalize;
mod validate;

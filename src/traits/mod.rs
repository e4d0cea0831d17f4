mod model;
mod result;

pub use model::{Model, ModelClass};
pub use result::ResultView;

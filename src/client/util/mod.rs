pub mod normalize;
pub mod scope;

pub use normalize::{normalize, normalize_as};
pub use scope::RequestScope;

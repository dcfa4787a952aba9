pub mod builder;
pub mod constant;
pub mod error;
pub mod fixtures;

pub use builder::StorageSeed;
pub use error::TestError;

pub mod prelude {
    pub use crate::{
        constant::*,
        fixtures::{envelope, user},
        StorageSeed, TestError,
    };
}

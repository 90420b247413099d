pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{
        constant::{TEST_EMAIL_DOMAIN, TEST_PASSWORD},
        TestBuilder, TestContext, TestError,
    };
}

//! Database fixtures inserted during test execution.
//!
//! Each submodule hangs an accessor off [`TestContext`](crate::TestContext):
//! `test.user()`, `test.category()`, `test.animal()`, `test.favorite()` and
//! `test.message()`.

pub mod animal;
pub mod category;
pub mod favorite;
pub mod message;
pub mod user;

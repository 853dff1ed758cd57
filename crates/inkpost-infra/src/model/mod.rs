//! Post model implementations - in-memory fallback.
//! The PostgreSQL model lives in `database` behind the `postgres` feature.

mod memory;

pub use memory::InMemoryPostModel;

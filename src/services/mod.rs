pub mod editor;
pub mod samples;
pub mod search;
pub mod slug;
pub mod store;

pub use store::{PostStore, SqlitePostStore, StoreError};

pub mod list;
pub mod upsert;

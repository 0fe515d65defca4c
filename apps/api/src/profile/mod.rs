// Profile boundary: typed records, persistence, and the CRUD handlers.

pub mod handlers;
pub mod models;
pub mod store;

//! Request-scoped services wrapping the database and the uploads directory.

pub mod contact;
pub mod upload;

mod client;
mod models;

pub use client::{Database, DatabaseError};
pub use models::{DbMember, DbUser, DbWorkspace, Session};

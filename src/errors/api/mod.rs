mod items;

pub use items::{ItemError, ItemErrorResponse};

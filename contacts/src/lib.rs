pub mod contact;
pub mod error;
pub mod list;

pub use contact::{Contact, ContactKind};
pub use error::{ContactError, Result};
pub use list::ContactList;

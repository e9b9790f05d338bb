mod catalog;
mod layout;

pub use catalog::{catalog, find, Category, EmailTemplate};
pub use layout::{render, Layout};

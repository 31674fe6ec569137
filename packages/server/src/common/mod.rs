// Common utilities shared across the application

pub mod slug;

pub use slug::slugify;

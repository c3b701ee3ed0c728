pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod photo;
pub mod replace;

// Re-export handler functions for use in routing
pub use create::create;
pub use delete::delete;
pub use get::get;
pub use list::list;
pub use photo::upload_photo;
pub use replace::replace;

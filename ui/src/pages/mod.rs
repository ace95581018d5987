pub mod home;
pub mod not_found;

pub use home::ChecksPage;
pub use not_found::NotFoundPage;

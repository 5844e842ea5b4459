pub mod center;
pub mod context_menu;
pub mod editor;
pub mod home;
pub mod tabs;

pub use center::Center;

pub mod explorer;
pub mod left;
pub mod sidebar;

pub use explorer::Explorer;
pub use left::Left;
pub use sidebar::Sidebar;

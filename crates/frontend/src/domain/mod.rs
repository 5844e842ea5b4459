pub mod command;
pub mod page;
pub mod review;

pub mod command;
pub mod review;

//! Wire types shared between the portfolio frontend and the remote portfolio API.

pub mod domain;
pub mod shared;

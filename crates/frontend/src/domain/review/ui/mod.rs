pub mod box_rating;

pub use box_rating::BoxRating;

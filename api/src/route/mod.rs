pub mod health;
pub mod penalty;
pub mod rating;
pub mod reservation;
pub mod space;
pub mod v1;

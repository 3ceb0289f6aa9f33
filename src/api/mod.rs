pub mod health;
pub mod likes;
pub mod meals;
pub mod membership;
pub mod orders;
pub mod payments;
pub mod reviews;
pub mod swagger;
pub mod users;

pub mod like_service;
pub mod meal_service;
pub mod membership_service;
pub mod order_service;
pub mod payment_service;
pub mod review_service;
pub mod stripe_service;
pub mod user_service;

pub use like_service::*;
pub use meal_service::*;
pub use membership_service::*;
pub use order_service::*;
pub use payment_service::*;
pub use review_service::*;
pub use user_service::*;

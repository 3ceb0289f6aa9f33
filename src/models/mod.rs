pub mod like;
pub mod meal;
pub mod membership;
pub mod oid;
pub mod order;
pub mod payment;
pub mod responses;
pub mod review;
pub mod user;

pub use like::*;
pub use meal::*;
pub use membership::*;
pub use order::*;
pub use payment::*;
pub use responses::*;
pub use review::*;
pub use user::*;

pub mod auth;
pub mod fair;
pub mod product;
pub mod user;

pub use auth::{LoginRequest, RegisterRequest, Role, SignupRole, TokenResponse, WhoAmI};
pub use fair::{Fair, FairPayload};
pub use product::{Product, ProductFilter, ProductPayload, ProducerInfo};
pub use user::ManagedUser;

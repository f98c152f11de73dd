pub mod use_auth;
pub mod use_catalog;
pub mod use_fairs;
pub mod use_my_products;
pub mod use_toasts;
pub mod use_users;

pub use use_auth::{use_auth, UseAuthHandle};
pub use use_catalog::{use_catalog, UseCatalogHandle};
pub use use_fairs::{use_fairs, UseFairsHandle};
pub use use_my_products::{use_my_products, UseMyProductsHandle};
pub use use_toasts::{use_toasts, Toast, ToastLevel, UseToastsHandle};
pub use use_users::{use_users, UseUsersHandle};

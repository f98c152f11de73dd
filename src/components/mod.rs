pub mod app;
pub mod catalog;
pub mod confirm_modal;
pub mod fair_form;
pub mod fairs_admin;
pub mod login_modal;
pub mod moderator_users;
pub mod navbar;
pub mod producer_products;
pub mod product_form;
pub mod signup_modal;
pub mod toast_host;

pub use app::App;
pub use catalog::Catalog;
pub use confirm_modal::ConfirmModal;
pub use fair_form::FairForm;
pub use fairs_admin::FairsAdmin;
pub use login_modal::LoginModal;
pub use moderator_users::ModeratorUsers;
pub use navbar::Navbar;
pub use producer_products::ProducerProducts;
pub use product_form::ProductForm;
pub use signup_modal::SignupModal;
pub use toast_host::ToastHost;

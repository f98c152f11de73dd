pub mod delete_confirm;
pub mod paginator;

pub use delete_confirm::{DeleteConfirm, PendingDelete};
pub use paginator::{PageRequest, Paginator, Phase};

pub mod constants;
pub mod format;

pub use constants::API_BASE;
pub use format::format_price;

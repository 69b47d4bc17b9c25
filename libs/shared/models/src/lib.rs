pub mod error;
pub mod navigation;

pub use error::AppError;
pub use navigation::View;

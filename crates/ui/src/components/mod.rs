pub mod composer;
pub mod header;
pub mod idle;

pub use composer::Composer;
pub use header::Header;
pub use idle::{IdleAnimation, IdlePlaceholder};

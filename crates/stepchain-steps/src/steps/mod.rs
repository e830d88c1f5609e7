pub mod assert;
pub mod length;
pub mod random;
pub mod sleep;

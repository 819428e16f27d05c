// Utils compartidos

pub mod constants;
pub mod navigation;
pub mod storage;

pub use constants::*;
pub use navigation::*;
pub use storage::*;

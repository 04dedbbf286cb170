//! Infrastructure Adapters
//!
//! 六边形架构的适配器实现

pub mod audio;
pub mod speech;
pub mod storage;

pub use audio::*;
pub use speech::*;
pub use storage::*;

//! Button drivers: debounce, gesture classification and handler dispatch.

pub mod button;
pub mod debounce;
pub mod dispatch;
pub mod tracker;

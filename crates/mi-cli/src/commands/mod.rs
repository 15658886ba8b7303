pub mod dispatch;
pub mod shared;
pub mod show;

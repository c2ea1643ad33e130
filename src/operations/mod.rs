pub mod add;
pub mod charts;
pub mod export;
pub mod list;
pub mod remove;

//! Demo sections exercising the tab widgets.

pub mod basic;
pub mod dynamic;

pub use basic::BasicTabs;
pub use dynamic::DynamicTabs;

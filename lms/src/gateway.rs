pub mod events;
pub mod logs;
pub mod payments;
pub mod factory;

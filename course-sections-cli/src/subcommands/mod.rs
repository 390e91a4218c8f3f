pub mod classify;
pub mod nav;
pub mod page;
pub mod schedule;

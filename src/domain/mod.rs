pub mod factory;
pub mod modifier;
pub mod ticket;

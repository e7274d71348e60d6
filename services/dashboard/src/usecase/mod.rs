pub mod customer;
pub mod dashboard;
pub mod pickup;
pub mod role;

pub mod auth;
pub mod category;
pub mod cuisine;
pub mod order;
pub mod product;
pub mod restaurant;
pub mod review;
pub mod user;

mod router;
pub use router::get_router;

#[cfg(test)]
pub mod fixtures;

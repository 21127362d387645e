pub mod auth;
pub mod health;
pub mod models;
pub mod offers;
pub mod products;

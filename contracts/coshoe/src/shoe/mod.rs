pub mod types;

mod purchase;
mod transfer;
mod views;

pub mod health;
pub mod paste;

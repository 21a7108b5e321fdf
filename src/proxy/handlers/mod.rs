// Handlers module - API endpoint handlers

pub mod currency;
pub mod health;

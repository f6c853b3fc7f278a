pub mod deck;
pub mod game;
pub mod home;
pub mod not_found;
pub mod rules;

pub mod chrome;
pub mod deck;
pub mod home;
pub mod modals;
pub mod panels;
pub mod shop;

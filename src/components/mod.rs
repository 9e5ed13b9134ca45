pub mod cards;
pub mod hooks;
pub mod layout;
pub mod ui;

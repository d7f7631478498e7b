pub mod batch;
pub mod browser;
pub mod desktop_entry;
pub mod generate;
pub mod helpers;
pub mod icon;
pub mod identifier;
pub mod launcher;

pub mod board;
pub mod card;
pub mod checklist;
pub mod completed;
pub mod list;
pub mod view;

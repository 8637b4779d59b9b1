pub mod catalog;
pub mod community;
pub mod content;
pub mod errors;
pub mod library;
pub mod narrator;
pub mod story;

pub mod content;
pub mod database;
pub mod debounce;
pub mod repositories;
pub mod time;
pub mod util;

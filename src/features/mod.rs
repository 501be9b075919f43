/// Feature modules grouped by domain
pub mod export;
pub mod todos;

pub mod bucket;
pub mod task;
pub mod window;

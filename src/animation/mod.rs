/// Frame loop lifecycle.
pub mod scheduler;

mod job;
mod runner;
mod window;

pub use job::RelayJob;
pub use runner::run_command;
pub use window::OutputWindow;

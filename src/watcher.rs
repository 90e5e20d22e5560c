mod tick;
mod url;
mod watch_loop;

pub use tick::{TickOutcome, Watcher};
pub use url::is_valid_url;
pub use watch_loop::{run, watch};

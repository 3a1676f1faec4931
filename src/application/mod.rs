pub mod batch_coordinator;
pub mod batch_status;
pub mod file_sink;

pub use batch_coordinator::{BatchCoordinator, BatchEvent, SubtitleSource};
pub use batch_status::{BatchSnapshot, BatchStatus};
pub use file_sink::{choose_output_dir, DirectorySink};

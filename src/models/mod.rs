//! CPU scheduling domain models.
//!
//! Provides the input and output types shared by every discipline.
//!
//! | Type | Role |
//! |------|------|
//! | `Process` | Input job: arrival and burst |
//! | `ScheduledProcess` | Per-process outcome: start and completion |
//! | `Slice` | One contiguous CPU interval |
//! | `Schedule` | Complete result of a scheduler run |

mod process;
mod schedule;

pub use process::{Process, ScheduledProcess};
pub use schedule::{Schedule, Slice};

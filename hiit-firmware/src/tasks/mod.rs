//! Embassy async tasks

mod buttons;
mod dispatch;
mod tick;

pub use buttons::button_task;
pub use dispatch::dispatch_task;
pub use tick::tick_task;

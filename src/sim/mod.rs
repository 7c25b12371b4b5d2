//! 仿真核心模块
//!
//! 此模块包含离散事件调度的核心组件，如仿真时间、事件、上下文和调度器。

// 子模块声明
mod context;
mod event;
mod scheduled_event;
mod scheduler;
mod time;

// 重新导出公共接口
pub use context::{ContextValue, EventContext};
pub use event::{Action, Event, EventStatus};
pub use scheduled_event::ScheduledEvent;
pub use scheduler::EventScheduler;
pub use time::SimTime;

//! 事件
//!
//! 定义可被调度的事件记录：时间戳、激活状态、上下文与可选动作。
//! 事件在调度器内以 `Rc<Event>` 共享，身份比较使用 `Rc::ptr_eq`，
//! 字段值相同的两个事件也互不相等。

use super::context::EventContext;
use super::time::SimTime;
use std::cell::Cell;
use std::fmt;

/// 事件动作：零参数闭包，弹出执行时调用一次，返回值忽略。
pub type Action = Box<dyn FnOnce()>;

/// 事件激活状态。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EventStatus {
    #[default]
    Active,
    Inactive,
}

/// 事件：时间戳不可变，状态可在入队期间任意翻转。
pub struct Event {
    at: SimTime,
    status: Cell<EventStatus>,
    context: EventContext,
    action: Cell<Option<Action>>,
}

impl Event {
    /// 构造事件：默认激活、空上下文、无动作。构造本身无副作用。
    pub fn new(at: SimTime) -> Event {
        Event {
            at,
            status: Cell::new(EventStatus::Active),
            context: EventContext::new(),
            action: Cell::new(None),
        }
    }

    pub fn with_context(mut self, context: EventContext) -> Event {
        self.context = context;
        self
    }

    pub fn with_action(self, action: impl FnOnce() + 'static) -> Event {
        self.with_boxed_action(Box::new(action))
    }

    pub fn with_boxed_action(self, action: Action) -> Event {
        self.action.set(Some(action));
        self
    }

    /// 构造时即为未激活状态。
    pub fn inactive(self) -> Event {
        self.status.set(EventStatus::Inactive);
        self
    }

    pub fn time(&self) -> SimTime {
        self.at
    }

    pub fn context(&self) -> &EventContext {
        &self.context
    }

    pub fn status(&self) -> EventStatus {
        self.status.get()
    }

    pub fn is_active(&self) -> bool {
        self.status.get() == EventStatus::Active
    }

    /// 激活事件。已激活时为幂等空操作。
    pub fn activate(&self) {
        self.status.set(EventStatus::Active);
    }

    /// 取消激活。已取消时为幂等空操作。
    pub fn deactivate(&self) {
        self.status.set(EventStatus::Inactive);
    }

    // 取出并执行动作；至多执行一次，仅由调度器弹出路径调用。
    pub(crate) fn fire(&self) {
        if let Some(action) = self.action.take() {
            action();
        }
    }
}

impl fmt::Debug for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Event")
            .field("at", &self.at)
            .field("status", &self.status.get())
            .field("context", &self.context)
            .finish_non_exhaustive()
    }
}

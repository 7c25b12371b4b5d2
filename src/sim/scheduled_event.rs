//! 调度事件
//!
//! 定义队列条目：执行时间、插入序号与共享事件。

use super::event::Event;
use super::time::SimTime;
use std::cmp::Ordering;
use std::rc::Rc;

/// 队列条目。`seq` 为调度器分配的单调递增插入序号，
/// 同一时间的事件按插入先后稳定排序。
#[derive(Debug, Clone)]
pub struct ScheduledEvent {
    pub(crate) at: SimTime,
    pub(crate) seq: u64,
    pub(crate) event: Rc<Event>,
}

impl ScheduledEvent {
    pub fn at(&self) -> SimTime {
        self.at
    }

    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn event(&self) -> &Rc<Event> {
        &self.event
    }
}

// 队列是按时间升序维护的有序 Vec，比较方向即自然序（不是 max-heap 的反向比较）。
impl Ord for ScheduledEvent {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.at.cmp(&other.at) {
            Ordering::Equal => self.seq.cmp(&other.seq),
            ord => ord,
        }
    }
}

impl PartialOrd for ScheduledEvent {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for ScheduledEvent {
    fn eq(&self, other: &Self) -> bool {
        self.at == other.at && self.seq == other.seq
    }
}

impl Eq for ScheduledEvent {}

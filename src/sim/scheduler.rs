//! 事件调度器
//!
//! 定义离散事件调度器：维护当前时间与按时间升序的事件队列，
//! 提供调度、取消、批量/条件状态切换以及弹出执行操作。

use super::event::Event;
use super::scheduled_event::ScheduledEvent;
use super::time::SimTime;
use std::rc::Rc;
use tracing::{debug, info, trace};

/// 事件调度器：队列始终按 `(时间, 插入序号)` 非递减有序。
///
/// 单线程同步模型：所有操作在调用线程内原子地执行完毕，
/// 空队列或无匹配输入一律安全空操作，不报错。
#[derive(Default)]
pub struct EventScheduler {
    now: SimTime,
    next_seq: u64,
    queue: Vec<ScheduledEvent>,
}

impl EventScheduler {
    /// 获取当前仿真时间
    pub fn now(&self) -> SimTime {
        self.now
    }

    /// 队列中待处理事件的数量
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// 队列是否为空
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// 按时间升序查看全部队列条目
    pub fn events(&self) -> &[ScheduledEvent] {
        &self.queue
    }

    /// 查看最早的队列条目
    pub fn next_event(&self) -> Option<&ScheduledEvent> {
        self.queue.first()
    }

    /// 按对象身份判断事件是否仍在队列中
    pub fn contains(&self, event: &Rc<Event>) -> bool {
        self.queue.iter().any(|s| Rc::ptr_eq(&s.event, event))
    }

    /// 调度事件，插入时间排序位置；同一时间按插入先后排序
    #[tracing::instrument(skip(self, event), fields(schedule_at = ?event.time()))]
    pub fn schedule(&mut self, event: Rc<Event>) {
        let at = event.time();
        let seq = self.next_seq;
        trace!(now = ?self.now, seq, "调度事件");

        self.next_seq = self.next_seq.wrapping_add(1);
        let idx = self.queue.partition_point(|s| s.at <= at);
        self.queue.insert(idx, ScheduledEvent { at, seq, event });

        debug!(queue_size = self.queue.len(), "事件已加入队列");
    }

    /// 激活队列中全部事件；不改变队列成员与顺序
    pub fn activate_all_events(&mut self) {
        for item in &self.queue {
            item.event.activate();
        }
        debug!(count = self.queue.len(), "激活全部事件");
    }

    /// 取消激活队列中全部事件；不改变队列成员与顺序
    pub fn deactivate_all_events(&mut self) {
        for item in &self.queue {
            item.event.deactivate();
        }
        debug!(count = self.queue.len(), "取消激活全部事件");
    }

    /// 按时间顺序扫描，仅激活首个满足谓词的事件；无匹配则不变。
    /// 谓词读取的是事件的实时状态，而非快照。
    pub fn activate_next_event_by_condition(
        &mut self,
        mut pred: impl FnMut(&EventScheduler, &Event) -> bool,
    ) {
        if let Some(item) = self.queue.iter().find(|s| pred(self, &s.event)) {
            trace!(at = ?item.at, seq = item.seq, "条件激活事件");
            item.event.activate();
        }
    }

    /// [`Self::activate_next_event_by_condition`] 的对偶：取消激活首个匹配事件
    pub fn deactivate_next_event_by_condition(
        &mut self,
        mut pred: impl FnMut(&EventScheduler, &Event) -> bool,
    ) {
        if let Some(item) = self.queue.iter().find(|s| pred(self, &s.event)) {
            trace!(at = ?item.at, seq = item.seq, "条件取消激活事件");
            item.event.deactivate();
        }
    }

    /// 移除时间最早的事件，无论其激活状态；不执行其动作。
    /// 空队列返回 `None`。
    pub fn cancel_next_event(&mut self) -> Option<Rc<Event>> {
        if self.queue.is_empty() {
            return None;
        }
        let item = self.queue.remove(0);
        debug!(
            at = ?item.at,
            seq = item.seq,
            queue_size = self.queue.len(),
            "取消最早事件"
        );
        Some(item.event)
    }

    /// 移除首个满足谓词的事件（按时间顺序扫描）；不执行其动作
    pub fn cancel_next_event_by_condition(
        &mut self,
        mut pred: impl FnMut(&EventScheduler, &Event) -> bool,
    ) -> Option<Rc<Event>> {
        let idx = self.queue.iter().position(|s| pred(self, &s.event))?;
        let item = self.queue.remove(idx);
        debug!(
            at = ?item.at,
            seq = item.seq,
            queue_size = self.queue.len(),
            "条件取消事件"
        );
        Some(item.event)
    }

    /// 清空队列，返回被移除的事件；不执行任何动作
    pub fn cancel_all_events(&mut self) -> Vec<Rc<Event>> {
        let cancelled: Vec<Rc<Event>> = self.queue.drain(..).map(|s| s.event).collect();
        debug!(count = cancelled.len(), "取消全部事件");
        cancelled
    }

    /// 弹出最早事件并推进当前时间；事件激活时执行其动作一次，
    /// 未激活则静默消耗。空队列返回 `None`。
    pub fn run_next(&mut self) -> Option<Rc<Event>> {
        if self.queue.is_empty() {
            return None;
        }
        let item = self.queue.remove(0);
        self.now = item.at;
        if item.event.is_active() {
            trace!(now = ?self.now, seq = item.seq, "执行事件动作");
            item.event.fire();
        } else {
            trace!(now = ?self.now, seq = item.seq, "跳过未激活事件");
        }
        Some(item.event)
    }

    /// 运行直到事件队列为空或到达 `until`。
    pub fn run_until(&mut self, until: SimTime) {
        while let Some(head) = self.queue.first() {
            if head.at > until {
                break;
            }
            self.run_next();
        }
        self.now = self.now.max(until);
    }

    /// 运行所有事件直到队列为空。
    #[tracing::instrument(skip(self))]
    pub fn run(&mut self) {
        info!("▶️  开始运行调度");
        debug!(now = ?self.now, queue_size = self.queue.len(), "初始状态");

        let mut event_count = 0;
        while let Some(event) = self.run_next() {
            event_count += 1;
            debug!(
                event_num = event_count,
                now = ?self.now,
                executed = event.is_active(),
                remaining_queue = self.queue.len(),
                "弹出事件"
            );
        }

        info!(
            total_events = event_count,
            final_time = ?self.now,
            "✅ 调度完成"
        );
    }
}

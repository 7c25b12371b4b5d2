//! 场景描述
//!
//! 定义 JSON 场景格式：一组待调度事件的时间、标签、初始状态与上下文。
//! 供 `scenario_sim` 可执行文件与测试加载构造事件。

use crate::sim::{Action, ContextValue, Event, EventContext, SimTime};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::rc::Rc;
use thiserror::Error;

/// 当前支持的场景 schema 版本。
pub const SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("failed to read scenario file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse scenario JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("unsupported schema_version {0} (expected {SCHEMA_VERSION})")]
    UnsupportedSchemaVersion(u32),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioSpec {
    pub schema_version: u32,
    #[serde(default)]
    pub meta: Option<ScenarioMeta>,
    #[serde(default)]
    pub events: Vec<EventSpec>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioMeta {
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventSpec {
    /// 事件时间（微秒）
    pub at_us: u64,
    #[serde(default)]
    pub label: Option<String>,
    /// 初始是否激活；默认激活
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(default)]
    pub context: HashMap<String, ContextValue>,
}

fn default_active() -> bool {
    true
}

impl ScenarioSpec {
    pub fn from_json(json: &str) -> Result<ScenarioSpec, ScenarioError> {
        let spec: ScenarioSpec = serde_json::from_str(json)?;
        if spec.schema_version != SCHEMA_VERSION {
            return Err(ScenarioError::UnsupportedSchemaVersion(spec.schema_version));
        }
        Ok(spec)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<ScenarioSpec, ScenarioError> {
        let json = std::fs::read_to_string(path)?;
        ScenarioSpec::from_json(&json)
    }

    /// 按声明顺序构造事件。`make_action` 为每个事件生成可选动作，
    /// 标签写入上下文的 `"label"` 键。
    pub fn build_events(
        &self,
        mut make_action: impl FnMut(&EventSpec) -> Option<Action>,
    ) -> Vec<Rc<Event>> {
        self.events
            .iter()
            .map(|spec| {
                let mut context = EventContext::from(spec.context.clone());
                if let Some(label) = &spec.label {
                    context.insert("label", label.as_str());
                }
                let mut event = Event::new(SimTime::from_micros(spec.at_us)).with_context(context);
                if let Some(action) = make_action(spec) {
                    event = event.with_boxed_action(action);
                }
                if !spec.active {
                    event = event.inactive();
                }
                Rc::new(event)
            })
            .collect()
    }
}

use env_core::Info;
use serde_json::Value;

/// Decides whether the task was completed on a step.
///
/// Any `FnMut(&[f64], &Info) -> bool` closure is a goal condition.
pub trait GoalCondition {
    fn is_reached(&mut self, observation: &[f64], info: &Info) -> bool;
}

impl<F> GoalCondition for F
where
    F: FnMut(&[f64], &Info) -> bool,
{
    fn is_reached(&mut self, observation: &[f64], info: &Info) -> bool {
        self(observation, info)
    }
}

/// Reached when the info entry under `key` is truthy. A missing entry
/// counts as not reached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoFlag {
    key: String,
}

impl InfoFlag {
    pub const DEFAULT_KEY: &'static str = "is_goal_reached";

    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl Default for InfoFlag {
    fn default() -> Self {
        Self::new(Self::DEFAULT_KEY)
    }
}

impl GoalCondition for InfoFlag {
    fn is_reached(&mut self, _observation: &[f64], info: &Info) -> bool {
        info.get(&self.key).is_some_and(is_truthy)
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(string) => !string.is_empty(),
        Value::Array(array) => !array.is_empty(),
        Value::Object(object) => !object.is_empty(),
    }
}

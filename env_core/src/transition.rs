use super::{Done, Status};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Free-form per-step metadata passed through from the base environment.
pub type Info = Map<String, Value>;

/// The result of a single `step` call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    pub observation: Vec<f64>,
    pub reward: f64,
    pub terminated: bool,
    pub truncated: bool,
    pub info: Info,
}

impl Transition {
    pub fn running(observation: Vec<f64>, reward: f64) -> Self {
        Self {
            observation,
            reward,
            terminated: false,
            truncated: false,
            info: Info::new(),
        }
    }
    pub fn status(&self) -> Status {
        // a step may report both flags, termination takes precedence
        if self.terminated {
            Status::Done(Done::Terminated)
        } else if self.truncated {
            Status::Done(Done::Truncated)
        } else {
            Status::Running
        }
    }
    pub fn is_done(&self) -> bool {
        self.terminated || self.truncated
    }
}

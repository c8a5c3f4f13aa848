use std::collections::VecDeque;

/// Bounded FIFO of rewards.
///
/// `push` always succeeds: once the queue holds `max_size` rewards the
/// oldest one is evicted to make room and handed back to the caller.
/// Storage grows with the queue, so `max_size` is only an upper bound.
#[derive(Debug, Clone)]
pub struct RewardQueue {
    rewards: VecDeque<f64>,
    max_size: usize,
}

impl RewardQueue {
    pub fn with_max_size(max_size: usize) -> Self {
        Self {
            rewards: VecDeque::new(),
            max_size,
        }
    }
    pub fn len(&self) -> usize {
        self.rewards.len()
    }
    pub fn is_empty(&self) -> bool {
        self.rewards.is_empty()
    }
    pub fn is_full(&self) -> bool {
        self.rewards.len() >= self.max_size
    }
    pub fn push(&mut self, reward: f64) -> Option<f64> {
        if self.max_size == 0 {
            return Some(reward);
        }
        let evicted = if self.is_full() {
            self.rewards.pop_front()
        } else {
            None
        };
        self.rewards.push_back(reward);
        evicted
    }
    pub fn clear(&mut self) {
        self.rewards.clear();
    }
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.rewards.iter().copied()
    }
}

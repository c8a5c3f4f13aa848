/// Counts steps within an episode and reports when the budget is spent.
#[derive(Debug, Clone)]
pub struct TimeLimit {
    truncation_timer: u32,
    max_steps: u32,
}

impl TimeLimit {
    pub fn new(max_steps: u32) -> Self {
        Self {
            truncation_timer: 0,
            max_steps,
        }
    }
    pub fn reset(&mut self) {
        self.truncation_timer = 0;
    }
    /// Registers one step and returns whether the episode should be
    /// truncated after it.
    pub fn step(&mut self) -> bool {
        self.truncation_timer += 1;
        self.truncation_timer_exceeded_threshold()
    }
    pub fn elapsed(&self) -> u32 {
        self.truncation_timer
    }
    pub fn max_steps(&self) -> u32 {
        self.max_steps
    }
    fn truncation_timer_exceeded_threshold(&self) -> bool {
        self.truncation_timer >= self.max_steps
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Running,
    Done(Done),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Done {
    // termination comes from the environment itself (the episode reached a
    // terminal state), truncation from an external limit such as a step
    // budget. both end the episode and the caller has to reset either way
    Terminated,
    Truncated,
}

impl Status {
    pub fn is_done(self) -> bool {
        matches!(self, Self::Done(_))
    }
}

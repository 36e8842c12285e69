/// Direction in which the ring is walked from the head.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Direction {
    /// Follow `next` links.
    Forward,
    /// Follow `prev` links.
    Backward,
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Forward => write!(f, "next"),
            Direction::Backward => write!(f, "prev"),
        }
    }
}

/// Cleanup hook invoked exactly once on every payload leaving the list.
pub type Destructor<T> = Box<dyn FnMut(T)>;

/// In-memory session history
///
/// Mirrors the browser's history stack: `push` discards the forward stack,
/// `replace` swaps the current entry, `back`/`forward` move between entries.
use tracing::trace;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryHistory {
    current: String,
    past: Vec<String>,
    future: Vec<String>,
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new("/")
    }
}

impl MemoryHistory {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            current: initial.into(),
            past: Vec::new(),
            future: Vec::new(),
        }
    }

    pub fn current(&self) -> &str {
        &self.current
    }

    pub fn can_go_back(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_go_forward(&self) -> bool {
        !self.future.is_empty()
    }

    /// Number of entries, current included
    pub fn depth(&self) -> usize {
        self.past.len() + 1 + self.future.len()
    }

    pub fn push(&mut self, entry: impl Into<String>) {
        let previous = std::mem::replace(&mut self.current, entry.into());
        trace!(from = %previous, to = %self.current, "history push");
        self.past.push(previous);
        self.future.clear();
    }

    pub fn replace(&mut self, entry: impl Into<String>) {
        self.current = entry.into();
    }

    /// Steps back one entry; returns false at the start of the stack
    pub fn back(&mut self) -> bool {
        match self.past.pop() {
            Some(previous) => {
                self.future.push(std::mem::replace(&mut self.current, previous));
                true
            }
            None => false,
        }
    }

    /// Steps forward one entry; returns false at the end of the stack
    pub fn forward(&mut self) -> bool {
        match self.future.pop() {
            Some(next) => {
                self.past.push(std::mem::replace(&mut self.current, next));
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_back_forward() {
        let mut history = MemoryHistory::default();
        history.push("/users");
        history.push("/user/alice");
        assert_eq!(history.depth(), 3);

        assert!(history.back());
        assert_eq!(history.current(), "/users");
        assert!(history.back());
        assert_eq!(history.current(), "/");
        assert!(!history.back());

        assert!(history.forward());
        assert_eq!(history.current(), "/users");
        assert!(history.can_go_forward());
    }

    #[test]
    fn test_push_clears_forward_stack() {
        let mut history = MemoryHistory::new("/");
        history.push("/users");
        history.back();
        history.push("/dashboard");

        assert!(!history.can_go_forward());
        assert!(!history.forward());
        assert_eq!(history.current(), "/dashboard");
    }

    #[test]
    fn test_replace_keeps_stack_size() {
        let mut history = MemoryHistory::new("/login");
        history.replace("/dashboard");
        assert_eq!(history.current(), "/dashboard");
        assert!(!history.can_go_back());
        assert_eq!(history.depth(), 1);
    }
}

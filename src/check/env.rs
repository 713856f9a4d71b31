use std::collections::HashSet;

type Frame<'a> = HashSet<&'a str>;

/// Names visible at some point of the program, as a stack of frames.
///
/// The bottom frame holds built-ins, function names and names introduced by
/// top-level bindings. Clause pattern variables live in frames pushed for the
/// duration of one clause body.
#[derive(Debug, Clone)]
pub struct BoundNames<'a> {
    frames: Vec<Frame<'a>>,
}

impl<'a> BoundNames<'a> {
    pub fn new(names: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            frames: vec![names.into_iter().collect()],
        }
    }

    /// Add names to the bottom frame, visible to every later item.
    pub fn bind_global(&mut self, names: impl IntoIterator<Item = &'a str>) {
        self.frames[0].extend(names);
    }

    /// Push a frame for one clause body.
    pub fn enter(&mut self, names: impl IntoIterator<Item = &'a str>) {
        self.frames.push(names.into_iter().collect());
    }

    /// Pop the innermost clause frame. The bottom frame is never popped.
    pub fn leave(&mut self) {
        if self.frames.len() > 1 {
            self.frames.pop();
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.frames.iter().rev().any(|frame| frame.contains(name))
    }
}

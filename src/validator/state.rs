use std::fmt::Display;

/// States of the structural automaton.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum State {
    /// Nothing consumed yet.
    Start,
    /// Inside an object, a key comes next.
    ExpectingKey,
    /// A key was read, the colon comes next.
    AfterKey,
    /// A colon was read, the member value comes next.
    ExpectingColonValue,
    /// A member value is complete.
    AfterValue,
    /// Inside an array, an element comes next.
    ExpectingArrayElement,
    /// An array element is complete.
    AfterArrayElement,
    /// The outermost container closed.
    Accept,
    Error,
}

impl Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum ContainerKind {
    Object,
    Array,
}

impl ContainerKind {
    /// State entered right after the opener.
    pub fn initial_state(&self) -> State {
        match self {
            ContainerKind::Object => State::ExpectingKey,
            ContainerKind::Array => State::ExpectingArrayElement,
        }
    }

    pub fn opener(&self) -> char {
        match self {
            ContainerKind::Object => '{',
            ContainerKind::Array => '[',
        }
    }

    pub fn closer(&self) -> char {
        match self {
            ContainerKind::Object => '}',
            ContainerKind::Array => ']',
        }
    }
}

impl Display for ContainerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContainerKind::Object => write!(f, "object"),
            ContainerKind::Array => write!(f, "array"),
        }
    }
}

/// An open container and the state it was opened from.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Frame {
    pub kind: ContainerKind,
    pub saved: State,
}

impl Frame {
    pub fn new(kind: ContainerKind, saved: State) -> Self {
        Frame { kind, saved }
    }

    /// State to continue in once this container closes.
    pub fn resume_state(&self) -> State {
        match self.saved {
            State::ExpectingArrayElement => State::AfterArrayElement,
            State::ExpectingColonValue => State::AfterValue,
            _ => State::Accept,
        }
    }
}

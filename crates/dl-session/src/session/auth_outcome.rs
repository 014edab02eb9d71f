use std::fmt;

/// Where a credential was stored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Persistence {
    /// Survives restarts
    Durable,
    /// Lives only as long as the process
    Volatile,
}

impl Persistence {
    pub fn from_remember_me(remember_me: bool) -> Self {
        if remember_me {
            Persistence::Durable
        } else {
            Persistence::Volatile
        }
    }

    pub fn is_durable(self) -> bool {
        self == Persistence::Durable
    }
}

impl fmt::Display for Persistence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Persistence::Durable => f.write_str("remembered"),
            Persistence::Volatile => f.write_str("this session only"),
        }
    }
}

/// Result of a login or signup attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    Success { persistence: Persistence },
    Failure { messages: Vec<String> },
}

impl AuthOutcome {
    pub(crate) fn failure(messages: Vec<String>) -> Self {
        AuthOutcome::Failure { messages }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, AuthOutcome::Success { .. })
    }
}

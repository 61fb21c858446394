use flowkeys_common::Command;

/// What the dispatcher did with one keydown event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The command's trigger ran.
    Fired(Command),
    /// The chord is bound but the view supplied no trigger for it.
    Inert(Command),
    /// The target is in an exempt region and the policy held the command back.
    Exempt(Command),
    /// No command is bound to the chord.
    Unbound,
}

impl DispatchOutcome {
    /// Whether the host must suppress the platform's default key handling.
    ///
    /// Only a command that actually ran claims the key press.
    pub fn suppresses_default(&self) -> bool {
        matches!(self, DispatchOutcome::Fired(_))
    }

    pub fn command(&self) -> Option<Command> {
        match self {
            DispatchOutcome::Fired(c) | DispatchOutcome::Inert(c) | DispatchOutcome::Exempt(c) => {
                Some(*c)
            }
            DispatchOutcome::Unbound => None,
        }
    }
}

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use flowkeys_common::{Command, OverrideFlag};

/// Zero-argument callback that performs a command's effect.
pub type Trigger = Rc<dyn Fn()>;

/// Caller-supplied triggers and override flags for one editor view.
///
/// Every trigger is optional: a command without one stays bound but is
/// inert. Setting a trigger twice keeps the latest.
#[derive(Clone, Default)]
pub struct ShortcutHandlers {
    triggers: HashMap<Command, Trigger>,
    overrides: HashMap<OverrideFlag, bool>,
}

impl ShortcutHandlers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`ShortcutHandlers::set_trigger`].
    pub fn on(mut self, command: Command, trigger: impl Fn() + 'static) -> Self {
        self.set_trigger(command, Rc::new(trigger));
        self
    }

    /// Builder form of [`ShortcutHandlers::set_override`].
    pub fn with_override(mut self, flag: OverrideFlag, active: bool) -> Self {
        self.set_override(flag, active);
        self
    }

    pub fn set_trigger(&mut self, command: Command, trigger: Trigger) {
        self.triggers.insert(command, trigger);
    }

    pub fn clear(&mut self, command: Command) {
        self.triggers.remove(&command);
    }

    pub fn set_override(&mut self, flag: OverrideFlag, active: bool) {
        self.overrides.insert(flag, active);
    }

    pub fn trigger(&self, command: Command) -> Option<&Trigger> {
        self.triggers.get(&command)
    }

    /// Unset flags read as `false`.
    pub fn override_active(&self, flag: OverrideFlag) -> bool {
        self.overrides.get(&flag).copied().unwrap_or(false)
    }
}

impl fmt::Debug for ShortcutHandlers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut bound: Vec<Command> = self.triggers.keys().copied().collect();
        bound.sort();
        f.debug_struct("ShortcutHandlers")
            .field("triggers", &bound)
            .field("overrides", &self.overrides)
            .finish()
    }
}

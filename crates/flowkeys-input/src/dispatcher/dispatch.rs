use std::path::Path;

use flowkeys_common::InputError;
use flowkeys_config::FlowkeysConfig;
use tracing::{debug, warn};

use crate::context::{ExemptionClassifier, KeyEvent, MarkerClassifier};
use crate::registry::{BindingRegistry, Modifiers};
use crate::table::{CommandTable, ShortcutHandlers};

use super::types::DispatchOutcome;

/// Routes keydown events to flow-editor commands.
///
/// One dispatcher per editor view owns the whole command table and
/// resolves each pressed chord against it. Every event is evaluated on its
/// own; the table is the only state and is swapped as a whole.
pub struct Dispatcher<C> {
    classifier: C,
    table: CommandTable,
}

impl<C> Dispatcher<C> {
    /// A dispatcher with no bindings yet.
    pub fn new(classifier: C) -> Self {
        Self {
            classifier,
            table: CommandTable::empty(),
        }
    }

    pub fn with_table(classifier: C, table: CommandTable) -> Self {
        Self { classifier, table }
    }

    /// Replace the bound table wholesale.
    pub fn rebind(&mut self, table: CommandTable) {
        debug!("rebinding dispatcher ({} commands)", table.len());
        self.table = table;
    }

    /// Build a table from `registry` and `handlers` and bind it.
    ///
    /// If `registry` cannot produce a table, the previously bound chords are
    /// kept but re-attached to `handlers`, so a trigger the view has since
    /// withdrawn never fires again. The build error is still returned.
    pub fn rebuild(
        &mut self,
        registry: &BindingRegistry,
        handlers: &ShortcutHandlers,
    ) -> Result<(), InputError> {
        match CommandTable::build(registry, handlers) {
            Ok(table) => {
                self.rebind(table);
                Ok(())
            }
            Err(e) => {
                warn!("rejected new bindings ({e}), keeping previous chords");
                let table = self.table.with_handlers(handlers);
                self.rebind(table);
                Err(e)
            }
        }
    }

    /// Drop every binding, e.g. when the owning view unmounts.
    pub fn unbind(&mut self) {
        debug!("unbinding dispatcher");
        self.table = CommandTable::empty();
    }

    pub fn table(&self) -> &CommandTable {
        &self.table
    }

    pub fn classifier(&self) -> &C {
        &self.classifier
    }

    /// Evaluate one keydown event.
    ///
    /// The trigger's presence is checked before anything else so an inert
    /// command never claims the key press. The host suppresses default
    /// handling iff [`DispatchOutcome::suppresses_default`] is true.
    pub fn dispatch<N>(&self, event: &KeyEvent<N>) -> DispatchOutcome
    where
        C: ExemptionClassifier<N>,
    {
        let Some(entry) = self.table.get(&event.combo) else {
            return DispatchOutcome::Unbound;
        };
        let command = entry.command;

        let Some(trigger) = entry.trigger.as_ref() else {
            debug!(?command, "no trigger supplied, leaving key to the platform");
            return DispatchOutcome::Inert(command);
        };

        let exempt = entry.policy.consults_exemption() && self.classifier.is_exempt(event);
        if !entry.policy.permits(exempt, entry.override_active) {
            debug!(?command, "target is exempt, leaving key to the platform");
            return DispatchOutcome::Exempt(command);
        }

        debug!(?command, chord = %entry.combo, "firing");
        trigger();
        DispatchOutcome::Fired(command)
    }

    /// Evaluate a raw DOM key press.
    pub fn dispatch_key<N>(&self, key: &str, mods: Modifiers, target: Option<N>) -> DispatchOutcome
    where
        C: ExemptionClassifier<N>,
    {
        self.dispatch(&KeyEvent::from_dom(key, mods, target))
    }
}

impl Dispatcher<MarkerClassifier> {
    /// Wire a dispatcher from loaded config and the view's handlers.
    pub fn from_config(
        config: &FlowkeysConfig,
        handlers: &ShortcutHandlers,
    ) -> Result<Self, InputError> {
        let registry = BindingRegistry::from_source(&config.shortcuts);
        let table = CommandTable::build(&registry, handlers)?;
        Ok(Self::with_table(
            MarkerClassifier::from_config(&config.exemption),
            table,
        ))
    }

    /// Read the TOML file at `path` and wire a dispatcher from it.
    pub fn load(path: &Path, handlers: &ShortcutHandlers) -> flowkeys_common::Result<Self> {
        let config = flowkeys_config::load_from_path(path)?;
        Ok(Self::from_config(&config, handlers)?)
    }

    /// Re-read `path` after the watcher reports a change.
    ///
    /// The marker class is taken from the new file as soon as it parses.
    /// Chords follow [`Dispatcher::rebuild`]. A file that fails to load
    /// leaves the dispatcher untouched.
    pub fn reload(
        &mut self,
        path: &Path,
        handlers: &ShortcutHandlers,
    ) -> flowkeys_common::Result<()> {
        let config = flowkeys_config::load_from_path(path)?;
        self.classifier = MarkerClassifier::from_config(&config.exemption);
        let registry = BindingRegistry::from_source(&config.shortcuts);
        self.rebuild(&registry, handlers)?;
        Ok(())
    }
}

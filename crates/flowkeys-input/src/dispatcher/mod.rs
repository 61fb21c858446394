//! Keyboard-command dispatch for the flow editor.
//!
//! The [`Dispatcher`] sits between the host's keydown events and the
//! editor view's command triggers. It resolves the pressed chord against
//! its [`CommandTable`](crate::table::CommandTable), applies the command's
//! guard policy, and reports whether the key press was claimed.

mod dispatch;
mod types;

pub use dispatch::Dispatcher;
pub use types::DispatchOutcome;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{ElementRef, ElementTree, KeyEvent, MarkerClassifier, NodeId};
    use crate::guard::GuardPolicy;
    use crate::registry::{BindingRegistry, Modifiers};
    use crate::table::ShortcutHandlers;
    use flowkeys_common::{Command, ConfigError, FlowkeysError, InputError, OverrideFlag};
    use flowkeys_config::{FlowkeysConfig, ShortcutConfig};
    use std::cell::Cell;
    use std::rc::Rc;

    /// root > canvas
    ///      > panel.noflow > text-field
    struct Editor {
        tree: ElementTree,
        canvas: NodeId,
        field: NodeId,
        registry: BindingRegistry,
    }

    impl Editor {
        fn new() -> Self {
            let mut tree = ElementTree::new();
            let root = tree.root();
            let canvas = tree.append(root, &["react-flow"]);
            let panel = tree.append(root, &["noflow"]);
            let field = tree.append(panel, &["text-field"]);
            Self {
                tree,
                canvas,
                field,
                registry: BindingRegistry::from_source(&ShortcutConfig::default()),
            }
        }

        fn dispatcher(&self, handlers: &ShortcutHandlers) -> Dispatcher<MarkerClassifier> {
            let mut dispatcher = Dispatcher::new(MarkerClassifier::default());
            dispatcher.rebuild(&self.registry, handlers).unwrap();
            dispatcher
        }

        fn press(&self, command: Command, target: NodeId) -> KeyEvent<ElementRef<'_>> {
            let combo = self.registry.chord_for(command).unwrap().clone();
            KeyEvent::new(combo, Some(self.tree.node(target)))
        }
    }

    fn counter() -> (Rc<Cell<u32>>, impl Fn() + 'static) {
        let hits = Rc::new(Cell::new(0u32));
        let handle = hits.clone();
        (hits, move || handle.set(handle.get() + 1))
    }

    fn all_overrides(active: bool) -> ShortcutHandlers {
        OverrideFlag::ALL
            .into_iter()
            .fold(ShortcutHandlers::new(), |h, flag| h.with_override(flag, active))
    }

    fn primary() -> Modifiers {
        if cfg!(target_os = "macos") {
            Modifiers {
                super_key: true,
                ..Default::default()
            }
        } else {
            Modifiers {
                ctrl: true,
                ..Default::default()
            }
        }
    }

    fn commands_with(policy: fn(GuardPolicy) -> bool) -> Vec<Command> {
        Command::ALL
            .into_iter()
            .filter(|c| policy(GuardPolicy::for_command(*c)))
            .collect()
    }

    #[test]
    fn missing_trigger_never_suppresses() {
        let editor = Editor::new();
        for flags in [false, true] {
            let dispatcher = editor.dispatcher(&all_overrides(flags));
            for command in Command::ALL {
                for target in [editor.canvas, editor.field] {
                    let outcome = dispatcher.dispatch(&editor.press(command, target));
                    assert_eq!(outcome, DispatchOutcome::Inert(command));
                    assert!(!outcome.suppresses_default());
                }
            }
        }
    }

    #[test]
    fn always_exempt_commands_respect_exempt_regions() {
        let editor = Editor::new();
        for command in commands_with(|p| p == GuardPolicy::AlwaysExempt) {
            let (hits, trigger) = counter();
            let dispatcher = editor.dispatcher(&all_overrides(true).on(command, trigger));

            let outcome = dispatcher.dispatch(&editor.press(command, editor.field));
            assert_eq!(outcome, DispatchOutcome::Exempt(command));
            assert!(!outcome.suppresses_default());
            assert_eq!(hits.get(), 0, "{command:?} fired inside exempt region");

            let outcome = dispatcher.dispatch(&editor.press(command, editor.canvas));
            assert_eq!(outcome, DispatchOutcome::Fired(command));
            assert!(outcome.suppresses_default());
            assert_eq!(hits.get(), 1);
        }
    }

    #[test]
    fn override_commands_fire_in_exempt_region_only_with_flag() {
        let editor = Editor::new();
        for command in commands_with(|p| p.override_flag().is_some()) {
            let flag = GuardPolicy::for_command(command).override_flag().unwrap();

            let (hits, trigger) = counter();
            let handlers = ShortcutHandlers::new()
                .on(command, trigger)
                .with_override(flag, false);
            let dispatcher = editor.dispatcher(&handlers);

            let outcome = dispatcher.dispatch(&editor.press(command, editor.field));
            assert_eq!(outcome, DispatchOutcome::Exempt(command));
            assert_eq!(hits.get(), 0);

            // non-exempt fires regardless of flag
            assert!(dispatcher.dispatch(&editor.press(command, editor.canvas)).suppresses_default());
            assert_eq!(hits.get(), 1);

            let dispatcher = editor.dispatcher(&handlers.clone().with_override(flag, true));
            let outcome = dispatcher.dispatch(&editor.press(command, editor.field));
            assert_eq!(outcome, DispatchOutcome::Fired(command));
            assert_eq!(hits.get(), 2);

            assert!(dispatcher.dispatch(&editor.press(command, editor.canvas)).suppresses_default());
            assert_eq!(hits.get(), 3);
        }
    }

    #[test]
    fn other_commands_flags_do_not_override() {
        let editor = Editor::new();
        let (hits, trigger) = counter();
        let handlers = all_overrides(true)
            .with_override(OverrideFlag::OverrideModal, false)
            .on(Command::Save, trigger);
        let dispatcher = editor.dispatcher(&handlers);

        let outcome = dispatcher.dispatch(&editor.press(Command::Save, editor.field));
        assert_eq!(outcome, DispatchOutcome::Exempt(Command::Save));
        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn unguarded_commands_fire_inside_exempt_region() {
        let editor = Editor::new();
        for command in [Command::Download, Command::Docs] {
            let (hits, trigger) = counter();
            let dispatcher = editor.dispatcher(&ShortcutHandlers::new().on(command, trigger));

            let outcome = dispatcher.dispatch(&editor.press(command, editor.field));
            assert_eq!(outcome, DispatchOutcome::Fired(command));
            assert_eq!(hits.get(), 1);
        }
    }

    #[test]
    fn repeated_chord_fires_each_time() {
        let editor = Editor::new();
        let (hits, trigger) = counter();
        let dispatcher = editor.dispatcher(&ShortcutHandlers::new().on(Command::Group, trigger));

        let event = editor.press(Command::Group, editor.canvas);
        dispatcher.dispatch(&event);
        dispatcher.dispatch(&event);
        assert_eq!(hits.get(), 2);
    }

    #[test]
    fn rebuild_uses_only_the_newest_trigger() {
        let editor = Editor::new();
        let (stale_hits, stale) = counter();
        let (fresh_hits, fresh) = counter();

        let mut handlers = ShortcutHandlers::new().on(Command::Minimize, stale);
        let mut dispatcher = editor.dispatcher(&handlers);

        handlers = handlers.on(Command::Minimize, fresh);
        dispatcher.rebuild(&editor.registry, &handlers).unwrap();

        dispatcher.dispatch(&editor.press(Command::Minimize, editor.canvas));
        assert_eq!(stale_hits.get(), 0);
        assert_eq!(fresh_hits.get(), 1);
    }

    #[test]
    fn save_in_text_field_follows_override_modal() {
        let editor = Editor::new();
        let (saves, save) = counter();

        let closed = ShortcutHandlers::new()
            .on(Command::Save, save)
            .with_override(OverrideFlag::OverrideModal, false);
        let dispatcher = editor.dispatcher(&closed);
        let outcome = dispatcher.dispatch(&editor.press(Command::Save, editor.field));
        assert!(!outcome.suppresses_default());
        assert_eq!(saves.get(), 0);

        let open = closed.with_override(OverrideFlag::OverrideModal, true);
        let dispatcher = editor.dispatcher(&open);
        let outcome = dispatcher.dispatch(&editor.press(Command::Save, editor.field));
        assert!(outcome.suppresses_default());
        assert_eq!(saves.get(), 1);
    }

    #[test]
    fn freeze_path_in_text_field_never_fires() {
        let editor = Editor::new();
        let (hits, trigger) = counter();
        let dispatcher = editor.dispatcher(&all_overrides(true).on(Command::FreezePath, trigger));

        let outcome = dispatcher.dispatch(&editor.press(Command::FreezePath, editor.field));
        assert_eq!(outcome, DispatchOutcome::Exempt(Command::FreezePath));
        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn share_without_trigger_is_a_no_op() {
        let editor = Editor::new();
        let dispatcher = editor.dispatcher(&all_overrides(true));
        for target in [editor.canvas, editor.field] {
            let outcome = dispatcher.dispatch(&editor.press(Command::Share, target));
            assert_eq!(outcome, DispatchOutcome::Inert(Command::Share));
            assert!(!outcome.suppresses_default());
        }
    }

    #[test]
    fn unbound_chord_is_left_alone() {
        let editor = Editor::new();
        let dispatcher = editor.dispatcher(&ShortcutHandlers::new());
        let canvas = Some(editor.tree.node(editor.canvas));
        let outcome = dispatcher.dispatch_key("z", Modifiers::default(), canvas);
        assert_eq!(outcome, DispatchOutcome::Unbound);
        assert_eq!(outcome.command(), None);
        assert!(!outcome.suppresses_default());
    }

    #[test]
    fn raw_dom_keys_resolve() {
        let editor = Editor::new();
        let (code_hits, code) = counter();
        let (save_hits, save) = counter();
        let handlers = ShortcutHandlers::new()
            .on(Command::Code, code)
            .on(Command::Save, save);
        let dispatcher = editor.dispatcher(&handlers);
        let canvas = || Some(editor.tree.node(editor.canvas));

        let outcome = dispatcher.dispatch_key(" ", Modifiers::default(), canvas());
        assert_eq!(outcome, DispatchOutcome::Fired(Command::Code));
        assert_eq!(code_hits.get(), 1);

        let outcome = dispatcher.dispatch_key("s", primary(), canvas());
        assert_eq!(outcome, DispatchOutcome::Fired(Command::Save));
        assert_eq!(save_hits.get(), 1);

        // typing a space in a text field stays a space
        let field = Some(editor.tree.node(editor.field));
        let outcome = dispatcher.dispatch_key(" ", Modifiers::default(), field);
        assert_eq!(outcome, DispatchOutcome::Exempt(Command::Code));
        assert_eq!(code_hits.get(), 1);
    }

    #[test]
    fn shifted_symbol_chord_fires_on_live_key() {
        let config = ShortcutConfig {
            minimize: "Mod+!".into(),
            ..Default::default()
        };
        let registry = BindingRegistry::from_source(&config);
        let (hits, trigger) = counter();
        let mut dispatcher = Dispatcher::new(MarkerClassifier::default());
        dispatcher
            .rebuild(&registry, &ShortcutHandlers::new().on(Command::Minimize, trigger))
            .unwrap();

        // Shift+1 on a US layout reports "!" with shiftKey set
        let tree = ElementTree::new();
        let held = Modifiers {
            shift: true,
            ..primary()
        };
        let outcome = dispatcher.dispatch_key("!", held, Some(tree.node(tree.root())));
        assert_eq!(outcome, DispatchOutcome::Fired(Command::Minimize));
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn unbind_removes_every_binding() {
        let editor = Editor::new();
        let (hits, trigger) = counter();
        let handlers = ShortcutHandlers::new().on(Command::Freeze, trigger);
        let mut dispatcher = editor.dispatcher(&handlers);
        dispatcher.unbind();

        assert!(dispatcher.table().is_empty());
        let outcome = dispatcher.dispatch(&editor.press(Command::Freeze, editor.canvas));
        assert_eq!(outcome, DispatchOutcome::Unbound);
        assert_eq!(hits.get(), 0);
    }

    fn ambiguous_registry() -> BindingRegistry {
        BindingRegistry::from_source(&ShortcutConfig {
            download: "Mod+F".into(),
            ..Default::default()
        })
    }

    #[test]
    fn failed_rebuild_drops_withdrawn_triggers() {
        let editor = Editor::new();
        let (stale_hits, stale) = counter();
        let mut dispatcher = editor.dispatcher(&ShortcutHandlers::new().on(Command::Save, stale));

        // the view withdraws its save trigger while the new bindings are broken
        let err = dispatcher
            .rebuild(&ambiguous_registry(), &ShortcutHandlers::new())
            .unwrap_err();
        assert!(matches!(err, InputError::AmbiguousChord { .. }));

        let outcome = dispatcher.dispatch(&editor.press(Command::Save, editor.canvas));
        assert_eq!(outcome, DispatchOutcome::Inert(Command::Save));
        assert!(!outcome.suppresses_default());
        assert_eq!(stale_hits.get(), 0);
    }

    #[test]
    fn failed_rebuild_keeps_chords_with_new_triggers() {
        let editor = Editor::new();
        let (stale_hits, stale) = counter();
        let (fresh_hits, fresh) = counter();
        let mut dispatcher =
            editor.dispatcher(&ShortcutHandlers::new().on(Command::Freeze, stale));

        let handlers = ShortcutHandlers::new().on(Command::Freeze, fresh);
        assert!(dispatcher.rebuild(&ambiguous_registry(), &handlers).is_err());

        let outcome = dispatcher.dispatch(&editor.press(Command::Freeze, editor.canvas));
        assert_eq!(outcome, DispatchOutcome::Fired(Command::Freeze));
        assert_eq!(stale_hits.get(), 0);
        assert_eq!(fresh_hits.get(), 1);
        assert_eq!(dispatcher.table().len(), Command::ALL.len());
    }

    #[test]
    fn failed_first_rebuild_leaves_nothing_bound() {
        let editor = Editor::new();
        let (hits, trigger) = counter();
        let mut dispatcher = Dispatcher::new(MarkerClassifier::default());

        let handlers = ShortcutHandlers::new().on(Command::Freeze, trigger);
        assert!(dispatcher.rebuild(&ambiguous_registry(), &handlers).is_err());

        assert!(dispatcher.table().is_empty());
        let outcome = dispatcher.dispatch(&editor.press(Command::Freeze, editor.canvas));
        assert_eq!(outcome, DispatchOutcome::Unbound);
        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn injected_classifier_replaces_ancestry_walk() {
        let editor = Editor::new();
        let (hits, trigger) = counter();
        let handlers = ShortcutHandlers::new().on(Command::Group, trigger);

        let everything_exempt = |_: &KeyEvent<()>| true;
        let mut dispatcher = Dispatcher::new(everything_exempt);
        dispatcher.rebuild(&editor.registry, &handlers).unwrap();

        let combo = editor.registry.chord_for(Command::Group).unwrap().clone();
        let outcome = dispatcher.dispatch(&KeyEvent::new(combo, Some(())));
        assert_eq!(outcome, DispatchOutcome::Exempt(Command::Group));
        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn event_without_target_is_not_exempt() {
        let editor = Editor::new();
        let (hits, trigger) = counter();
        let dispatcher = editor.dispatcher(&ShortcutHandlers::new().on(Command::Freeze, trigger));

        let combo = editor.registry.chord_for(Command::Freeze).unwrap().clone();
        let event: KeyEvent<ElementRef<'_>> = KeyEvent::new(combo, None);
        assert!(dispatcher.dispatch(&event).suppresses_default());
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn from_config_uses_configured_marker_and_chords() {
        let mut tree = ElementTree::new();
        let root = tree.root();
        let editor_input = tree.append(root, &["prompt-editor"]);

        let mut config = FlowkeysConfig::default();
        config.exemption.marker_class = "prompt-editor".into();
        config.shortcuts.group = "Alt+G".into();

        let (hits, trigger) = counter();
        let dispatcher =
            Dispatcher::from_config(&config, &ShortcutHandlers::new().on(Command::Group, trigger))
                .unwrap();
        assert_eq!(dispatcher.classifier().marker(), "prompt-editor");

        let alt = Modifiers {
            alt: true,
            ..Default::default()
        };
        let outcome = dispatcher.dispatch_key("g", alt, Some(tree.node(editor_input)));
        assert_eq!(outcome, DispatchOutcome::Exempt(Command::Group));

        let outcome = dispatcher.dispatch_key("g", alt, Some(tree.node(root)));
        assert_eq!(outcome, DispatchOutcome::Fired(Command::Group));
        assert_eq!(hits.get(), 1);
    }

    fn alt() -> Modifiers {
        Modifiers {
            alt: true,
            ..Default::default()
        }
    }

    #[test]
    fn load_wires_dispatcher_from_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[shortcuts]\ngroup = \"Alt+G\"\n").unwrap();

        let (hits, trigger) = counter();
        let dispatcher =
            Dispatcher::load(&path, &ShortcutHandlers::new().on(Command::Group, trigger)).unwrap();
        assert_eq!(dispatcher.classifier().marker(), "noflow");

        let tree = ElementTree::new();
        let outcome = dispatcher.dispatch_key("g", alt(), Some(tree.node(tree.root())));
        assert_eq!(outcome, DispatchOutcome::Fired(Command::Group));
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn load_missing_file_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Dispatcher::load(&dir.path().join("absent.toml"), &ShortcutHandlers::new())
            .err()
            .unwrap();
        assert!(matches!(err, FlowkeysError::Config(ConfigError::FileNotFound(_))));
    }

    #[test]
    fn load_clashing_chords_is_an_input_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[shortcuts]\ngroup = \"Mod+S\"\n").unwrap();

        let err = Dispatcher::load(&path, &ShortcutHandlers::new()).err().unwrap();
        assert!(matches!(
            err,
            FlowkeysError::Input(InputError::AmbiguousChord { .. })
        ));
    }

    #[test]
    fn reload_applies_new_chords_and_marker() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "").unwrap();

        let (hits, trigger) = counter();
        let handlers = ShortcutHandlers::new().on(Command::Group, trigger);
        let mut dispatcher = Dispatcher::load(&path, &handlers).unwrap();

        std::fs::write(
            &path,
            "[shortcuts]\ngroup = \"Alt+G\"\n\n[exemption]\nmarker_class = \"prompt-editor\"\n",
        )
        .unwrap();
        dispatcher.reload(&path, &handlers).unwrap();
        assert_eq!(dispatcher.classifier().marker(), "prompt-editor");

        let mut tree = ElementTree::new();
        let root = tree.root();
        let prompt = tree.append(root, &["prompt-editor"]);
        let panel = tree.append(root, &["noflow"]);

        assert_eq!(
            dispatcher.dispatch_key("g", alt(), Some(tree.node(prompt))),
            DispatchOutcome::Exempt(Command::Group)
        );
        assert_eq!(
            dispatcher.dispatch_key("g", alt(), Some(tree.node(panel))),
            DispatchOutcome::Fired(Command::Group)
        );
        assert_eq!(
            dispatcher.dispatch_key("g", primary(), Some(tree.node(root))),
            DispatchOutcome::Unbound
        );
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn reload_of_unreadable_file_keeps_bindings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "").unwrap();

        let (hits, trigger) = counter();
        let handlers = ShortcutHandlers::new().on(Command::Freeze, trigger);
        let mut dispatcher = Dispatcher::load(&path, &handlers).unwrap();

        std::fs::write(&path, "[shortcuts\nfreeze = ").unwrap();
        let err = dispatcher.reload(&path, &handlers).unwrap_err();
        assert!(matches!(err, FlowkeysError::Config(ConfigError::ParseError(_))));

        let tree = ElementTree::new();
        let outcome = dispatcher.dispatch_key("f", primary(), Some(tree.node(tree.root())));
        assert_eq!(outcome, DispatchOutcome::Fired(Command::Freeze));
        assert_eq!(hits.get(), 1);
    }
}

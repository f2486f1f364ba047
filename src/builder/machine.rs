//! The state machine builder and runtime façade.

use crate::builder::error::{FsmError, Result};
use crate::builder::options::MachineOptions;
use crate::builder::registry::{HandlerRegistry, SharedRegistry};
use crate::builder::state::StateSpec;
use crate::builder::transition::TransitionSpec;
use crate::core::{
    callback, substitute, Callback, ErrorHandler, HookKey, HookTable, InvalidTransition,
    TransitionKey,
};
use crate::engine::{CompileEngine, EngineSpec, TableEngine};
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;
use std::rc::Rc;

/// Lifecycle stage of a machine. `Configuring -> Running` happens once, on
/// `start()`, and cannot be undone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Stage {
    Configuring,
    Running,
}

/// Read-only snapshot of a machine's topology and position.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MachineDescription {
    pub stage: Stage,
    pub init_state: Option<String>,
    /// `None` until the machine is started
    pub current_state: Option<String>,
    pub states: Vec<String>,
    pub transitions: Vec<TransitionKey>,
}

impl MachineDescription {
    /// Render as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Declares a state machine and, once started, drives it.
///
/// While configuring, states, transitions, the initial state and the error
/// handler are declared and validated. `start()` compiles them into the
/// engine `E`; from then on the topology is frozen and only `go` and the
/// read accessors are available. Global enter/leave listeners may be
/// attached or removed in either stage.
///
/// # Example
///
/// ```rust
/// use fsm_builder::{FiniteStateMachineBuilder, FsmError};
///
/// let mut fsm = FiniteStateMachineBuilder::new();
/// fsm.add_state("idle")?
///     .add_state("running")?
///     .add_state("done")?
///     .set_init_state("idle")?
///     .add_transition(("idle", "running"))?
///     .add_transition(("running", "done"))?
///     .start()?;
///
/// assert_eq!(fsm.current()?, "idle");
/// assert!(matches!(fsm.go("done"), Err(FsmError::IllegalTransition { .. })));
///
/// fsm.go("running")?.go("done")?;
/// assert_eq!(fsm.current()?, "done");
/// # Ok::<(), FsmError>(())
/// ```
pub struct FiniteStateMachineBuilder<E: CompileEngine = TableEngine> {
    options: MachineOptions,
    states: Vec<StateSpec>,
    state_names: HashSet<String>,
    transitions: Vec<(TransitionKey, TransitionSpec)>,
    transition_pairs: HashSet<(String, String)>,
    init: Option<String>,
    error_handler: Option<ErrorHandler>,
    registry: SharedRegistry,
    machine: Option<E>,
}

impl FiniteStateMachineBuilder<TableEngine> {
    /// Create a builder with default options and the default engine.
    pub fn new() -> Self {
        Self::with_options(MachineOptions::default())
    }

    /// Declare a whole topology at once. Used by the `machine!` macro.
    pub fn with_topology<S, T>(
        init: &str,
        states: impl IntoIterator<Item = S>,
        transitions: impl IntoIterator<Item = T>,
    ) -> Result<Self>
    where
        S: Into<StateSpec>,
        T: Into<TransitionSpec>,
    {
        let mut fsm = Self::new();
        for state in states {
            fsm.add_state(state)?;
        }
        fsm.set_init_state(init)?;
        for transition in transitions {
            fsm.add_transition(transition)?;
        }
        Ok(fsm)
    }
}

impl<E: CompileEngine> FiniteStateMachineBuilder<E> {
    /// Create a builder with custom key and message templates.
    pub fn with_options(options: MachineOptions) -> Self {
        Self {
            options,
            states: Vec::new(),
            state_names: HashSet::new(),
            transitions: Vec::new(),
            transition_pairs: HashSet::new(),
            init: None,
            error_handler: None,
            registry: SharedRegistry::default(),
            machine: None,
        }
    }

    /// Options this builder renders keys and messages with.
    pub fn options(&self) -> &MachineOptions {
        &self.options
    }

    /// Current lifecycle stage.
    pub fn stage(&self) -> Stage {
        if self.machine.is_some() {
            Stage::Running
        } else {
            Stage::Configuring
        }
    }

    /// Whether `start()` has succeeded.
    pub fn is_started(&self) -> bool {
        self.machine.is_some()
    }

    fn ensure_configuring(&self, operation: &'static str) -> Result<()> {
        if self.is_started() {
            return Err(FsmError::AlreadyStarted { operation });
        }
        Ok(())
    }

    fn running(&self, operation: &'static str) -> Result<&E> {
        self.machine
            .as_ref()
            .ok_or(FsmError::NotStarted { operation })
    }

    fn transition_key(&self, from: &str, to: &str) -> TransitionKey {
        TransitionKey::new(from, to, &self.options.transition_key_template)
    }

    /// Declare a state. Names must be unique.
    pub fn add_state(&mut self, state: impl Into<StateSpec>) -> Result<&mut Self> {
        self.ensure_configuring("add_state")?;
        let state = state.into();

        if self.state_names.contains(&state.name) {
            return Err(FsmError::DuplicateState { name: state.name });
        }

        self.state_names.insert(state.name.clone());
        self.states.push(state);
        Ok(self)
    }

    /// Designate the initial state. May only be called once.
    ///
    /// The name does not have to be declared yet; `start()` checks it.
    pub fn set_init_state(&mut self, name: impl Into<String>) -> Result<&mut Self> {
        self.ensure_configuring("set_init_state")?;
        let requested = name.into();

        if let Some(existing) = &self.init {
            return Err(FsmError::DuplicateInitState {
                existing: existing.clone(),
                requested,
            });
        }

        self.init = Some(requested);
        Ok(self)
    }

    /// Declare a transition between two already declared states.
    pub fn add_transition(&mut self, transition: impl Into<TransitionSpec>) -> Result<&mut Self> {
        self.ensure_configuring("add_transition")?;
        let transition = transition.into();

        for endpoint in [&transition.from, &transition.to] {
            if !self.state_names.contains(endpoint) {
                return Err(FsmError::UnknownState {
                    name: endpoint.clone(),
                });
            }
        }

        // Identity is the pair; rendered keys may coincide for distinct pairs.
        let key = self.transition_key(&transition.from, &transition.to);
        let pair = (transition.from.clone(), transition.to.clone());
        if !self.transition_pairs.insert(pair) {
            return Err(FsmError::DuplicateTransition {
                transition: key.id().to_string(),
            });
        }

        self.transitions.push((key, transition));
        Ok(self)
    }

    /// Install the handler notified when `go` requests an illegal transition.
    ///
    /// The last handler installed before `start()` wins. Without one, refused
    /// transitions are logged at `warn` level.
    pub fn add_error_handler<F>(&mut self, handler: F) -> Result<&mut Self>
    where
        F: Fn(&InvalidTransition) + 'static,
    {
        self.ensure_configuring("add_error_handler")?;

        if self.error_handler.replace(Rc::new(handler)).is_some() {
            tracing::warn!("replacing previously installed error handler");
        }
        Ok(self)
    }

    /// Freeze the topology and hand it to the engine.
    pub fn start(&mut self) -> Result<&mut Self> {
        self.ensure_configuring("start")?;

        let init = self.init.clone().ok_or(FsmError::MissingInitState)?;
        if !self.state_names.contains(&init) {
            return Err(FsmError::UnknownState { name: init });
        }

        let engine = E::compile(self.compile(init));
        tracing::debug!(
            init = engine.state(),
            states = self.states.len(),
            transitions = self.transitions.len(),
            "state machine started"
        );

        self.machine = Some(engine);
        Ok(self)
    }

    fn compile(&self, init: String) -> EngineSpec {
        let mut hooks = HookTable::new();

        for state in &self.states {
            if let Some(on_enter) = &state.on_enter {
                hooks.insert(HookKey::EnterState(state.name.clone()), Rc::clone(on_enter));
            }
            if let Some(on_leave) = &state.on_leave {
                hooks.insert(HookKey::LeaveState(state.name.clone()), Rc::clone(on_leave));
            }
        }

        for (key, transition) in &self.transitions {
            if let Some(on_before) = &transition.on_before {
                hooks.insert(HookKey::BeforeTransition(key.clone()), Rc::clone(on_before));
            }
            if let Some(on_after) = &transition.on_after {
                hooks.insert(HookKey::AfterTransition(key.clone()), Rc::clone(on_after));
            }
        }

        let registry = Rc::clone(&self.registry);
        hooks.insert(
            HookKey::EnterAnyState,
            callback(move |event| HandlerRegistry::dispatch_enter(&registry, event)),
        );
        let registry = Rc::clone(&self.registry);
        hooks.insert(
            HookKey::LeaveAnyState,
            callback(move |event| HandlerRegistry::dispatch_leave(&registry, event)),
        );

        let on_invalid = self.error_handler.clone().unwrap_or_else(|| {
            default_error_handler(self.options.invalid_transition_template.clone())
        });

        EngineSpec {
            init,
            transitions: self.transitions.iter().map(|(key, _)| key.clone()).collect(),
            hooks,
            on_invalid,
        }
    }

    /// Register a listener fired on every state entry, in registration order.
    pub fn on_enter_state(&mut self, handler: Callback) -> Result<&mut Self> {
        self.registry.borrow_mut().add_enter(handler)?;
        Ok(self)
    }

    /// Register a listener fired on every state exit, in registration order.
    pub fn on_exit_state(&mut self, handler: Callback) -> Result<&mut Self> {
        self.registry.borrow_mut().add_leave(handler)?;
        Ok(self)
    }

    /// Remove an enter listener. Unknown handlers are ignored.
    pub fn off_enter_state(&mut self, handler: &Callback) -> &mut Self {
        self.registry.borrow_mut().remove_enter(handler);
        self
    }

    /// Remove an exit listener. Unknown handlers are ignored.
    pub fn off_exit_state(&mut self, handler: &Callback) -> &mut Self {
        self.registry.borrow_mut().remove_leave(handler);
        self
    }

    /// Current state.
    pub fn current(&self) -> Result<&str> {
        Ok(self.running("current")?.state())
    }

    /// Whether the machine is currently in `state`.
    pub fn is(&self, state: &str) -> Result<bool> {
        Ok(self.running("is")?.is(state))
    }

    /// Whether `go(to)` would succeed from the current state. Unlike `go`,
    /// a refusal does not notify the error handler.
    pub fn can(&self, to: &str) -> Result<bool> {
        let machine = self.running("can")?;
        if !self.state_names.contains(to) {
            return Ok(false);
        }
        if machine.is(to) {
            return Ok(true);
        }
        Ok(machine.permits(&self.transition_key(machine.state(), to)))
    }

    /// Move to `to`.
    ///
    /// Requesting the current state is a no-op: no engine call, callback or
    /// listener runs. A refused transition notifies the error handler and
    /// also fails with [`FsmError::IllegalTransition`].
    pub fn go(&mut self, to: &str) -> Result<&mut Self> {
        let machine = self
            .machine
            .as_mut()
            .ok_or(FsmError::NotStarted { operation: "go" })?;

        if !self.state_names.contains(to) {
            return Err(FsmError::UnknownState {
                name: to.to_string(),
            });
        }

        if machine.is(to) {
            tracing::trace!(state = to, "ignoring transition to current state");
            return Ok(self);
        }

        let key = TransitionKey::new(
            machine.state(),
            to,
            &self.options.transition_key_template,
        );

        if machine.cannot(&key) {
            return Err(FsmError::IllegalTransition {
                transition: key.id().to_string(),
                from: key.from().to_string(),
                to: key.to().to_string(),
            });
        }

        machine.invoke(&key)?;
        tracing::debug!(transition = %key, "transition executed");
        Ok(self)
    }

    /// The compiled engine, once started.
    pub fn engine(&self) -> Option<&E> {
        self.machine.as_ref()
    }

    /// Initial state, if one was set.
    pub fn init_state(&self) -> Option<&str> {
        self.init.as_deref()
    }

    /// Declared state names, in declaration order.
    pub fn states(&self) -> impl Iterator<Item = &str> {
        self.states.iter().map(|state| state.name.as_str())
    }

    /// Declared transitions, in declaration order.
    pub fn transitions(&self) -> impl Iterator<Item = &TransitionKey> {
        self.transitions.iter().map(|(key, _)| key)
    }

    /// Snapshot of the topology and, once running, the current state.
    pub fn describe(&self) -> MachineDescription {
        MachineDescription {
            stage: self.stage(),
            init_state: self.init.clone(),
            current_state: self.machine.as_ref().map(|m| m.state().to_string()),
            states: self.states().map(str::to_string).collect(),
            transitions: self.transitions().cloned().collect(),
        }
    }
}

impl<E: CompileEngine> Default for FiniteStateMachineBuilder<E> {
    fn default() -> Self {
        Self::with_options(MachineOptions::default())
    }
}

impl<E: CompileEngine> fmt::Debug for FiniteStateMachineBuilder<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FiniteStateMachineBuilder")
            .field("stage", &self.stage())
            .field("init", &self.init)
            .field("states", &self.states)
            .field("transitions", &self.transitions)
            .finish_non_exhaustive()
    }
}

/// Render the refusal message for `invalid` from `template`.
///
/// Placeholders: `{name}` (transition key), `{from}` and `{to}`.
pub(crate) fn invalid_transition_message(template: &str, invalid: &InvalidTransition) -> String {
    substitute(
        template,
        &[
            ("name", invalid.transition.id()),
            ("from", &invalid.from),
            ("to", &invalid.to),
        ],
    )
}

fn default_error_handler(template: String) -> ErrorHandler {
    Rc::new(move |invalid: &InvalidTransition| {
        let message = invalid_transition_message(&template, invalid);
        tracing::warn!(
            transition = %invalid.transition,
            from = %invalid.from,
            to = %invalid.to,
            "{message}"
        );
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    fn configured() -> FiniteStateMachineBuilder {
        let mut fsm = FiniteStateMachineBuilder::new();
        fsm.add_state("idle")
            .unwrap()
            .add_state("running")
            .unwrap()
            .add_state("done")
            .unwrap();
        fsm
    }

    #[test]
    fn new_builder_is_configuring() {
        let fsm = FiniteStateMachineBuilder::new();

        assert_eq!(fsm.stage(), Stage::Configuring);
        assert!(!fsm.is_started());
        assert!(fsm.engine().is_none());
    }

    #[test]
    fn duplicate_state_is_rejected() {
        let mut fsm = configured();

        assert_eq!(
            fsm.add_state("idle").unwrap_err(),
            FsmError::DuplicateState {
                name: "idle".into()
            }
        );
        assert_eq!(fsm.states().count(), 3);
    }

    #[test]
    fn init_state_can_only_be_set_once() {
        let mut fsm = configured();
        fsm.set_init_state("idle").unwrap();

        assert_eq!(
            fsm.set_init_state("idle").unwrap_err(),
            FsmError::DuplicateInitState {
                existing: "idle".into(),
                requested: "idle".into(),
            }
        );
        assert_eq!(fsm.init_state(), Some("idle"));
    }

    #[test]
    fn init_state_may_be_set_before_it_is_declared() {
        let mut fsm = FiniteStateMachineBuilder::new();
        fsm.set_init_state("idle").unwrap();
        fsm.add_state("idle").unwrap();

        assert!(fsm.start().is_ok());
        assert_eq!(fsm.current().unwrap(), "idle");
    }

    #[test]
    fn start_rejects_undeclared_init_state() {
        let mut fsm = configured();
        fsm.set_init_state("missing").unwrap();

        assert_eq!(
            fsm.start().unwrap_err(),
            FsmError::UnknownState {
                name: "missing".into()
            }
        );
        assert_eq!(fsm.stage(), Stage::Configuring);
    }

    #[test]
    fn start_requires_init_state() {
        let mut fsm = configured();
        fsm.add_transition(("idle", "running")).unwrap();

        assert_eq!(fsm.start().unwrap_err(), FsmError::MissingInitState);
        assert!(!fsm.is_started());
    }

    #[test]
    fn transition_endpoints_must_be_declared() {
        let mut fsm = configured();

        assert_eq!(
            fsm.add_transition(("idle", "paused")).unwrap_err(),
            FsmError::UnknownState {
                name: "paused".into()
            }
        );
        assert_eq!(
            fsm.add_transition(("paused", "idle")).unwrap_err(),
            FsmError::UnknownState {
                name: "paused".into()
            }
        );
        assert_eq!(fsm.transitions().count(), 0);
    }

    #[test]
    fn duplicate_transition_is_rejected_but_reverse_is_not() {
        let mut fsm = configured();
        fsm.add_transition(("idle", "running")).unwrap();

        assert_eq!(
            fsm.add_transition(("idle", "running")).unwrap_err(),
            FsmError::DuplicateTransition {
                transition: "idle->running".into()
            }
        );
        assert!(fsm.add_transition(("running", "idle")).is_ok());
        assert_eq!(fsm.transitions().count(), 2);
    }

    #[test]
    fn state_may_have_many_edges() {
        let mut fsm = configured();
        fsm.add_transition(("idle", "running"))
            .unwrap()
            .add_transition(("idle", "done"))
            .unwrap()
            .add_transition(("running", "done"))
            .unwrap();

        let ids: Vec<_> = fsm.transitions().map(|key| key.id().to_string()).collect();
        assert_eq!(ids, vec!["idle->running", "idle->done", "running->done"]);
    }

    #[test]
    fn failed_transition_registers_no_callbacks() {
        let mut fsm = configured();
        let spec = TransitionSpec::new("idle", "nowhere")
            .on_before(|_| panic!("must not run"))
            .on_after(|_| panic!("must not run"));

        assert!(fsm.add_transition(spec).is_err());

        // The same pair declared again without callbacks must run clean.
        fsm.add_state("nowhere")
            .unwrap()
            .add_transition(("idle", "nowhere"))
            .unwrap()
            .set_init_state("idle")
            .unwrap()
            .start()
            .unwrap();
        fsm.go("nowhere").unwrap();
        assert_eq!(fsm.current().unwrap(), "nowhere");
    }

    #[test]
    fn configuration_is_frozen_after_start() {
        let mut fsm = configured();
        fsm.set_init_state("idle").unwrap().start().unwrap();

        assert_eq!(
            fsm.add_state("extra").unwrap_err(),
            FsmError::AlreadyStarted {
                operation: "add_state"
            }
        );
        assert_eq!(
            fsm.add_transition(("idle", "done")).unwrap_err(),
            FsmError::AlreadyStarted {
                operation: "add_transition"
            }
        );
        assert_eq!(
            fsm.set_init_state("done").unwrap_err(),
            FsmError::AlreadyStarted {
                operation: "set_init_state"
            }
        );
        assert_eq!(
            fsm.add_error_handler(|_| {}).unwrap_err(),
            FsmError::AlreadyStarted {
                operation: "add_error_handler"
            }
        );
        assert_eq!(
            fsm.start().unwrap_err(),
            FsmError::AlreadyStarted { operation: "start" }
        );
    }

    #[test]
    fn runtime_calls_require_start() {
        let mut fsm = configured();

        assert_eq!(
            fsm.current().unwrap_err(),
            FsmError::NotStarted {
                operation: "current"
            }
        );
        assert_eq!(
            fsm.go("running").unwrap_err(),
            FsmError::NotStarted { operation: "go" }
        );
        assert!(fsm.is("idle").is_err());
        assert!(fsm.can("running").is_err());
    }

    #[test]
    fn go_rejects_undeclared_target() {
        let mut fsm = configured();
        fsm.set_init_state("idle").unwrap().start().unwrap();

        assert_eq!(
            fsm.go("paused").unwrap_err(),
            FsmError::UnknownState {
                name: "paused".into()
            }
        );
    }

    #[test]
    fn can_reports_without_notifying() {
        let refusals = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&refusals);

        let mut fsm = configured();
        fsm.set_init_state("idle")
            .unwrap()
            .add_transition(("idle", "running"))
            .unwrap()
            .add_error_handler(move |_| *counter.borrow_mut() += 1)
            .unwrap()
            .start()
            .unwrap();

        assert!(fsm.can("running").unwrap());
        assert!(fsm.can("idle").unwrap());
        assert!(!fsm.can("done").unwrap());
        assert!(!fsm.can("paused").unwrap());
        assert_eq!(*refusals.borrow(), 0);
    }

    #[test]
    fn last_error_handler_wins() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let first = Rc::clone(&calls);
        let second = Rc::clone(&calls);

        let mut fsm = configured();
        fsm.set_init_state("idle")
            .unwrap()
            .add_error_handler(move |_| first.borrow_mut().push("first"))
            .unwrap()
            .add_error_handler(move |_| second.borrow_mut().push("second"))
            .unwrap()
            .start()
            .unwrap();

        assert!(fsm.go("done").is_err());
        assert_eq!(*calls.borrow(), vec!["second"]);
    }

    #[test]
    fn default_message_names_transition_and_endpoints() {
        let invalid = InvalidTransition::new(TransitionKey::new("idle", "done", "{from}->{to}"));
        let template = MachineOptions::default().invalid_transition_template;

        assert_eq!(
            invalid_transition_message(&template, &invalid),
            "Transition idle->done from idle to done fails."
        );
    }

    #[test]
    fn message_template_placeholders_are_not_swapped() {
        let invalid = InvalidTransition::new(TransitionKey::new("idle", "done", "{from}/{to}"));

        assert_eq!(
            invalid_transition_message("{to} <- {from} via {name}", &invalid),
            "done <- idle via idle/done"
        );
    }

    #[test]
    fn default_error_handler_does_not_suppress_error() {
        let mut fsm = configured();
        fsm.set_init_state("idle").unwrap().start().unwrap();

        assert_eq!(
            fsm.go("done").unwrap_err(),
            FsmError::IllegalTransition {
                transition: "idle->done".into(),
                from: "idle".into(),
                to: "done".into(),
            }
        );
        assert_eq!(fsm.current().unwrap(), "idle");
    }

    #[test]
    fn custom_key_template_is_used_at_runtime() {
        let options = MachineOptions::new().transition_key_template("{from}/{to}");
        let mut fsm: FiniteStateMachineBuilder = FiniteStateMachineBuilder::with_options(options);
        fsm.add_state("a")
            .unwrap()
            .add_state("b")
            .unwrap()
            .set_init_state("a")
            .unwrap()
            .add_transition(("a", "b"))
            .unwrap()
            .start()
            .unwrap();

        assert_eq!(fsm.engine().unwrap().transitions()[0].id(), "a/b");
        fsm.go("b").unwrap();
        assert_eq!(fsm.current().unwrap(), "b");
    }

    #[test]
    fn distinct_pairs_with_colliding_keys_are_both_accepted() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let recorder = |log: &Rc<RefCell<Vec<String>>>| {
            let log = Rc::clone(log);
            move |event: &crate::core::LifecycleEvent| {
                log.borrow_mut().push(format!("{} => {}", event.from, event.to));
            }
        };

        let mut fsm = FiniteStateMachineBuilder::new();
        fsm.add_state("a")
            .unwrap()
            .add_state("b->c")
            .unwrap()
            .add_state("a->b")
            .unwrap()
            .add_state("c")
            .unwrap()
            .set_init_state("a")
            .unwrap()
            .add_transition(TransitionSpec::new("a", "b->c").on_before(recorder(&log)))
            .unwrap()
            .add_transition(TransitionSpec::new("a->b", "c").on_before(recorder(&log)))
            .unwrap()
            .add_transition(("b->c", "a->b"))
            .unwrap();

        let ids: Vec<&str> = fsm.transitions().map(TransitionKey::id).collect();
        assert_eq!(ids, vec!["a->b->c", "a->b->c", "b->c->a->b"]);

        fsm.start().unwrap();
        fsm.go("b->c").unwrap().go("a->b").unwrap().go("c").unwrap();

        assert_eq!(fsm.current().unwrap(), "c");
        assert_eq!(*log.borrow(), vec!["a => b->c", "a->b => c"]);
    }

    #[test]
    fn key_template_without_source_keeps_pairs_distinct() {
        let options = MachineOptions::new().transition_key_template("{to}");
        let mut fsm: FiniteStateMachineBuilder = FiniteStateMachineBuilder::with_options(options);
        fsm.add_state("a")
            .unwrap()
            .add_state("b")
            .unwrap()
            .add_state("c")
            .unwrap()
            .set_init_state("a")
            .unwrap()
            .add_transition(("a", "c"))
            .unwrap()
            .add_transition(("b", "c"))
            .unwrap()
            .add_transition(("a", "b"))
            .unwrap();

        assert_eq!(
            fsm.add_transition(("a", "c")).unwrap_err(),
            FsmError::DuplicateTransition {
                transition: "c".into()
            }
        );
        assert_eq!(fsm.transitions().count(), 3);

        fsm.start().unwrap();
        fsm.go("b").unwrap().go("c").unwrap();
        assert_eq!(fsm.current().unwrap(), "c");
    }

    #[test]
    fn key_template_without_target_routes_to_requested_state() {
        let options = MachineOptions::new().transition_key_template("{from}");
        let mut fsm: FiniteStateMachineBuilder = FiniteStateMachineBuilder::with_options(options);
        fsm.add_state("a")
            .unwrap()
            .add_state("b")
            .unwrap()
            .add_state("c")
            .unwrap()
            .set_init_state("a")
            .unwrap()
            .add_transition(("a", "b"))
            .unwrap()
            .add_transition(("a", "c"))
            .unwrap()
            .start()
            .unwrap();

        assert!(fsm.can("c").unwrap());
        fsm.go("c").unwrap();
        assert_eq!(fsm.current().unwrap(), "c");
    }

    #[test]
    fn describe_reflects_stage_and_position() {
        let mut fsm = configured();
        fsm.set_init_state("idle")
            .unwrap()
            .add_transition(("idle", "running"))
            .unwrap();

        let before = fsm.describe();
        assert_eq!(before.stage, Stage::Configuring);
        assert_eq!(before.current_state, None);
        assert_eq!(before.states, vec!["idle", "running", "done"]);

        fsm.start().unwrap().go("running").unwrap();
        let after = fsm.describe();
        assert_eq!(after.stage, Stage::Running);
        assert_eq!(after.init_state.as_deref(), Some("idle"));
        assert_eq!(after.current_state.as_deref(), Some("running"));

        let json: serde_json::Value = serde_json::from_str(&after.to_json().unwrap()).unwrap();
        assert_eq!(json["stage"], "Running");
        assert_eq!(json["transitions"][0]["identifier"], "idle->running");
    }

    #[test]
    fn with_topology_declares_everything() {
        let fsm = FiniteStateMachineBuilder::with_topology(
            "idle",
            ["idle", "running"],
            [("idle", "running")],
        )
        .unwrap();

        assert_eq!(fsm.init_state(), Some("idle"));
        assert_eq!(fsm.states().count(), 2);
        assert_eq!(fsm.transitions().count(), 1);
    }
}

//! Default engine backed by a flat transition table.

use super::{CompileEngine, EngineSpec, TransitionEngine};
use crate::builder::{FsmError, Result};
use crate::core::{
    ErrorHandler, HookKey, HookTable, InvalidTransition, LifecycleEvent, TransitionKey,
};
use chrono::Utc;

/// Engine that looks transitions up in the table it was compiled from.
pub struct TableEngine {
    current: String,
    transitions: Vec<TransitionKey>,
    hooks: HookTable,
    on_invalid: ErrorHandler,
}

impl TableEngine {
    /// Find the declared edge matching `transition` out of the current state.
    fn edge(&self, transition: &TransitionKey) -> Option<&TransitionKey> {
        self.transitions
            .iter()
            .find(|edge| *edge == transition && edge.from() == self.current)
    }

    /// Transitions compiled into this engine (pure)
    pub fn transitions(&self) -> &[TransitionKey] {
        &self.transitions
    }
}

impl CompileEngine for TableEngine {
    fn compile(spec: EngineSpec) -> Self {
        Self {
            current: spec.init,
            transitions: spec.transitions,
            hooks: spec.hooks,
            on_invalid: spec.on_invalid,
        }
    }
}

impl TransitionEngine for TableEngine {
    fn state(&self) -> &str {
        &self.current
    }

    fn permits(&self, transition: &TransitionKey) -> bool {
        self.edge(transition).is_some()
    }

    fn cannot(&self, transition: &TransitionKey) -> bool {
        let refused = !self.permits(transition);
        if refused {
            (self.on_invalid)(&InvalidTransition::new(transition.clone()));
        }
        refused
    }

    fn invoke(&mut self, transition: &TransitionKey) -> Result<()> {
        let Some(edge) = self.edge(transition).cloned() else {
            return Err(FsmError::IllegalTransition {
                transition: transition.id().to_string(),
                from: self.current.clone(),
                to: transition.to().to_string(),
            });
        };

        let event = LifecycleEvent::new(edge.clone(), Utc::now());

        self.hooks.fire(&HookKey::BeforeTransition(edge.clone()), &event);
        self.hooks.fire(&HookKey::LeaveAnyState, &event);
        self.hooks
            .fire(&HookKey::LeaveState(edge.from().to_string()), &event);

        self.current = edge.to().to_string();

        self.hooks.fire(&HookKey::EnterAnyState, &event);
        self.hooks
            .fire(&HookKey::EnterState(edge.to().to_string()), &event);
        self.hooks.fire(&HookKey::AfterTransition(edge), &event);

        Ok(())
    }
}

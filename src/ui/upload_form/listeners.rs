// SPDX-License-Identifier: MPL-2.0
//! Listener registry and scoped subscription bundles.
//!
//! Raw [`UiEvent`]s are delivered to the listeners armed for their trigger.
//! Key events that originate in a field visit the field's listeners first and
//! then bubble to the document unless a listener stops them. Listeners on the
//! same trigger run most-recently-armed first, so an overlay opened on top of
//! the form sees document keys before the form does.
//!
//! Listeners are never added one by one: a [`Subscriptions`] bundle arms a
//! fixed set of bindings and disarms exactly that set when released.

use super::messages::{Control, KeyOrigin, Message, UiEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// What a listener is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trigger {
    Click(Control),
    EffectChange,
    RangeInput,
    KeyDown(KeyOrigin),
    Submit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Propagation {
    #[default]
    Continue,
    /// Finish the current target, then stop bubbling.
    Stop,
    /// Skip every remaining listener.
    StopImmediate,
}

/// Result of running one listener.
#[derive(Debug, Clone, Default)]
pub struct Reaction {
    pub message: Option<Message>,
    pub propagation: Propagation,
}

impl Reaction {
    /// The listener is not interested in this event.
    #[must_use]
    pub fn pass() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn emit(message: Message) -> Self {
        Self {
            message: Some(message),
            propagation: Propagation::Continue,
        }
    }

    /// Consumes the event without producing a message.
    #[must_use]
    pub fn stop() -> Self {
        Self {
            message: None,
            propagation: Propagation::Stop,
        }
    }

    #[must_use]
    pub fn stop_immediate(mut self) -> Self {
        self.propagation = Propagation::StopImmediate;
        self
    }
}

pub type Handler = fn(&UiEvent) -> Reaction;

/// A trigger paired with the handler armed for it.
pub type Binding = (Trigger, Handler);

#[derive(Debug, Clone, Copy)]
struct Listener {
    id: ListenerId,
    trigger: Trigger,
    handler: Handler,
}

#[derive(Debug, Default)]
pub struct ListenerRegistry {
    next_id: u64,
    listeners: Vec<Listener>,
}

impl ListenerRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn listen(&mut self, trigger: Trigger, handler: Handler) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push(Listener {
            id,
            trigger,
            handler,
        });
        id
    }

    /// Disarms a listener. Returns `false` if it was not armed.
    pub fn unlisten(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|listener| listener.id != id);
        self.listeners.len() != before
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Number of listeners armed for `trigger`.
    #[must_use]
    pub fn count(&self, trigger: Trigger) -> usize {
        self.listeners
            .iter()
            .filter(|listener| listener.trigger == trigger)
            .count()
    }

    /// Runs the listeners reached by `event` and collects their messages.
    #[must_use]
    pub fn dispatch(&self, event: &UiEvent) -> Vec<Message> {
        let mut messages = Vec::new();

        for target in propagation_path(event) {
            let mut stopped = false;
            for listener in self
                .listeners
                .iter()
                .rev()
                .filter(|listener| listener.trigger == target)
            {
                let reaction = (listener.handler)(event);
                messages.extend(reaction.message);
                match reaction.propagation {
                    Propagation::Continue => {}
                    Propagation::Stop => stopped = true,
                    Propagation::StopImmediate => return messages,
                }
            }
            if stopped {
                break;
            }
        }

        messages
    }
}

fn propagation_path(event: &UiEvent) -> Vec<Trigger> {
    match event {
        UiEvent::Click(control) => vec![Trigger::Click(*control)],
        UiEvent::EffectChosen(_) => vec![Trigger::EffectChange],
        UiEvent::RangeInput(_) => vec![Trigger::RangeInput],
        UiEvent::KeyDown { origin, .. } => match origin {
            KeyOrigin::Document => vec![Trigger::KeyDown(KeyOrigin::Document)],
            KeyOrigin::Field(_) => vec![
                Trigger::KeyDown(*origin),
                Trigger::KeyDown(KeyOrigin::Document),
            ],
        },
        UiEvent::SubmitRequested => vec![Trigger::Submit],
    }
}

// =============================================================================
// Subscriptions
// =============================================================================

/// A bundle of armed listeners released as one unit.
#[must_use = "release the bundle to disarm its listeners"]
#[derive(Debug, Default)]
pub struct Subscriptions {
    ids: Vec<ListenerId>,
}

impl Subscriptions {
    /// Arms every binding and returns the bundle owning them.
    pub fn acquire(registry: &mut ListenerRegistry, bindings: &[Binding]) -> Self {
        let ids = bindings
            .iter()
            .map(|&(trigger, handler)| registry.listen(trigger, handler))
            .collect();
        Self { ids }
    }

    /// Disarms every listener of the bundle.
    pub fn release(self, registry: &mut ListenerRegistry) {
        for id in self.ids {
            if !registry.unlisten(id) {
                log::warn!("listener {id:?} was already disarmed");
            }
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

//! Per-user event loop around the selection controller.
//!
//! A [`Session`] owns one Tokio task. Events posted through any
//! [`SessionHandle`] are applied strictly in arrival order, so racing taps
//! resolve to whichever was received last. After every event, and whenever a
//! locate request updates the user position, a fresh [`RenderModel`] is
//! published on a `watch` channel.

use std::sync::Arc;

use log::{debug, info, warn};
use salon_core::{
    ActionKind, ActionSink, LocationStore, PoiId, PresentationInput, RenderModel,
    SelectionController, SelectionError, SpatialQuery, UserPosition, Viewport, command_for,
    present,
};
use thiserror::Error;
use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::{GeolocationProvider, LocateTask, LocationService, SessionConfig};

/// Something the map host reports.
#[derive(Debug, Clone, PartialEq)]
pub enum MapEvent {
    /// A marker was tapped.
    MarkerTapped(PoiId),
    /// The user panned or zoomed.
    ViewportChanged(Viewport),
    /// The detail sheet was pulled up.
    DetailExpanded,
    /// The detail sheet was dismissed.
    DetailClosed,
    /// The user asked to recentre on their position.
    CenterOnMe,
    /// An action button on the detail sheet was pressed.
    Action(ActionKind),
}

/// Errors returned to callers of [`SessionHandle`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// The event loop has stopped.
    #[error("session closed")]
    Closed,
    /// A tapped marker does not exist.
    #[error(transparent)]
    Selection(#[from] SelectionError),
}

/// Collaborators a session is built from.
#[derive(Clone)]
pub struct SessionDeps {
    /// Salon records.
    pub store: Arc<LocationStore>,
    /// Index over `store`.
    pub index: Arc<dyn SpatialQuery>,
    /// Device location capability.
    pub location: Arc<dyn LocationService>,
    /// Target for directions, call and share commands.
    pub actions: Arc<dyn ActionSink>,
}

struct Envelope {
    event: MapEvent,
    reply: Option<oneshot::Sender<Result<(), SessionError>>>,
}

impl std::fmt::Debug for Envelope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Envelope")
            .field("event", &self.event)
            .finish_non_exhaustive()
    }
}

/// Cheap, cloneable access to a running session.
#[derive(Debug, Clone)]
pub struct SessionHandle {
    events: mpsc::UnboundedSender<Envelope>,
    render: watch::Receiver<RenderModel>,
}

impl SessionHandle {
    /// Queue `event` without waiting for it to be applied.
    pub fn post(&self, event: MapEvent) -> Result<(), SessionError> {
        self.events
            .send(Envelope { event, reply: None })
            .map_err(|_| SessionError::Closed)
    }

    /// Queue `event` and wait until it has been applied and rendered.
    pub async fn dispatch(&self, event: MapEvent) -> Result<(), SessionError> {
        let (reply, outcome) = oneshot::channel();
        self.events
            .send(Envelope {
                event,
                reply: Some(reply),
            })
            .map_err(|_| SessionError::Closed)?;
        outcome.await.map_err(|_| SessionError::Closed)?
    }

    /// The most recently published model.
    #[must_use]
    pub fn render(&self) -> RenderModel {
        self.render.borrow().clone()
    }

    /// A receiver that is notified of every new model.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<RenderModel> {
        self.render.clone()
    }
}

/// A running per-user session.
#[derive(Debug)]
pub struct Session {
    handle: SessionHandle,
    cancel: CancellationToken,
    task: JoinHandle<()>,
}

impl Session {
    /// Start the event loop on the current Tokio runtime.
    ///
    /// The initial model shows `config.fallback_anchor` with nothing
    /// selected.
    #[must_use]
    pub fn spawn(config: &SessionConfig, deps: SessionDeps) -> Self {
        let SessionDeps {
            store,
            index,
            location,
            actions,
        } = deps;
        info!("starting map session over {} salons", store.len());

        let worker = Worker {
            controller: SelectionController::new(store),
            index,
            provider: GeolocationProvider::new(location, config),
            actions,
            viewport: config.fallback_anchor,
            pending: None,
        };
        let (render_tx, render_rx) = watch::channel(worker.render());
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let position = worker.provider.subscribe();
        let cancel = CancellationToken::new();
        let task = tokio::spawn(worker.run(Inbox {
            events: events_rx,
            position,
            render: render_tx,
            cancel: cancel.clone(),
        }));

        Self {
            handle: SessionHandle {
                events: events_tx,
                render: render_rx,
            },
            cancel,
            task,
        }
    }

    /// A handle for posting events and reading models.
    #[must_use]
    pub fn handle(&self) -> SessionHandle {
        self.handle.clone()
    }

    /// Stop the loop, cancel pending geolocation and wait for the task.
    pub async fn shutdown(self) {
        self.cancel.cancel();
        if let Err(err) = self.task.await {
            warn!("map session task ended abnormally: {err}");
        }
    }
}

struct Worker {
    controller: SelectionController,
    index: Arc<dyn SpatialQuery>,
    provider: GeolocationProvider,
    actions: Arc<dyn ActionSink>,
    viewport: Viewport,
    pending: Option<LocateTask>,
}

struct Inbox {
    events: mpsc::UnboundedReceiver<Envelope>,
    position: watch::Receiver<UserPosition>,
    render: watch::Sender<RenderModel>,
    cancel: CancellationToken,
}

impl Worker {
    async fn run(mut self, inbox: Inbox) {
        let Inbox {
            mut events,
            mut position,
            render,
            cancel,
        } = inbox;
        loop {
            tokio::select! {
                () = cancel.cancelled() => break,
                envelope = events.recv() => {
                    let Some(Envelope { event, reply }) = envelope else {
                        break;
                    };
                    let outcome = self.handle(event);
                    render.send_replace(self.render());
                    if let Some(reply) = reply
                        && reply.send(outcome).is_err()
                    {
                        debug!("event applied after its sender stopped waiting");
                    }
                }
                changed = position.changed() => {
                    if changed.is_err() {
                        break;
                    }
                    render.send_replace(self.render());
                }
            }
        }
        self.provider.shutdown();
        info!("map session stopped");
    }

    fn handle(&mut self, event: MapEvent) -> Result<(), SessionError> {
        debug!("handling {event:?}");
        match event {
            MapEvent::MarkerTapped(id) => {
                self.controller.select(id)?;
            }
            MapEvent::ViewportChanged(viewport) => self.viewport = viewport,
            MapEvent::DetailExpanded => {
                self.controller.expand();
            }
            MapEvent::DetailClosed => {
                self.controller.close();
            }
            MapEvent::CenterOnMe => self.center_on_me(),
            MapEvent::Action(kind) => self.act(kind),
        }
        Ok(())
    }

    fn center_on_me(&mut self) {
        if let Some(previous) = self.pending.take() {
            previous.cancel();
        }
        self.pending = Some(self.provider.locate());
    }

    fn act(&self, kind: ActionKind) {
        let Some(id) = self.controller.state().selected() else {
            debug!("ignoring {kind:?} with nothing selected");
            return;
        };
        let poi = match self.controller.store().get(id) {
            Ok(poi) => poi,
            Err(err) => {
                warn!("cannot run {kind:?}: {err}");
                return;
            }
        };
        let dispatched = command_for(kind, poi)
            .and_then(|command| self.actions.dispatch(&command).map(|()| command));
        match dispatched {
            Ok(command) => info!("dispatched {command:?} for {id}"),
            Err(err) => warn!("{kind:?} for {id} failed: {err}"),
        }
    }

    fn render(&self) -> RenderModel {
        let position = self.provider.position();
        present(&PresentationInput {
            store: self.controller.store(),
            index: self.index.as_ref(),
            viewport: &self.viewport,
            selection: self.controller.state(),
            position: &position,
            fallback: self.provider.fallback(),
        })
    }
}

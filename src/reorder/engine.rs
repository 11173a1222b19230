//! Reorder state machine: `NotDragging -> Dragging -> (Dropped | Cancelled)`.
//!
//! Every move re-runs hit testing against the current [`DropLayout`]; only the
//! session's landing fields change until the pointer is released, at which
//! point a single [`ItemMoved`] is emitted.

use super::board::CollectionSource;
use super::layout::DropLayout;
use super::rules::DropRules;
use super::session::{DragPhase, DragSession};
use super::ItemMoved;
use crate::core::{CollectionId, InteractionError, ItemId, PointerEvent, PointerPhase};
use crate::input::PointerTracker;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CancelReason {
    /// Released where it started.
    SamePosition,
    /// Released outside every zone accepting the item.
    OutsideZones,
    /// The item left its source collection mid-drag.
    Stale,
    /// The landing collection is gone.
    DestinationMissing,
    /// The platform took the pointer, or the host cancelled.
    Aborted,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReorderEvent {
    DragStarted {
        item: ItemId,
        collection: CollectionId,
        index: usize,
    },
    DragOver {
        collection: Option<CollectionId>,
        index: usize,
    },
    ItemMoved(ItemMoved),
    DragCancelled {
        item: ItemId,
        reason: CancelReason,
    },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReorderOutput {
    pub events: Vec<ReorderEvent>,
    pub needs_redraw: bool,
    pub recovered: Option<InteractionError>,
}

impl ReorderOutput {
    pub fn empty() -> Self {
        Self::default()
    }

    fn recovered(err: InteractionError) -> Self {
        tracing::debug!(error = %err, "reorder input recovered");
        Self {
            recovered: Some(err),
            ..Self::default()
        }
    }

    pub fn moved(&self) -> Option<&ItemMoved> {
        self.events.iter().find_map(|e| match e {
            ReorderEvent::ItemMoved(m) => Some(m),
            _ => None,
        })
    }

    pub fn cancel_reason(&self) -> Option<CancelReason> {
        self.events.iter().find_map(|e| match e {
            ReorderEvent::DragCancelled { reason, .. } => Some(*reason),
            _ => None,
        })
    }
}

#[derive(Debug, Default)]
pub struct ReorderEngine {
    tracker: PointerTracker,
    session: Option<DragSession>,
    start_slop_px: f32,
    disposed: bool,
}

impl ReorderEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pointer travel required before a press becomes a drag.
    pub fn with_start_slop(mut self, px: f32) -> Self {
        self.start_slop_px = px.max(0.0);
        self
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        self.session.as_ref().is_some_and(DragSession::is_dragging)
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub fn on_pointer<S, R>(
        &mut self,
        event: &PointerEvent,
        layout: &DropLayout,
        source: &S,
        rules: &R,
    ) -> ReorderOutput
    where
        S: CollectionSource + ?Sized,
        R: DropRules + ?Sized,
    {
        match event.phase {
            PointerPhase::Down => self.on_pointer_down(event, layout, source, rules),
            PointerPhase::Drag => self.on_pointer_move(event, layout, source, rules),
            PointerPhase::Hover => ReorderOutput::empty(),
            PointerPhase::Up | PointerPhase::Cancel | PointerPhase::Leave => {
                self.on_pointer_up(event, layout, source, rules)
            }
        }
    }

    pub fn on_pointer_down<S, R>(
        &mut self,
        event: &PointerEvent,
        layout: &DropLayout,
        source: &S,
        rules: &R,
    ) -> ReorderOutput
    where
        S: CollectionSource + ?Sized,
        R: DropRules + ?Sized,
    {
        if self.disposed {
            return ReorderOutput::empty();
        }
        if self.session.is_some() {
            return ReorderOutput::recovered(InteractionError::ConcurrentGestureIgnored);
        }

        let p = event.point();
        let Some((zone, slot)) = layout.item_at(p) else {
            return ReorderOutput::empty();
        };
        if !rules.can_drag(&slot.id, &zone.collection) {
            return ReorderOutput::empty();
        }

        // Resolve the position by id now; indices from the last render may
        // already be out of date.
        let Some(source_index) = source.position_of(&zone.collection, &slot.id) else {
            tracing::warn!(item = %slot.id, collection = %zone.collection, "press on stale item");
            return ReorderOutput::recovered(InteractionError::StaleDragTarget {
                item: slot.id.clone(),
                collection: zone.collection.clone(),
            });
        };

        if let Err(err) = self.tracker.begin(event.pointer, event.sample) {
            return ReorderOutput::recovered(err);
        }

        let phase = if self.start_slop_px > 0.0 {
            DragPhase::Pressed
        } else {
            DragPhase::Dragging
        };
        let session = DragSession {
            dragged_id: slot.id.clone(),
            source_collection_id: zone.collection.clone(),
            source_index,
            current_collection_id: Some(zone.collection.clone()),
            current_index: source_index,
            pointer: event.pointer,
            phase,
            position: p,
        };

        let mut out = ReorderOutput::empty();
        if phase == DragPhase::Dragging {
            out.events.push(started_event(&session));
            out.needs_redraw = true;
        }
        self.session = Some(session);
        out
    }

    pub fn on_pointer_move<S, R>(
        &mut self,
        event: &PointerEvent,
        layout: &DropLayout,
        source: &S,
        rules: &R,
    ) -> ReorderOutput
    where
        S: CollectionSource + ?Sized,
        R: DropRules + ?Sized,
    {
        if self.disposed {
            return ReorderOutput::empty();
        }
        if self.session.is_none() {
            // Contact move with no press seen: try it as a fresh press.
            let mut out = self.on_pointer_down(event, layout, source, rules);
            if out.recovered.is_none() && self.session.is_some() {
                out.recovered = Some(InteractionError::NotTracking);
            }
            return out;
        }

        let delta = match self.tracker.update(event.pointer, event.sample) {
            Ok(delta) => delta,
            Err(err) => return ReorderOutput::recovered(err),
        };

        let mut out = ReorderOutput::empty();
        let Some(session) = self.session.as_mut() else {
            return out;
        };
        session.position = event.point();

        if session.phase == DragPhase::Pressed {
            if delta.length() < self.start_slop_px {
                return out;
            }
            session.phase = DragPhase::Dragging;
            out.events.push(started_event(session));
        }

        if let Some(cancel) = self.cancel_if_stale(source) {
            return cancel;
        }

        if let Some(over) = self.hit_test(layout, rules) {
            out.events.push(over);
        }
        out.needs_redraw = true;
        out
    }

    pub fn on_pointer_up<S, R>(
        &mut self,
        event: &PointerEvent,
        layout: &DropLayout,
        source: &S,
        rules: &R,
    ) -> ReorderOutput
    where
        S: CollectionSource + ?Sized,
        R: DropRules + ?Sized,
    {
        if self.disposed {
            return ReorderOutput::empty();
        }
        let Some(session) = self.session.as_ref() else {
            return ReorderOutput::recovered(InteractionError::NotTracking);
        };
        if session.pointer != event.pointer {
            return ReorderOutput::recovered(InteractionError::ConcurrentGestureIgnored);
        }

        if event.phase == PointerPhase::Cancel {
            return self.cancel();
        }

        let was_dragging = session.is_dragging();
        if event.phase == PointerPhase::Up && was_dragging {
            if let Some(s) = self.session.as_mut() {
                s.position = event.point();
            }
            self.hit_test(layout, rules);
        }
        // Leave resolves with whatever the last move established.
        let _ = self.tracker.cancel();

        let Some(session) = self.session.take() else {
            return ReorderOutput::empty();
        };
        if !was_dragging {
            // A press that never became a drag: nothing to report.
            return ReorderOutput::empty();
        }
        self.drop_session(session, source)
    }

    /// Cancel the active session (e.g. on escape). No mutation is requested.
    pub fn cancel(&mut self) -> ReorderOutput {
        let _ = self.tracker.cancel();
        let Some(session) = self.session.take() else {
            return ReorderOutput::empty();
        };
        if !session.is_dragging() {
            return ReorderOutput::empty();
        }
        Self::cancelled(session.dragged_id, CancelReason::Aborted)
    }

    /// Drop any session and stop reporting. Later input yields nothing.
    pub fn dispose(&mut self) {
        self.tracker = PointerTracker::new();
        self.session = None;
        self.disposed = true;
        tracing::debug!("reorder engine disposed");
    }

    /// Recompute landing collection/index. Returns `DragOver` when it changed.
    fn hit_test<R>(&mut self, layout: &DropLayout, rules: &R) -> Option<ReorderEvent>
    where
        R: DropRules + ?Sized,
    {
        let session = self.session.as_mut()?;
        let p = session.position;
        let zone = layout.zone_at_where(p, |z| {
            rules.can_drop(&session.dragged_id, &session.source_collection_id, &z.collection)
        });

        let (collection, index) = match zone {
            Some(zone) => {
                let excluding = (zone.collection == session.source_collection_id)
                    .then_some(&session.dragged_id);
                (
                    Some(zone.collection.clone()),
                    zone.insertion_index(p, excluding),
                )
            }
            None => (None, session.source_index),
        };

        if collection == session.current_collection_id && index == session.current_index {
            return None;
        }
        tracing::trace!(
            collection = collection.as_ref().map(CollectionId::as_str),
            index,
            "drag over"
        );
        session.current_collection_id = collection.clone();
        session.current_index = index;
        Some(ReorderEvent::DragOver { collection, index })
    }

    fn cancel_if_stale<S>(&mut self, source: &S) -> Option<ReorderOutput>
    where
        S: CollectionSource + ?Sized,
    {
        let session = self.session.as_ref()?;
        if source
            .position_of(&session.source_collection_id, &session.dragged_id)
            .is_some()
        {
            return None;
        }
        let session = self.session.take()?;
        let _ = self.tracker.cancel();
        Some(Self::stale(session))
    }

    fn drop_session<S>(&mut self, session: DragSession, source: &S) -> ReorderOutput
    where
        S: CollectionSource + ?Sized,
    {
        let Some(to_collection) = session.current_collection_id.clone() else {
            return Self::cancelled(session.dragged_id, CancelReason::OutsideZones);
        };

        // Positions are re-resolved by id; the press-time index may be stale.
        let Some(from_index) =
            source.position_of(&session.source_collection_id, &session.dragged_id)
        else {
            return Self::stale(session);
        };
        let Some(dest_len) = source.len_of(&to_collection) else {
            return Self::cancelled(session.dragged_id, CancelReason::DestinationMissing);
        };

        let same = to_collection == session.source_collection_id;
        let len_after_removal = if same {
            dest_len.saturating_sub(1)
        } else {
            dest_len
        };
        let to_index = session.current_index.min(len_after_removal);
        if same && to_index == from_index {
            return Self::cancelled(session.dragged_id, CancelReason::SamePosition);
        }

        let moved = ItemMoved {
            item_id: session.dragged_id,
            from_collection_id: session.source_collection_id,
            from_index,
            to_collection_id: to_collection,
            to_index,
        };
        tracing::debug!(
            item = %moved.item_id,
            from = %moved.from_collection_id,
            from_index,
            to = %moved.to_collection_id,
            to_index,
            "item dropped"
        );
        ReorderOutput {
            events: vec![ReorderEvent::ItemMoved(moved)],
            needs_redraw: true,
            recovered: None,
        }
    }

    fn stale(session: DragSession) -> ReorderOutput {
        tracing::warn!(
            item = %session.dragged_id,
            collection = %session.source_collection_id,
            "dragged item disappeared, cancelling"
        );
        let mut out = Self::cancelled(session.dragged_id.clone(), CancelReason::Stale);
        out.recovered = Some(InteractionError::StaleDragTarget {
            item: session.dragged_id,
            collection: session.source_collection_id,
        });
        out
    }

    fn cancelled(item: ItemId, reason: CancelReason) -> ReorderOutput {
        tracing::debug!(item = %item, ?reason, "drag cancelled");
        ReorderOutput {
            events: vec![ReorderEvent::DragCancelled { item, reason }],
            needs_redraw: true,
            recovered: None,
        }
    }
}

fn started_event(session: &DragSession) -> ReorderEvent {
    tracing::debug!(
        item = %session.dragged_id,
        collection = %session.source_collection_id,
        index = session.source_index,
        "drag started"
    );
    ReorderEvent::DragStarted {
        item: session.dragged_id.clone(),
        collection: session.source_collection_id.clone(),
        index: session.source_index,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/reorder/engine.rs"]
mod tests;

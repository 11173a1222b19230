//! Terminal mouse input mapped onto pointer events. Coordinates are cell
//! positions (column, row); only the left button drives gestures.

use crate::core::{PointerEvent, PointerPhase};
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

pub fn into_pointer_event(event: MouseEvent, timestamp_ms: u64) -> Option<PointerEvent> {
    let phase = into_pointer_phase(event.kind)?;
    Some(PointerEvent::mouse(
        phase,
        f32::from(event.column),
        f32::from(event.row),
        timestamp_ms,
    ))
}

fn into_pointer_phase(kind: MouseEventKind) -> Option<PointerPhase> {
    match kind {
        MouseEventKind::Down(MouseButton::Left) => Some(PointerPhase::Down),
        MouseEventKind::Drag(MouseButton::Left) => Some(PointerPhase::Drag),
        MouseEventKind::Up(MouseButton::Left) => Some(PointerPhase::Up),
        MouseEventKind::Moved => Some(PointerPhase::Hover),
        MouseEventKind::Down(_)
        | MouseEventKind::Drag(_)
        | MouseEventKind::Up(_)
        | MouseEventKind::ScrollUp
        | MouseEventKind::ScrollDown
        | MouseEventKind::ScrollLeft
        | MouseEventKind::ScrollRight => None,
    }
}

/// Losing focus mid-drag never delivers the release; treat it as the pointer
/// leaving at its last known position.
pub fn focus_lost(timestamp_ms: u64) -> PointerEvent {
    PointerEvent::mouse(PointerPhase::Leave, 0.0, 0.0, timestamp_ms)
}

#[cfg(test)]
#[path = "../../tests/unit/input/crossterm.rs"]
mod tests;

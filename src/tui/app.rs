//! Demo state: one carousel of destinations and a two-day itinerary board.
//!
//! Geometry is in terminal cells. The drop layout is rebuilt from the rows
//! exactly as they are drawn, so hit testing always matches the screen.

use std::collections::VecDeque;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::view::{ActiveArea, EventResult};
use crate::carousel::{CarouselController, CarouselEvent, Slide};
use crate::config::InteractionConfig;
use crate::core::{Axis, CollectionId, ItemId, Point, PointerEvent, PointerPhase, Rect, Result};
use crate::gesture::{CursorFollower, FRAME_INTERVAL_MS};
use crate::input::crossterm::{focus_lost, into_pointer_event};
use crate::reorder::{
    AcceptAll, Board, DropLayout, DropZone, OrderedItem, ProjectedSlot, ReorderEngine,
    ReorderEvent,
};

const LOG_CAPACITY: usize = 64;
const LOG_ROWS: f32 = 6.0;
const MIN_CAROUSEL_ROWS: f32 = 5.0;

#[derive(Clone, Debug, PartialEq)]
pub struct Activity {
    pub time: &'static str,
    pub title: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub enum RowContent {
    Item { id: ItemId, label: String },
    Placeholder,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RowView {
    pub rect: Rect,
    pub content: RowContent,
}

/// One board column as drawn: the outer frame, the drop zone inside it and
/// its rows in projected order.
#[derive(Clone, Debug, PartialEq)]
pub struct ColumnView {
    pub collection: CollectionId,
    pub frame: Rect,
    pub zone: Rect,
    pub rows: Vec<RowView>,
}

pub struct DemoApp {
    slides: Vec<Slide<&'static str>>,
    carousel: CarouselController,
    board: Board<Activity>,
    engine: ReorderEngine,
    layout: DropLayout,
    ghost: CursorFollower,
    active: ActiveArea,
    carousel_frame: Rect,
    board_area: Rect,
    log_area: Rect,
    log: VecDeque<String>,
}

impl DemoApp {
    pub fn new(config: &InteractionConfig, now_ms: u64) -> Result<Self> {
        let slides = Slide::sequence(["Paris", "Tokyo", "Lisbon", "Reykjavik"]);
        let carousel = CarouselController::for_slides(config, &slides, now_ms)?;
        Ok(Self {
            slides,
            carousel,
            board: sample_board(),
            engine: ReorderEngine::new().with_start_slop(config.drag_start_slop_px),
            layout: DropLayout::new(),
            ghost: CursorFollower::new(Point::default(), config.cursor_follow_factor),
            active: ActiveArea::None,
            carousel_frame: Rect::default(),
            board_area: Rect::default(),
            log_area: Rect::default(),
            log: VecDeque::with_capacity(LOG_CAPACITY),
        })
    }

    pub fn slides(&self) -> &[Slide<&'static str>] {
        &self.slides
    }

    pub fn carousel(&self) -> &CarouselController {
        &self.carousel
    }

    pub fn board(&self) -> &Board<Activity> {
        &self.board
    }

    pub fn engine(&self) -> &ReorderEngine {
        &self.engine
    }

    pub fn ghost(&self) -> &CursorFollower {
        &self.ghost
    }

    pub fn carousel_frame(&self) -> Rect {
        self.carousel_frame
    }

    /// Slide track inside the carousel border.
    pub fn carousel_track(&self) -> Rect {
        inset(self.carousel_frame)
    }

    pub fn log_area(&self) -> Rect {
        self.log_area
    }

    pub fn log_lines(&self) -> impl Iterator<Item = &str> {
        self.log.iter().map(String::as_str)
    }

    /// Label of the item being dragged, if a drag is in flight.
    pub fn dragged_label(&self) -> Option<String> {
        let session = self.engine.session().filter(|s| s.is_dragging())?;
        self.board
            .collection(&session.source_collection_id)?
            .iter()
            .find(|item| item.id == session.dragged_id)
            .map(|item| label(&item.payload))
    }

    pub fn set_viewport(&mut self, width: u16, height: u16) {
        let (w, h) = (f32::from(width), f32::from(height));
        let carousel_rows = (h * 0.4).floor().max(MIN_CAROUSEL_ROWS).min(h);
        let log_rows = LOG_ROWS.min((h - carousel_rows).max(0.0));
        let board_rows = (h - carousel_rows - log_rows).max(0.0);

        self.carousel_frame = Rect::new(0.0, 0.0, w, carousel_rows);
        self.board_area = Rect::new(0.0, carousel_rows, w, board_rows);
        self.log_area = Rect::new(0.0, carousel_rows + board_rows, w, log_rows);
        self.carousel.set_track_width(self.carousel_track().w);
        self.rebuild_layout();
    }

    /// Columns as they should be drawn right now, with the dragged item
    /// shown as a placeholder at its landing slot.
    pub fn columns(&self) -> Vec<ColumnView> {
        let ids = self.board.collection_ids();
        if ids.is_empty() || self.board_area.is_empty() {
            return Vec::new();
        }
        let col_w = (self.board_area.w / ids.len() as f32).floor();
        let session = self.engine.session().filter(|s| s.is_dragging());

        ids.iter()
            .enumerate()
            .map(|(i, collection)| {
                let frame = Rect::new(
                    self.board_area.x + i as f32 * col_w,
                    self.board_area.y,
                    col_w,
                    self.board_area.h,
                );
                let zone = inset(frame);
                let items = self.board.collection(collection).unwrap_or_default();
                let order: Vec<ItemId> = items.iter().map(|item| item.id.clone()).collect();

                let contents: Vec<RowContent> = match session {
                    Some(session) => session
                        .projected_order(collection, &order)
                        .into_iter()
                        .map(|slot| match slot {
                            ProjectedSlot::Item(id) => RowContent::Item {
                                id: id.clone(),
                                label: items
                                    .iter()
                                    .find(|item| &item.id == id)
                                    .map(|item| label(&item.payload))
                                    .unwrap_or_default(),
                            },
                            ProjectedSlot::Placeholder => RowContent::Placeholder,
                        })
                        .collect(),
                    None => items
                        .iter()
                        .map(|item| RowContent::Item {
                            id: item.id.clone(),
                            label: label(&item.payload),
                        })
                        .collect(),
                };

                let rows = contents
                    .into_iter()
                    .enumerate()
                    .map(|(row, content)| RowView {
                        rect: Rect::new(zone.x, zone.y + row as f32, zone.w, 1.0),
                        content,
                    })
                    .collect();

                ColumnView {
                    collection: collection.clone(),
                    frame,
                    zone,
                    rows,
                }
            })
            .collect()
    }

    pub fn handle_event(&mut self, event: &Event, now_ms: u64) -> EventResult {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => match into_pointer_event(*mouse, now_ms) {
                Some(pointer) => self.handle_pointer(&pointer),
                None => EventResult::Ignored,
            },
            Event::FocusLost => self.handle_pointer(&focus_lost(now_ms)),
            Event::Resize(w, h) => {
                self.set_viewport(*w, *h);
                EventResult::Consumed
            }
            _ => EventResult::Ignored,
        }
    }

    fn handle_key(&mut self, key: &KeyEvent) -> EventResult {
        if key.kind != KeyEventKind::Press {
            return EventResult::Ignored;
        }
        match key.code {
            KeyCode::Char('q') => EventResult::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                EventResult::Quit
            }
            KeyCode::Esc => {
                let out = self.engine.cancel();
                self.active = ActiveArea::None;
                self.record_reorder(&out.events);
                self.rebuild_layout();
                EventResult::Consumed
            }
            _ => EventResult::Ignored,
        }
    }

    pub fn handle_pointer(&mut self, event: &PointerEvent) -> EventResult {
        let area = match (event.phase, self.active) {
            (PointerPhase::Hover, _) => return EventResult::Ignored,
            (PointerPhase::Down, _) | (PointerPhase::Drag, ActiveArea::None) => {
                self.area_at(event.point())
            }
            (_, active) => active,
        };

        let redraw = match area {
            ActiveArea::None => return EventResult::Ignored,
            ActiveArea::Carousel => self.pointer_to_carousel(event),
            ActiveArea::Board => self.pointer_to_board(event),
        };

        self.active = match event.phase {
            phase if phase.ends_contact() => ActiveArea::None,
            _ if area == ActiveArea::Board && self.engine.session().is_none() => ActiveArea::None,
            _ => area,
        };

        if redraw {
            EventResult::Consumed
        } else {
            EventResult::Ignored
        }
    }

    fn pointer_to_carousel(&mut self, event: &PointerEvent) -> bool {
        let out = self.carousel.on_pointer(event);
        if let Some(err) = &out.recovered {
            self.push_log(format!("carousel: {err}"));
        }
        self.record_carousel(&out.events);
        out.needs_redraw
    }

    fn pointer_to_board(&mut self, event: &PointerEvent) -> bool {
        let out = self
            .engine
            .on_pointer(event, &self.layout, &self.board, &AcceptAll);
        if let Some(err) = &out.recovered {
            self.push_log(format!("board: {err}"));
        }

        if out
            .events
            .iter()
            .any(|e| matches!(e, ReorderEvent::DragStarted { .. }))
        {
            self.ghost.jump_to(event.point());
        }
        if let Some(session) = self.engine.session() {
            self.ghost.set_target(session.position());
        }

        if let Some(moved) = out.moved() {
            if let Err(err) = self.board.apply(moved) {
                tracing::warn!(error = %err, "demo board rejected move");
                self.push_log(format!("board: {err}"));
            }
        }
        self.record_reorder(&out.events);
        self.rebuild_layout();
        out.needs_redraw
    }

    /// Advance timers. Returns whether anything visible changed.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        let out = self.carousel.poll(now_ms);
        self.record_carousel(&out.events);
        let ghost_moved = self.engine.is_dragging() && self.ghost.step(now_ms);
        out.needs_redraw || ghost_moved
    }

    pub fn next_deadline(&self, now_ms: u64) -> Option<u64> {
        let ghost = (self.engine.is_dragging() && !self.ghost.is_settled())
            .then_some(now_ms + FRAME_INTERVAL_MS);
        match (self.carousel.next_deadline(now_ms), ghost) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    pub fn shutdown(&mut self) {
        self.carousel.dispose();
        self.engine.dispose();
    }

    fn area_at(&self, p: Point) -> ActiveArea {
        if self.carousel_frame.contains(p) {
            ActiveArea::Carousel
        } else if self.board_area.contains(p) {
            ActiveArea::Board
        } else {
            ActiveArea::None
        }
    }

    fn rebuild_layout(&mut self) {
        self.layout.clear();
        for column in self.columns() {
            let mut zone = DropZone::new(column.collection, column.zone, Axis::Vertical);
            for row in column.rows {
                if let RowContent::Item { id, .. } = row.content {
                    zone.push_item(id, row.rect);
                }
            }
            self.layout.register(zone);
        }
    }

    fn record_carousel(&mut self, events: &[CarouselEvent]) {
        for event in events {
            let CarouselEvent::IndexChanged { index, cause } = event;
            let name = self.slides.get(*index).map(|s| s.content).unwrap_or("?");
            self.push_log(format!("slide {index} ({name}) by {cause:?}"));
        }
    }

    fn record_reorder(&mut self, events: &[ReorderEvent]) {
        for event in events {
            let line = match event {
                ReorderEvent::DragStarted {
                    item,
                    collection,
                    index,
                } => format!("picked {item} from {collection}[{index}]"),
                ReorderEvent::DragOver { .. } => continue,
                ReorderEvent::ItemMoved(m) => format!(
                    "moved {} {}[{}] -> {}[{}]",
                    m.item_id, m.from_collection_id, m.from_index, m.to_collection_id, m.to_index
                ),
                ReorderEvent::DragCancelled { item, reason } => {
                    format!("dropped {item} back ({reason:?})")
                }
            };
            self.push_log(line);
        }
    }

    fn push_log(&mut self, line: String) {
        if self.log.len() == LOG_CAPACITY {
            self.log.pop_front();
        }
        self.log.push_back(line);
    }
}

fn inset(r: Rect) -> Rect {
    Rect::new(
        r.x + 1.0,
        r.y + 1.0,
        (r.w - 2.0).max(0.0),
        (r.h - 2.0).max(0.0),
    )
}

fn label(activity: &Activity) -> String {
    format!("{} {}", activity.time, activity.title)
}

fn sample_board() -> Board<Activity> {
    let item = |id: &str, time, title| OrderedItem::new(id, Activity { time, title });
    let mut board = Board::new();
    board.set_collection(
        "day-1",
        vec![
            item("act-1", "09:00", "Eiffel Tower Visit"),
            item("act-2", "13:00", "Lunch at Le Bistro"),
            item("act-3", "15:00", "Louvre Museum"),
        ],
    );
    board.set_collection(
        "day-2",
        vec![
            item("act-4", "10:00", "Notre Dame Cathedral"),
            item("act-5", "14:00", "Seine River Cruise"),
        ],
    );
    board
}

#[cfg(test)]
#[path = "../../tests/unit/tui/app.rs"]
mod tests;

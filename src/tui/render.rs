use ratatui::buffer::Buffer;
use ratatui::layout::Rect as CellRect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use super::app::{DemoApp, RowContent};
use crate::core::Rect;

const SLIDE_COLORS: [Color; 4] = [Color::Blue, Color::Magenta, Color::Green, Color::Red];

pub fn render(app: &DemoApp, frame: &mut Frame) {
    let area = frame.area();
    render_carousel(app, frame);
    render_board(app, frame);
    render_log(app, frame);
    render_ghost(app, frame.buffer_mut(), area);
}

fn to_cells(r: Rect) -> CellRect {
    CellRect {
        x: r.x.max(0.0) as u16,
        y: r.y.max(0.0) as u16,
        width: r.w.max(0.0) as u16,
        height: r.h.max(0.0) as u16,
    }
}

fn render_carousel(app: &DemoApp, frame: &mut Frame) {
    let outer = to_cells(app.carousel_frame());
    if outer.area() == 0 {
        return;
    }
    let view = app.carousel().current_view();
    let title = if view.is_autoplay_suspended {
        " destinations (paused) "
    } else {
        " destinations "
    };
    frame.render_widget(Block::bordered().title(title), outer);

    let track = to_cells(app.carousel_track());
    if track.area() == 0 {
        return;
    }
    let buf = frame.buffer_mut();
    let position = view.visual_position_px().round() as i32;
    let width = i32::from(track.width);

    for slide in app.slides() {
        let left = slide.index as i32 * width - position;
        if left >= width || left + width <= 0 {
            continue;
        }
        let color = SLIDE_COLORS[slide.index % SLIDE_COLORS.len()];
        let visible_from = left.max(0);
        let visible_to = (left + width).min(width);
        let fill = CellRect {
            x: track.x + visible_from as u16,
            y: track.y,
            width: (visible_to - visible_from) as u16,
            height: track.height,
        };
        buf.set_style(fill, Style::default().bg(color));

        let text = format!("{}  {}/{}", slide.content, slide.index + 1, view.slide_count);
        let text_row = track.y + track.height / 2;
        let start = left + (width - text.chars().count() as i32).max(0) / 2;
        put_clipped(
            buf,
            track,
            start,
            text_row,
            &text,
            Style::default()
                .bg(color)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        );
    }

    // Indicator dots on the bottom row of the track.
    let dots: String = view
        .indicators()
        .map(|active| if active { "● " } else { "○ " })
        .collect();
    let dots = dots.trim_end();
    let start = (width - dots.chars().count() as i32).max(0) / 2;
    put_clipped(
        buf,
        track,
        start,
        track.y + track.height.saturating_sub(1),
        dots,
        Style::default().fg(Color::White),
    );
}

fn render_board(app: &DemoApp, frame: &mut Frame) {
    let dragging = app.engine().session().filter(|s| s.is_dragging());
    for column in app.columns() {
        let outer = to_cells(column.frame);
        if outer.area() == 0 {
            continue;
        }
        let highlighted = dragging.is_some_and(|s| s.landing().0 == &column.collection);
        let border = if highlighted {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };
        frame.render_widget(
            Block::bordered()
                .title(format!(" {} ", column.collection))
                .border_style(border),
            outer,
        );

        let zone = to_cells(column.zone);
        let buf = frame.buffer_mut();
        for row in &column.rows {
            let cell = to_cells(row.rect);
            if cell.y >= zone.bottom() {
                break;
            }
            match &row.content {
                RowContent::Item { label, .. } => {
                    put_clipped(buf, zone, 0, cell.y, label, Style::default());
                }
                RowContent::Placeholder => {
                    let dashes = "┄".repeat(usize::from(zone.width));
                    put_clipped(
                        buf,
                        zone,
                        0,
                        cell.y,
                        &dashes,
                        Style::default().fg(Color::DarkGray),
                    );
                }
            }
        }
    }
}

fn render_log(app: &DemoApp, frame: &mut Frame) {
    let area = to_cells(app.log_area());
    if area.height < 3 {
        return;
    }
    let visible = usize::from(area.height - 2);
    let lines: Vec<&str> = app.log_lines().collect();
    let tail = lines[lines.len().saturating_sub(visible)..]
        .iter()
        .map(|l| Line::raw(*l))
        .collect::<Vec<_>>();
    frame.render_widget(
        Paragraph::new(tail).block(Block::bordered().title(" events  (q quit, esc cancel) ")),
        area,
    );
}

fn render_ghost(app: &DemoApp, buf: &mut Buffer, area: CellRect) {
    let Some(label) = app.dragged_label() else {
        return;
    };
    let p = app.ghost().position();
    let text = format!(" {label} ");
    put_clipped(
        buf,
        area,
        p.x.round() as i32 - area.x as i32 + 1,
        p.y.round().max(0.0) as u16,
        &text,
        Style::default().add_modifier(Modifier::REVERSED),
    );
}

/// Writes `text` starting `offset` columns into `clip`, dropping whatever
/// falls outside it.
fn put_clipped(buf: &mut Buffer, clip: CellRect, offset: i32, y: u16, text: &str, style: Style) {
    let clip = clip.intersection(buf.area);
    if y < clip.y || y >= clip.bottom() {
        return;
    }
    let skip = (-offset).max(0) as usize;
    let x = clip.x.saturating_add(offset.clamp(0, i32::from(u16::MAX)) as u16);
    if x >= clip.right() {
        return;
    }
    let visible: String = text.chars().skip(skip).collect();
    buf.set_stringn(x, y, visible, usize::from(clip.right() - x), style);
}

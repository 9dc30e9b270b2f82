//! Event chip painting for day cells.
//!
//! All-day events are drawn as a filled bar in the event color; timed events
//! get a color dot followed by their start time and name.

use egui::{Color32, FontId, Pos2, Rect, Sense, Stroke, Vec2};

use crate::models::event::Event;
use crate::ui_egui::theme::CalendarTheme;
use crate::utils::date::format_time;

const CHIP_HEIGHT: f32 = 18.0;
const DOT_RADIUS: f32 = 4.0;

/// How a chip should look, independent of any egui state.
#[derive(Debug, Clone, PartialEq)]
pub struct EventChipStyle {
    /// Background fill; only all-day chips are filled
    pub fill: Option<Color32>,
    /// Leading color dot; only timed chips have one
    pub dot: Option<Color32>,
    pub time_label: Option<String>,
    pub label: String,
}

impl EventChipStyle {
    pub fn for_event(event: &Event, time_format: &str) -> Self {
        let color = CalendarTheme::event_color(event.color);

        match event.start_time() {
            None => Self {
                fill: Some(color),
                dot: None,
                time_label: None,
                label: event.name.clone(),
            },
            Some(start) => Self {
                fill: None,
                dot: Some(color),
                time_label: Some(format_time(start, time_format)),
                label: event.name.clone(),
            },
        }
    }
}

/// Draw one event chip. The returned response reports clicks.
pub fn render_event_chip(
    ui: &mut egui::Ui,
    event: &Event,
    text_color: Color32,
    time_format: &str,
) -> egui::Response {
    let style = EventChipStyle::for_event(event, time_format);
    let width = ui.available_width();
    let (rect, response) = ui.allocate_exact_size(Vec2::new(width, CHIP_HEIGHT), Sense::click());
    let painter = ui.painter();
    let font_id = FontId::proportional(11.0);

    if let Some(fill) = style.fill {
        painter.rect_filled(rect, 3.0, fill);
    }
    if response.hovered() {
        painter.rect_stroke(rect, 3.0, Stroke::new(1.0, text_color.gamma_multiply(0.5)));
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }

    let mut x = rect.left() + 4.0;
    if let Some(dot) = style.dot {
        painter.circle_filled(Pos2::new(x + DOT_RADIUS, rect.center().y), DOT_RADIUS, dot);
        x += DOT_RADIUS * 2.0 + 4.0;
    }

    let label_color = if style.fill.is_some() {
        Color32::WHITE
    } else {
        text_color
    };

    if let Some(time_label) = &style.time_label {
        let galley = painter.layout_no_wrap(
            time_label.clone(),
            font_id.clone(),
            text_color.gamma_multiply(0.7),
        );
        let width = galley.size().x;
        let pos = Pos2::new(x, rect.center().y - galley.size().y / 2.0);
        painter.galley(pos, galley, text_color);
        x += width + 4.0;
    }

    let remaining = (rect.right() - x - 4.0).max(0.0);
    let label = truncate_single_line_to_width(ui, &style.label, &font_id, remaining);
    let galley = painter.layout_no_wrap(label, font_id, label_color);
    let label_rect = Rect::from_min_size(
        Pos2::new(x, rect.center().y - galley.size().y / 2.0),
        galley.size(),
    );
    painter.galley(label_rect.min, galley, label_color);

    response.on_hover_text(event.name.as_str())
}

/// Truncate text to fit within a given pixel width, using binary search
/// and appending "…" when truncation is needed.
fn truncate_single_line_to_width(
    ui: &egui::Ui,
    text: &str,
    font_id: &FontId,
    max_width: f32,
) -> String {
    if max_width <= 0.0 {
        return String::new();
    }

    let measure_width = |candidate: &str| {
        ui.fonts(|f| {
            f.layout_no_wrap(candidate.to_string(), font_id.clone(), Color32::WHITE)
                .size()
                .x
        })
    };

    if measure_width(text) <= max_width {
        return text.to_string();
    }

    let ellipsis = "…";
    if measure_width(ellipsis) > max_width {
        return String::new();
    }

    let mut char_boundaries: Vec<usize> = text.char_indices().map(|(idx, _)| idx).collect();
    char_boundaries.push(text.len());

    let mut low = 0usize;
    let mut high = char_boundaries.len().saturating_sub(1);

    while low < high {
        let mid = (low + high).div_ceil(2);
        let candidate = format!("{}{}", &text[..char_boundaries[mid]], ellipsis);

        if measure_width(&candidate) <= max_width {
            low = mid;
        } else {
            high = mid.saturating_sub(1);
        }
    }

    format!("{}{}", &text[..char_boundaries[low]], ellipsis)
}

//! Service details modal
//!
//! Drawn over a dimmed board when a service is selected. Geometry is computed
//! once by [`DetailsLayout::compute`] and shared by rendering and mouse
//! hit-testing, so what is drawn is exactly what is clickable.

use microdesigner_app::DetailsAction;
use microdesigner_core::{ServiceRecord, ServiceStatus};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Padding, Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use super::modal_overlay;
use crate::theme::{palette, styles};

/// Preferred modal width; clamped to the screen
pub const MODAL_WIDTH: u16 = 64;

/// Horizontal padding inside the modal border
const PADDING_X: u16 = 2;

const CLOSE_LABEL: &str = "[x]";
const METRIC_BOX_HEIGHT: u16 = 4;
const BUTTON_GAP: u16 = 2;

/// Rows that do not depend on the record: title, badges, three headings,
/// the metric boxes, the button row and the blank separators.
const FIXED_ROWS: u16 = 15;

/// Number of rows `text` needs when greedily word-wrapped to `width`
fn wrapped_height(text: &str, width: u16) -> u16 {
    let width = width as usize;
    if width == 0 {
        return 1;
    }

    let mut rows = 1usize;
    let mut line = 0usize;
    for word in text.split_whitespace() {
        let w = word.width();
        if line > 0 && line + 1 + w <= width {
            line += 1 + w;
            continue;
        }
        if line > 0 {
            rows += 1;
        }
        // Words longer than a row are broken across rows
        let extra = (w.max(1) - 1) / width;
        rows += extra;
        line = w - extra * width;
    }
    rows.min(u16::MAX as usize) as u16
}

fn modal_block() -> Block<'static> {
    styles::modal_block().padding(Padding::horizontal(PADDING_X))
}

/// Hands out consecutive rows of an area, clipping at its bottom
struct Rows {
    area: Rect,
    y: u16,
}

impl Rows {
    fn new(area: Rect) -> Self {
        Self { area, y: area.y }
    }

    fn take(&mut self, height: u16) -> Option<Rect> {
        if self.y >= self.area.bottom() || height == 0 {
            self.y = self.y.saturating_add(height);
            return None;
        }
        let h = height.min(self.area.bottom() - self.y);
        let rect = Rect::new(self.area.x, self.y, self.area.width, h);
        self.y = self.y.saturating_add(height);
        Some(rect)
    }

    fn skip(&mut self) {
        self.y = self.y.saturating_add(1);
    }
}

/// Screen geometry of the details modal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailsLayout {
    /// Whole modal, border included
    pub modal: Rect,
    pub title: Option<Rect>,
    /// The `[x]` dismiss control
    pub close_button: Option<Rect>,
    pub badges: Option<Rect>,
    pub description_heading: Option<Rect>,
    pub description: Option<Rect>,
    pub metrics_heading: Option<Rect>,
    pub metrics: Option<Rect>,
    pub endpoints_heading: Option<Rect>,
    /// One row per endpoint, in order
    pub endpoints: Vec<Rect>,
    /// Visible action buttons, left to right
    pub actions: Vec<(DetailsAction, Rect)>,
}

impl DetailsLayout {
    pub fn compute(area: Rect, service: &ServiceRecord) -> Self {
        let width = MODAL_WIDTH.min(area.width);
        let content_width = width.saturating_sub(2 + 2 * PADDING_X);
        let description_rows = wrapped_height(&service.description, content_width);
        let endpoint_rows = service.endpoints.len() as u16;
        let height = 2 + FIXED_ROWS + description_rows + endpoint_rows;

        let modal = modal_overlay::centered_rect(width, height, area);
        let inner = modal_block().inner(modal);
        let mut rows = Rows::new(inner);

        let title = rows.take(1);
        rows.skip();
        let badges = rows.take(1);
        rows.skip();
        let description_heading = rows.take(1);
        let description = rows.take(description_rows);
        rows.skip();
        let metrics_heading = rows.take(1);
        let metrics = rows.take(METRIC_BOX_HEIGHT);
        rows.skip();
        let endpoints_heading = rows.take(1);
        let endpoints = (0..endpoint_rows).filter_map(|_| rows.take(1)).collect();
        rows.skip();
        let button_row = rows.take(1);

        let close_width = CLOSE_LABEL.len() as u16;
        let close_button = title
            .filter(|t| t.width > close_width)
            .map(|t| Rect::new(t.right() - close_width, t.y, close_width, 1));

        let actions = button_row
            .map(|row| button_rects(row, service.status))
            .unwrap_or_default();

        Self {
            modal,
            title,
            close_button,
            badges,
            description_heading,
            description,
            metrics_heading,
            metrics,
            endpoints_heading,
            endpoints,
            actions,
        }
    }
}

fn button_label(action: DetailsAction, status: ServiceStatus) -> String {
    let text = match action {
        DetailsAction::ToggleRunning => status.toggle_label(),
        DetailsAction::ViewLogs => "View Logs",
        DetailsAction::Configure => "Configure",
    };
    format!("[ {} ]", text)
}

fn button_color(action: DetailsAction, status: ServiceStatus) -> Color {
    match action {
        // Red to stop a running service, green to start a stopped one
        DetailsAction::ToggleRunning => match status {
            ServiceStatus::Running => palette::STATUS_RED,
            ServiceStatus::Stopped => palette::STATUS_GREEN,
        },
        DetailsAction::ViewLogs => palette::BUTTON_PRIMARY,
        DetailsAction::Configure => palette::BUTTON_NEUTRAL,
    }
}

/// Lay buttons out left to right; buttons that do not fit are dropped
fn button_rects(row: Rect, status: ServiceStatus) -> Vec<(DetailsAction, Rect)> {
    let mut x = row.x;
    let mut rects = Vec::new();
    for action in DetailsAction::ALL {
        let w = button_label(action, status).width() as u16;
        if x + w > row.right() {
            break;
        }
        rects.push((action, Rect::new(x, row.y, w, 1)));
        x += w + BUTTON_GAP;
    }
    rects
}

/// Modal showing every field of one service
pub struct ServiceDetails<'a> {
    service: &'a ServiceRecord,
    focused_action: DetailsAction,
}

impl<'a> ServiceDetails<'a> {
    pub fn new(service: &'a ServiceRecord) -> Self {
        Self {
            service,
            focused_action: DetailsAction::default(),
        }
    }

    pub fn focused_action(mut self, action: DetailsAction) -> Self {
        self.focused_action = action;
        self
    }

    fn render_metrics(&self, area: Rect, buf: &mut Buffer) {
        let metrics = &self.service.metrics;
        let boxes = Layout::horizontal([Constraint::Fill(1); 3])
            .spacing(2)
            .split(area);

        let entries = [
            ("CPU Usage", metrics.cpu_display()),
            ("Memory", metrics.memory_display()),
            ("Requests/min", metrics.requests_display()),
        ];

        for ((label, value), rect) in entries.into_iter().zip(boxes.iter()) {
            let block = Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(styles::border_inactive())
                .style(Style::default().bg(palette::SURFACE));
            let inner = block.inner(*rect);
            block.render(*rect, buf);

            if inner.height == 0 {
                continue;
            }
            buf.set_string(inner.x + 1, inner.y, label, styles::text_muted());
            if inner.height > 1 {
                buf.set_string(inner.x + 1, inner.y + 1, value, styles::heading());
            }
        }
    }
}

impl Widget for ServiceDetails<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let layout = DetailsLayout::compute(area, self.service);
        let service = self.service;

        modal_overlay::dim_background(buf, area);
        modal_overlay::render_shadow(buf, layout.modal);
        modal_overlay::clear_area(buf, layout.modal);
        modal_block().render(layout.modal, buf);

        if let Some(title) = layout.title {
            let name = Line::from(Span::styled(service.name.as_str(), styles::heading()));
            buf.set_line(title.x, title.y, &name, title.width);
        }
        if let Some(close) = layout.close_button {
            buf.set_string(close.x, close.y, CLOSE_LABEL, styles::text_secondary());
        }

        if let Some(badges) = layout.badges {
            let line = Line::from(vec![
                Span::styled(
                    format!(" {} ", service.status.badge()),
                    styles::badge(styles::status_color(service.status)),
                ),
                Span::raw("  "),
                Span::styled(
                    format!(" {} ", service.category.badge()),
                    styles::badge(styles::category_color(service.category)),
                ),
            ]);
            buf.set_line(badges.x, badges.y, &line, badges.width);
        }

        if let Some(heading) = layout.description_heading {
            buf.set_string(heading.x, heading.y, "Description", styles::heading());
        }
        if let Some(description) = layout.description {
            Paragraph::new(service.description.as_str())
                .style(styles::text_secondary())
                .wrap(Wrap { trim: true })
                .render(description, buf);
        }

        if let Some(heading) = layout.metrics_heading {
            buf.set_string(heading.x, heading.y, "Metrics", styles::heading());
        }
        if let Some(metrics) = layout.metrics {
            self.render_metrics(metrics, buf);
        }

        if let Some(heading) = layout.endpoints_heading {
            buf.set_string(heading.x, heading.y, "Endpoints", styles::heading());
        }
        for (endpoint, row) in service.endpoints.iter().zip(layout.endpoints.iter()) {
            buf.set_style(*row, Style::default().bg(palette::SURFACE));
            let line = Line::from(vec![
                Span::raw("  "),
                Span::styled(endpoint.as_str(), styles::text_primary()),
            ]);
            buf.set_line(row.x, row.y, &line, row.width);
        }

        for (action, rect) in &layout.actions {
            let style = styles::button(
                button_color(*action, service.status),
                *action == self.focused_action,
            );
            buf.set_string(
                rect.x,
                rect.y,
                button_label(*action, service.status),
                style,
            );
        }
    }
}

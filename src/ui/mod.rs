//! User interface rendering.

mod annotation;
mod chart_view;
mod keymap_bar;
mod nav_bar;
mod status_bar;
mod theme;

use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

pub use annotation::AnnotationCard;
pub use chart_view::TerminalRenderer;
pub use theme::ThemeColors;

/// Draw the UI.
pub fn draw(f: &mut Frame<'_>, app: &App) {
    let colors = ThemeColors::from_theme(&app.theme);

    // Chart, navigation controls, status bar and key map bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(8),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(f.area());

    draw_chart(f, app, chunks[0], &colors);
    nav_bar::draw_nav_bar(f, chunks[1], &app.buttons, &app.year_label(), &colors);
    status_bar::draw_status(f, chunks[2], &app.status, &colors);
    keymap_bar::draw_keymap(f, chunks[3], app.active_event().is_some(), &colors);
}

fn draw_chart(f: &mut Frame<'_>, app: &App, area: Rect, colors: &ThemeColors) {
    let focus = app.focused_marker().map(|m| m.event_id);
    let mut renderer = TerminalRenderer::new(colors, focus);

    // Without data the chart area stays empty.
    if let Some(scene) = app.scene() {
        scene.render(&mut renderer);
    }
    renderer.finish(f, area);
}

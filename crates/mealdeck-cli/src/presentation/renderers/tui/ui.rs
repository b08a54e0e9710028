use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    widgets::Block,
};

use super::app::AppState;
use crate::presentation::views::tui::{AlertView, HeaderView, Palette, StatusBarView};

pub(crate) fn draw(f: &mut Frame, app: &mut AppState) {
    let palette = Palette::for_mode(app.dark_mode);
    f.render_widget(Block::default().style(palette.base()), f.area());

    let [header, body, status] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .areas(f.area());

    f.render_widget(
        HeaderView::new(
            app.search.input(),
            app.search.is_focused(),
            app.area_label(),
            palette,
        ),
        header,
    );

    match &app.detail {
        Some(detail) => app.detail_component.render(f, body, detail, palette),
        None => app.list_component.render(f, body, &app.list, palette),
    }

    f.render_widget(
        StatusBarView::new(
            app.loading,
            app.list.load_more,
            app.detail.is_some(),
            app.dark_mode,
            palette,
        ),
        status,
    );

    if let Some(message) = app.alerts.front() {
        f.render_widget(AlertView::new(message, palette), f.area());
    }
}

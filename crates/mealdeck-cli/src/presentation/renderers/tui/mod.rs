//! Interactive terminal surface.
//!
//! The controller runs on its own runtime thread and talks to this module
//! through two channels: `TuiMealView` turns `MealView` calls into
//! `TuiEvent`s, and the renderer loop sends `Action`s back.

mod app;
mod tui_event;
mod ui;

use app::{AppState, KeyOutcome};
pub use tui_event::TuiEvent;

use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use mealdeck_runtime::{Action, CatalogSummary, LoadMoreState, MealView};
use mealdeck_types::{Area, Meal};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{Receiver, Sender, TryRecvError};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;

use crate::presentation::presenters::{
    present_load_more, present_meal_detail, present_meal_page, present_summary,
};

const TICK: Duration = Duration::from_millis(250);

/// `MealView` that forwards presenter output to the renderer thread
#[derive(Clone)]
pub struct TuiMealView {
    tx: Sender<TuiEvent>,
}

impl TuiMealView {
    pub fn new(tx: Sender<TuiEvent>) -> Self {
        Self { tx }
    }

    fn send(&self, event: TuiEvent) -> mealdeck_runtime::Result<()> {
        self.tx
            .send(event)
            .map_err(|_| mealdeck_runtime::Error::ChannelClosed("TUI exited".to_string()))
    }
}

impl MealView for TuiMealView {
    fn render_meals(&self, meals: &[Meal], append: bool) -> mealdeck_runtime::Result<()> {
        self.send(TuiEvent::List(present_meal_page(meals, append)))
    }

    fn set_load_more(&self, state: LoadMoreState) -> mealdeck_runtime::Result<()> {
        self.send(TuiEvent::LoadMore(present_load_more(state)))
    }

    fn set_summary(&self, summary: &CatalogSummary) -> mealdeck_runtime::Result<()> {
        self.send(TuiEvent::Summary(present_summary(summary)))
    }

    fn set_areas(&self, areas: &[Area]) -> mealdeck_runtime::Result<()> {
        self.send(TuiEvent::Areas(
            areas.iter().map(|area| area.to_string()).collect(),
        ))
    }

    fn show_detail(&self, meal: &Meal) -> mealdeck_runtime::Result<()> {
        self.send(TuiEvent::Detail(present_meal_detail(meal)))
    }

    fn show_list(&self) -> mealdeck_runtime::Result<()> {
        self.send(TuiEvent::ShowList)
    }

    fn set_loading(&self, loading: bool) -> mealdeck_runtime::Result<()> {
        self.send(TuiEvent::Loading(loading))
    }

    fn set_dark_mode(&self, enabled: bool) -> mealdeck_runtime::Result<()> {
        self.send(TuiEvent::Theme(enabled))
    }

    fn alert(&self, message: &str) -> mealdeck_runtime::Result<()> {
        self.send(TuiEvent::Alert(message.to_string()))
    }
}

pub struct TuiRenderer;

impl TuiRenderer {
    /// Run the terminal loop until the user quits or the controller goes away.
    ///
    /// Dropping `actions` on return is what tells the controller to stop.
    pub fn run(events: Receiver<TuiEvent>, actions: UnboundedSender<Action>) -> anyhow::Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let running = Arc::new(AtomicBool::new(true));
        let r = running.clone();
        ctrlc::set_handler(move || {
            r.store(false, Ordering::SeqCst);
        })?;

        let result = Self::event_loop(&mut terminal, &events, &actions, &running);

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    fn event_loop(
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        events: &Receiver<TuiEvent>,
        actions: &UnboundedSender<Action>,
        running: &AtomicBool,
    ) -> anyhow::Result<()> {
        let mut app = AppState::new();

        while running.load(Ordering::SeqCst) {
            loop {
                match events.try_recv() {
                    Ok(event) => app.apply(event),
                    Err(TryRecvError::Empty) => break,
                    Err(TryRecvError::Disconnected) => return Ok(()),
                }
            }

            terminal.draw(|f| ui::draw(f, &mut app))?;

            if event::poll(TICK)?
                && let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
            {
                match app.handle_key(key) {
                    KeyOutcome::Continue => {}
                    KeyOutcome::Dispatch(action) => {
                        if actions.send(action).is_err() {
                            return Ok(());
                        }
                    }
                    KeyOutcome::Quit => return Ok(()),
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::view_models::ListUpdate;
    use std::sync::mpsc;

    #[test]
    fn test_view_calls_become_events() {
        let (tx, rx) = mpsc::channel();
        let view = TuiMealView::new(tx);

        view.render_meals(&[Meal::new("1", "Soup")], true).unwrap();
        view.set_loading(true).unwrap();

        match rx.try_recv().unwrap() {
            TuiEvent::List(ListUpdate::Append(cards)) => assert_eq!(cards[0].name, "Soup"),
            other => panic!("unexpected event: {:?}", other),
        }
        assert_eq!(rx.try_recv().unwrap(), TuiEvent::Loading(true));
    }

    #[test]
    fn test_closed_surface_reports_channel_closed() {
        let (tx, rx) = mpsc::channel();
        drop(rx);
        let view = TuiMealView::new(tx);

        assert!(matches!(
            view.show_list(),
            Err(mealdeck_runtime::Error::ChannelClosed(_))
        ));
    }
}

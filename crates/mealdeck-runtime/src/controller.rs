//! Interaction controller.
//!
//! Owns the catalog and screen state and turns user actions into fetches and
//! surface updates. All state lives in one task: fetches and the load-more
//! delay run as spawned tasks that post a `Completion` back, and completions
//! are applied one at a time in arrival order.

use std::future::Future;
use std::sync::Arc;

use mealdeck_core::PreferenceStore;
use mealdeck_engine::{Catalog, FetchContext, Generation, RequestGeneration, sanitize_query};
use mealdeck_providers::RecipeSource;
use mealdeck_types::{Area, Meal, MealId};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::view::{CatalogSummary, LoadMoreState, MealView};
use crate::{Action, BrowseConfig, Error, Result, Screen};

type FetchResult<T> = mealdeck_providers::Result<T>;

pub const DETAILS_NOT_FOUND: &str = "Meal details not found.";
pub const DETAILS_FAILED: &str = "Failed to load details";
pub const AREAS_FAILED: &str = "Failed to load areas";

enum Completion {
    Catalog {
        generation: Generation,
        context: FetchContext,
        with_loader: bool,
        result: FetchResult<Vec<Meal>>,
    },
    Areas(FetchResult<Vec<Area>>),
    Detail {
        generation: Generation,
        result: FetchResult<Option<Meal>>,
    },
    LoadMoreReady {
        generation: Generation,
    },
}

enum Next {
    Action(Option<Action>),
    Completion(Option<Completion>),
}

pub struct Controller<S, V> {
    source: Arc<S>,
    view: V,
    preferences: PreferenceStore,
    settings: BrowseConfig,

    catalog: Catalog,
    /// Last browse/area catalog; an empty search restores it
    browse_snapshot: Catalog,
    browse_loaded: bool,
    /// Latest catalog request, when it is a browse/area fetch still in flight
    pending_browse: Option<Generation>,
    areas: Vec<Area>,
    screen: Screen,
    dark_mode: bool,

    catalog_requests: RequestGeneration,
    detail_requests: RequestGeneration,
    page_requests: RequestGeneration,
    load_more_pending: bool,

    loading: usize,
    pending: usize,
    completion_tx: UnboundedSender<Completion>,
    completion_rx: UnboundedReceiver<Completion>,
}

impl<S, V> Controller<S, V>
where
    S: RecipeSource + 'static,
    V: MealView,
{
    pub fn new(
        source: Arc<S>,
        view: V,
        preferences: PreferenceStore,
        settings: BrowseConfig,
    ) -> Self {
        let browse = FetchContext::Browse {
            letter: settings.default_letter,
        };
        let (completion_tx, completion_rx) = mpsc::unbounded_channel();

        Self {
            source,
            view,
            preferences,
            settings,
            catalog: Catalog::new(browse.clone()),
            browse_snapshot: Catalog::new(browse),
            browse_loaded: false,
            pending_browse: None,
            areas: Vec::new(),
            screen: Screen::List,
            dark_mode: false,
            catalog_requests: RequestGeneration::new(),
            detail_requests: RequestGeneration::new(),
            page_requests: RequestGeneration::new(),
            load_more_pending: false,
            loading: 0,
            pending: 0,
            completion_tx,
            completion_rx,
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn areas(&self) -> &[Area] {
        &self.areas
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    pub fn is_loading(&self) -> bool {
        self.loading > 0
    }

    /// Number of spawned requests/timers whose completion has not been applied
    pub fn pending(&self) -> usize {
        self.pending
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Restore the theme, then fetch the default browse set and the area list
    /// side by side.
    pub fn start(&mut self) -> Result<()> {
        self.dark_mode = self.preferences.dark_mode();
        tracing::info!(dark_mode = self.dark_mode, "starting");
        self.view.set_dark_mode(self.dark_mode)?;
        self.view.set_load_more(LoadMoreState::Hidden)?;

        self.load_default()?;
        self.request_areas();
        Ok(())
    }

    pub fn handle(&mut self, action: Action) -> Result<()> {
        tracing::debug!(?action, screen = ?self.screen, "action");

        match action {
            Action::ToggleTheme => self.toggle_theme(),
            Action::CloseDetails => self.close_details(),
            _ if matches!(self.screen, Screen::Detail(_)) => {
                tracing::debug!("list action ignored while details are open");
                Ok(())
            }
            Action::Search(input) => self.search(&input),
            Action::SelectArea(None) => self.load_default(),
            Action::SelectArea(Some(area)) => self.filter_by_area(area),
            Action::LoadMore => self.request_load_more(),
            Action::OpenDetails(id) => self.open_details(id),
        }
    }

    /// Wait for one outstanding completion and apply it.
    /// Returns `false` when nothing is outstanding.
    pub async fn process_next(&mut self) -> Result<bool> {
        if self.pending == 0 {
            return Ok(false);
        }
        match self.completion_rx.recv().await {
            Some(completion) => {
                self.complete(completion)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Apply completions until nothing is outstanding
    pub async fn settle(&mut self) -> Result<()> {
        while self.process_next().await? {}
        Ok(())
    }

    /// Event loop: start, then interleave user actions and completions until
    /// the action channel closes or the surface goes away.
    pub async fn run(mut self, mut actions: UnboundedReceiver<Action>) -> Result<()> {
        match self.drive(&mut actions).await {
            Err(Error::ChannelClosed(reason)) => {
                tracing::debug!(%reason, "surface closed, stopping");
                Ok(())
            }
            other => other,
        }
    }

    async fn drive(&mut self, actions: &mut UnboundedReceiver<Action>) -> Result<()> {
        self.start()?;

        loop {
            let next = tokio::select! {
                action = actions.recv() => Next::Action(action),
                completion = self.completion_rx.recv() => Next::Completion(completion),
            };

            match next {
                Next::Action(Some(action)) => self.handle(action)?,
                Next::Completion(Some(completion)) => self.complete(completion)?,
                Next::Action(None) | Next::Completion(None) => return Ok(()),
            }
        }
    }

    fn load_default(&mut self) -> Result<()> {
        let context = FetchContext::Browse {
            letter: self.settings.default_letter,
        };
        self.request_catalog(context, true)
    }

    fn search(&mut self, input: &str) -> Result<()> {
        let term = sanitize_query(input);
        if term.is_empty() {
            if self.pending_browse.is_some() {
                tracing::debug!("empty search while the browse set is loading");
                return Ok(());
            }
            if !self.browse_loaded {
                tracing::debug!("empty search before any browse set arrived, reloading");
                return self.load_default();
            }
            tracing::debug!("empty search, restoring browse set");
            self.catalog_requests.invalidate();
            let context = self.browse_snapshot.context().clone();
            let meals = self.browse_snapshot.meals().to_vec();
            return self.replace_catalog(context, meals);
        }
        self.request_catalog(FetchContext::Search { term }, false)
    }

    fn filter_by_area(&mut self, area: Area) -> Result<()> {
        self.request_catalog(FetchContext::Area { area }, true)
    }

    fn request_catalog(&mut self, context: FetchContext, with_loader: bool) -> Result<()> {
        let generation = self.catalog_requests.next();
        self.pending_browse = context.is_browse_set().then_some(generation);
        if with_loader {
            self.begin_loading()?;
        }
        tracing::info!(%context, generation = generation.value(), "fetching catalog");

        let source = Arc::clone(&self.source);
        self.spawn(async move {
            let result = fetch_catalog(source.as_ref(), &context).await;
            Completion::Catalog {
                generation,
                context,
                with_loader,
                result,
            }
        });
        Ok(())
    }

    fn request_areas(&mut self) {
        let source = Arc::clone(&self.source);
        self.spawn(async move { Completion::Areas(source.list_areas().await) });
    }

    fn request_load_more(&mut self) -> Result<()> {
        if self.load_more_pending || !self.catalog.has_more() {
            tracing::debug!(
                pending = self.load_more_pending,
                has_more = self.catalog.has_more(),
                "load more ignored"
            );
            return Ok(());
        }

        self.load_more_pending = true;
        self.view.set_load_more(LoadMoreState::Busy)?;

        let generation = self.page_requests.next();
        let delay = self.settings.load_more_delay();
        self.spawn(async move {
            tokio::time::sleep(delay).await;
            Completion::LoadMoreReady { generation }
        });
        Ok(())
    }

    fn open_details(&mut self, id: MealId) -> Result<()> {
        let generation = self.detail_requests.next();
        self.begin_loading()?;
        tracing::info!(id = %id, "fetching details");

        let source = Arc::clone(&self.source);
        self.spawn(async move {
            let result = source.lookup(&id).await;
            Completion::Detail { generation, result }
        });
        Ok(())
    }

    fn close_details(&mut self) -> Result<()> {
        self.detail_requests.invalidate();
        if matches!(self.screen, Screen::Detail(_)) {
            self.screen = Screen::List;
            self.view.show_list()?;
        }
        Ok(())
    }

    fn toggle_theme(&mut self) -> Result<()> {
        self.dark_mode = !self.dark_mode;
        self.view.set_dark_mode(self.dark_mode)?;
        if let Err(err) = self.preferences.set_dark_mode(self.dark_mode) {
            tracing::warn!(error = %err, "failed to persist theme preference");
        }
        Ok(())
    }

    fn complete(&mut self, completion: Completion) -> Result<()> {
        self.pending = self.pending.saturating_sub(1);

        match completion {
            Completion::Catalog {
                generation,
                context,
                with_loader,
                result,
            } => {
                if with_loader {
                    self.end_loading()?;
                }
                if self.pending_browse == Some(generation) {
                    self.pending_browse = None;
                }
                if !self.catalog_requests.is_current(generation) {
                    tracing::debug!(%context, generation = generation.value(), "discarding stale catalog response");
                    return Ok(());
                }
                match result {
                    Ok(meals) => {
                        tracing::info!(%context, count = meals.len(), "catalog loaded");
                        self.replace_catalog(context, meals)
                    }
                    Err(err) => {
                        tracing::error!(%context, error = %err, "catalog request failed");
                        self.view.alert(failure_message(&context))
                    }
                }
            }
            Completion::Areas(result) => match result {
                Ok(areas) => {
                    tracing::info!(count = areas.len(), "areas loaded");
                    self.areas = areas;
                    self.view.set_areas(&self.areas)
                }
                Err(err) => {
                    tracing::error!(error = %err, "area list request failed");
                    self.view.alert(AREAS_FAILED)
                }
            },
            Completion::Detail { generation, result } => {
                self.end_loading()?;
                if !self.detail_requests.is_current(generation) {
                    tracing::debug!(generation = generation.value(), "discarding stale details response");
                    return Ok(());
                }
                match result {
                    Ok(Some(meal)) => {
                        self.screen = Screen::Detail(meal.id.clone());
                        self.view.show_detail(&meal)
                    }
                    Ok(None) => self.view.alert(DETAILS_NOT_FOUND),
                    Err(err) => {
                        tracing::error!(error = %err, "details request failed");
                        self.view.alert(DETAILS_FAILED)
                    }
                }
            }
            Completion::LoadMoreReady { generation } => {
                if !self.page_requests.is_current(generation) {
                    tracing::debug!("catalog replaced during load-more delay");
                    return Ok(());
                }
                self.load_more_pending = false;
                self.catalog.advance();
                self.render_page(true)
            }
        }
    }

    fn replace_catalog(&mut self, context: FetchContext, meals: Vec<Meal>) -> Result<()> {
        if context.is_browse_set() {
            self.browse_snapshot.replace(context.clone(), meals.clone());
            self.browse_loaded = true;
        }
        self.catalog.replace(context, meals);
        self.page_requests.invalidate();
        self.load_more_pending = false;
        self.render_page(false)
    }

    fn render_page(&mut self, append: bool) -> Result<()> {
        self.view.render_meals(self.catalog.current_page(), append)?;

        let load_more = if self.catalog.has_more() {
            LoadMoreState::Ready
        } else {
            LoadMoreState::Hidden
        };
        self.view.set_load_more(load_more)?;
        self.view.set_summary(&CatalogSummary::of(&self.catalog))
    }

    fn begin_loading(&mut self) -> Result<()> {
        self.loading += 1;
        if self.loading == 1 {
            self.view.set_loading(true)?;
        }
        Ok(())
    }

    fn end_loading(&mut self) -> Result<()> {
        if self.loading == 0 {
            return Ok(());
        }
        self.loading -= 1;
        if self.loading == 0 {
            self.view.set_loading(false)?;
        }
        Ok(())
    }

    fn spawn<F>(&mut self, task: F)
    where
        F: Future<Output = Completion> + Send + 'static,
    {
        self.pending += 1;
        let tx = self.completion_tx.clone();
        tokio::spawn(async move {
            // Receiver gone means the controller shut down
            let _ = tx.send(task.await);
        });
    }
}

/// Issue the request a catalog context stands for
pub async fn fetch_catalog<S>(
    source: &S,
    context: &FetchContext,
) -> mealdeck_providers::Result<Vec<Meal>>
where
    S: RecipeSource + ?Sized,
{
    match context {
        FetchContext::Browse { letter } => source.browse_by_letter(*letter).await,
        FetchContext::Search { term } => source.search_by_name(term).await,
        FetchContext::Area { area } => source.filter_by_area(area).await,
    }
}

/// Alert text for a failed catalog request
pub fn failure_message(context: &FetchContext) -> &'static str {
    match context {
        FetchContext::Browse { .. } => "Failed to load meals. Please refresh the page.",
        FetchContext::Search { .. } => "Failed to search meals. Please try again",
        FetchContext::Area { .. } => "Failed to filter by area",
    }
}

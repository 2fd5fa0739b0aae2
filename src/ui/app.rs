use std::rc::Rc;
use std::time::Duration;

use tracing::debug;

use crate::config::Config;
use crate::country::{FetchDispatcher, FetchOutcome, RequestId};
use crate::nav::{Navigator, Route};
use crate::ui::home::HomeMenu;
use crate::ui::profile::ProfileScreen;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    Screen,
    Help,
}

pub struct App {
    should_quit: bool,
    focus: Focus,
    navigator: Navigator,
    home: HomeMenu,
    /// State of the profile screen while it is on top of the stack.
    /// Rebuilt from scratch on every navigation to it.
    profile: Option<ProfileScreen>,
    fetcher: Rc<dyn FetchDispatcher>,
    /// Newest request id issued by any profile screen so far. New screens
    /// continue from it so a late outcome can't match a fresh request.
    last_request: RequestId,
    flip_duration: Duration,
    idle_tick: Duration,
    frame_tick: Duration,
}

impl App {
    pub fn new(config: &Config, fetcher: Rc<dyn FetchDispatcher>, initial: Route) -> Self {
        let mut app = Self {
            should_quit: false,
            focus: Focus::Screen,
            navigator: Navigator::with_route(initial.clone()),
            home: HomeMenu::default(),
            profile: None,
            fetcher,
            last_request: RequestId::default(),
            flip_duration: config.animation.flip_duration(),
            idle_tick: config.ui.tick_rate(),
            frame_tick: config.animation.frame_interval(),
        };
        app.open_screen(&initial);
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn toggle_help(&mut self) {
        self.focus = match self.focus {
            Focus::Help => Focus::Screen,
            Focus::Screen => Focus::Help,
        };
    }

    pub fn close_help(&mut self) {
        self.focus = Focus::Screen;
    }

    pub fn route(&self) -> &Route {
        self.navigator.current()
    }

    pub fn can_go_back(&self) -> bool {
        self.navigator.can_go_back()
    }

    pub fn home(&self) -> &HomeMenu {
        &self.home
    }

    pub fn home_mut(&mut self) -> &mut HomeMenu {
        &mut self.home
    }

    pub fn profile(&self) -> Option<&ProfileScreen> {
        self.profile.as_ref()
    }

    pub fn profile_mut(&mut self) -> Option<&mut ProfileScreen> {
        self.profile.as_mut()
    }

    pub fn title(&self) -> String {
        match (self.navigator.current(), &self.profile) {
            (Route::Profile { .. }, Some(profile)) => profile.title(),
            (route, _) => route.default_title().to_string(),
        }
    }

    pub fn navigate(&mut self, route: Route) {
        self.open_screen(&route);
        self.navigator.push(route);
    }

    /// Pop the current screen. Returns false at the root.
    pub fn back(&mut self) -> bool {
        if !self.navigator.back() {
            return false;
        }
        if matches!(self.navigator.current(), Route::Home) {
            self.retire_profile();
        }
        true
    }

    fn open_screen(&mut self, route: &Route) {
        self.retire_profile();
        if let Route::Profile { country_code } = route {
            self.profile = Some(ProfileScreen::resume(
                country_code.as_deref(),
                self.flip_duration,
                Rc::clone(&self.fetcher),
                self.last_request,
            ));
        }
    }

    /// Drop the profile screen, remembering the ids it used.
    fn retire_profile(&mut self) {
        if let Some(profile) = self.profile.take() {
            self.last_request = self.last_request.max(profile.last_issued());
        }
    }

    pub fn on_fetch_outcome(&mut self, outcome: FetchOutcome) {
        match self.profile.as_mut() {
            Some(profile) => profile.on_fetch_outcome(outcome),
            None => debug!(request = %outcome.request, "fetch finished after leaving profile"),
        }
    }

    pub fn on_tick(&mut self, elapsed: Duration) {
        if let Some(profile) = self.profile.as_mut() {
            profile.on_tick(elapsed);
        }
    }

    pub fn is_animating(&self) -> bool {
        self.profile.as_ref().is_some_and(ProfileScreen::is_animating)
    }

    /// How long the event loop may wait before the next tick.
    pub fn tick_interval(&self) -> Duration {
        if self.is_animating() {
            self.frame_tick
        } else {
            self.idle_tick
        }
    }
}

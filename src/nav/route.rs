use tracing::info;

/// A screen in the navigation stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    /// Profile screen with an optional incoming country code.
    Profile { country_code: Option<String> },
}

impl Route {
    pub fn default_title(&self) -> &'static str {
        match self {
            Route::Home => "Country Explorer",
            Route::Profile { .. } => "Country Details",
        }
    }
}

/// Stack navigator. The bottom entry is never popped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    stack: Vec<Route>,
}

impl Navigator {
    pub fn new(initial: Route) -> Self {
        Self {
            stack: vec![initial],
        }
    }

    /// Build a stack for a route that was not reached from Home, so that
    /// back navigation still lands on Home.
    pub fn with_route(route: Route) -> Self {
        let mut nav = Self::new(Route::Home);
        if route != Route::Home {
            nav.push(route);
        }
        nav
    }

    pub fn current(&self) -> &Route {
        // The stack always holds at least the root route.
        &self.stack[self.stack.len() - 1]
    }

    pub fn can_go_back(&self) -> bool {
        self.stack.len() > 1
    }

    pub fn push(&mut self, route: Route) {
        info!(?route, "navigate");
        self.stack.push(route);
    }

    /// Pop the top route. Returns false at the root.
    pub fn back(&mut self) -> bool {
        if !self.can_go_back() {
            return false;
        }
        let popped = self.stack.pop();
        info!(?popped, "navigate back");
        true
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(Route::Home)
    }
}

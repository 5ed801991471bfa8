use crate::domain::route::Route;

/// Router collaborator. `replace` swaps the whole stack for `route`.
pub trait Navigator {
    fn replace(&mut self, route: Route);
    fn current(&self) -> Route;
}

/// Keeps the current route plus every replacement made, in order.
#[derive(Debug)]
pub struct StackNavigator {
    current: Route,
    history: Vec<Route>,
}

impl StackNavigator {
    pub fn new(start: Route) -> Self {
        Self {
            current: start,
            history: Vec::new(),
        }
    }

    pub fn history(&self) -> &[Route] {
        &self.history
    }
}

impl Default for StackNavigator {
    fn default() -> Self {
        Self::new(Route::Root)
    }
}

impl Navigator for StackNavigator {
    fn replace(&mut self, route: Route) {
        log::debug!("navigation replace {} -> {}", self.current, route);
        self.current = route;
        self.history.push(route);
    }

    fn current(&self) -> Route {
        self.current
    }
}

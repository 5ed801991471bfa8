use std::fmt;

/// Navigation targets the core asks the router to replace the stack with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Root,
    Home,
    Lock,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Root => "/",
            Route::Home => "/(authenticated)/(tabs)/home",
            Route::Lock => "/(authenticated)/(modal)/lock",
        }
    }

    /// Whether the route lives under the `(authenticated)` group.
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Route::Home | Route::Lock)
    }
}

/// A stack replacement made at `at` (epoch ms).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationRecord {
    pub at: i64,
    pub route: Route,
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

//! wallet_core: ledger and inactivity-lock core of a personal wallet app.

pub mod app;

pub mod common {
    pub mod clock;
    pub mod config;
    pub mod error;
    pub mod event;
    pub mod money;
}

pub mod domain {
    pub mod ledger;
    pub mod phase;
    pub mod route;
    pub mod transaction;
}

pub mod services {
    pub mod identity;
    pub mod navigation;
    pub mod storage;
}

pub mod io {
    pub mod reader;
    pub mod writer;
}

pub mod worker {
    pub mod handlers {
        pub mod lifecycle;
        pub mod session;
        pub mod transaction;
    }
    pub mod lifecycle_bus;
    pub mod monitor;
    pub mod processor;
}

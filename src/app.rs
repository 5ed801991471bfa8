use std::cell::RefCell;
use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::PathBuf;
use std::rc::Rc;

use clap::Parser;

use crate::{
    common::{clock::ManualClock, config::AppConfig, error::AppError, event::AppEvent},
    domain::{ledger::Ledger, phase::LifecyclePhase, route::NavigationRecord},
    io::{reader, writer},
    services::{
        identity::SessionState,
        navigation::StackNavigator,
        storage::{KeyValueStore, MemoryStore, SledStore},
    },
    worker::{
        lifecycle_bus::LifecycleBus,
        monitor::{InactivityMonitor, LockConfig, MonitorHandle},
        processor::Processor,
    },
};

#[derive(Parser, Debug)]
#[command(name = "wallet_core", version, about = "Replay wallet app events")]
pub struct Cli {
    /// Event script (CSV: time,event,phase,id,amount,date,title)
    pub input: PathBuf,

    /// TOML config file
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Write navigations (time,route) to this file
    #[arg(short = 'n', long = "navigations")]
    pub navigations: Option<PathBuf>,

    /// Keep the inactivity timestamp in memory instead of on disk
    #[arg(long = "in-memory")]
    pub in_memory: bool,
}

/// The wallet shell: a ledger plus the collaborators the screens would own,
/// with the inactivity monitor attached to the lifecycle bus.
pub struct WalletApp {
    ledger: Ledger,
    processor: Processor,
    monitor: MonitorHandle,
}

impl WalletApp {
    /// Starts signed out on the landing route, in the foreground.
    pub fn new(config: &AppConfig, store: Box<dyn KeyValueStore>) -> Self {
        let clock = Rc::new(ManualClock::new(0));
        let session = Rc::new(SessionState::default());
        let navigator = Rc::new(RefCell::new(StackNavigator::default()));
        let bus = LifecycleBus::new(LifecyclePhase::Active);

        let monitor = InactivityMonitor::new(
            LockConfig::from(config),
            store,
            session.clone(),
            clock.clone(),
            navigator.clone(),
        )
        .attach(&bus);

        Self {
            ledger: Ledger::new(),
            processor: Processor::new(clock, session, navigator, bus),
            monitor,
        }
    }

    pub fn handle(&mut self, event: AppEvent) {
        self.processor.process(&mut self.ledger, event);
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn navigations(&self) -> &[NavigationRecord] {
        self.processor.navigations()
    }

    pub fn monitor(&self) -> &MonitorHandle {
        &self.monitor
    }

    /// Detaches the inactivity monitor from the lifecycle bus.
    pub fn shutdown(&mut self) {
        self.monitor.detach();
    }
}

pub fn run<I, S>(args: I) -> Result<(), AppError>
where
    I: IntoIterator<Item = S>,
    S: Into<std::ffi::OsString> + Clone,
{
    let cli = Cli::try_parse_from(args)?;
    let config = AppConfig::load(cli.config.as_deref())?;

    let store: Box<dyn KeyValueStore> = if cli.in_memory {
        Box::new(MemoryStore::new())
    } else {
        let path = config.storage_path();
        log::debug!("opening inactivity storage at {}", path.display());
        Box::new(SledStore::open(path)?)
    };

    let file = File::open(&cli.input)?;
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(file);
    let events = reader::read_events(&mut reader);

    let mut app = WalletApp::new(&config, store);
    for event in events {
        let event = event.map_err(AppError::Parse)?;
        app.handle(event);
    }
    app.shutdown();

    log::info!(
        "balance {} {} over {} transactions",
        app.ledger().balance(),
        config.currency_symbol,
        app.ledger().len()
    );

    let stdout = stdout();
    let out = BufWriter::new(stdout.lock());
    writer::write_transactions(out, app.ledger())?;

    if let Some(path) = &cli.navigations {
        writer::write_navigations(File::create(path)?, app.navigations())?;
    }

    Ok(())
}

/// Writes a failed run's error as a single `error: ...` line.
pub fn report_error<W: Write>(mut out: W, err: &AppError) -> std::io::Result<()> {
    writeln!(out, "error: {err}")
}

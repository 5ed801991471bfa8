use wallet_core::{app, common::error::AppError};

fn main() {
    env_logger::init();

    match app::run(std::env::args_os()) {
        Ok(()) => {}
        Err(AppError::Cli(e)) => e.exit(),
        Err(e) => {
            let _ = app::report_error(std::io::stderr().lock(), &e);
            std::process::exit(1);
        }
    }
}

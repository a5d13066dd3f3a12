use clap::Parser;
use modeshift::app::ModeshiftApp;

fn main() {
    env_logger::init();
    let args = ModeshiftApp::parse();
    log::info!("modeshift started at {}", chrono::Local::now().to_rfc3339());
    match args.op.run() {
        Ok(_) => log::info!("finished."),
        Err(e) => {
            log::error!("failed running modeshift: {e}");
            std::process::exit(1);
        }
    }
}

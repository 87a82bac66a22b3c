//! filters a GTFS feed down to a set of agencies, routes and a geographic
//! box, and writes the cleaned up result next to the input.
use clap::Parser;
use gtfs_filter::app::FilterApp;

fn main() {
    env_logger::init();
    let args = FilterApp::parse();
    if let Err(e) = args.run() {
        log::error!("gtfs-filter failed: {e}");
        eprintln!("{e}");
        std::process::exit(1);
    }
}

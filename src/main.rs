//! Paper Filter Frontend Entry Point
//!
//! Status / category / search filtering for the generated paper list page.

mod bindings;
mod config;
mod controller;
mod debounce;
mod dom;
mod error;
mod filter;
mod models;

fn main() {
    console_error_panic_hook::set_once();
    // Level is lowered or raised once the page config has been read
    let _ = console_logger::init(log::LevelFilter::Info);

    if let Err(e) = bindings::run() {
        log::error!("paper filter not mounted: {}", e);
    }
}

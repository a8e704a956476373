//! CSR entry point: panic hook, logging, fatal configuration check, mount.

use stockroom::app::App;
use stockroom::config;

fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    // A missing API origin is a fatal misconfiguration: log it and refuse
    // to mount rather than boot a UI that cannot reach the server.
    match config::api_base_url() {
        Ok(base) => log::info!("stockroom starting against {base}"),
        Err(err) => {
            log::error!("fatal: {err}");
            return;
        }
    }

    leptos::mount::mount_to_body(App);
}

use leptos::*;

use hbnb_app::App;

fn main() {
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    _ = console_log::init_with_level(level);
    console_error_panic_hook::set_once();
    log::info!("Start web application");
    mount_to_body(App);
}

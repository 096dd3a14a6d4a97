//! Browser entry point. Built with `trunk serve --features csr`.

fn main() {
    #[cfg(feature = "csr")]
    {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            leptos::logging::warn!("console logger already installed: {e}");
        }
        leptos::mount::mount_to_body(portfolio_site::app::App);
    }
}

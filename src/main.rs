//! Browser entry point. Installs the panic hook and console logger, then
//! mounts the root component.

fn main() {
    #[cfg(feature = "csr")]
    {
        console_error_panic_hook::set_once();
        if let Err(err) = console_log::init_with_level(log::Level::Debug) {
            web_sys::console::warn_1(&format!("console logger unavailable: {err}").into());
        }
        leptos::mount::mount_to_body(triage_client::app::App);
    }
}

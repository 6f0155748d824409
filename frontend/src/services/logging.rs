/// Component-tagged logging over the `log` facade. Records go to the browser
/// console through `wasm_logger`.
pub struct Logger;

impl Logger {
    /// Install the console sink and the panic hook. Call once, before rendering.
    pub fn init() {
        console_error_panic_hook::set_once();
        wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
    }

    pub fn debug_with_component(component: &str, message: &str) {
        log::debug!("{}", Self::line(component, message));
    }

    pub fn info_with_component(component: &str, message: &str) {
        log::info!("{}", Self::line(component, message));
    }

    pub fn warn_with_component(component: &str, message: &str) {
        log::warn!("{}", Self::line(component, message));
    }

    pub fn error_with_component(component: &str, message: &str) {
        log::error!("{}", Self::line(component, message));
    }

    fn line(component: &str, message: &str) -> String {
        format!("[{}] {}", component, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_is_tagged() {
        assert_eq!(Logger::line("calendar", "loaded"), "[calendar] loaded");
    }
}

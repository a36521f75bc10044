//! Browser capabilities the controller needs: blocking alerts and a way to
//! refresh the server-rendered view.

pub trait ViewHost {
    fn alert(&self, message: &str);

    /// Refresh the current view after a mutation
    fn reload(&self);
}

/// `window.alert` and `location.reload`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserHost;

impl ViewHost for BrowserHost {
    fn alert(&self, message: &str) {
        if let Some(win) = web_sys::window() {
            let _ = win.alert_with_message(message);
        }
    }

    fn reload(&self) {
        let Some(win) = web_sys::window() else { return };
        if let Err(e) = win.location().reload() {
            log::error!("reload failed: {:?}", e);
        }
    }
}

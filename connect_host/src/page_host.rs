use std::cell::RefCell;
use std::error::Error;
use std::rc::Rc;

use slint::ComponentHandle;
use slint::winit_030::WinitWindowAccessor;
use wry::dpi::{LogicalPosition, LogicalSize};
use wry::{Rect, WebView, WebViewBuilder};

use crate::AppWindow;

// The hosted page posts through whichever outbound channel the embedding
// offers: the mobile webview bridge object, or plain window messaging when
// it believes it runs in a frame. Both are folded into wry's IPC channel.
const PAGE_BRIDGE: &str = r#"
window.ReactNativeWebView = window.ReactNativeWebView || {
    postMessage: (message) => window.ipc.postMessage(String(message)),
};
window.addEventListener('message', (event) => {
    if (typeof event.data === 'string') {
        window.ipc.postMessage(event.data);
    }
});
"#;

pub struct PageHost {
    ui: slint::Weak<AppWindow>,
    on_message: Rc<dyn Fn(String)>,
    webview: RefCell<Option<WebView>>,
}

impl PageHost {
    pub fn new(ui: slint::Weak<AppWindow>, on_message: impl Fn(String) + 'static) -> Self {
        Self { ui, on_message: Rc::new(on_message), webview: RefCell::new(None) }
    }

    // A mount is always from scratch: the previous surface is dropped first,
    // abandoning whatever the old page still had in flight.
    pub fn mount(&self, url: &str) -> Result<(), Box<dyn Error>> {
        self.webview.borrow_mut().take();

        let ui = self.ui.upgrade().ok_or("application window is gone")?;
        let forward = self.on_message.clone();

        let webview = ui
            .window()
            .with_winit_window(|window| {
                WebViewBuilder::new()
                    .with_url(url)
                    .with_initialization_script(PAGE_BRIDGE)
                    .with_bounds(page_bounds(&ui))
                    .with_ipc_handler(move |message| forward(message.into_body()))
                    .build_as_child(window)
            })
            .ok_or("no winit window to parent the page surface")??;

        *self.webview.borrow_mut() = Some(webview);
        Ok(())
    }

    // Child surfaces take no part in Slint's layout; the viewport geometry
    // exported from app_window.slint is re-applied as the window changes.
    pub fn sync_bounds(&self, ui: &AppWindow) {
        if let Some(webview) = self.webview.borrow().as_ref() {
            if let Err(err) = webview.set_bounds(page_bounds(ui)) {
                log::debug!("failed to move the page surface: {err}");
            }
        }
    }
}

fn page_bounds(ui: &AppWindow) -> Rect {
    Rect {
        position: LogicalPosition::new(
            f64::from(ui.get_page_area_x()),
            f64::from(ui.get_page_area_y()),
        )
        .into(),
        size: LogicalSize::new(
            f64::from(ui.get_page_area_width().max(1.0)),
            f64::from(ui.get_page_area_height().max(1.0)),
        )
        .into(),
    }
}

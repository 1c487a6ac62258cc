mod page_host;

use std::process;
use std::rc::Rc;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use connect_host_runtime::{ConnectConfig, ScreenState};
use slint::{ComponentHandle, ModelRc, SharedString, TimerMode, VecModel};

use crate::page_host::PageHost;

slint::include_modules!();

fn main() {
    env_logger::Builder::default()
        .filter_level(if cfg!(debug_assertions) {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .init();

    if let Err(err) = run() {
        eprintln!("connect_host fatal error: {err}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = ConnectConfig::from_env();
    let initial_url = config.hosted_connect_url();

    let ui = AppWindow::new()?;
    let state = Arc::new(Mutex::new(ScreenState::new(initial_url.clone())));
    ui.set_url_text(initial_url.clone().into());

    let page_host = Rc::new(PageHost::new(ui.as_weak(), page_message_forwarder(&ui, &state)));
    install_callbacks(&ui, &state, &page_host);

    // The winit window has to exist before a child surface can be parented.
    ui.show()?;
    if let Err(err) = page_host.mount(&initial_url) {
        // The log panel is still useful without the page surface.
        log::error!("failed to mount the hosted page: {err}");
    }

    let bounds_timer = slint::Timer::default();
    let timer_ui = ui.as_weak();
    let timer_host = page_host.clone();
    bounds_timer.start(TimerMode::Repeated, Duration::from_millis(100), move || {
        if let Some(ui) = timer_ui.upgrade() {
            timer_host.sync_bounds(&ui);
        }
    });

    ui.run()?;
    Ok(())
}

fn page_message_forwarder(
    ui: &AppWindow,
    state: &Arc<Mutex<ScreenState>>,
) -> impl Fn(String) + 'static {
    let ui = ui.as_weak();
    let state = state.clone();

    move |raw: String| {
        let state = state.clone();
        let _ = ui.upgrade_in_event_loop(move |ui| {
            let Ok(mut screen) = state.lock() else {
                log::error!("screen state lock poisoned; dropping page message");
                return;
            };

            screen.handle_page_message(&raw);
            refresh_log_view(&ui, &screen);
        });
    }
}

fn install_callbacks(ui: &AppWindow, state: &Arc<Mutex<ScreenState>>, page_host: &Rc<PageHost>) {
    let edit_state = state.clone();
    ui.on_url_edited(move |draft| {
        if let Ok(mut screen) = edit_state.lock() {
            screen.edit_url(draft.to_string());
        }
    });

    let reload_ui = ui.as_weak();
    let reload_state = state.clone();
    let reload_host = page_host.clone();
    ui.on_reload(move || {
        let Some(ui) = reload_ui.upgrade() else {
            return;
        };

        let url = {
            let Ok(mut screen) = reload_state.lock() else {
                log::error!("screen state lock poisoned; reload ignored");
                return;
            };

            let url = screen.reload();
            refresh_log_view(&ui, &screen);
            url
        };

        if let Err(err) = reload_host.mount(&url) {
            log::error!("failed to reload the hosted page: {err}");
        }
    });

    let clear_ui = ui.as_weak();
    let clear_state = state.clone();
    ui.on_clear(move || {
        let Some(ui) = clear_ui.upgrade() else {
            return;
        };

        let Ok(mut screen) = clear_state.lock() else {
            log::error!("screen state lock poisoned; clear ignored");
            return;
        };

        screen.clear_logs();
        refresh_log_view(&ui, &screen);
    });
}

fn refresh_log_view(ui: &AppWindow, screen: &ScreenState) {
    let lines: Vec<SharedString> =
        screen.logbook.render_lines().into_iter().map(SharedString::from).collect();
    ui.set_log_lines(ModelRc::new(VecModel::from(lines)));
}

use crate::support::{
    load_config_or_exit, parse_action_or_exit, print_json_or_exit, read_text_or_exit,
};
use memolink_dispatch::{
    Dispatcher, HostMode, HostWindow, Notifier, PopupOpener, PopupRequest, StaticVariables,
};
use serde_json::json;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::debug;

pub struct Args {
    pub config: Option<String>,
    pub vars: String,
    pub action: Option<String>,
    pub server: Option<String>,
    pub report_name: Option<String>,
    pub edit_mode: bool,
    pub window_width: i64,
    pub window_height: i64,
    pub json: bool,
}

/// Prints the popup instead of opening a window.
struct StdoutOpener {
    window: HostWindow,
    json: bool,
    opened: Mutex<Option<PopupRequest>>,
}

impl PopupOpener for StdoutOpener {
    fn open(&self, request: &PopupRequest) {
        let features = request.features(&self.window);
        if self.json {
            print_json_or_exit(
                &json!({
                    "url": request.url,
                    "width": request.width,
                    "height": request.height,
                    "features": features,
                }),
                "dispatch",
            );
        } else {
            println!("memolink dispatch");
            println!("  URL: {}", request.url);
            println!("  Size: {}x{}", request.width, request.height);
            println!("  Features: {features}");
        }
        if let Ok(mut slot) = self.opened.lock() {
            *slot = Some(request.clone());
        }
    }
}

/// Writes alerts to stderr and remembers that one was raised.
#[derive(Default)]
struct StderrNotifier {
    alerted: AtomicBool,
}

impl Notifier for StderrNotifier {
    fn alert(&self, message: &str) {
        self.alerted.store(true, Ordering::SeqCst);
        eprintln!("alert: {message}");
    }
}

pub fn run(args: Args) {
    let mut config = load_config_or_exit(args.config.as_deref());
    if let Some(action) = args.action.as_deref() {
        config.action_type = parse_action_or_exit(action);
    }
    if let Some(server) = args.server {
        config.server_address = server;
    }
    if let Some(report_name) = args.report_name {
        config.report_name = report_name;
    }

    debug!(
        action = %config.action_type,
        server = %config.server_address,
        "widget config resolved"
    );

    let vars_raw = read_text_or_exit(&args.vars, "variables file");
    let vars = StaticVariables::from_json_str(&vars_raw).unwrap_or_else(|err| {
        eprintln!("error: failed to parse variables json {}: {err}", args.vars);
        std::process::exit(2);
    });

    let opener = StdoutOpener {
        window: HostWindow {
            screen_x: 0,
            screen_y: 0,
            outer_width: args.window_width,
            outer_height: args.window_height,
        },
        json: args.json,
        opened: Mutex::new(None),
    };
    let dispatcher = Dispatcher::new(vars, opener, StderrNotifier::default());
    let mode = if args.edit_mode {
        HostMode::Edit
    } else {
        HostMode::Analysis
    };

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap_or_else(|e| {
            eprintln!("error: failed to create tokio runtime: {e}");
            std::process::exit(2);
        });
    runtime.block_on(dispatcher.on_click(&config, mode));

    if dispatcher.notifier().alerted.load(Ordering::SeqCst) {
        std::process::exit(1);
    }
    let opened = dispatcher
        .opener()
        .opened
        .lock()
        .map(|slot| slot.is_some())
        .unwrap_or(false);
    if opened {
        return;
    }
    if args.json {
        print_json_or_exit(&json!({ "skipped": "edit_mode" }), "dispatch");
    } else {
        println!("memolink dispatch");
        println!("  Skipped: host is in edit mode");
    }
}

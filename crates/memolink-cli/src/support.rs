use memolink_dispatch::WidgetConfig;
use memolink_schema::ActionType;
use serde::Serialize;
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Installs the stderr log subscriber. `RUST_LOG` overrides the default
/// `info` filter.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_ansi(std::io::stderr().is_terminal());
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

pub fn read_text_or_exit(path: &str, label: &str) -> String {
    let path = PathBuf::from(path);
    std::fs::read_to_string(&path).unwrap_or_else(|err| {
        eprintln!("error: failed to read {label} {}: {err}", path.display());
        std::process::exit(2);
    })
}

pub fn load_config_or_exit(config: Option<&str>) -> WidgetConfig {
    let Some(path) = config else {
        return WidgetConfig::default();
    };
    WidgetConfig::load(&PathBuf::from(path)).unwrap_or_else(|err| {
        eprintln!("error: {err}");
        std::process::exit(2);
    })
}

pub fn parse_action_or_exit(action: &str) -> ActionType {
    action.parse().unwrap_or_else(|err| {
        eprintln!("error: {err}");
        std::process::exit(2);
    })
}

pub fn print_json_or_exit<T: Serialize>(payload: &T, label: &str) {
    let rendered = serde_json::to_string_pretty(payload).unwrap_or_else(|err| {
        eprintln!("error: failed to render {label} json: {err}");
        std::process::exit(2);
    });
    println!("{rendered}");
}

//! memolink CLI: the `memolink` command.

mod cli;
mod commands;
mod support;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    support::init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Validate {
            action,
            payload,
            payload_file,
            report_name,
            json,
        } => commands::validate::run(action, payload, payload_file, report_name, json),

        Commands::Encrypt {
            key,
            text,
            transport_safe,
            json,
        } => commands::encrypt::run(key, text, transport_safe, json),

        Commands::Decrypt { key, cipher, json } => commands::decrypt::run(key, cipher, json),

        Commands::BuildUrl {
            server,
            action,
            cipher,
            json,
        } => commands::build_url::run(server, action, cipher, json),

        Commands::Dispatch {
            config,
            vars,
            action,
            server,
            report_name,
            edit_mode,
            window_width,
            window_height,
            json,
        } => commands::dispatch::run(commands::dispatch::Args {
            config,
            vars,
            action,
            server,
            report_name,
            edit_mode,
            window_width,
            window_height,
            json,
        }),

        Commands::Render {
            config,
            object_id,
            json,
        } => commands::render::run(config, object_id, json),
    }
}

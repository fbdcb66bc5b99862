use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "memolink",
    about = "memolink: validate, encrypt, and dispatch memo search payloads",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate a search payload against an action schema
    Validate {
        /// Action type: issue_note, reliability, qcost_create, qcost_update
        #[arg(long)]
        action: String,

        /// Payload JSON text (use `--payload-file` to read from disk)
        #[arg(long, conflicts_with = "payload_file")]
        payload: Option<String>,

        /// Path to a file holding the payload JSON
        #[arg(long)]
        payload_file: Option<String>,

        /// Configured report name (enables the audited-report checks)
        #[arg(long)]
        report_name: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Encrypt text with a shared key
    Encrypt {
        /// Shared key, at least 16 characters
        #[arg(long)]
        key: String,

        /// Plain text to encrypt
        #[arg(long)]
        text: String,

        /// Emit the transport-safe token instead of padded base64
        #[arg(long)]
        transport_safe: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Decrypt base64 ciphertext or a transport-safe token
    Decrypt {
        /// Shared key, at least 16 characters
        #[arg(long)]
        key: String,

        /// Ciphertext in either encoding
        #[arg(long)]
        cipher: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Build a dispatch URL from existing ciphertext
    BuildUrl {
        /// Server address prefix
        #[arg(long)]
        server: String,

        /// Action type
        #[arg(long)]
        action: String,

        /// Base64 ciphertext
        #[arg(long)]
        cipher: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run one click through the full pipeline and print the popup request
    Dispatch {
        /// Widget config file (.toml or .json); defaults apply when omitted
        #[arg(long)]
        config: Option<String>,

        /// JSON object of host variables (`null` marks an unevaluated variable)
        #[arg(long)]
        vars: String,

        /// Override the configured action type
        #[arg(long)]
        action: Option<String>,

        /// Override the configured server address
        #[arg(long)]
        server: Option<String>,

        /// Override the configured report name
        #[arg(long)]
        report_name: Option<String>,

        /// Simulate a click while the host is in edit mode
        #[arg(long)]
        edit_mode: bool,

        /// Host window width used to centre the popup
        #[arg(long, default_value_t = 1920)]
        window_width: i64,

        /// Host window height used to centre the popup
        #[arg(long, default_value_t = 1080)]
        window_height: i64,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Render button markup and styles for a widget config
    Render {
        /// Widget config file (.toml or .json); defaults apply when omitted
        #[arg(long)]
        config: Option<String>,

        /// Host object identifier
        #[arg(long)]
        object_id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

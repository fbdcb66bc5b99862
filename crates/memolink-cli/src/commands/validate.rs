use crate::support::{print_json_or_exit, read_text_or_exit};
use memolink_schema::{ValidationContext, ValidationResult, validate_named};

pub fn run(
    action: String,
    payload: Option<String>,
    payload_file: Option<String>,
    report_name: Option<String>,
    json_output: bool,
) {
    let raw = match (payload, payload_file) {
        (Some(text), _) => text,
        (None, Some(path)) => read_text_or_exit(&path, "payload file"),
        (None, None) => {
            eprintln!("error: one of --payload or --payload-file is required");
            std::process::exit(2);
        }
    };

    let ctx = ValidationContext {
        report_name: report_name.as_deref(),
    };
    let result = validate_named(&raw, &action, ctx);

    if json_output {
        print_json_or_exit(&result, "validate");
    } else {
        println!("memolink validate");
        println!("  Action: {}", action.trim());
        match &result {
            ValidationResult::Valid { parsed } => {
                println!("  Result: valid");
                println!("  Fields: {}", parsed.len());
            }
            ValidationResult::Invalid { reason } => {
                println!("  Result: invalid");
                println!("  Kind: {:?}", reason.kind);
                println!("  Message: {}", reason.message);
                if !reason.missing.is_empty() {
                    println!("  Missing: {}", reason.missing.join(", "));
                }
            }
        }
    }

    if !result.is_valid() {
        std::process::exit(1);
    }
}

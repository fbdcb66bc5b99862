use crate::support::{parse_action_or_exit, print_json_or_exit};
use memolink_dispatch::{build_url, endpoint};
use serde_json::json;

pub fn run(server: String, action: String, cipher: String, json_output: bool) {
    let action = parse_action_or_exit(&action);
    let url = build_url(&server, action, cipher.trim());

    if json_output {
        print_json_or_exit(
            &json!({
                "action": action,
                "endpoint": endpoint(action),
                "url": url,
            }),
            "build-url",
        );
        return;
    }
    println!("{url}");
}

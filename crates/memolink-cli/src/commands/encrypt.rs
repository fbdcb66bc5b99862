use crate::support::print_json_or_exit;
use memolink_cipher::{encrypt, to_transport_safe};
use serde_json::json;

pub fn run(key: String, text: String, transport_safe: bool, json_output: bool) {
    let cipher = encrypt(&text, &key).unwrap_or_else(|err| {
        eprintln!("error: {err}");
        std::process::exit(2);
    });
    let token = to_transport_safe(&cipher);

    if json_output {
        print_json_or_exit(
            &json!({
                "cipherText": cipher,
                "token": token,
            }),
            "encrypt",
        );
        return;
    }

    if transport_safe {
        println!("{token}");
    } else {
        println!("{cipher}");
    }
}

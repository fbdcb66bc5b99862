use crate::support::print_json_or_exit;
use memolink_cipher::{decrypt, from_transport_safe};
use serde_json::json;

pub fn run(key: String, cipher: String, json_output: bool) {
    // Padded base64 passes through unchanged, so both encodings are accepted.
    let base64 = from_transport_safe(cipher.trim());
    let plain = decrypt(&base64, &key).unwrap_or_else(|err| {
        eprintln!("error: {err}");
        std::process::exit(2);
    });

    if json_output {
        print_json_or_exit(&json!({ "plainText": plain }), "decrypt");
        return;
    }
    println!("{plain}");
}

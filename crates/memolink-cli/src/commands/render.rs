use crate::support::{load_config_or_exit, print_json_or_exit};
use memolink_dispatch::render;

pub fn run(config: Option<String>, object_id: String, json_output: bool) {
    let object_id = object_id.trim();
    if object_id.is_empty() {
        eprintln!("error: --object-id must not be empty");
        std::process::exit(2);
    }
    let config = load_config_or_exit(config.as_deref());
    let rendered = render(&config, object_id);

    if json_output {
        print_json_or_exit(&rendered, "render");
        return;
    }
    println!("{}", rendered.markup);
    println!();
    println!("{}", rendered.styles);
}

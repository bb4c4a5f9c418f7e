use dropzone_web::{config, App};

fn main() {
    let level = config::log_level(&config::embedded());
    if let Err(err) = dioxus::logger::init(level) {
        eprintln!("Failed to initialize logger: {err}");
    }

    dioxus::launch(App);
}

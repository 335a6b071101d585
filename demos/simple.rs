// demos/simple.rs
//! Detect the language and script of a few snippets.
//!
//! Run with `RUST_LOG=langscope=trace cargo run --example simple` to see
//! the per-call trace events.

use langscope::{ENG, Options, RUS, detect, detect_script, detect_with_options};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let snippets = [
        "Where there is a will there is a way",
        "Vouloir, c'est pouvoir",
        "Та нічого, все нормально. А в тебе як?",
        "我爱你",
        "どうもありがとう",
        "האקדמיה ללשון העברית",
        "Tu me manques",
        "123456789-=?",
    ];

    for text in snippets {
        let info = detect(text);
        let verdict = if info.is_reliable() { "reliable" } else { "unreliable" };
        println!("{text:<42} → {info} [{verdict}]");
    }

    println!();
    let mixed = "Russian word любовь means love.";
    println!("script of {mixed:?}: {:?}", detect_script(mixed));

    let opts = Options::new().deny(ENG);
    println!(
        "without English: {}",
        detect_with_options("Where there is a will there is a way", &opts)
    );
    let opts = Options::new().allow(RUS);
    println!(
        "Russian only: {}",
        detect_with_options("Та нічого, все нормально.", &opts)
    );
}

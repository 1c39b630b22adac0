//! Process-wide logger example
//!
//! Uses the shared `Ulog::global()` instance with the reference-counted
//! lifecycle: the manager appears on the first registration and goes away
//! with the last one.
//!
//! Run with: cargo run --example global_logger

use rust_ulog::prelude::*;
use rust_ulog::{error, warning};
use std::thread;

fn main() {
    let ulog = Ulog::global();

    let workers: Vec<_> = (0..3)
        .map(|id| {
            thread::spawn(move || {
                let ulog = Ulog::global();
                let module = match ulog.register(&format!("worker{}", id)) {
                    Ok(module) => module,
                    Err(e) => {
                        eprintln!("register failed: {}", e);
                        return;
                    }
                };
                for step in 0..3 {
                    warning!(ulog, module, "step {}", step);
                }
                ulog.unregister(module);
            })
        })
        .collect();

    for worker in workers {
        let _ = worker.join();
    }

    println!("manager alive after all workers: {}", ulog.is_initialized());

    let main_module = ulog.register("main").expect("register main");
    error!(ulog, main_module, "lines emitted: {}", ulog.metrics().lines_emitted());
    ulog.unregister(main_module);
}

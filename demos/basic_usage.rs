//! Basic ulog usage example
//!
//! Demonstrates module registration, per-module levels and the line format.
//!
//! Run with: cargo run --example basic_usage

use rust_ulog::prelude::*;
use rust_ulog::{debug, error, info, warning};

fn main() -> Result<()> {
    println!("=== Rust ulog - Basic Usage Example ===\n");

    let ulog = Ulog::builder()
        .lifecycle(LifecyclePolicy::Explicit)
        .buffer_size(512)
        .build()?;

    let net = ulog.register("net")?;
    let disk = ulog.register("disk")?;

    println!("1. Default level is WARNING:");
    info!(ulog, net, "x={}", 5);
    error!(ulog, net, "x={}", 5);

    println!("\n2. Lowering the disk module to INFO:");
    ulog.set_level(&disk, LogLevel::Info);
    info!(ulog, disk, "mounted {}", "/data");
    debug!(ulog, disk, "blocks free: {}", 1024);
    warning!(ulog, disk, "usage at {}%", 91);

    println!("\n3. Registered modules:");
    ulog.show_modules()?;

    ulog.unregister(net);
    ulog.unregister(disk);
    ulog.teardown();

    println!("\n=== Example completed successfully! ===");
    Ok(())
}

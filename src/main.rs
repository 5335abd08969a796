//! FireWatch monitor — main entry point.
//!
//! Hexagonal architecture with channel-driven execution.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                   Adapters (outer ring)                  │
//! │                                                          │
//! │  line_source      LogEventSink   LogNotifier  SystemClock│
//! │  (update stream)  (EventSink)    (Notification)(WallClock)│
//! │                                                          │
//! │  ─────────────── Port Trait Boundary ──────────────      │
//! │                                                          │
//! │  ┌────────────────────────────────────────────────────┐  │
//! │  │            AlertService (pure logic)               │  │
//! │  │  evaluate · record · commit                        │  │
//! │  └────────────────────────────────────────────────────┘  │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! Snapshots arrive as newline-delimited JSON on stdin — one payload
//! per line, the same `{FireSensor, SmokeSensor, Temperature}` shape
//! the remote source publishes.

#![deny(unused_must_use)]

use anyhow::Result;
use futures_lite::future::block_on;
use log::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use firewatch::adapters::clock::SystemClock;
use firewatch::adapters::line_source;
use firewatch::adapters::log_sink::LogEventSink;
use firewatch::adapters::notification::LogNotifier;
use firewatch::app::service::AlertService;
use firewatch::app::update::SourceUpdate;
use firewatch::channels::UPDATE_CHANNEL;
use firewatch::config::MonitorConfig;

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "firewatch=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init()?;

    info!("FireWatch v{}", env!("CARGO_PKG_VERSION"));

    // ── 1. Load config (or defaults) ──────────────────────────
    let config = load_config();

    // ── 2. Construct adapters ─────────────────────────────────
    let clock = SystemClock::new();
    let mut sink = LogEventSink::new();
    let mut notifier = LogNotifier::new();

    // ── 3. Construct the alert service ────────────────────────
    let mut service = AlertService::new(config);
    service.start(&mut sink);

    // ── 4. Source reader (producer) ───────────────────────────
    let producer = std::thread::spawn(|| {
        let stdin = std::io::stdin();
        line_source::run(stdin.lock());
    });

    info!("Monitor ready. Entering update loop.");

    // ── 5. Update loop (single consumer) ──────────────────────
    //
    // Each update is handled to completion before the next receive,
    // which is the serialization guarantee the service relies on.
    loop {
        let update = block_on(UPDATE_CHANNEL.receive());
        if matches!(update, SourceUpdate::Closed) {
            service.handle_update(update, &clock, &mut notifier, &mut sink);
            break;
        }
        service.handle_update(update, &clock, &mut notifier, &mut sink);
        print_dashboard(&service);
    }

    if producer.join().is_err() {
        warn!("source reader thread panicked");
    }
    info!("Shutting down after {} snapshots", service.snapshots_seen());
    Ok(())
}

/// Load configuration from the file named by `FIREWATCH_CONFIG`, or
/// fall back to defaults.  Config problems are never fatal.
fn load_config() -> MonitorConfig {
    let Ok(path) = std::env::var("FIREWATCH_CONFIG") else {
        return MonitorConfig::default();
    };
    match std::fs::read_to_string(&path) {
        Ok(raw) => match serde_json::from_str(&raw) {
            Ok(config) => {
                info!("Config loaded from {path}");
                config
            }
            Err(e) => {
                warn!("Config parse failed ({e}), using defaults");
                MonitorConfig::default()
            }
        },
        Err(e) => {
            warn!("Config read failed ({e}), using defaults");
            MonitorConfig::default()
        }
    }
}

/// Print the current statuses and the history list after each update.
fn print_dashboard(service: &AlertService) {
    let Some(statuses) = service.statuses() else {
        return;
    };
    println!("{}", statuses.fire);
    println!("{}", statuses.smoke);
    println!("{}", statuses.temperature);
    for entry in service.history().entries() {
        println!("  {entry}");
    }
    println!();
}

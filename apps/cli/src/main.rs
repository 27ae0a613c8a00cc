mod args;
mod config;

use std::io;
use std::net::SocketAddr;

use activity::ActivityClient;
use dashboard_app::{
    LoadEvent, SessionState, default_range, load_table, restore, share_link, validate_inputs,
};
use dashboard_core::{CostReport, Credentials, DateRange};
use http_api::HttpState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = args::parse_args().map_err(|err| {
        eprintln!("{err}");
        args::print_help();
        io::Error::new(io::ErrorKind::InvalidInput, "invalid arguments")
    })?;

    let config_load = config::load_or_create().map_err(io::Error::other)?;
    if config_load.created {
        println!(
            "Created config at {} (default port {}).",
            config_load.paths.file.display(),
            config_load.config.port
        );
    }

    // Input precedence: share link > flags > saved config. Dates never come
    // from the config; absent ones default to the last 30 days.
    let restored = match args.link.as_deref() {
        Some(link) => restore(link).map_err(|err| io::Error::other(err.to_string()))?,
        None => Default::default(),
    };
    let defaults = default_range();
    let credentials = Credentials {
        api_key: restored
            .api_key
            .or(args.api_key)
            .unwrap_or_else(|| config_load.config.api_key.clone()),
        organization_key: restored
            .organization_key
            .or(args.organization_key)
            .unwrap_or_else(|| config_load.config.organization_key.clone()),
    };
    let range = DateRange {
        start: restored.start_date.or(args.start).unwrap_or(defaults.start),
        end: restored.end_date.or(args.end).unwrap_or(defaults.end),
    };

    let table = load_table(args.pricing.as_deref())
        .map_err(|err| io::Error::other(err.to_string()))?;
    let port = args.port.unwrap_or(config_load.config.port);
    let page_url = format!("http://127.0.0.1:{port}/");

    if args.serve {
        persist_inputs(&config_load, &credentials, port, args.no_save);
        let session = SessionState::new(credentials, range);
        let state = HttpState::new(session, table, ActivityClient::new(), page_url);
        let router = http_api::router(state);

        let (listener, actual_port, used_fallback) = bind_port(port).await?;
        if used_fallback {
            eprintln!("Configured port {port} was unavailable; using {actual_port} for this run.");
        }
        println!("Usage dashboard API is running at http://127.0.0.1:{actual_port}");
        println!("Press Ctrl+C to stop.");

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        return Ok(());
    }

    validate_inputs(&credentials, &range).map_err(|err| {
        eprintln!("{err}");
        io::Error::new(io::ErrorKind::InvalidInput, "invalid inputs")
    })?;
    persist_inputs(&config_load, &credentials, port, args.no_save);

    let client = ActivityClient::new();
    let mut session = SessionState::new(credentials.clone(), range.clone());
    let generation = session.begin_load();
    let event = match client.fetch_activity(&credentials, &range).await {
        Ok(records) => LoadEvent::Succeeded {
            generation,
            records,
        },
        Err(err) => LoadEvent::Failed {
            generation,
            message: err.to_string(),
        },
    };
    session.apply(event, &table);

    if let Some(message) = session.error.as_deref() {
        eprintln!("{message}");
        return Err(io::Error::other("load failed").into());
    }
    let report = session.report.take().unwrap_or_default();
    print_report(&report);

    let link = share_link(&page_url, &credentials, &range)
        .map_err(|err| io::Error::other(err.to_string()))?;
    println!();
    println!("Share link: {link}");

    Ok(())
}

fn persist_inputs(load: &config::ConfigLoad, credentials: &Credentials, port: u16, no_save: bool) {
    if no_save || credentials.api_key.is_empty() || credentials.organization_key.is_empty() {
        return;
    }
    let config = config::CliConfig {
        api_key: credentials.api_key.clone(),
        organization_key: credentials.organization_key.clone(),
        port,
    };
    if let Err(err) = config::write_config(&load.paths, &config) {
        eprintln!("failed to save credentials: {}", err);
    }
}

// Costs are rounded to two decimals here and nowhere else.
fn print_report(report: &CostReport) {
    println!("Total Costs by User");
    println!("{:<28} {:>12}", "User ID", "Total Cost");
    for row in &report.totals {
        println!("{:<28} ${:>11.2}", row.user_id, row.total_cost);
    }
    println!("{:<28} ${:>11.2}", "Total", report.grand_total());

    println!();
    println!("Costs by Days");
    println!(
        "{:<12} {:>10}  {:<28} {}",
        "Date", "Cost", "Snapshot ID", "User ID"
    );
    for line in &report.lines {
        println!(
            "{:<12} ${:>9.2}  {:<28} {}",
            line.date, line.cost, line.model, line.user_id
        );
    }

    if report.skipped_unknown_models > 0 {
        eprintln!(
            "skipped {} record(s) with no price entry: {}",
            report.skipped_unknown_models,
            report.unknown_models.join(", ")
        );
    }
}

async fn bind_port(port: u16) -> Result<(tokio::net::TcpListener, u16, bool), io::Error> {
    if port == 0 {
        let listener = tokio::net::TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let actual_port = listener.local_addr()?.port();
        return Ok((listener, actual_port, false));
    }

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => Ok((listener, port, false)),
        Err(_) => {
            let listener =
                tokio::net::TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
            let actual_port = listener.local_addr()?.port();
            Ok((listener, actual_port, true))
        }
    }
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}

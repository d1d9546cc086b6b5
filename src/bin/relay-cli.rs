use std::collections::BTreeMap;

use clap::Parser;
use http_relay::{CallDescriptor, HeaderField};
use serde_json::{Map, Value};

/// Send a call descriptor to a running relay and print the relayed response.
#[derive(Parser)]
#[command(name = "relay-cli")]
#[command(about = "Client for the HTTP relay", long_about = None)]
struct Cli {
    /// Base URL of the relay.
    #[arg(short, long, default_value = "http://localhost:3250")]
    relay: String,

    /// Target URL the relay should call.
    #[arg(short, long)]
    url: String,

    /// HTTP method for the target call.
    #[arg(short = 'X', long, default_value = "GET")]
    method: String,

    /// Header as key=value. Repeating a key sends all values.
    #[arg(short = 'H', long = "header", value_parser = parse_header)]
    headers: Vec<(String, String)>,

    /// JSON object sent as the target body.
    #[arg(short, long)]
    body: Option<String>,
}

fn parse_header(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
        .ok_or_else(|| format!("expected key=value, got {raw:?}"))
}

fn header_fields(headers: Vec<(String, String)>) -> Option<BTreeMap<String, HeaderField>> {
    if headers.is_empty() {
        return None;
    }

    let mut grouped: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for (key, value) in headers {
        grouped.entry(key).or_default().push(value);
    }

    Some(
        grouped
            .into_iter()
            .map(|(key, mut values)| {
                let field = if values.len() == 1 {
                    HeaderField::Single(values.remove(0))
                } else {
                    HeaderField::Multiple(values)
                };
                (key, field)
            })
            .collect(),
    )
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let body = match cli.body {
        Some(raw) => Some(serde_json::from_str::<Map<String, Value>>(&raw)?),
        None => None,
    };

    let descriptor = CallDescriptor {
        url: cli.url,
        method: cli.method,
        body,
        header: header_fields(cli.headers),
    };

    let client = reqwest::Client::new();
    let res = client.post(&cli.relay).json(&descriptor).send().await?;

    let status = res.status();
    let text = res.text().await?;
    if status.is_success() {
        println!("Status: {}", status);
    } else {
        eprintln!("Status: {}", status);
    }
    println!("{}", text);
    Ok(())
}

mod api;

use anyhow::Context;
use clap::Parser;
use oracle_core::Oracle;
use oracle_data::load_assets;
use serde::Serialize;
use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;
use std::thread;
use tiny_http::{Header, Method, Response, Server, StatusCode};

const MAX_BODY_BYTES: u64 = 64 * 1024;

#[derive(Parser, Debug)]
#[clap(name = "oracle-web", about = "Local HTTP front for the card-reading engine")]
struct Args {
    #[clap(long, default_value = "0.0.0.0:7878")]
    bind: String,

    #[clap(long, default_value = "assets", help = "Directory holding cards.json and oracle.json")]
    assets: PathBuf,

    #[clap(long, short, default_value = "info")]
    log_level: String,

    #[clap(long, help = "Fixed shuffle seed, overrides oracle.json")]
    seed: Option<u64>,

    #[clap(long, default_value_t = 4)]
    workers: usize,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&args.log_level))
        .init();

    let assets = load_assets(&args.assets)
        .with_context(|| format!("load assets from {}", args.assets.display()))?;
    let mut config = assets.config;
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    let oracle = Arc::new(Oracle::new(assets.catalog, config));

    let server = Server::http(&args.bind)
        .map_err(|err| anyhow::anyhow!("bind {}: {err}", args.bind))?;
    let server = Arc::new(server);
    log::info!("oracle web server on http://{}", args.bind);

    let workers: Vec<_> = (0..args.workers.max(1))
        .map(|_| {
            let server = Arc::clone(&server);
            let oracle = Arc::clone(&oracle);
            thread::spawn(move || {
                for request in server.incoming_requests() {
                    if let Err(err) = handle_request(request, &oracle) {
                        log::warn!("request error: {err:#}");
                    }
                }
            })
        })
        .collect();
    for worker in workers {
        if worker.join().is_err() {
            log::error!("worker thread panicked");
        }
    }
    Ok(())
}

#[derive(Serialize)]
struct Health {
    ok: bool,
    cards: usize,
    open_sessions: usize,
}

fn handle_request(mut request: tiny_http::Request, oracle: &Oracle) -> anyhow::Result<()> {
    let url = request.url().to_string();
    log::debug!("{} {}", request.method(), url);
    match (request.method(), url.as_str()) {
        (&Method::Get, "/api/health") => {
            let health = Health {
                ok: true,
                cards: oracle.catalog().len(),
                open_sessions: oracle.open_sessions(),
            };
            respond_json(request, 200, &health)?;
        }
        (&Method::Post, "/api/command") => {
            let body = read_body(&mut request)?;
            let response = api::command(oracle, &body);
            respond_json(request, response.status, &response)?;
        }
        (&Method::Post, "/api/interaction") => {
            let body = read_body(&mut request)?;
            let response = api::interaction(oracle, &body);
            respond_json(request, response.status, &response)?;
        }
        _ => {
            request.respond(Response::empty(StatusCode(404)))?;
        }
    }
    Ok(())
}

fn read_body(request: &mut tiny_http::Request) -> anyhow::Result<String> {
    let mut body = String::new();
    request
        .as_reader()
        .take(MAX_BODY_BYTES)
        .read_to_string(&mut body)
        .context("read request body")?;
    Ok(body)
}

fn respond_json<T: Serialize>(
    request: tiny_http::Request,
    status: u16,
    body: &T,
) -> anyhow::Result<()> {
    let body = serde_json::to_vec_pretty(body)?;
    let header = Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..])
        .map_err(|_| anyhow::anyhow!("invalid content-type header"))?;
    request.respond(
        Response::from_data(body)
            .with_header(header)
            .with_status_code(StatusCode(status)),
    )?;
    Ok(())
}

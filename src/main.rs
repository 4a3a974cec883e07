// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! AnyConn CLI - one-shot HTTP(S) requests from the command line

use std::env;
use std::process::ExitCode;

use anyconn::{DataType, Method, RequestOptions, ResponseData};

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("anyconn=info")),
        )
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return ExitCode::from(1);
    }

    let method = match args[1].as_str() {
        "get" => Method::Get,
        "post" => Method::Post,
        "--help" | "-h" | "help" => {
            print_usage();
            return ExitCode::SUCCESS;
        }
        "--version" | "-v" | "version" => {
            println!("anyconn {}", anyconn::VERSION);
            return ExitCode::SUCCESS;
        }
        cmd => {
            eprintln!("Unknown command: {}", cmd);
            print_usage();
            return ExitCode::from(1);
        }
    };

    let options = match parse_options(method, &args[2..]) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::from(1);
        }
    };

    send(options).await
}

fn print_usage() {
    println!(
        r#"AnyConn - Minimal HTTP(S) Request Helper

USAGE:
    anyconn <COMMAND> <url> [OPTIONS]

COMMANDS:
    get <url>       Send a GET request, data fields become query parameters
    post <url>      Send a POST request, data fields become the body
    help            Show this help message
    version         Show version information

OPTIONS:
    -H <name:value>   Add a request header
    -d <key=value>    Add a data field
    --type <t>        POST encoding: json (default), form, formdata
    --raw <body>      Send <body> verbatim (POST only)

EXAMPLES:
    anyconn get https://example.com/search -d q=rust -d page=2
    anyconn post https://example.com/login --type form -d user=alice
    anyconn post http://localhost:8080/upload --raw 'a,b' -H content-type:text/csv
"#
    );
}

fn parse_options(method: Method, args: &[String]) -> Result<RequestOptions, String> {
    let mut iter = args.iter();
    let url = iter
        .next()
        .ok_or_else(|| "Missing <url>".to_string())?;
    let mut options = RequestOptions::new(url.as_str()).method(method);

    while let Some(flag) = iter.next() {
        let value = iter
            .next()
            .ok_or_else(|| format!("Missing value for {}", flag))?;
        options = match flag.as_str() {
            "-H" | "--header" => {
                let (name, value) = value
                    .split_once(':')
                    .ok_or_else(|| format!("Header must be name:value, got {}", value))?;
                options.header(name.trim(), value.trim())
            }
            "-d" | "--data" => {
                let (key, value) = value
                    .split_once('=')
                    .ok_or_else(|| format!("Data must be key=value, got {}", value))?;
                options.field(key, value)
            }
            "--type" => options.data_type(value.parse::<DataType>()?),
            "--raw" => options.raw(value.as_str()),
            other => return Err(format!("Unknown option: {}", other)),
        };
    }

    Ok(options)
}

async fn send(options: RequestOptions) -> ExitCode {
    match anyconn::request(options).await {
        Ok(response) => {
            println!("Status: {}", response.status_code);
            for (name, value) in response.headers.iter() {
                println!("{}: {}", name, value.to_str().unwrap_or("<binary>"));
            }
            println!();

            match &response.data {
                ResponseData::Json(value) => match serde_json::to_string_pretty(value) {
                    Ok(pretty) => println!("{}", pretty),
                    Err(_) => println!("{}", value),
                },
                ResponseData::Text(text) => println!("{}", text),
                ResponseData::Binary(bytes) => println!("<{} bytes of binary data>", bytes.len()),
            }

            if response.is_success() {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(2)
            }
        }
        Err(e) => {
            eprintln!("Request failed: {}", e);
            ExitCode::from(1)
        }
    }
}

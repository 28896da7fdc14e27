/*
 * SPDX-FileCopyrightText: Copyright (c) 2026 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
 * SPDX-License-Identifier: LicenseRef-NvidiaProprietary
 *
 * NVIDIA CORPORATION, its affiliates and licensors retain all intellectual
 * property and proprietary rights in and to this material, related
 * documentation and any modifications thereto. Any use, reproduction,
 * disclosure or distribution of this material and related documentation
 * without an express license agreement from NVIDIA CORPORATION or
 * its affiliates is strictly prohibited.
 */
use clap::Parser;
use rpc::admin_cli::OutputFormat;
use tracing::metadata::LevelFilter;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

use crate::cfg::dispatch::Dispatch;
use crate::cfg::runtime::RuntimeContext;

mod cfg;
mod database;
mod field;
mod generate_shell_complete;
mod index;
mod operation;
mod output;

#[tokio::main]
async fn main() -> Result<(), eyre::Report> {
    color_eyre::install()?;
    let options = Options::parse();

    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy()
        .add_directive("tower=warn".parse()?)
        .add_directive("rustls=warn".parse()?)
        .add_directive("hyper=warn".parse()?)
        .add_directive("h2=warn".parse()?)
        .add_directive("tonic=warn".parse()?)
        .add_directive("rpc=info".parse()?);
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(env_filter)
        .try_init()?;

    if let Command::GenerateShellComplete(cmd) = &options.command {
        generate_shell_complete::generate(cmd.shell);
        return Ok(());
    }

    let ctx = RuntimeContext::build(&options)?;
    match options.command {
        Command::Index(cmd) => cmd.dispatch(ctx).await?,
        Command::Field(cmd) => cmd.dispatch(ctx).await?,
        Command::Database(cmd) => cmd.dispatch(ctx).await?,
        Command::Operation(cmd) => cmd.dispatch(ctx).await?,
        Command::GenerateShellComplete(_) => unreachable!("handled above"),
    }

    Ok(())
}

#[derive(Parser)]
#[clap(
    name = "firestore-admin-cli",
    about = "Operator tooling for the Cloud Firestore Admin API"
)]
pub struct Options {
    #[clap(
        short = 'u',
        long,
        env = "FIRESTORE_ADMIN_ENDPOINT",
        default_value = "https://firestore.googleapis.com",
        help = "URL of the Firestore Admin API front end"
    )]
    pub endpoint: String,

    #[clap(
        long,
        env = "GOOGLE_ACCESS_TOKEN",
        hide_env_values = true,
        help = "OAuth2 access token attached to every call"
    )]
    pub access_token: Option<String>,

    #[clap(
        long,
        help = "File holding the access token; re-read on every call so an external refresher can rotate it"
    )]
    pub token_file: Option<String>,

    #[clap(short = 'r', long, help = "Path to the root CA certificate bundle")]
    pub root_ca_path: Option<String>,

    #[clap(short = 'c', long, help = "Path to the client certificate for mutual TLS")]
    pub client_cert_path: Option<String>,

    #[clap(short = 'k', long, help = "Path to the client key for mutual TLS")]
    pub client_key_path: Option<String>,

    #[clap(
        long,
        help = "Mutual TLS endpoint; overrides the endpoint host and requires a client certificate"
    )]
    pub mtls_endpoint: Option<String>,

    #[clap(long, default_value_t = 3, help = "Connection attempts before giving up")]
    pub connect_retries: u32,

    #[clap(
        long,
        default_value_t = 2,
        help = "Seconds to wait between connection attempts"
    )]
    pub connect_retry_interval_secs: u64,

    #[clap(
        short = 'o',
        long,
        value_enum,
        default_value_t,
        help = "How list results are rendered"
    )]
    pub format: OutputFormat,

    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Parser)]
pub enum Command {
    #[clap(subcommand, about = "Manage composite indexes")]
    Index(index::args::Cmd),
    #[clap(subcommand, about = "Manage single-field index configuration")]
    Field(field::args::Cmd),
    #[clap(subcommand, about = "Export and import documents")]
    Database(database::args::Cmd),
    #[clap(subcommand, about = "Inspect and manage long-running operations")]
    Operation(operation::args::Cmd),
    #[clap(about = "Generate a shell completion script on stdout")]
    GenerateShellComplete(generate_shell_complete::GenerateShellComplete),
}

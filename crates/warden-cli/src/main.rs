#![forbid(unsafe_code)]

//! Warden CLI
//!
//! Inspect a grants file and ask whether it would allow setting a user's
//! password. Nothing is ever written: the password gate runs in front of a
//! dry-run service that only logs what it would have done.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use clap::{Parser, Subcommand};
use warden_acl::{Authorizer, AuthorizerConfig, RequestContext};
use warden_core::Id;
use warden_passwords::{AuthorizedPasswordService, PasswordService};

/// Warden Command-Line Interface
#[derive(Parser, Debug)]
#[command(name = "warden")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check whether the grants allow setting a user's password
    Check {
        /// Grants file (TOML)
        #[arg(short, long, env = "WARDEN_GRANTS")]
        grants: PathBuf,
        /// Target user id (16 hex digits)
        #[arg(short, long)]
        user: Id,
    },
    /// List the permissions in a grants file
    Permissions {
        /// Grants file (TOML)
        #[arg(short, long, env = "WARDEN_GRANTS")]
        grants: PathBuf,
    },
}

/// Password service that records nothing and only logs.
struct DryRunPasswordService;

#[async_trait]
impl PasswordService for DryRunPasswordService {
    async fn set_password(
        &self,
        ctx: &RequestContext,
        user_id: Id,
        _password: &str,
    ) -> warden_core::Result<()> {
        tracing::info!(request = %ctx.request_id(), user = %user_id, "dry run: password not changed");
        Ok(())
    }
}

fn load_context(grants: &Path) -> warden_core::Result<RequestContext> {
    let authorizer = AuthorizerConfig::load(grants)?.into_authorizer()?;
    Ok(RequestContext::background().with_authorizer(Arc::new(authorizer)))
}

async fn check(grants: &Path, user: Id) -> warden_core::Result<()> {
    let ctx = load_context(grants)?;
    let service = AuthorizedPasswordService::new(Arc::new(DryRunPasswordService));
    service.set_password(&ctx, user, "").await
}

fn permissions(grants: &Path) -> warden_core::Result<Vec<String>> {
    let authorizer = AuthorizerConfig::load(grants)?.into_authorizer()?;
    Ok(authorizer
        .permissions()
        .iter()
        .map(ToString::to_string)
        .collect())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .init();

    match args.command {
        Command::Check { grants, user } => {
            check(&grants, user).await?;
            println!("allowed");
        }
        Command::Permissions { grants } => {
            for permission in permissions(&grants)? {
                println!("{permission}");
            }
        }
    }

    Ok(())
}

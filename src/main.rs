//! LJMDI - association portal session CLI
//!
//! Log in, inspect the session and check what the current role may open.

#![allow(missing_docs)]

use anyhow::Context;
use clap::{Parser, Subcommand};
use ljmdi_portal::navigation::menu_for;
use ljmdi_portal::utils::logging::init_logging;
use ljmdi_portal::{Feature, GuardDecision, Portal, PortalConfig, PortalError, build_info};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "ljmdi", version, about = "LJMDI association portal session client")]
struct Cli {
    /// YAML configuration file; environment variables are used when omitted
    #[arg(short, long, env = "LJMDI_CONFIG", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Authenticate and persist the session
    Login {
        #[arg(short, long)]
        email: String,
        #[arg(short, long, env = "LJMDI_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Clear the persisted session
    Logout,
    /// Show the current user and role
    Whoami,
    /// Check whether the current role holds a permission key
    Can { permission: String },
    /// Run the route guard for a path and print its decision
    Open { route: String },
    /// List the menu entries visible to the current role
    Menu,
    /// Fetch the records of a feature area
    Fetch { feature: Feature },
    /// Print build information
    Version,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match e.downcast_ref::<PortalError>() {
                Some(portal_error) => eprintln!("Error: {}", portal_error.user_message()),
                None => eprintln!("Error: {:#}", e),
            }
            ExitCode::FAILURE
        }
    }
}

async fn load_config(path: Option<&PathBuf>) -> anyhow::Result<PortalConfig> {
    let config = match path {
        Some(path) => PortalConfig::from_file(path)
            .await
            .with_context(|| format!("loading {}", path.display()))?,
        None => PortalConfig::from_env()?,
    };
    Ok(config)
}

fn print_version() {
    let info = build_info();
    println!(
        "ljmdi {} ({}, built {}, {})",
        info.version, info.git_hash, info.build_time, info.rust_version
    );
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    // No configuration or session needed
    if let Command::Version = cli.command {
        print_version();
        return Ok(());
    }

    let config = load_config(cli.config.as_ref()).await?;
    init_logging(&config.logging)?;
    let portal = Portal::from_config(config).await?;

    match cli.command {
        Command::Login { email, password } => {
            let session = portal.auth.login(&email, &password).await?;
            match session.user() {
                Some(user) => println!("Connecté: {} ({})", user.display_name(), user.role),
                None => println!("Connecté"),
            }
        }
        Command::Logout => {
            portal.auth.logout().await;
            println!("Déconnecté");
        }
        Command::Whoami => match portal.auth.current_user() {
            Some(user) => {
                println!("{} ({})", user.display_name(), user.role);
                let table = portal.auth.permissions();
                println!("{}", table.sorted_permissions(&user.role).join(", "));
            }
            None => println!("Non connecté"),
        },
        Command::Can { permission } => {
            let allowed = portal.auth.has_permission(&permission);
            println!("{}", if allowed { "oui" } else { "non" });
            if !allowed {
                return Err(PortalError::forbidden(permission).into());
            }
        }
        Command::Open { route } => {
            let decision = portal.open(&route);
            println!("{}", decision);
            if let GuardDecision::RedirectToLogin(_) = decision {
                return Err(PortalError::unauthenticated(route).into());
            }
        }
        Command::Menu => {
            if !portal.auth.is_authenticated() {
                return Err(PortalError::unauthenticated("menu").into());
            }
            for entry in menu_for(&portal.auth) {
                println!("{:<16} {}", entry.label, entry.path);
            }
        }
        Command::Fetch { feature } => {
            let records = portal.client.fetch_feature(feature).await?;
            println!("{}", serde_json::to_string_pretty(&records)?);
        }
        Command::Version => print_version(),
    }

    Ok(())
}

//! `aura-ctl` binary - CLI over the Aura control-plane client.
//!
//! Each subcommand maps 1:1 to a client operation. Credentials and tenant id
//! are taken from flags or the `AURA_CLIENT_ID` / `AURA_CLIENT_SECRET` /
//! `AURA_TENANT_ID` environment variables; they are never compiled in.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use aura_domain::{AuraResult, Credentials, InstanceSpec};
use aura_infrastructure::{AuraClient, ClientConfig, FileTokenStore};

#[derive(Parser)]
#[command(name = "aura-ctl", version, about = "Manage Aura database instances")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Authenticate against the control-plane API and store the token
    Authenticate {
        /// API client id
        #[arg(long, env = "AURA_CLIENT_ID")]
        client_id: String,
        /// API client secret
        #[arg(long, env = "AURA_CLIENT_SECRET", hide_env_values = true)]
        client_secret: String,
    },
    /// Create a database instance
    Create {
        /// Instance name
        #[arg(long)]
        name: String,
        /// Database version
        #[arg(long)]
        version: String,
        /// Cloud region
        #[arg(long)]
        region: String,
        /// Memory size, e.g. 2GB
        #[arg(long)]
        memory: String,
        /// Instance tier, e.g. professional-db
        #[arg(long = "type")]
        instance_type: String,
        /// Tenant id
        #[arg(long, env = "AURA_TENANT_ID")]
        tenant_id: String,
        /// Cloud provider, e.g. gcp
        #[arg(long)]
        cloud_provider: String,
    },
    /// Resize an instance
    Resize {
        /// Instance id
        #[arg(long)]
        instance_id: String,
        /// New memory size, e.g. 16GB
        #[arg(long)]
        new_memory: String,
    },
    /// Take an on-demand snapshot of an instance
    CreateSnapshot {
        /// Instance id
        #[arg(long)]
        instance_id: String,
    },
    /// Restore an instance from a snapshot
    RestoreSnapshot {
        /// Instance id
        #[arg(long)]
        instance_id: String,
        /// Snapshot id
        #[arg(long)]
        snapshot_id: String,
    },
    /// Delete an instance
    Delete {
        /// Instance id
        #[arg(long)]
        instance_id: String,
    },
    /// List instances
    List,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> AuraResult<()> {
    let config = ClientConfig::from_env()?;
    let tokens = FileTokenStore::from_default_location()?;
    let client = AuraClient::new(config, tokens)?;

    match cli.command {
        Command::Authenticate {
            client_id,
            client_secret,
        } => {
            client
                .authenticate(&Credentials::new(client_id, client_secret))
                .await?;
            println!("Successfully authenticated.");
        }
        Command::Create {
            name,
            version,
            region,
            memory,
            instance_type,
            tenant_id,
            cloud_provider,
        } => {
            let spec = InstanceSpec {
                name,
                version,
                region,
                memory,
                instance_type,
                tenant_id,
                cloud_provider,
            };
            print_payload(&client.create_instance(&spec).await?);
        }
        Command::Resize {
            instance_id,
            new_memory,
        } => {
            print_payload(&client.resize_instance(&instance_id, &new_memory).await?);
        }
        Command::CreateSnapshot { instance_id } => {
            print_payload(&client.create_snapshot(&instance_id).await?);
        }
        Command::RestoreSnapshot {
            instance_id,
            snapshot_id,
        } => {
            print_payload(&client.restore_snapshot(&instance_id, &snapshot_id).await?);
        }
        Command::Delete { instance_id } => {
            print_payload(&client.delete_instance(&instance_id).await?);
        }
        Command::List => {
            print_payload(&client.list_instances().await?);
        }
    }

    Ok(())
}

/// Relays the provider's payload to stdout, pretty-printed.
fn print_payload(payload: &serde_json::Value) {
    let rendered =
        serde_json::to_string_pretty(payload).unwrap_or_else(|_| payload.to_string());
    println!("{rendered}");
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn create_parses_type_flag() {
        let cli = Cli::try_parse_from([
            "aura-ctl",
            "create",
            "--name",
            "t1",
            "--version",
            "5",
            "--region",
            "us-central1",
            "--memory",
            "2GB",
            "--type",
            "professional-db",
            "--tenant-id",
            "T",
            "--cloud-provider",
            "gcp",
        ])
        .unwrap();

        match cli.command {
            Command::Create { instance_type, .. } => {
                assert_eq!(instance_type, "professional-db");
            }
            _ => panic!("expected create subcommand"),
        }
    }

    #[test]
    fn resize_requires_both_flags() {
        let result = Cli::try_parse_from(["aura-ctl", "resize", "--instance-id", "i1"]);
        assert!(result.is_err());
    }
}

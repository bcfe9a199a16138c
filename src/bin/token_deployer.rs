// EKOPIA token deployer CLI
//
// Command-line driver for the deployment orchestrator, using a JSON-RPC
// endpoint and a local signing key in place of a browser-injected wallet.

use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use ethers::providers::{Http, Middleware, Provider};

use ekopia_forge::network::NetworkPolicy;
use ekopia_forge::orchestrator::DeployOrchestrator;
use ekopia_forge::provider::RpcWalletProvider;
use ekopia_forge::token::{DeploymentRequest, TokenMetadata, TokenParams};
use ekopia_forge::PageContext;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Deploy a token to the EKOPIA network
    Deploy {
        /// RPC URL for the chain
        #[clap(long, short)]
        rpc_url: String,

        /// Hex-encoded private key of the deploying account
        #[clap(long, short)]
        private_key: String,

        /// Token name
        #[clap(long)]
        name: String,

        /// Token symbol
        #[clap(long)]
        symbol: String,

        /// Initial supply in whole tokens (the contract scales by 10^18)
        #[clap(long)]
        supply: String,

        /// Path to a file containing the contract creation bytecode
        #[clap(long)]
        bytecode_file: String,

        /// Logo URL for the explorer token info
        #[clap(long)]
        logo_url: Option<String>,

        /// Project website
        #[clap(long)]
        website: Option<String>,

        /// Twitter handle or URL
        #[clap(long)]
        twitter: Option<String>,

        /// Telegram group URL
        #[clap(long)]
        telegram: Option<String>,
    },

    /// Check whether an RPC endpoint is on the EKOPIA network
    CheckNetwork {
        /// RPC URL for the chain
        #[clap(long, short)]
        rpc_url: String,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let cli = Cli::parse();
    let rt = tokio::runtime::Runtime::new()?;

    match cli.command {
        Commands::Deploy {
            rpc_url,
            private_key,
            name,
            symbol,
            supply,
            bytecode_file,
            logo_url,
            website,
            twitter,
            telegram,
        } => {
            let bytecode = std::fs::read_to_string(&bytecode_file)?;
            rt.block_on(async {
                let provider = RpcWalletProvider::connect(&rpc_url, &private_key).await?;
                let policy = NetworkPolicy::ekopia();
                let mut orchestrator = DeployOrchestrator::new(
                    Some(Arc::new(provider)),
                    policy.clone(),
                    PageContext::new("cli", "", ""),
                );

                orchestrator.connect().await?;
                let session = &orchestrator.state().session;
                println!(
                    "Connected as {} ({})",
                    session.short_address().unwrap_or_default(),
                    policy.network_label(session.chain_id().unwrap_or_default()),
                );

                let request = DeploymentRequest {
                    params: TokenParams {
                        name,
                        symbol,
                        initial_supply: supply,
                    },
                    bytecode,
                    metadata: TokenMetadata {
                        logo_url,
                        website,
                        twitter,
                        telegram,
                    },
                };
                let result = orchestrator.deploy(request).await?;

                println!("Token deployed at {}", result.checksummed_address());
                println!(
                    "Explorer: {}",
                    policy.explorer_address_url(&result.contract_address)
                );
                if !result.metadata.is_empty() {
                    println!();
                    println!("Off-chain identity (register via the explorer's Update Token Info):");
                    if let Some(logo_url) = &result.metadata.logo_url {
                        println!("  logo:     {logo_url}");
                    }
                    if let Some(website) = &result.metadata.website {
                        println!("  website:  {website}");
                    }
                    if let Some(twitter) = &result.metadata.twitter {
                        println!("  twitter:  {twitter}");
                    }
                    if let Some(telegram) = &result.metadata.telegram {
                        println!("  telegram: {telegram}");
                    }
                }
                Ok(())
            })
        }

        Commands::CheckNetwork { rpc_url } => rt.block_on(async {
            let provider = Provider::<Http>::try_from(rpc_url.as_str())?;
            let chain_id = provider.get_chainid().await?.as_u64();
            let policy = NetworkPolicy::ekopia();
            println!("Chain ID: {chain_id} ({})", policy.network_label(chain_id));
            if policy.is_target_network(chain_id) {
                println!("Endpoint is on the EKOPIA network.");
            } else {
                println!(
                    "Endpoint is NOT on the EKOPIA network (expected chain {}).",
                    policy.target_chain_id()
                );
            }
            Ok(())
        }),
    }
}

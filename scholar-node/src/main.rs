use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use tracing_subscriber::{filter::EnvFilter, FmtSubscriber};

use scholar_chainparams::{Base58Type, NetworkProfile, ParameterRegistry};

const APP_NAME: &str = "scholarship";
const CONFIG_NAME: &str = "node-config";

/// Scholarship Node
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Network to use (main, test, regtest)
    #[arg(long)]
    network: Option<String>,

    /// Use the public test network
    #[arg(long, conflicts_with_all = ["network", "regtest"])]
    testnet: bool,

    /// Use the local regression test network
    #[arg(long, conflicts_with = "network")]
    regtest: bool,

    /// Set logging level (trace, debug, info, warn, error)
    #[arg(short, long)]
    log_level: Option<String>,

    /// Ignore the configuration file
    #[arg(long)]
    no_config: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    /// Log a summary of the selected network
    Show,
    /// Print the selected network's parameters as JSON
    Dump,
    /// Print the selected network's serialized genesis block
    Genesis,
    /// List every supported network
    Networks,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct NodeConfig {
    network: String,
    log_level: String,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            network: "main".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl NodeConfig {
    /// Applies command-line overrides on top of the file configuration.
    fn merge(mut self, args: &Args) -> Self {
        if args.testnet {
            self.network = "test".to_string();
        } else if args.regtest {
            self.network = "regtest".to_string();
        } else if let Some(network) = &args.network {
            self.network = network.clone();
        }
        if let Some(level) = &args.log_level {
            self.log_level = level.clone();
        }
        self
    }
}

/// Reads the configuration file. The error is returned so it can be logged
/// once the subscriber is installed.
fn load_config(args: &Args) -> std::result::Result<NodeConfig, confy::ConfyError> {
    if args.no_config {
        return Ok(NodeConfig::default());
    }
    confy::load(APP_NAME, Some(CONFIG_NAME))
}

fn init_logging(level: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .with_context(|| format!("invalid log level {level}"))?;

    // try_init also routes `log` records from the library crates
    FmtSubscriber::builder()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| anyhow!(e))
}

fn show(profile: &NetworkProfile) {
    let consensus = profile.consensus();
    let prefixes = profile.base58_prefixes();

    info!("Network: {}", profile.network());
    info!("Message start: {}", hex::encode(profile.message_start()));
    info!("Default port: {}", profile.default_port());
    info!("Genesis: {}", profile.genesis().hash());
    info!("Genesis merkle root: {}", profile.genesis().merkle_root());
    info!(
        "Block spacing: {}s, retarget every {} blocks",
        consensus.target_spacing,
        consensus.difficulty_adjustment_interval()
    );
    info!("Last PoW block: {}", consensus.last_pow_block);
    info!("Coinbase maturity: {}", consensus.coinbase_maturity);
    info!(
        "Address prefix: {}, secret key prefix: {}",
        hex::encode(prefixes.get(Base58Type::PubkeyAddress)),
        hex::encode(prefixes.get(Base58Type::SecretKey))
    );
    for seed in profile.dns_seeds() {
        info!("DNS seed: {} ({})", seed.host, seed.name);
    }
    if let Some(height) = profile.checkpoints().last_height() {
        info!("Last checkpoint height: {}", height);
    }
}

fn run(command: Command, registry: &ParameterRegistry, profile: &NetworkProfile) -> Result<()> {
    match command {
        Command::Show => show(profile),
        Command::Dump => {
            let json = serde_json::to_string_pretty(profile).context("failed to encode profile")?;
            println!("{json}");
        }
        Command::Genesis => {
            let genesis = profile.genesis();
            println!("hash        {}", genesis.hash());
            println!("merkle root {}", genesis.merkle_root());
            println!("block       {}", hex::encode(genesis.to_bytes()));
        }
        Command::Networks => {
            for candidate in registry.profiles() {
                let marker = if candidate.network() == profile.network() { "*" } else { " " };
                println!(
                    "{marker} {:<8} magic={} port={}",
                    candidate.network(),
                    hex::encode(candidate.message_start()),
                    candidate.default_port()
                );
            }
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    let loaded = load_config(&args);
    let cfg = loaded.as_ref().cloned().unwrap_or_default().merge(&args);

    init_logging(&cfg.log_level)?;

    if let Err(e) = &loaded {
        warn!("Failed to load configuration: {}. Using default.", e);
    }

    if !args.no_config {
        match confy::get_configuration_file_path(APP_NAME, Some(CONFIG_NAME)) {
            Ok(path) => info!("Configuration file path: {:?}", path),
            Err(e) => warn!("Could not resolve configuration file path: {}", e),
        }
    }

    let registry =
        ParameterRegistry::try_new().context("chain parameters failed their integrity check")?;
    let profile = registry.select_network(&cfg.network)?;
    info!("Using {} network", profile.network());

    run(args.command.unwrap_or(Command::Show), &registry, profile)
}

//! Coldcard import CLI commands.

use std::fs::File;
use std::path::{Path, PathBuf};

use clap::{Args, Subcommand, ValueEnum};
use colored::Colorize;
use warden_core::{Keystore, Network, ScriptType, Wallet};
use warden_import::{ColdcardSinglesig, KeystoreFileImport, SinglesigWalletImport};

/// Coldcard export operations.
#[derive(Args)]
pub struct ColdcardCommand {
    #[command(subcommand)]
    command: ColdcardSubcommand,
}

#[derive(Subcommand)]
enum ColdcardSubcommand {
    /// Import a single-signature wallet from a dump summary file.
    Wallet {
        /// Path to the file written by Advanced > Dump Summary.
        file: PathBuf,

        /// Script type to import.
        #[arg(short, long, value_enum, default_value = "native-segwit")]
        script_type: CliScriptType,

        /// Match testnet derivation paths instead of mainnet.
        #[arg(short, long)]
        testnet: bool,

        /// Print the wallet as JSON.
        #[arg(long)]
        json: bool,

        /// Number of receive addresses to show.
        #[arg(short, long, default_value = "0")]
        addresses: u32,
    },

    /// Import only the keystore from a dump summary file.
    Keystore {
        /// Path to the file written by Advanced > Dump Summary.
        file: PathBuf,

        /// Script type to import.
        #[arg(short, long, value_enum, default_value = "native-segwit")]
        script_type: CliScriptType,

        /// Match testnet derivation paths instead of mainnet.
        #[arg(short, long)]
        testnet: bool,

        /// Print the keystore as JSON.
        #[arg(long)]
        json: bool,

        /// Show the extended public key as a QR code.
        #[arg(long)]
        qr: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum CliScriptType {
    /// Legacy P2PKH (m/44')
    Legacy,
    /// Nested `SegWit` P2SH-P2WPKH (m/49')
    NestedSegwit,
    /// Native `SegWit` P2WPKH (m/84')
    NativeSegwit,
}

impl From<CliScriptType> for ScriptType {
    fn from(val: CliScriptType) -> Self {
        match val {
            CliScriptType::Legacy => Self::P2pkh,
            CliScriptType::NestedSegwit => Self::P2shP2wpkh,
            CliScriptType::NativeSegwit => Self::P2wpkh,
        }
    }
}

impl ColdcardCommand {
    /// Execute the Coldcard command.
    pub fn execute(self) -> Result<(), Box<dyn std::error::Error>> {
        match self.command {
            ColdcardSubcommand::Wallet {
                file,
                script_type,
                testnet,
                json,
                addresses,
            } => {
                let importer = importer(testnet);
                let mut reader = open(&importer, &file)?;
                let wallet =
                    importer.import_wallet(script_type.into(), &mut reader, None)?;
                if json {
                    println!("{}", serde_json::to_string_pretty(&wallet)?);
                } else {
                    print_wallet(&wallet, addresses)?;
                }
            }
            ColdcardSubcommand::Keystore {
                file,
                script_type,
                testnet,
                json,
                qr,
            } => {
                let importer = importer(testnet);
                let script_type = ScriptType::from(script_type);
                let mut reader = open(&importer, &file)?;
                let keystore = importer.get_keystore(script_type, &mut reader, None)?;
                if json {
                    println!("{}", serde_json::to_string_pretty(&keystore)?);
                } else {
                    print_keystore(&keystore, script_type, importer.network());
                }
                if qr {
                    let encoded = keystore.extended_public_key.to_original_string();
                    crate::qr::print_to_terminal(&encoded);
                }
            }
        }
        Ok(())
    }
}

const fn importer(testnet: bool) -> ColdcardSinglesig {
    let network = if testnet {
        Network::Testnet
    } else {
        Network::Mainnet
    };
    ColdcardSinglesig::new(network)
}

fn open(importer: &ColdcardSinglesig, path: &Path) -> Result<File, Box<dyn std::error::Error>> {
    if importer.is_encrypted(path) {
        return Err(format!("{} is encrypted", path.display()).into());
    }
    Ok(File::open(path)?)
}

#[rustfmt::skip]
fn print_wallet(wallet: &Wallet, addresses: u32) -> Result<(), Box<dyn std::error::Error>> {
    println!();
    println!("      {}         {}", "Name".cyan().bold(), wallet.name.as_deref().unwrap_or("(unnamed)"));
    println!("      {}      {}", "Network".cyan().bold(), wallet.network);
    println!("      {}  {} ({})", "Script Type".cyan().bold(), wallet.script_type, wallet.script_type.description());
    if let Some(policy) = &wallet.default_policy {
        println!("      {}       {}", "Policy".cyan().bold(), policy.name);
        println!("      {}   {}", "Descriptor".cyan().bold(), policy.miniscript.dimmed());
    }
    println!();

    let Some(keystore) = wallet.keystores.first() else {
        println!("      {}", format!("No keystore found for {}", wallet.default_derivation_path()).yellow());
        println!();
        return Ok(());
    };
    print_keystore_fields(keystore, wallet.script_type, wallet.network);

    if addresses > 0 {
        println!();
        for index in 0..addresses {
            let address = keystore.extended_public_key.derive_receive_address(wallet.script_type, index)?;
            println!("      {}    {}", format!("0/{index}").dimmed(), address.to_string().green());
        }
    }
    println!();

    Ok(())
}

fn print_keystore(keystore: &Keystore, script_type: ScriptType, network: Network) {
    println!();
    print_keystore_fields(keystore, script_type, network);
    println!();
}

#[rustfmt::skip]
fn print_keystore_fields(keystore: &Keystore, script_type: ScriptType, network: Network) {
    let derivation = &keystore.key_derivation;
    let header = network.slip132_header(script_type);

    println!("      {}     {}", "Keystore".cyan().bold(), keystore.label);
    println!("      {}       {} ({})", "Source".cyan().bold(), keystore.source, keystore.wallet_model);
    println!("      {}  {}", "Fingerprint".cyan().bold(), derivation.master_fingerprint.as_deref().unwrap_or("(unknown)"));
    println!("      {}         {}", "Path".cyan().bold(), derivation.derivation_path);
    println!("      {}         {}", header.prefix().cyan().bold(), keystore.extended_public_key.to_string_with_header(header).green());
}

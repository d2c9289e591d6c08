mod render;

use anyhow::Context as _;
use apl_associated_token_account_sdk::{
    get_associated_token_address_and_bump_seed, AssociatedTokenAccountInstruction,
};
use apl_instruction_codec::{COption, InstructionData};
use apl_token_sdk::instruction::{
    AmountToUiAmount, AuthorityType, InitializeMint2, MintTo, SetAuthority, TokenInstruction,
    Transfer, TransferChecked, UiAmountToAmount,
};
use arch_token_metadata_sdk::{
    find_attributes_pda, find_metadata_pda,
    instruction::{CreateMetadata, TransferAuthority},
    MetadataInstruction,
};
use clap::{Parser, Subcommand, ValueEnum};
use serde_json::json;
use solana_pubkey::Pubkey;
use tracing::{debug, Level};

fn parse_hex32(s: &str) -> anyhow::Result<Pubkey> {
    let bytes = hex::decode(s).with_context(|| format!("invalid hex key: {}", s))?;
    Ok(apl_instruction_codec::pack::pubkey_from_slice(&bytes)?)
}

fn print_json(value: &serde_json::Value) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ProgramArg {
    /// APL Token program
    Token,
    /// Arch Token Metadata program
    Metadata,
    /// Associated Token Account program
    Ata,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum AuthorityTypeArg {
    MintTokens,
    FreezeAccount,
    AccountOwner,
    CloseAccount,
}

impl From<AuthorityTypeArg> for AuthorityType {
    fn from(arg: AuthorityTypeArg) -> Self {
        match arg {
            AuthorityTypeArg::MintTokens => AuthorityType::MintTokens,
            AuthorityTypeArg::FreezeAccount => AuthorityType::FreezeAccount,
            AuthorityTypeArg::AccountOwner => AuthorityType::AccountOwner,
            AuthorityTypeArg::CloseAccount => AuthorityType::CloseAccount,
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "apl-ix",
    version,
    about = "APL instruction data codec",
    long_about = "Decode and encode instruction data for the APL Token, Arch Token Metadata \
                  and Associated Token Account programs.\n\
                  JSON is always printed to stdout; logs/status to stderr."
)]
struct Cli {
    /// Log level for stderr output
    #[arg(default_value = "warn", env = "APL_IX_LOG", global = true, long)]
    log_level: Level,

    /// APL Token program id (hex32)
    #[arg(env = "APL_TOKEN_PROGRAM_ID", global = true, long)]
    token_program_id: Option<String>,

    /// Metadata program id (hex32)
    #[arg(env = "ARCH_TOKEN_METADATA_PROGRAM_ID", global = true, long)]
    metadata_program_id: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    fn token_program_id(&self) -> anyhow::Result<Pubkey> {
        match self.token_program_id.as_deref() {
            Some(s) => parse_hex32(s).context("--token-program-id"),
            None => Ok(apl_token_sdk::id()),
        }
    }

    fn metadata_program_id(&self) -> anyhow::Result<Pubkey> {
        match self.metadata_program_id.as_deref() {
            Some(s) => parse_hex32(s).context("--metadata-program-id"),
            None => Ok(arch_token_metadata_sdk::id()),
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Decode hex instruction data into JSON
    #[command(alias = "d", about = "Decode hex instruction data into JSON")]
    Decode {
        /// Program the data belongs to
        #[arg(long, value_enum, default_value_t = ProgramArg::Token)]
        program: ProgramArg,
        /// Instruction data as hex
        data: String,
    },
    #[command(subcommand, alias = "e", about = "Encode an instruction's data as hex")]
    Encode(EncodeCmd),
    /// Derive the metadata and attributes PDAs of a mint
    #[command(about = "Derive the metadata and attributes PDAs of a mint")]
    Pda {
        #[arg(long)]
        mint: String,
    },
    /// Derive the associated token account address of an owner and mint
    #[command(about = "Derive an associated token account address")]
    Ata {
        #[arg(long)]
        owner: String,
        #[arg(long)]
        mint: String,
    },
}

#[derive(Subcommand, Debug)]
enum EncodeCmd {
    /// Token Transfer
    Transfer {
        #[arg(long)]
        amount: u64,
    },
    /// Token TransferChecked
    TransferChecked {
        #[arg(long)]
        amount: u64,
        #[arg(long)]
        decimals: u8,
    },
    /// Token MintTo
    MintTo {
        #[arg(long)]
        amount: u64,
    },
    /// Token InitializeMint2
    InitializeMint2 {
        #[arg(long, default_value_t = 9)]
        decimals: u8,
        /// Mint authority hex32
        #[arg(long)]
        mint_authority: String,
        /// Optional freeze authority hex32
        #[arg(long)]
        freeze_authority: Option<String>,
    },
    /// Token SetAuthority
    SetAuthority {
        #[arg(long, value_enum)]
        authority_type: AuthorityTypeArg,
        /// New authority hex32; omit to clear
        #[arg(long)]
        new_authority: Option<String>,
    },
    /// Token AmountToUiAmount
    AmountToUiAmount {
        #[arg(long)]
        amount: u64,
    },
    /// Token UiAmountToAmount
    UiAmountToAmount {
        #[arg(long)]
        ui_amount: String,
    },
    /// Metadata CreateMetadata
    CreateMetadata {
        #[arg(long)]
        name: String,
        #[arg(long)]
        symbol: String,
        #[arg(long)]
        image: String,
        #[arg(long)]
        description: String,
        #[arg(long, default_value_t = false)]
        immutable: bool,
    },
    /// Metadata TransferAuthority
    TransferAuthority {
        /// New authority hex32
        #[arg(long)]
        new_authority: String,
    },
}

impl EncodeCmd {
    fn pack(&self) -> anyhow::Result<Vec<u8>> {
        let data = match self {
            EncodeCmd::Transfer { amount } => Transfer { amount: *amount }.pack(),
            EncodeCmd::TransferChecked { amount, decimals } => TransferChecked {
                amount: *amount,
                decimals: *decimals,
            }
            .pack(),
            EncodeCmd::MintTo { amount } => MintTo { amount: *amount }.pack(),
            EncodeCmd::InitializeMint2 {
                decimals,
                mint_authority,
                freeze_authority,
            } => {
                let freeze_authority = match freeze_authority.as_deref() {
                    Some(s) => COption::Some(parse_hex32(s)?),
                    None => COption::None,
                };
                InitializeMint2 {
                    decimals: *decimals,
                    mint_authority: parse_hex32(mint_authority)?,
                    freeze_authority,
                }
                .pack()
            }
            EncodeCmd::SetAuthority {
                authority_type,
                new_authority,
            } => {
                let new_authority = match new_authority.as_deref() {
                    Some(s) => COption::Some(parse_hex32(s)?),
                    None => COption::None,
                };
                SetAuthority {
                    authority_type: (*authority_type).into(),
                    new_authority,
                }
                .pack()
            }
            EncodeCmd::AmountToUiAmount { amount } => AmountToUiAmount { amount: *amount }.pack(),
            EncodeCmd::UiAmountToAmount { ui_amount } => UiAmountToAmount {
                ui_amount: ui_amount.clone(),
            }
            .pack(),
            EncodeCmd::CreateMetadata {
                name,
                symbol,
                image,
                description,
                immutable,
            } => CreateMetadata {
                name: name.clone(),
                symbol: symbol.clone(),
                image: image.clone(),
                description: description.clone(),
                immutable: *immutable,
            }
            .pack(),
            EncodeCmd::TransferAuthority { new_authority } => TransferAuthority {
                new_authority: parse_hex32(new_authority)?,
            }
            .pack(),
        };
        Ok(data)
    }
}

fn decode(program: ProgramArg, data: &str) -> anyhow::Result<serde_json::Value> {
    let bytes = hex::decode(data.trim()).context("instruction data is not hex")?;
    debug!(len = bytes.len(), ?program, "decoding instruction data");

    let value = match program {
        ProgramArg::Token => {
            let ix = TokenInstruction::unpack(&bytes).context("decode token instruction")?;
            render::token(&ix)
        }
        ProgramArg::Metadata => {
            let ix = MetadataInstruction::unpack(&bytes).context("decode metadata instruction")?;
            render::metadata(&ix)
        }
        ProgramArg::Ata => {
            let ix = AssociatedTokenAccountInstruction::unpack(&bytes)
                .context("decode associated token account instruction")?;
            json!({
                "program": "apl-associated-token-account",
                "tag": ix as u8,
                "instruction": format!("{:?}", ix),
                "fields": {},
            })
        }
    };
    Ok(value)
}

fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv().ok();
    let args = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .with_writer(std::io::stderr)
        .init();

    match &args.command {
        Commands::Decode { program, data } => print_json(&decode(*program, data)?)?,
        Commands::Encode(cmd) => {
            let data = cmd.pack()?;
            print_json(&json!({
                "data": hex::encode(&data),
                "len": data.len(),
            }))?;
        }
        Commands::Pda { mint } => {
            let program_id = args.metadata_program_id()?;
            let mint_pk = parse_hex32(mint).context("--mint")?;
            let (metadata, metadata_bump) = find_metadata_pda(&program_id, &mint_pk);
            let (attributes, attributes_bump) = find_attributes_pda(&program_id, &mint_pk);
            print_json(&json!({
                "program_id": hex::encode(program_id),
                "mint": hex::encode(mint_pk),
                "metadata": { "address": hex::encode(metadata), "bump": metadata_bump },
                "attributes": { "address": hex::encode(attributes), "bump": attributes_bump },
            }))?;
        }
        Commands::Ata { owner, mint } => {
            let token_program_id = args.token_program_id()?;
            let owner_pk = parse_hex32(owner).context("--owner")?;
            let mint_pk = parse_hex32(mint).context("--mint")?;
            let (address, bump) = get_associated_token_address_and_bump_seed(
                &owner_pk,
                &mint_pk,
                &apl_associated_token_account_sdk::id(),
                &token_program_id,
            );
            print_json(&json!({
                "owner": hex::encode(owner_pk),
                "mint": hex::encode(mint_pk),
                "token_program_id": hex::encode(token_program_id),
                "address": hex::encode(address),
                "bump": bump,
            }))?;
        }
    }
    Ok(())
}

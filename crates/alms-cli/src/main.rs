//! Alms CLI - Command line interface for the donation record store

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use alms_store::{sample_donations, Donation, RecordStore, RedbLedger, Result};

#[derive(Parser)]
#[command(name = "alms")]
#[command(about = "Donation record keeping over a ledger file", long_about = None)]
struct Cli {
    /// Ledger database file
    #[arg(long, default_value = "alms.redb")]
    ledger: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Seed the ledger with the sample donation set
    Init,
    /// Record a new donation
    Create {
        id: String,
        donation_type: String,
        size: u64,
        donor: String,
        appraised_value: u64,
    },
    /// Print a donation as JSON
    Read {
        id: String,
        /// Pretty print the output
        #[arg(short, long)]
        pretty: bool,
    },
    /// Replace every field of an existing donation
    Update {
        id: String,
        donation_type: String,
        size: u64,
        donor: String,
        appraised_value: u64,
    },
    /// Remove a donation
    Delete { id: String },
    /// Check whether a donation exists
    Exists { id: String },
    /// Reassign a donation to a new donor, printing the previous one
    Transfer { id: String, new_donor: String },
    /// Print all donations as a JSON array
    List {
        /// Pretty print the output
        #[arg(short, long)]
        pretty: bool,
    },
    /// Interactive prompt
    Repl,
}

fn main() {
    let cli = Cli::parse();

    let ledger = match RedbLedger::open(&cli.ledger) {
        Ok(ledger) => ledger,
        Err(e) => {
            eprintln!("Error opening ledger {}: {}", cli.ledger.display(), e);
            std::process::exit(1);
        }
    };
    let mut store = RecordStore::new(ledger);

    let result = match cli.command {
        Commands::Init => cmd_init(&mut store),
        Commands::Create {
            id,
            donation_type,
            size,
            donor,
            appraised_value,
        } => cmd_create(&mut store, id, donation_type, size, donor, appraised_value),
        Commands::Read { id, pretty } => cmd_read(&store, &id, pretty),
        Commands::Update {
            id,
            donation_type,
            size,
            donor,
            appraised_value,
        } => cmd_update(&mut store, id, donation_type, size, donor, appraised_value),
        Commands::Delete { id } => cmd_delete(&mut store, &id),
        Commands::Exists { id } => cmd_exists(&store, &id),
        Commands::Transfer { id, new_donor } => cmd_transfer(&mut store, &id, new_donor),
        Commands::List { pretty } => cmd_list(&store, pretty),
        Commands::Repl => {
            cmd_repl(&mut store);
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn cmd_init(store: &mut RecordStore<RedbLedger>) -> Result<()> {
    let seeds = sample_donations();
    store.seed(&seeds)?;
    println!("Seeded {} donations", seeds.len());
    Ok(())
}

fn cmd_create(
    store: &mut RecordStore<RedbLedger>,
    id: String,
    donation_type: String,
    size: u64,
    donor: String,
    appraised_value: u64,
) -> Result<()> {
    store.create(Donation::new(id, donation_type, size, donor, appraised_value))?;
    println!("Created");
    Ok(())
}

fn cmd_read(store: &RecordStore<RedbLedger>, id: &str, pretty: bool) -> Result<()> {
    let record = store.read(id)?;
    print_json(&record, pretty)?;
    Ok(())
}

fn cmd_update(
    store: &mut RecordStore<RedbLedger>,
    id: String,
    donation_type: String,
    size: u64,
    donor: String,
    appraised_value: u64,
) -> Result<()> {
    store.update(Donation::new(id, donation_type, size, donor, appraised_value))?;
    println!("Updated");
    Ok(())
}

fn cmd_delete(store: &mut RecordStore<RedbLedger>, id: &str) -> Result<()> {
    store.delete(id)?;
    println!("Deleted");
    Ok(())
}

fn cmd_exists(store: &RecordStore<RedbLedger>, id: &str) -> Result<()> {
    println!("{}", store.exists(id)?);
    Ok(())
}

fn cmd_transfer(store: &mut RecordStore<RedbLedger>, id: &str, new_donor: String) -> Result<()> {
    let old_donor = store.transfer(id, new_donor)?;
    println!("{}", old_donor);
    Ok(())
}

fn cmd_list(store: &RecordStore<RedbLedger>, pretty: bool) -> Result<()> {
    let records = store.get_all()?;
    print_json(&records, pretty)?;
    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", json);
    Ok(())
}

fn cmd_repl(store: &mut RecordStore<RedbLedger>) {
    use rustyline::DefaultEditor;

    println!("Alms REPL v0.1.0");
    println!("Type help for commands, quit to exit");
    println!();

    let mut rl = DefaultEditor::new().expect("Failed to create REPL");

    loop {
        let readline = rl.readline("alms> ");
        match readline {
            Ok(line) => {
                let _ = rl.add_history_entry(&line);
                let words: Vec<&str> = line.split_whitespace().collect();
                if words.is_empty() {
                    continue;
                }

                match run_repl_command(store, &words) {
                    ReplOutcome::Continue => {}
                    ReplOutcome::Quit => break,
                }
            }
            Err(_) => break,
        }
    }

    println!("Goodbye!");
}

enum ReplOutcome {
    Continue,
    Quit,
}

fn run_repl_command(store: &mut RecordStore<RedbLedger>, words: &[&str]) -> ReplOutcome {
    let result = match (words[0], &words[1..]) {
        ("quit", _) | ("exit", _) => return ReplOutcome::Quit,
        ("help", _) => {
            println!("Commands:");
            println!("  init                                      - seed the sample donations");
            println!("  create <id> <type> <size> <donor> <value> - record a new donation");
            println!("  read <id>                                 - print a donation");
            println!("  update <id> <type> <size> <donor> <value> - replace a donation");
            println!("  delete <id>                               - remove a donation");
            println!("  exists <id>                               - check for a donation");
            println!("  transfer <id> <new-donor>                 - reassign a donation");
            println!("  list                                      - print all donations");
            println!("  quit                                      - exit");
            Ok(())
        }
        ("init", []) => cmd_init(store),
        ("create", [id, donation_type, size, donor, value]) => {
            match (size.parse(), value.parse()) {
                (Ok(size), Ok(value)) => cmd_create(
                    store,
                    id.to_string(),
                    donation_type.to_string(),
                    size,
                    donor.to_string(),
                    value,
                ),
                _ => {
                    eprintln!("size and value must be non-negative integers");
                    Ok(())
                }
            }
        }
        ("read", [id]) => cmd_read(store, id, true),
        ("update", [id, donation_type, size, donor, value]) => {
            match (size.parse(), value.parse()) {
                (Ok(size), Ok(value)) => cmd_update(
                    store,
                    id.to_string(),
                    donation_type.to_string(),
                    size,
                    donor.to_string(),
                    value,
                ),
                _ => {
                    eprintln!("size and value must be non-negative integers");
                    Ok(())
                }
            }
        }
        ("delete", [id]) => cmd_delete(store, id),
        ("exists", [id]) => cmd_exists(store, id),
        ("transfer", [id, new_donor]) => cmd_transfer(store, id, new_donor.to_string()),
        ("list", []) => cmd_list(store, true),
        _ => {
            println!("Unknown command. Type help for commands.");
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
    }
    ReplOutcome::Continue
}

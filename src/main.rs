mod analytics;
mod db;
mod error;
mod models;
mod operations;
mod store;

use analytics::TypeFilter;
use clap::Parser;
use operations::add::parse_draft;
use operations::charts::run_charts;
use operations::export::export_to_csv;
use operations::list;
use operations::remove::parse_transaction_id;
use std::io;
use store::TransactionStore;

#[derive(Parser)]
#[command(name = "cashflow", about = "Personal income/expense tracker")]
struct Cli {
    /// Path to the SQLite database file
    #[arg(long, default_value = "cashflow.db")]
    db: String,
}

pub enum UserCommands {
    Add,
    Edit,
    Remove,
    List,
    Summary,
    Monthly,
    Analysis,
    Charts,
    Export,
    Exit,
    Unknown,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    println!("Welcome to the cashflow tracker!");
    let conn = db::connection::establish_connection(&cli.db)
        .expect("Failed to open the database");
    let mut store = TransactionStore::open(conn).expect("Failed to load transactions");

    loop {
        println!(
            "Please enter a command (add, edit, remove, list, summary, monthly, analysis, charts, export, exit):"
        );

        let input = match read_user_input() {
            Ok(cmd) => cmd,
            Err(e) => {
                println!("Error reading input: {}", e);
                continue;
            }
        };
        let (command_word, args) = match input.split_once(char::is_whitespace) {
            Some((head, rest)) => (head, rest.trim()),
            None => (input.as_str(), ""),
        };
        if command_word.is_empty() {
            continue;
        }

        match check_for_command(command_word) {
            UserCommands::Add => {
                println!(
                    "Add command selected. Please enter transaction details in the format:\ndate(YYYY-MM-DD), type(income/expense), category, amount[, notes]"
                );
                let details = match read_user_input() {
                    Ok(details) => details,
                    Err(e) => {
                        println!("Error reading input: {}", e);
                        continue;
                    }
                };
                match parse_draft(&details).and_then(|draft| store.add(draft)) {
                    Ok(transaction) => {
                        println!("Transaksi berhasil ditambahkan ({})", transaction.id);
                    }
                    Err(e) => {
                        println!("Error adding transaction: {}", e);
                        println!("Please try again.");
                    }
                }
            }
            UserCommands::Edit => {
                println!("Edit command selected. Provide the transaction ID to edit:");
                let id_input = match read_user_input() {
                    Ok(details) => details,
                    Err(e) => {
                        println!("Error reading input: {}", e);
                        continue;
                    }
                };
                let id = match parse_transaction_id(&id_input) {
                    Ok(id) => id,
                    Err(e) => {
                        println!("Error: {}", e);
                        continue;
                    }
                };
                println!(
                    "Enter the replacement details in the format:\ndate(YYYY-MM-DD), type(income/expense), category, amount[, notes]"
                );
                let details = match read_user_input() {
                    Ok(details) => details,
                    Err(e) => {
                        println!("Error reading input: {}", e);
                        continue;
                    }
                };
                match parse_draft(&details).and_then(|draft| store.update(id, draft)) {
                    Ok(_) => println!("Transaksi berhasil diupdate"),
                    Err(e) => println!("Error updating transaction: {}", e),
                }
            }
            UserCommands::Remove => {
                println!("Remove command selected. Provide the transaction ID to remove:");
                let id_input = match read_user_input() {
                    Ok(details) => details,
                    Err(e) => {
                        println!("Error reading input: {}", e);
                        continue;
                    }
                };
                let remove_result =
                    parse_transaction_id(&id_input).and_then(|id| store.remove(id));
                match remove_result {
                    Ok(_) => println!("Transaksi berhasil dihapus"),
                    Err(e) => println!("Error: {}", e),
                }
            }
            UserCommands::List => {
                let (filter_word, query) = match args.split_once(char::is_whitespace) {
                    Some((head, rest)) => (head, rest.trim()),
                    None => (args, ""),
                };
                let filter = if filter_word.is_empty() {
                    TypeFilter::All
                } else {
                    match filter_word.parse::<TypeFilter>() {
                        Ok(filter) => filter,
                        Err(e) => {
                            println!("Error: {}", e);
                            continue;
                        }
                    }
                };
                let filtered = analytics::filter_and_search(store.transactions(), filter, query);
                list::print_transactions(&filtered);
            }
            UserCommands::Summary => {
                let totals = analytics::totals(store.transactions());
                list::print_totals(&totals);
                let today = chrono::Local::now().date_naive();
                let month = analytics::current_month_totals(store.transactions(), today);
                println!(
                    "Bulan ini: masuk {}  keluar {}",
                    list::format_currency(month.income),
                    list::format_currency(month.expense)
                );
            }
            UserCommands::Monthly => {
                let aggregates = analytics::monthly_aggregates(store.transactions());
                let months: Vec<_> = aggregates
                    .iter()
                    .map(|(month, totals)| (month.clone(), *totals))
                    .collect();
                list::print_monthly(&months);
            }
            UserCommands::Analysis => {
                let transactions = store.transactions();
                let averages = analytics::averages_per_month(transactions);
                let top = analytics::top_categories(transactions, 5);
                let largest = analytics::largest_transactions(transactions, 5);
                list::print_analysis(&averages, &top, &largest);
            }
            UserCommands::Charts => {
                if let Err(e) = run_charts(store.transactions()) {
                    println!("Error rendering charts: {}", e);
                }
            }
            UserCommands::Export => {
                let path = if args.is_empty() {
                    format!(
                        "cashflow_{}.csv",
                        chrono::Local::now().date_naive().format("%Y-%m-%d")
                    )
                } else {
                    args.to_string()
                };
                match export_to_csv(&path, store.transactions()) {
                    Ok(count) => println!("Berhasil mengekspor {} transaksi ke {}", count, path),
                    Err(e) => println!("Error exporting transactions: {}", e),
                }
            }
            UserCommands::Exit => {
                println!("Exiting the application.");
                break;
            }
            UserCommands::Unknown => {
                println!("No valid command found. Please try again.");
            }
        }
    }
}

fn read_user_input() -> Result<String, String> {
    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|_| "Failed to read line".to_string())?;
    Ok(input.trim().to_string())
}

fn check_for_command(input: &str) -> UserCommands {
    match input {
        "add" => UserCommands::Add,
        "edit" => UserCommands::Edit,
        "remove" => UserCommands::Remove,
        "list" => UserCommands::List,
        "summary" => UserCommands::Summary,
        "monthly" => UserCommands::Monthly,
        "analysis" => UserCommands::Analysis,
        "charts" => UserCommands::Charts,
        "export" => UserCommands::Export,
        "exit" => UserCommands::Exit,
        _ => UserCommands::Unknown,
    }
}

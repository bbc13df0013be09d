use anyhow::{bail, Result};
use enchant_codex::{
    advisor::{Advisor, ChatTurn},
    catalog::{enchantment_by_id, Record, CATEGORIES},
    cli::{Cli, Commands},
    query::{evaluate, FilterOptions},
    ui::run_browser,
};
use std::io::{self, BufRead, Write};

fn main() -> Result<()> {
    let cli = Cli::parse_args();

    match cli.command {
        Commands::Browse => run_browser()?,

        Commands::Search {
            query,
            category,
            item,
            treasure_only,
            no_curses,
        } => {
            let filters = FilterOptions {
                item_type: item,
                treasure_only,
                no_curses,
            };

            let results = evaluate(category, &query, &filters);

            if query.is_empty() {
                println!("{} ({} records)\n", category, results.len());
            } else {
                println!("Global search \"{}\" ({} records)\n", query, results.len());
            }

            for record in &results {
                print_record(record);
            }
        }

        Commands::Advice {
            enchant_id,
            context,
        } => {
            let Some(enchant) = enchantment_by_id(&enchant_id) else {
                bail!("Unknown enchantment id: {}", enchant_id);
            };

            let mut advisor = Advisor::from_env();
            let advice = advisor.advice(enchant, &context);

            println!("{} (max level {})\n", enchant.name, enchant.max_level);
            println!("Advice:  {}", advice.advice);
            println!("Synergy: {}", advice.synergy);
        }

        Commands::Build { item } => {
            let mut advisor = Advisor::from_env();
            println!("{}", advisor.build_strategy(&item));
        }

        Commands::Chat => run_chat()?,

        Commands::Categories => {
            println!("Available categories:\n");
            for info in CATEGORIES {
                println!("  {} {}", info.glyph, info.label);
            }
        }
    }

    Ok(())
}

fn print_record(record: &Record) {
    match record {
        Record::Enchant(e) => {
            let mut badges = String::new();
            if e.is_treasure {
                badges.push_str(" [Treasure]");
            }
            if e.is_curse {
                badges.push_str(" [Curse]");
            }
            println!(
                "  [ENCHANT] {:<22} max {}  {}{}",
                format!("{} ({})", e.name, e.id),
                e.max_level,
                e.items.join(", "),
                badges
            );
        }
        Record::Combo(c) => {
            println!(
                "  [COMBO]   {:<22} {}  {}",
                format!("{} ({})", c.name, c.id),
                c.item,
                c.enchants.join(" + ")
            );
        }
        Record::Table(t) => {
            println!(
                "  [TABLE]   {:<22} table max {}  weight {:>2}  {}  {}",
                format!("{} ({})", t.name, t.id),
                t.max_table_level,
                t.weight,
                t.rarity,
                t.items.join(", ")
            );
        }
    }
}

/// Interactive stdin/stdout chat loop. History lives for the session only.
fn run_chat() -> Result<()> {
    let mut advisor = Advisor::from_env();
    if !advisor.has_credentials() {
        eprintln!("Note: GEMINI_API_KEY is not set; replies will be fallback text.");
    }

    let mut history: Vec<ChatTurn> = Vec::new();
    let stdin = io::stdin();

    println!("Mystic Guide at your service. Empty line or \"exit\" to leave.\n");

    loop {
        print!("you> ");
        io::stdout().flush()?;

        let Some(line) = stdin.lock().lines().next() else {
            break;
        };
        let message = line?.trim().to_string();
        if message.is_empty() || message == "exit" {
            break;
        }

        let reply = advisor.chat(&history, &message);
        println!("guide> {}\n", reply);

        history.push(ChatTurn::user(message));
        history.push(ChatTurn::model(reply));
    }

    Ok(())
}

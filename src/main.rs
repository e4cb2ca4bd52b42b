use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use twopiece::build_info;
use twopiece::constants::MAX_TABLE_LEVEL;
use twopiece::energy::EnergyType;
use twopiece::professions::Profession;
use twopiece::progression::{experience_for_level, LevelBand};
use twopiece::rankings::{most_wanted, strongest};
use twopiece::World;

const DEFAULT_ENERGY_LEVELS: u32 = 10;

fn print_help() {
    println!("Two Piece ON - rule tables\n");
    println!("Usage: twopiece [command]\n");
    println!("Commands:");
    println!("  exp                  Experience required per level");
    println!("  energy [max_level]   Energy maxima per skill level (default 10)");
    println!("  professions          Profession bonuses and weekly tasks");
    println!("  rankings             Most wanted and strongest characters");
    println!("  --version            Show version information");
    println!("  --help               Show this help message");
}

/// Groups digits with dots, as the game displays amounts.
fn grouped(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

fn print_exp_table() {
    let mut band = None;
    for level in 1..=MAX_TABLE_LEVEL {
        let current = LevelBand::for_level(level);
        if band != Some(current) {
            println!(
                "\n{} (+{}% por nível)",
                current.label(),
                grouped(current.nominal_step())
            );
            band = Some(current);
        }
        if let Some(exp) = experience_for_level(level) {
            println!("  Nível {:>2}  {:>10}%", level, grouped(exp));
        }
    }
}

fn print_energy_table(max_level: u32) {
    print!("{:>6}", "Nível");
    for energy in EnergyType::all() {
        print!("  {:>12}", energy.name());
    }
    println!();

    for level in 0..=max_level {
        print!("{:>6}", level);
        for energy in EnergyType::all() {
            print!("  {:>11}%", grouped(energy.max_for_level(level)));
        }
        println!();
    }
}

fn print_professions() {
    for profession in Profession::all() {
        let info = profession.info();
        println!("{} {} ({})", info.icon, profession.name(), info.bonus_type);
        for (level, bonus) in info.bonuses {
            println!("  LvL {}: {}", level, bonus);
        }
        println!("  Tarefa semanal: {}\n", info.task);
    }
}

fn print_rankings() -> twopiece::Result<()> {
    let world = World::seeded()?;
    let characters = world.characters.all();

    println!("Mais Procurados");
    for entry in most_wanted(characters) {
        println!(
            "  {:>2}. {:<20} {:>16}¥",
            entry.position,
            entry.character.name,
            grouped(entry.score)
        );
    }

    println!("\nMais Fortes");
    for entry in strongest(characters) {
        println!(
            "  {:>2}. {:<20} {:>12}%",
            entry.position,
            entry.character.name,
            grouped(entry.score)
        );
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    let command = args.get(1).map(String::as_str).unwrap_or("--help");

    match command {
        "exp" => print_exp_table(),
        "energy" => {
            let max_level = match args.get(2).map(|s| s.parse::<u32>()) {
                None => DEFAULT_ENERGY_LEVELS,
                Some(Ok(level)) => level,
                Some(Err(_)) => {
                    eprintln!("Invalid level: {}", args[2]);
                    return ExitCode::FAILURE;
                }
            };
            print_energy_table(max_level);
        }
        "professions" => print_professions(),
        "rankings" => {
            if let Err(e) = print_rankings() {
                tracing::error!(error = %e, "failed to load seed data");
                return ExitCode::FAILURE;
            }
        }
        "--version" | "-v" => println!("twopiece {}", build_info::version_string()),
        "--help" | "-h" => print_help(),
        other => {
            eprintln!("Unknown command: {}", other);
            eprintln!("Run 'twopiece --help' for usage.");
            return ExitCode::FAILURE;
        }
    }
    ExitCode::SUCCESS
}

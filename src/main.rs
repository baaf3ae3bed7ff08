use capsule::application::{
    archive, delete_letter, edit_letter, init, list_letters, read_letter, short_id, write_letter,
    ConfigService, ListFilter, ListScope,
};
use capsule::cli::{output, Cli, Commands};
use capsule::domain::{DeliveryRef, LetterDraft, LetterPatch, Mood};
use capsule::error::CapsuleError;
use capsule::infrastructure::{Config, JsonFileStorage, Vault};
use capsule::store::LetterStore;
use chrono::{NaiveDate, Utc};
use clap::Parser;
use std::str::FromStr;

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), CapsuleError> {
    let user_override = cli.user;

    match cli.command {
        Some(Commands::Init { path }) => init::init(&path, user_override),

        Some(Commands::Moods) => {
            print!("{}", output::format_mood_list());
            Ok(())
        }

        Some(Commands::Config { key, value, list }) => {
            let vault = Vault::discover()?;
            let service = ConfigService::new(vault);

            if list {
                let config = service.list()?;
                println!("user = {}", config.user);
                println!("editor = {}", config.editor);
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                    Ok(())
                } else {
                    let val = service.get(&k)?;
                    println!("{}", val);
                    Ok(())
                }
            } else {
                println!("Usage: capsule config [--list | <key> [<value>]]");
                println!("Valid keys: user, editor, created");
                Ok(())
            }
        }

        Some(Commands::Write {
            title,
            mood,
            deliver,
            message,
            image,
            caption,
        }) => {
            let (vault, config) = open_capsule()?;
            let user = acting_user(user_override, &config);
            let mut store = open_store(&vault)?;
            let now = Utc::now();

            let mood = parse_mood(&mood)?;
            let scheduled_date = DeliveryRef::parse(&deliver)?.resolve(now)?;
            let content = match message {
                Some(message) => message,
                None => write_letter::compose_body(&vault, config.get_editor())?,
            };

            let draft = LetterDraft {
                title,
                content,
                mood,
                scheduled_date,
                user_id: user,
                image,
                caption,
            };
            let id = write_letter::write_letter(&mut store, draft, now)?;

            println!(
                "Sealed letter {} for delivery on {}",
                short_id(id),
                scheduled_date.format("%d-%m-%Y")
            );
            if now >= scheduled_date {
                println!("It is already deliverable.");
            }
            Ok(())
        }

        Some(Commands::List {
            delivered,
            locked,
            mood,
            from,
            to,
            limit,
        }) => {
            let (vault, config) = open_capsule()?;
            let user = acting_user(user_override, &config);
            let store = open_store(&vault)?;
            let now = Utc::now();

            let scope = if delivered {
                ListScope::Delivered
            } else if locked {
                ListScope::Locked
            } else {
                ListScope::All
            };
            let filter = ListFilter {
                scope,
                mood: mood.as_deref().map(parse_mood).transpose()?,
                from: from.as_deref().map(parse_day).transpose()?,
                to: to.as_deref().map(parse_day).transpose()?,
                limit,
            };

            let letters = list_letters::list_letters(&store, &user, &filter, now);
            print!("{}", ensure_newline(output::format_letter_list(&letters, now)));
            Ok(())
        }

        Some(Commands::Read { id }) => {
            let (vault, config) = open_capsule()?;
            let user = acting_user(user_override, &config);
            let store = open_store(&vault)?;

            let letter = read_letter::read_letter(&store, &user, &id, Utc::now())?;
            print!("{}", output::format_letter(letter));
            Ok(())
        }

        Some(Commands::Edit {
            id,
            title,
            mood,
            deliver,
            message,
            image,
            caption,
        }) => {
            let (vault, config) = open_capsule()?;
            let user = acting_user(user_override, &config);
            let mut store = open_store(&vault)?;
            let now = Utc::now();

            let patch = LetterPatch {
                title,
                content: message,
                mood: mood.as_deref().map(parse_mood).transpose()?,
                scheduled_date: deliver
                    .as_deref()
                    .map(|reference| DeliveryRef::parse(reference)?.resolve(now))
                    .transpose()?,
                image,
                caption,
                ..Default::default()
            };

            let edited = edit_letter::edit_letter(&mut store, &user, &id, patch, now)?;
            println!("Updated letter {}", short_id(edited));
            Ok(())
        }

        Some(Commands::Delete { id }) => {
            let (vault, config) = open_capsule()?;
            let user = acting_user(user_override, &config);
            let mut store = open_store(&vault)?;

            match delete_letter::delete_letter(&mut store, &user, &id)? {
                Some(deleted) => println!("Deleted letter {}", short_id(deleted)),
                None => println!("No letter found matching '{}'; nothing deleted", id),
            }
            Ok(())
        }

        Some(Commands::Search { query }) => {
            let (vault, config) = open_capsule()?;
            let user = acting_user(user_override, &config);
            let store = open_store(&vault)?;
            let now = Utc::now();

            let letters = list_letters::search_letters(&store, &user, &query);
            print!("{}", ensure_newline(output::format_letter_list(&letters, now)));
            Ok(())
        }

        Some(Commands::Stats) => {
            let (vault, config) = open_capsule()?;
            let user = acting_user(user_override, &config);
            let store = open_store(&vault)?;

            let stats = store.stats(&user, Utc::now());
            print!("{}", ensure_newline(output::format_stats(&user, &stats)));
            Ok(())
        }

        Some(Commands::Export { out }) => {
            let (vault, config) = open_capsule()?;
            let user = acting_user(user_override, &config);
            let store = open_store(&vault)?;

            match out {
                Some(path) => {
                    let written = archive::export_to_file(&store, &user, &path)?;
                    println!("Exported {} letters to {}", written, path.display());
                }
                None => println!("{}", archive::export_letters(&store, &user)?),
            }
            Ok(())
        }

        Some(Commands::Import { file }) => {
            let (vault, _config) = open_capsule()?;
            let mut store = open_store(&vault)?;

            let outcome = archive::import_from_file(&mut store, &file)?;
            println!(
                "Imported {} letters ({} skipped)",
                outcome.imported, outcome.skipped
            );
            Ok(())
        }

        Some(Commands::Clear { force }) => {
            let (vault, _config) = open_capsule()?;
            let mut store = open_store(&vault)?;

            if !force {
                println!(
                    "This would delete all {} letters, for every user.",
                    store.len()
                );
                println!("Re-run with --force to confirm.");
                return Ok(());
            }

            let removed = archive::clear_all(&mut store)?;
            println!("Deleted {} letters", removed);
            Ok(())
        }

        None => {
            println!("capsule - letters to your future self");
            println!("Use --help for usage information");
            Ok(())
        }
    }
}

fn open_capsule() -> Result<(Vault, Config), CapsuleError> {
    let vault = Vault::discover()?;
    let config = vault.load_config()?;
    Ok((vault, config))
}

fn open_store(vault: &Vault) -> Result<LetterStore, CapsuleError> {
    LetterStore::open(Box::new(JsonFileStorage::new(vault.letters_path())))
}

fn acting_user(user_override: Option<String>, config: &Config) -> String {
    user_override.unwrap_or_else(|| config.user.clone())
}

fn parse_mood(value: &str) -> Result<Mood, CapsuleError> {
    Mood::from_str(value).map_err(|_| CapsuleError::InvalidMood(value.to_string()))
}

fn parse_day(value: &str) -> Result<NaiveDate, CapsuleError> {
    NaiveDate::parse_from_str(value, "%d-%m-%Y").map_err(|_| {
        CapsuleError::Config(format!(
            "Invalid date format: '{}'. Expected DD-MM-YYYY",
            value
        ))
    })
}

fn ensure_newline(mut text: String) -> String {
    if !text.ends_with('\n') {
        text.push('\n');
    }
    text
}

use chrono::Local;
use clap::Parser;
use daybook::application::{init, open_dir, open_entry, EditEntryService, EditOutcome, SendEntryService};
use daybook::cli::{Cli, Commands};
use daybook::domain::Entry;
use daybook::error::Result;
use daybook::infrastructure::{
    default_opener, resolve_editor, Config, EntryStore, SmtpMailer, SystemLauncher,
};

fn main() {
    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(1);
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let today = Local::now().date_naive();

    match cli.command {
        Commands::Day => {
            let config = Config::load()?;
            let entry = Entry::new(today);
            println!("Today is Day {}", entry.day_number(config.start_date()));
            Ok(())
        }
        Commands::Read { date } => {
            let config = Config::load()?;
            let store = EntryStore::from_config(&config);
            let entry = Entry::resolve(date.as_deref(), today)?;

            println!("{}", store.read(&entry)?);
            Ok(())
        }
        Commands::Edit { date, editor } => {
            let config = Config::load()?;
            let store = EntryStore::from_config(&config);
            let entry = Entry::resolve(date.as_deref(), today)?;

            edit_interactively(&store, &config, &entry, editor.as_deref())
        }
        Commands::OpenEntry { date } => {
            let config = Config::load()?;
            let store = EntryStore::from_config(&config);
            let entry = Entry::resolve(date.as_deref(), today)?;

            open_entry(&store, &SystemLauncher, &entry, default_opener())?;
            Ok(())
        }
        Commands::OpenDir => {
            let config = Config::load()?;
            let store = EntryStore::from_config(&config);

            open_dir(&store, &SystemLauncher, default_opener())?;
            Ok(())
        }
        Commands::Journal { text } => {
            let config = Config::load()?;
            let store = EntryStore::from_config(&config);
            let entry = Entry::new(today);

            match text {
                Some(text) => {
                    let path = store.append(&entry, &text)?;
                    println!("Journal entry added to {}", path.display());
                    Ok(())
                }
                None => edit_interactively(&store, &config, &entry, None),
            }
        }
        Commands::SendJournal { date } => {
            let config = Config::load()?;
            let store = EntryStore::from_config(&config);
            let entry = Entry::resolve(date.as_deref(), today)?;

            let mailer = SmtpMailer::from_config(&config);
            let service = SendEntryService::new(&store, &mailer);
            let to = service.execute(&config, &entry)?;

            println!("Email sent to {}", to.join(", "));
            Ok(())
        }
        Commands::Init { start_date } => {
            let start = match start_date {
                Some(input) => Entry::parse(&input)?.date(),
                None => today,
            };

            init::init(&Config::default_path(), start)
        }
    }
}

/// Run the scratch-file editor session on an entry and report the outcome
fn edit_interactively(
    store: &EntryStore,
    config: &Config,
    entry: &Entry,
    editor_flag: Option<&str>,
) -> Result<()> {
    let editor = resolve_editor(editor_flag);
    let title = entry.title(config.start_date());

    let service = EditEntryService::new(store, &SystemLauncher);
    match service.execute(entry, &editor, &title)? {
        EditOutcome::Saved(path) => println!("Journal updated: {}", path.display()),
        EditOutcome::Discarded => println!("No content saved"),
    }

    Ok(())
}

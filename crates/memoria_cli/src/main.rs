//! Memoria command-line entry point.
//!
//! # Responsibility
//! - Load the archive document, run one intent or query, print the result.
//! - Keep every rule inside `memoria_core`; this binary only wires I/O.

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command, PhraseCommand};
use memoria_core::{
    all_phrases, default_log_level, divider_index, init_logging, thought_preview, ArchiveService,
    CarouselPicker, DropPosition, ItemPatch, JsonFileStore, NewMemory, NewThought,
    PhraseRotator, Section, Widget,
};

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(log_dir) = cli.log_dir.as_ref() {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        init_logging(level, log_dir).context("failed to initialize logging")?;
    }
    log::info!(
        "event=cli_start module=cli status=ok version={}",
        memoria_core::core_version()
    );

    let store = JsonFileStore::new(cli.data.clone());
    let mut service = ArchiveService::open(store)
        .with_context(|| format!("failed to open archive `{}`", cli.data.display()))?;

    match cli.command {
        Command::List => {
            for section in service.sections() {
                print_section(&section);
            }
        }
        Command::Dump => {
            println!("{}", serde_json::to_string_pretty(service.data())?);
        }
        Command::AddMemory {
            caption,
            image_data,
            visible,
        } => {
            let id = service.add_memory(
                NewMemory {
                    image_data,
                    caption,
                },
                visible.as_deref(),
            )?;
            println!("created memory id={id}");
        }
        Command::AddThought {
            title,
            content,
            flavor,
            visible,
        } => {
            let id = service.add_thought(
                NewThought {
                    title,
                    content,
                    flavor_text: flavor,
                },
                visible.as_deref(),
            )?;
            println!("created thought id={id}");
        }
        Command::AddDivider { label } => {
            let id = service.add_divider(&label)?;
            println!("created divider id={id}");
        }
        Command::Update { id, patch } => {
            let patch: ItemPatch =
                serde_json::from_str(&patch).context("patch must be a JSON object")?;
            report(service.update_item(&id, &patch)?, "updated", &id);
        }
        Command::Resize { id, width, height } => {
            report(service.resize_widget(&id, width, height)?, "resized", &id);
        }
        Command::Toggle { id } => {
            report(service.toggle_collapsed(&id)?, "toggled", &id);
        }
        Command::Delete { id } => {
            report(service.delete_item(&id)?, "deleted", &id);
        }
        Command::Move {
            dragged,
            target,
            position,
        } => {
            let position = position
                .parse::<DropPosition>()
                .map_err(anyhow::Error::msg)?;
            let moved = service.move_item(&dragged, &target, position)?;
            report(moved, "moved", &dragged);
        }
        Command::Nav { query } => {
            let index = divider_index(&service.data().items, &query);
            println!("{} of {}", index.matched, index.total);
            for group in &index.groups {
                println!("{}", group.key);
                for divider in &group.dividers {
                    println!("  {}  [{}]", divider.label, divider.id);
                }
            }
        }
        Command::Hero => {
            let mut rng = rand::thread_rng();
            let widgets: Vec<Widget<'_>> = service.data().widgets().collect();
            let phrases = all_phrases(&service.data().custom_phrases);
            if let Some(phrase) = PhraseRotator::new().advance(&phrases, &mut rng) {
                println!("{phrase}");
            }
            match CarouselPicker::new().pick(&widgets, &mut rng) {
                Some(widget) => println!("{}", describe_widget(widget)),
                None => println!("(empty)"),
            }
        }
        Command::Phrase(PhraseCommand::List) => {
            for (index, phrase) in service.data().custom_phrases.iter().enumerate() {
                println!("{index}: {phrase}");
            }
        }
        Command::Phrase(PhraseCommand::Add { text }) => {
            service.add_phrase(&text)?;
            println!("added phrase");
        }
        Command::Phrase(PhraseCommand::Remove { index }) => {
            report(service.remove_phrase(index)?, "removed phrase", &index.to_string());
        }
    }

    Ok(())
}

fn report(changed: bool, verb: &str, id: &str) {
    if changed {
        println!("{verb} {id}");
    } else {
        println!("nothing {verb}: {id} not found");
    }
}

fn print_section(section: &Section<'_>) {
    match section.divider {
        Some(divider) => {
            let marker = if divider.collapsed { "+" } else { "-" };
            println!("{marker} {}  [{} order={}]", divider.label, divider.id, divider.order);
        }
        None => println!("~ (top)"),
    }
    if section.is_collapsed() {
        return;
    }
    for widget in &section.widgets {
        println!("    {}", describe_widget(*widget));
    }
}

fn describe_widget(widget: Widget<'_>) -> String {
    let (kind, text) = match widget {
        Widget::Memory(memory) => ("memory", memory.caption.clone()),
        Widget::Thought(thought) => {
            let preview = thought_preview(&thought.content).unwrap_or_default();
            ("thought", format!("{} {}", thought.title, preview).trim().to_string())
        }
    };
    format!(
        "{kind} [{} order={} {}] {text}",
        widget.id(),
        widget.order(),
        widget.created_at().format("%Y-%m-%d")
    )
}

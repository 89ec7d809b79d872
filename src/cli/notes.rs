use super::open_assistant;
use nova::config::NovaConfig;
use nova::NoteEntry;
use std::io::{self, Write};

/// Run the notes list command
pub fn run_list() -> Result<(), String> {
    let assistant = open_assistant(&NovaConfig::load())?;
    let notes = assistant.notes();

    if notes.is_empty() {
        println!("No notes yet. Add one with: nova ask \"remember ...\"");
        return Ok(());
    }

    for (i, note) in notes.iter().enumerate() {
        print_note(i + 1, note);
    }

    Ok(())
}

/// Run the notes clear command
pub fn run_clear(force: bool) -> Result<(), String> {
    let mut assistant = open_assistant(&NovaConfig::load())?;
    let count = assistant.notes().len();

    if count == 0 {
        println!("No notes to clear.");
        return Ok(());
    }

    if !force {
        print!("Delete {} notes? [y/N] ", count);
        io::stdout()
            .flush()
            .map_err(|e| format!("Failed to write prompt: {}", e))?;

        let mut input = String::new();
        io::stdin()
            .read_line(&mut input)
            .map_err(|e| format!("Failed to read input: {}", e))?;

        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Cancelled.");
            return Ok(());
        }
    }

    assistant.clear_notes();
    println!("Cleared {} notes.", count);

    Ok(())
}

/// Run the notes export command
pub fn run_export(format: &str) -> Result<(), String> {
    let assistant = open_assistant(&NovaConfig::load())?;
    let notes = assistant.notes();

    match format {
        "json" => {
            let json = serde_json::to_string_pretty(notes)
                .map_err(|e| format!("Failed to serialize: {}", e))?;
            println!("{}", json);
        }
        "md" => {
            for note in notes {
                println!("## {}\n", note.timestamp);
                println!("{}\n", note.content);
                println!("---\n");
            }
        }
        _ => {
            return Err(format!("Unknown format: {}", format));
        }
    }

    Ok(())
}

fn print_note(index: usize, note: &NoteEntry) {
    // Just the date and time, no offset
    let when = note.timestamp.get(..19).unwrap_or(note.timestamp.as_str()).replace('T', " ");
    println!("[{}] {}", index, when);

    let preview: String = note.content.chars().take(200).collect();
    let preview = if note.content.chars().count() > 200 {
        format!("{}...", preview)
    } else {
        preview
    };
    println!("    {}\n", preview.replace('\n', " "));
}

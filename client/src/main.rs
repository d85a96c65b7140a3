//! Interactive terminal front end for the items service.
//!
//! Renders the controller's local copy of the collection and delegates every
//! state transition to it; no logic of its own beyond prompting.

use std::io::{self, BufRead, Write};

use items_client::{ItemInput, ItemsController, UreqTransport};

fn main() {
    let base_url =
        std::env::var("BASE_URL").unwrap_or_else(|_| "http://127.0.0.1:3000".to_string());
    let transport = UreqTransport::new();
    let mut controller = ItemsController::new(&base_url);

    println!("items @ {base_url} — type 'help' for commands");
    controller.load(&transport);
    render(&controller);

    let stdin = io::stdin();
    loop {
        print!("> ");
        let _ = io::stdout().flush();
        let Some(Ok(line)) = stdin.lock().lines().next() else {
            break;
        };
        let mut parts = line.split_whitespace();
        match parts.next() {
            Some("list") => {
                controller.load(&transport);
                render(&controller);
            }
            Some("add") => {
                let name = prompt("name: ");
                if name.is_empty() {
                    println!("name is required");
                    continue;
                }
                let description = optional(prompt("description (empty for none): "));
                controller.add_item(&transport, &ItemInput::new(name, description));
                render(&controller);
            }
            Some("edit") => {
                let Some(id) = parts.next().and_then(|s| s.parse().ok()) else {
                    println!("usage: edit <id>");
                    continue;
                };
                edit(&mut controller, &transport, id);
                render(&controller);
            }
            Some("delete") => {
                let Some(id) = parts.next().and_then(|s| s.parse().ok()) else {
                    println!("usage: delete <id>");
                    continue;
                };
                // explicit confirmation before any request; declining aborts
                let answer = prompt(&format!("delete item {id}? [y/N] "));
                if answer.eq_ignore_ascii_case("y") {
                    controller.delete_item(&transport, id);
                    render(&controller);
                } else {
                    println!("aborted");
                }
            }
            Some("help") => {
                println!("commands: list | add | edit <id> | delete <id> | quit");
            }
            Some("quit") | Some("exit") => break,
            Some(other) => println!("unknown command: {other}"),
            None => {}
        }
    }
}

fn edit(controller: &mut ItemsController, transport: &UreqTransport, id: u64) {
    controller.begin_edit(id);
    let Some(current) = controller.fetch_item(transport, id) else {
        controller.cancel_edit();
        return;
    };

    let name = prompt(&format!("name [{}]: ", current.name));
    let name = if name.is_empty() { current.name } else { name };
    let description = optional(prompt(&format!(
        "description [{}] (empty keeps, '-' clears): ",
        current.description.as_deref().unwrap_or("none")
    )));
    let description = match description.as_deref() {
        None => current.description,
        Some("-") => None,
        Some(_) => description,
    };

    controller.save_edit(transport, &ItemInput::new(name, description));
}

fn render(controller: &ItemsController) {
    if let Some(error) = controller.error() {
        println!("error: {error}");
    }
    for item in controller.items() {
        match &item.description {
            Some(description) => println!("  {} — {} ({description})", item.id, item.name),
            None => println!("  {} — {}", item.id, item.name),
        }
    }
    if controller.items().is_empty() {
        println!("  (no items)");
    }
}

fn prompt(label: &str) -> String {
    print!("{label}");
    let _ = io::stdout().flush();
    let mut line = String::new();
    let _ = io::stdin().read_line(&mut line);
    line.trim().to_string()
}

fn optional(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

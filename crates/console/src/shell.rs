//! Line-oriented commands for the interactive session.

use gateway::MemberGateway;
use models::DraftField;

use crate::controller::MemberController;
use crate::render;

pub const HELP: &str = "\
Commands:
  list                 show members matching the current search
  search [TERM]        filter members by name (empty clears the filter)
  gyms                 show the gym selector contents
  open | close         show or hide the add-member form (close discards it)
  form                 show the add-member form
  set FIELD VALUE      fill a form field (cpf, nome, peso, altura, idade, estilo, academiaId)
  save                 submit the form
  edit ROW             edit the member in the given row
  reload               fetch members and gyms again
  help                 show this help
  quit                 leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Search(String),
    Gyms,
    Open,
    Close,
    Form,
    Set(DraftField, String),
    Save,
    Edit(usize),
    Reload,
    Help,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word.to_lowercase().as_str() {
            "list" | "ls" => Command::List,
            "search" | "find" => Command::Search(rest.to_string()),
            "gyms" => Command::Gyms,
            "open" | "add" => Command::Open,
            "close" | "cancel" => Command::Close,
            "form" => Command::Form,
            "set" => {
                let (field, value) = rest
                    .split_once(char::is_whitespace)
                    .map(|(field, value)| (field, value.trim()))
                    .unwrap_or((rest, ""));
                if field.is_empty() {
                    return Err("usage: set FIELD VALUE".to_string());
                }
                let field = field.parse::<DraftField>().map_err(|e| e.to_string())?;
                Command::Set(field, value.to_string())
            }
            "save" | "submit" => Command::Save,
            "edit" => {
                let row = rest
                    .parse::<usize>()
                    .ok()
                    .filter(|row| *row > 0)
                    .ok_or_else(|| "usage: edit ROW (rows start at 1)".to_string())?;
                Command::Edit(row - 1)
            }
            "reload" => Command::Reload,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            "" => return Err("empty command".to_string()),
            other => return Err(format!("unknown command '{}', try 'help'", other)),
        };

        Ok(command)
    }
}

pub enum Flow {
    Continue(String),
    Quit,
}

fn form_view<G: MemberGateway>(controller: &MemberController<G>) -> String {
    if !controller.modal_visible() {
        return "The add-member form is closed. Use 'open' first.".to_string();
    }

    DraftField::ALL
        .iter()
        .map(|field| {
            format!(
                "{:<12} ({:<10}) {}",
                field.label(),
                field.wire_name(),
                controller.draft().get(*field)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub async fn execute<G: MemberGateway>(
    controller: &mut MemberController<G>,
    command: Command,
) -> Flow {
    let output = match command {
        Command::List => render::member_table(&controller.visible_members()),
        Command::Search(term) => {
            controller.search(term);
            render::member_table(&controller.visible_members())
        }
        Command::Gyms => render::gym_list(controller.gyms()),
        Command::Open => {
            if !controller.modal_visible() {
                controller.toggle_modal();
            }
            form_view(controller)
        }
        Command::Close => {
            controller.cancel();
            "Form closed.".to_string()
        }
        Command::Form => form_view(controller),
        Command::Set(field, value) => {
            if !controller.modal_visible() {
                form_view(controller)
            } else {
                controller.handle_input_change(field, value);
                String::new()
            }
        }
        Command::Save => {
            if !controller.modal_visible() {
                form_view(controller)
            } else if controller.add_member().await {
                render::member_table(&controller.visible_members())
            } else {
                String::new()
            }
        }
        Command::Edit(row) => {
            controller.edit_member(row);
            String::new()
        }
        Command::Reload => {
            controller.load().await;
            render::member_table(&controller.visible_members())
        }
        Command::Help => HELP.to_string(),
        Command::Quit => return Flow::Quit,
    };

    Flow::Continue(output)
}

// 🖥️ Console Shell - line-based front-end over the registry
//
// Reads one command per line, runs it against the session's registry and
// prints the outcome. Registry conditions (duplicate id, not found, ...) are
// printed and the loop keeps going; only I/O failures end the session early.

use crate::entities::{Category, Client};
use crate::error::RegistryError;
use crate::registry::ClientRegistry;
use anyhow::Result;
use std::io::{self, BufRead, Write};
use tracing::info;

const HELP: &str = "\
Commands:
  add <id> <email> <name...>      register a client
  vip <id> <email> <name...>      register a VIP client (20% discount)
  list                            list every client
  find <id>                       show one client
  email <id> <new-email>          change a client's email
  delete <id>                     remove a client
  category <id> <label>           assign Regular | Frequent | VIP | Unassigned
  filter <label>                  list clients in a category
  stats                           clients per category
  export                          print all clients as JSON
  help                            show this help
  exit | quit                     end the session";

/// Scripted session replayed by `--demo`
pub const DEMO_SCRIPT: &[&str] = &[
    "add 1 ana.torres@email.com Ana Torres",
    "add 2 luis.perez@email.com Luis Pérez",
    "vip 3 maria.vip@email.com María Gómez",
    "list",
    "email 1 ana.torres99@email.com",
    "find 1",
    "delete 2",
    "find 2",
    "list",
    "category 1 frequent",
    "category 3 vip",
    "filter frequent",
    "filter vip",
    "filter regular",
    "add 1 x@e.com X",
    "list",
    "stats",
];

// ============================================================================
// COMMANDS
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
enum Command {
    Add {
        id: u32,
        email: String,
        name: String,
        vip: bool,
    },
    List,
    Find(u32),
    Email {
        id: u32,
        email: String,
    },
    Delete(u32),
    Category {
        id: u32,
        label: String,
    },
    Filter(Category),
    Stats,
    Export,
    Help,
    Exit,
}

/// Whether the shell keeps reading after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

fn parse_id(token: Option<&str>, usage: &str) -> Result<u32, String> {
    let token = token.ok_or_else(|| format!("usage: {usage}"))?;
    token
        .parse()
        .map_err(|_| format!("invalid id '{token}' (expected a non-negative integer)"))
}

impl Command {
    /// Parse one input line. Blank lines yield `None`.
    fn parse(line: &str) -> Result<Option<Command>, String> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some((&keyword, args)) = tokens.split_first() else {
            return Ok(None);
        };

        let command = match keyword.to_lowercase().as_str() {
            "add" | "vip" => {
                let usage = format!("{keyword} <id> <email> <name...>");
                let id = parse_id(args.first().copied(), &usage)?;
                let email = args.get(1).ok_or_else(|| format!("usage: {usage}"))?;
                let name = args.get(2..).unwrap_or_default().join(" ");
                if name.is_empty() {
                    return Err(format!("usage: {usage}"));
                }

                Command::Add {
                    id,
                    email: email.to_string(),
                    name,
                    vip: keyword.eq_ignore_ascii_case("vip"),
                }
            }
            "list" => Command::List,
            "find" => Command::Find(parse_id(args.first().copied(), "find <id>")?),
            "email" => {
                let usage = "email <id> <new-email>";
                let id = parse_id(args.first().copied(), usage)?;
                let email = args.get(1).ok_or_else(|| format!("usage: {usage}"))?;
                Command::Email {
                    id,
                    email: email.to_string(),
                }
            }
            "delete" => Command::Delete(parse_id(args.first().copied(), "delete <id>")?),
            "category" => {
                let usage = "category <id> <label>";
                let id = parse_id(args.first().copied(), usage)?;
                let label = args.get(1).ok_or_else(|| format!("usage: {usage}"))?;
                Command::Category {
                    id,
                    label: label.to_string(),
                }
            }
            "filter" => {
                let label = args.first().ok_or("usage: filter <label>")?;
                let category: Category = label
                    .parse()
                    .map_err(|err: RegistryError| err.to_string())?;
                Command::Filter(category)
            }
            "stats" => Command::Stats,
            "export" => Command::Export,
            "help" | "?" => Command::Help,
            "exit" | "quit" => Command::Exit,
            other => return Err(format!("unknown command '{other}' (type 'help')")),
        };

        Ok(Some(command))
    }
}

// ============================================================================
// SHELL
// ============================================================================

pub struct Shell<R, W> {
    input: R,
    output: W,
    registry: ClientRegistry,
    quiet: bool,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Start a session with an empty registry
    pub fn new(input: R, output: W) -> Self {
        Shell {
            input,
            output,
            registry: ClientRegistry::new(),
            quiet: false,
        }
    }

    /// Suppress the banner and prompt
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    pub fn registry(&self) -> &ClientRegistry {
        &self.registry
    }

    /// Read and run commands until `exit` or end of input
    pub fn run(&mut self) -> Result<()> {
        info!("shell session started");
        if !self.quiet {
            writeln!(self.output, "Client registry. Type 'help' for commands.")?;
        }

        let mut line = String::new();
        loop {
            if !self.quiet {
                write!(self.output, "> ")?;
                self.output.flush()?;
            }

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                break;
            }

            if self.execute(&line)? == Flow::Exit {
                break;
            }
        }

        info!(clients = self.registry.len(), "shell session ended");
        Ok(())
    }

    /// Run a single command line and print its outcome
    pub fn execute(&mut self, line: &str) -> Result<Flow> {
        let command = match Command::parse(line) {
            Ok(Some(command)) => command,
            Ok(None) => return Ok(Flow::Continue),
            Err(message) => {
                writeln!(self.output, "error: {message}")?;
                return Ok(Flow::Continue);
            }
        };

        match command {
            Command::Add {
                id,
                email,
                name,
                vip,
            } => {
                let client = if vip {
                    Client::vip(id, name, email)
                } else {
                    Client::new(id, name, email)
                };

                match self.registry.add_client(client) {
                    Ok(client) => writeln!(self.output, "Client '{}' added.", client.name())?,
                    Err(err) => report(&mut self.output, &err)?,
                }
            }
            Command::List => match self.registry.list_clients() {
                Ok(clients) => {
                    writeln!(self.output, "Clients:")?;
                    for client in clients {
                        writeln!(self.output, "  - {client}")?;
                    }
                }
                Err(err) => report(&mut self.output, &err)?,
            },
            Command::Find(id) => match self.registry.find_by_id(id) {
                Some(client) => writeln!(self.output, "{client}")?,
                None => report(&mut self.output, &RegistryError::NotFound { id })?,
            },
            Command::Email { id, email } => match self.registry.update_email(id, email) {
                Ok(change) => writeln!(
                    self.output,
                    "Client {} email updated from {} to {}.",
                    change.id, change.old_email, change.new_email
                )?,
                Err(err) => report(&mut self.output, &err)?,
            },
            Command::Delete(id) => match self.registry.delete_client(id) {
                Ok(client) => writeln!(self.output, "Client '{}' deleted.", client.name())?,
                Err(err) => report(&mut self.output, &err)?,
            },
            Command::Category { id, label } => {
                match self.registry.assign_category_label(id, &label) {
                    Ok(change) => writeln!(
                        self.output,
                        "Client {} category: {} -> {}.",
                        change.id, change.previous, change.current
                    )?,
                    Err(err) => report(&mut self.output, &err)?,
                }
            }
            Command::Filter(category) => match self.registry.list_by_category(category) {
                Ok(clients) => {
                    writeln!(self.output, "Clients in {category}:")?;
                    for client in clients {
                        writeln!(self.output, "  - {client}")?;
                    }
                }
                Err(err) => report(&mut self.output, &err)?,
            },
            Command::Stats => {
                for (category, count) in self.registry.category_counts() {
                    writeln!(self.output, "{category:<10} {count}")?;
                }
                writeln!(self.output, "{:<10} {}", "Total", self.registry.len())?;
            }
            Command::Export => match self.registry.to_json() {
                Ok(json) => writeln!(self.output, "{json}")?,
                Err(err) => report(&mut self.output, &err)?,
            },
            Command::Help => writeln!(self.output, "{HELP}")?,
            Command::Exit => return Ok(Flow::Exit),
        }

        Ok(Flow::Continue)
    }
}

/// Informational conditions print as-is, failures get an `error:` prefix
fn report(output: &mut impl Write, err: &RegistryError) -> io::Result<()> {
    if err.is_informational() {
        writeln!(output, "{err}")
    } else {
        writeln!(output, "error: {err}")
    }
}

/// Replay `DEMO_SCRIPT`, echoing each command before its output
pub fn run_demo<W: Write>(output: W) -> Result<ClientRegistry> {
    let mut shell = Shell::new(io::empty(), output);

    for line in DEMO_SCRIPT {
        writeln!(shell.output, "> {line}")?;
        shell.execute(line)?;
    }

    Ok(shell.registry)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_session(input: &str) -> (String, ClientRegistry) {
        let mut output = Vec::new();
        let mut shell = Shell::new(input.as_bytes(), &mut output).quiet(true);
        shell.run().unwrap();
        let registry = std::mem::take(&mut shell.registry);
        drop(shell);

        (String::from_utf8(output).unwrap(), registry)
    }

    #[test]
    fn test_parse_add_joins_name() {
        let command = Command::parse("add 1 ana@email.com Ana Torres").unwrap();
        assert_eq!(
            command,
            Some(Command::Add {
                id: 1,
                email: "ana@email.com".to_string(),
                name: "Ana Torres".to_string(),
                vip: false,
            })
        );
    }

    #[test]
    fn test_parse_blank_and_errors() {
        assert_eq!(Command::parse("   ").unwrap(), None);
        assert!(Command::parse("add one a@b.c Name").unwrap_err().contains("invalid id"));
        assert!(Command::parse("add 1 a@b.c").unwrap_err().starts_with("usage"));
        assert!(Command::parse("filter Gold").unwrap_err().contains("invalid category"));
        assert!(Command::parse("dance").unwrap_err().contains("unknown command"));
    }

    #[test]
    fn test_session_add_list_exit() {
        let (output, registry) = run_session(concat!(
            "add 1 ana@email.com Ana Torres\n",
            "vip 2 rosa@email.com Rosa\n",
            "list\n",
            "exit\n",
            "add 3 never@email.com Never\n",
        ));

        assert!(output.contains("Client 'Ana Torres' added."));
        assert!(output.contains("  - [2] Rosa - rosa@email.com | category: VIP | discount: 20%"));
        assert_eq!(registry.len(), 2);
        assert!(!registry.contains(3));
    }

    #[test]
    fn test_session_reports_conditions_and_continues() {
        let (output, registry) = run_session(concat!(
            "list\n",
            "add 1 a@e.com A\n",
            "add 1 b@e.com B\n",
            "delete 9\n",
            "category 1 gold\n",
            "filter regular\n",
            "find 1\n",
        ));

        assert!(output.contains("no clients registered"));
        assert!(output.contains("error: a client with id 1 already exists"));
        assert!(output.contains("error: no client found with id 9"));
        assert!(output.contains("error: invalid category 'gold'"));
        assert!(output.contains("no clients in category Regular"));
        assert!(output.contains("[1] A - a@e.com | category: Unassigned"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_session_stats_and_export() {
        let (output, _) = run_session("add 1 a@e.com A\ncategory 1 regular\nstats\nexport\n");

        assert!(output.contains("Regular    1"));
        assert!(output.contains("Total      1"));
        assert!(output.contains("\"email\": \"a@e.com\""));
    }

    #[test]
    fn test_execute_mutates_session_registry() {
        let mut output = Vec::new();
        let mut shell = Shell::new(io::empty(), &mut output);

        assert_eq!(shell.execute("vip 5 vera@email.com Vera").unwrap(), Flow::Continue);
        assert_eq!(shell.execute("category 5 regular").unwrap(), Flow::Continue);
        assert_eq!(shell.execute("quit").unwrap(), Flow::Exit);

        let vera = shell.registry().find_by_id(5).unwrap();
        assert!(vera.is_vip());
        assert_eq!(vera.category(), Category::Vip);
        assert_eq!(shell.registry().len(), 1);
    }

    #[test]
    fn test_demo_replays_scenarios() {
        let mut output = Vec::new();
        let registry = run_demo(&mut output).unwrap();
        let output = String::from_utf8(output).unwrap();

        let ids: Vec<u32> = registry.list_clients().unwrap().map(Client::id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(registry.find_by_id(1).unwrap().email(), "ana.torres99@email.com");
        assert_eq!(registry.find_by_id(1).unwrap().category(), Category::Frequent);

        assert!(output.contains(
            "Client 1 email updated from ana.torres@email.com to ana.torres99@email.com."
        ));
        assert!(output.contains("error: no client found with id 2"));
        assert!(output.contains("no clients in category Regular"));
        assert!(output.contains("error: a client with id 1 already exists"));
    }
}

use std::io::{self, Write};

use clap::{Parser, Subcommand};
use colored::Colorize;

use list_manager::TodoListManager;
use todo_api::TodoApiClient;
use todo_core::{Config, Priority, StatusFilter, Todo};

type Manager = TodoListManager<TodoApiClient>;

#[derive(Parser)]
#[command(name = "todo-cli")]
#[command(about = "To-do list client for a remote REST collection")]
#[command(version)]
struct Cli {
    /// Base URL of the remote collection (overrides config)
    #[arg(long)]
    api_base: Option<String>,

    /// Maximum number of items to load
    #[arg(long)]
    limit: Option<usize>,

    /// Enable debug logging
    #[arg(long, short, default_value = "false")]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load the list and print it
    List {
        /// Show all, completed, or pending items
        #[arg(long, default_value = "all")]
        filter: StatusFilter,

        /// Sort by priority, highest first
        #[arg(long)]
        sort: bool,

        /// Print the visible items as JSON
        #[arg(long)]
        json: bool,
    },
    /// Add a new item
    Add {
        /// Title text
        title: String,

        /// Priority for the new item
        #[arg(long, default_value = "medium")]
        priority: Priority,
    },
    /// Flip an item's completed flag
    Toggle {
        /// Item id
        id: u64,
    },
    /// Delete an item
    Rm {
        /// Item id
        id: u64,
    },
    /// Change an item's title and/or priority
    Edit {
        /// Item id
        id: u64,

        /// New title (kept when omitted)
        #[arg(long)]
        title: Option<String>,

        /// New priority (kept when omitted)
        #[arg(long)]
        priority: Option<Priority>,
    },
    /// Start an interactive session
    Shell,
}

fn init_logging(debug: bool) {
    let filter = if debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let mut config = Config::new();
    if let Some(api_base) = &cli.api_base {
        config.api_base = api_base.trim_end_matches('/').to_string();
    }
    if let Some(limit) = cli.limit {
        config.page_limit = limit;
    }
    log::debug!(
        "config: api_base={}, user_id={}, page_limit={}",
        config.api_base,
        config.user_id,
        config.page_limit
    );

    let client = TodoApiClient::from_config(&config);
    let manager = TodoListManager::with_config(client, &config);

    match cli.command {
        Commands::List { filter, sort, json } => run_list(&manager, filter, sort, json).await,
        Commands::Add { title, priority } => run_add(&manager, &title, priority).await,
        Commands::Toggle { id } => run_toggle(&manager, id).await,
        Commands::Rm { id } => run_rm(&manager, id).await,
        Commands::Edit {
            id,
            title,
            priority,
        } => run_edit(&manager, id, title, priority).await,
        Commands::Shell => run_shell(&manager).await,
    }
}

async fn run_list(
    manager: &Manager,
    filter: StatusFilter,
    sort: bool,
    json: bool,
) -> anyhow::Result<()> {
    manager.load().await;
    let todos = manager.visible_todos(filter, sort).await;

    if json {
        if let Some(error) = manager.error().await {
            eprintln!("{}", format!("⚠ {error}").red());
        }
        println!("{}", serde_json::to_string_pretty(&todos)?);
        return Ok(());
    }

    render_list(&todos);
    render_footer(manager).await;
    Ok(())
}

async fn run_add(manager: &Manager, title: &str, priority: Priority) -> anyhow::Result<()> {
    manager.load().await;
    match manager.create(title, priority).await {
        Some(todo) => println!("{}", format!("✅ Added #{}: {}", todo.id, todo.title).green()),
        None => report_create_failure(manager).await,
    }
    render_list(&manager.todos().await);
    render_footer(manager).await;
    Ok(())
}

async fn run_toggle(manager: &Manager, id: u64) -> anyhow::Result<()> {
    manager.load().await;
    if manager.toggle(id).await {
        println!("{}", format!("✅ Toggled #{id}").green());
    } else {
        println!("{}", format!("⚠ Could not toggle #{id}").yellow());
    }
    render_list(&manager.todos().await);
    render_footer(manager).await;
    Ok(())
}

async fn run_rm(manager: &Manager, id: u64) -> anyhow::Result<()> {
    manager.load().await;
    if manager.remove(id).await {
        println!("{}", format!("✅ Removed #{id}").green());
    } else {
        println!("{}", format!("⚠ Could not remove #{id}").yellow());
    }
    render_list(&manager.todos().await);
    render_footer(manager).await;
    Ok(())
}

async fn run_edit(
    manager: &Manager,
    id: u64,
    title: Option<String>,
    priority: Option<Priority>,
) -> anyhow::Result<()> {
    if title.is_none() && priority.is_none() {
        println!("{}", "Nothing to change (pass --title and/or --priority)".yellow());
        return Ok(());
    }

    manager.load().await;
    if !manager.begin_edit(id).await {
        println!("{}", format!("No todo with id {id}").red());
        render_list(&manager.todos().await);
        render_footer(manager).await;
        return Ok(());
    }
    if let Some(title) = title {
        manager.set_draft_title(title).await;
    }
    if let Some(priority) = priority {
        manager.set_draft_priority(priority).await;
    }

    if manager.save_edit().await {
        println!("{}", format!("✅ Saved #{id}").green());
    } else {
        println!("{}", format!("⚠ Could not save #{id}").yellow());
    }
    render_list(&manager.todos().await);
    render_footer(manager).await;
    Ok(())
}

async fn run_shell(manager: &Manager) -> anyhow::Result<()> {
    println!("{}", "📋 Todo Shell".cyan().bold());
    println!("{}", "Type 'help' for commands, 'quit' to leave".dimmed());
    println!();

    let mut filter = StatusFilter::All;
    let mut sort_by_priority = false;

    manager.load().await;
    render_view(manager, filter, sort_by_priority).await;

    loop {
        print!("{} ", "todo>".cyan().bold());
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            break;
        }
        let input = input.trim();
        if input.is_empty() {
            continue;
        }

        let (command, rest) = match input.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (input, ""),
        };

        match command {
            "quit" | "exit" | "q" => {
                println!("{}", "👋 Bye".cyan());
                break;
            }
            "help" | "?" => print_help(),
            "list" | "ls" => render_view(manager, filter, sort_by_priority).await,
            "reload" => {
                manager.load().await;
                render_view(manager, filter, sort_by_priority).await;
            }
            "filter" => match rest.parse::<StatusFilter>() {
                Ok(parsed) => {
                    filter = parsed;
                    render_view(manager, filter, sort_by_priority).await;
                }
                Err(err) => println!("{}", err.to_string().yellow()),
            },
            "sort" => match rest {
                "on" => {
                    sort_by_priority = true;
                    render_view(manager, filter, sort_by_priority).await;
                }
                "off" => {
                    sort_by_priority = false;
                    render_view(manager, filter, sort_by_priority).await;
                }
                _ => println!("{}", "usage: sort on|off".yellow()),
            },
            "add" => shell_add(manager, rest).await,
            "toggle" | "done" => {
                if let Some(id) = parse_id(rest, "toggle") {
                    if manager.toggle(id).await {
                        println!("{}", format!("✅ Toggled #{id}").green());
                    } else {
                        println!("{}", format!("⚠ Could not toggle #{id}").yellow());
                    }
                }
            }
            "rm" | "del" => {
                if let Some(id) = parse_id(rest, "rm") {
                    if manager.remove(id).await {
                        println!("{}", format!("✅ Removed #{id}").green());
                    } else {
                        println!("{}", format!("⚠ Could not remove #{id}").yellow());
                    }
                }
            }
            "edit" => shell_edit(manager, rest).await?,
            "cancel" => {
                manager.cancel_edit().await;
                println!("{}", "Edit cancelled".dimmed());
            }
            "status" => render_status(manager).await,
            _ => println!(
                "{}",
                format!("Unknown command: {command} (try 'help')").yellow()
            ),
        }
    }

    Ok(())
}

async fn shell_add(manager: &Manager, rest: &str) {
    if rest.is_empty() {
        println!("{}", "usage: add [low|medium|high] <title>".yellow());
        return;
    }
    let (priority, title) = match rest.split_once(char::is_whitespace) {
        Some((first, remainder)) => match first.parse::<Priority>() {
            Ok(priority) => (priority, remainder.trim()),
            Err(_) => (Priority::default(), rest),
        },
        None => (Priority::default(), rest),
    };
    match manager.create(title, priority).await {
        Some(todo) => println!("{}", format!("✅ Added #{}: {}", todo.id, todo.title).green()),
        None => report_create_failure(manager).await,
    }
}

async fn shell_edit(manager: &Manager, rest: &str) -> anyhow::Result<()> {
    let id = match parse_id(rest, "edit") {
        Some(id) => id,
        None => return Ok(()),
    };
    if !manager.begin_edit(id).await {
        println!("{}", format!("No todo with id {id}").red());
        return Ok(());
    }
    let current = match manager.editing().await {
        Some(draft) => draft,
        None => return Ok(()),
    };

    let line = prompt(&format!("Title [{}] ('q' aborts): ", current.title))?;
    if line == "q" {
        manager.cancel_edit().await;
        println!("{}", "Edit cancelled".dimmed());
        return Ok(());
    }
    if !line.is_empty() {
        manager.set_draft_title(line).await;
    }

    let line = prompt(&format!("Priority [{}] ('q' aborts): ", current.priority))?;
    if line == "q" {
        manager.cancel_edit().await;
        println!("{}", "Edit cancelled".dimmed());
        return Ok(());
    }
    if !line.is_empty() {
        match line.parse::<Priority>() {
            Ok(priority) => manager.set_draft_priority(priority).await,
            Err(err) => println!("{}", format!("{err}, keeping {}", current.priority).yellow()),
        }
    }

    if manager.save_edit().await {
        println!("{}", format!("✅ Saved #{id}").green());
    } else {
        println!("{}", format!("⚠ Could not save #{id}, edit kept").yellow());
    }
    Ok(())
}

async fn report_create_failure(manager: &Manager) {
    match manager.error().await {
        Some(error) => println!("{}", format!("⚠ {error}").red()),
        None => println!("{}", "Title is empty, nothing added".yellow()),
    }
}

fn prompt(label: &str) -> anyhow::Result<String> {
    print!("{}", label.dimmed());
    io::stdout().flush()?;
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

fn parse_id(rest: &str, usage: &str) -> Option<u64> {
    match rest.parse::<u64>() {
        Ok(id) => Some(id),
        Err(_) => {
            println!("{}", format!("usage: {usage} <id>").yellow());
            None
        }
    }
}

fn print_help() {
    println!("{}", "Commands:".cyan());
    println!("  list                show the current view");
    println!("  reload              fetch the list again");
    println!("  filter <all|completed|pending>");
    println!("  sort <on|off>       priority sort, highest first");
    println!("  add [priority] <title>");
    println!("  toggle <id>         flip completion");
    println!("  rm <id>             delete an item");
    println!("  edit <id>           edit title/priority ('q' aborts)");
    println!("  cancel              drop a staged edit");
    println!("  status              counts and session info");
    println!("  quit                leave");
}

async fn render_view(manager: &Manager, filter: StatusFilter, sort_by_priority: bool) {
    let todos = manager.visible_todos(filter, sort_by_priority).await;
    render_list(&todos);

    let mut footer = format!(
        "{} pending · {} done",
        manager.pending_count().await,
        manager.completed_count().await
    );
    if filter != StatusFilter::All || sort_by_priority {
        let order = if sort_by_priority { "priority" } else { "arrival" };
        footer.push_str(&format!("  [filter: {filter}, order: {order}]"));
    }
    println!("{}", footer.dimmed());

    if let Some(error) = manager.error().await {
        println!("{}", format!("⚠ {error}").red());
    }
}

async fn render_footer(manager: &Manager) {
    println!(
        "{}",
        format!(
            "{} pending · {} done",
            manager.pending_count().await,
            manager.completed_count().await
        )
        .dimmed()
    );
    if let Some(error) = manager.error().await {
        println!("{}", format!("⚠ {error}").red());
    }
}

async fn render_status(manager: &Manager) {
    let snapshot = manager.snapshot().await;
    println!(
        "{} items · {} pending · {} done",
        snapshot.todos.len(),
        snapshot.pending_count(),
        snapshot.completed_count()
    );
    if let Some(draft) = &snapshot.edit {
        println!(
            "{}",
            format!("editing #{}: {} [{}]", draft.id, draft.title, draft.priority).cyan()
        );
    }
    if let Some(last_loaded) = &snapshot.last_loaded {
        println!(
            "{}",
            format!("last loaded {}", last_loaded.format("%H:%M:%S UTC")).dimmed()
        );
    }
    if let Some(error) = &snapshot.error {
        println!("{}", format!("⚠ {error}").red());
    }
}

fn render_list(todos: &[Todo]) {
    if todos.is_empty() {
        println!("{}", "(no todos)".dimmed());
        return;
    }
    for todo in todos {
        println!("{}", render_todo(todo));
    }
}

fn render_todo(todo: &Todo) -> String {
    let check = if todo.completed { "✅" } else { "⬜" };
    let title = if todo.completed {
        todo.title.dimmed().strikethrough().to_string()
    } else {
        todo.title.clone()
    };
    format!("{} {:>4}  {}  {}", check, todo.id, priority_chip(todo.priority), title)
}

fn priority_chip(priority: Priority) -> String {
    match priority {
        Priority::High => "high".red().to_string(),
        Priority::Medium => "med ".yellow().to_string(),
        Priority::Low => "low ".green().to_string(),
    }
}

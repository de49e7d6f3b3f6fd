use anyhow::{Context, bail};
use bodybuilders_console::{
    Config, MemberController,
    render,
    shell::{self, Command, Flow},
};
use clap::{Parser, Subcommand};
use gateway::{ApiClient, MemberGateway, config::DEFAULT_BASE_URL};
use models::{BodyStyle, DraftMember};
use rustyline::{DefaultEditor, error::ReadlineError};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "bodybuilders")]
#[command(about = "Body Builders gym member roster", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(long, env = "BODYBUILDERS_API_URL", default_value = DEFAULT_BASE_URL)]
    api_url: String,

    #[arg(long, env = "BODYBUILDERS_TIMEOUT_MS", default_value_t = 5000)]
    timeout_ms: u64,

    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the member table
    List {
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Print the gyms members can be assigned to
    Gyms,
    /// Add a member
    Add(AddArgs),
    /// Interactive session
    Shell,
}

#[derive(clap::Args)]
struct AddArgs {
    #[arg(long)]
    cpf: String,

    #[arg(long)]
    name: String,

    #[arg(long)]
    weight: String,

    #[arg(long)]
    height: String,

    #[arg(long)]
    age: String,

    /// Body style id or label (1 Monstrão, 2 Frango, 3 Chassi de Grilo, 4 Esquelético)
    #[arg(long)]
    style: BodyStyle,

    #[arg(long)]
    gym: String,
}

impl AddArgs {
    fn into_draft(self) -> DraftMember {
        let mut draft = DraftMember::new();
        draft.set_tax_id(self.cpf);
        draft.set_name(self.name);
        draft.set_weight(self.weight);
        draft.set_height(self.height);
        draft.set_age(self.age);
        draft.set_body_style(self.style);
        draft.set_gym_id(self.gym);
        draft
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!(
                    "bodybuilders={0},bodybuilders_console={0},gateway={0}",
                    log_level
                )
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::new(cli.api_url, cli.timeout_ms).context("Invalid configuration")?;
    tracing::debug!("Using backend at {}", config.api_url);

    let client = ApiClient::new(&config.api_config()).context("Failed to create API client")?;
    let mut controller = MemberController::new(client);

    match cli.command {
        Commands::List { search } => {
            controller.load().await;
            if let Some(term) = search {
                controller.search(term);
            }
            println!("{}", render::member_table(&controller.visible_members()));
        }
        Commands::Gyms => {
            controller.load().await;
            println!("{}", render::gym_list(controller.gyms()));
        }
        Commands::Add(args) => {
            controller.toggle_modal();
            *controller.draft_mut() = args.into_draft();
            let added = controller.add_member().await;
            print_notifications(&mut controller);
            if !added {
                bail!("Member was not added");
            }
        }
        Commands::Shell => run_shell(&mut controller).await?,
    }

    Ok(())
}

fn print_notifications<G: MemberGateway>(controller: &mut MemberController<G>) {
    let notifications = controller.drain_notifications();
    if !notifications.is_empty() {
        println!("{}", render::notifications(&notifications));
    }
}

async fn run_shell<G: MemberGateway>(controller: &mut MemberController<G>) -> anyhow::Result<()> {
    controller.load().await;
    println!("Body Builders. Type 'help' for commands.");
    println!("{}", render::member_table(&controller.visible_members()));

    let mut editor = DefaultEditor::new().context("Failed to create line editor")?;
    loop {
        let line = match editor.readline("bodybuilders> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(e) => bail!("Failed to read input: {}", e),
        };
        if line.trim().is_empty() {
            continue;
        }
        let _ = editor.add_history_entry(line.as_str());

        match Command::parse(&line) {
            Ok(command) => match shell::execute(controller, command).await {
                Flow::Continue(output) => {
                    if !output.is_empty() {
                        println!("{}", output);
                    }
                }
                Flow::Quit => break,
            },
            Err(message) => println!("{}", message),
        }

        print_notifications(controller);
    }

    Ok(())
}

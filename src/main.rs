//! konnectops CLI binary entry point.

use std::error::Error;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use konnectops::cli::{BlogArgs, Cli, Commands, LandingArgs};
use konnectops::config::KonnectConfig;
use konnectops::content::{self, prompts, BlogBrief, LandingPage};
use konnectops::generation::Resolver;
use konnectops::provider::GoogleAdapter;
use konnectops::types::ResolvedResult;

type CliResult = Result<(), Box<dyn Error>>;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> CliResult {
    // Offline tools never need credentials.
    match cli.command {
        Commands::Calendar(args) => {
            let festivals = match args.from {
                Some(from) => content::calendar::upcoming(from),
                None => content::festivals_2026(),
            };
            for festival in festivals {
                println!("{:<8} {}", festival.label(), festival.name);
            }
            return Ok(());
        }
        Commands::Emi(args) => {
            let monthly = content::emi(args.loan, args.rate, args.years)?;
            println!("{}", content::format_emi(monthly));
            return Ok(());
        }
        Commands::Whatsapp(args) => {
            println!("{}", content::whatsapp_link(&args.phone, &args.message)?);
            return Ok(());
        }
        command => run_online(cli.config, command).await,
    }
}

async fn run_online(config_path: Option<std::path::PathBuf>, command: Commands) -> CliResult {
    let config = KonnectConfig::load(config_path.as_deref())?;
    let resolver = Resolver::from_config(&config);

    match command {
        Commands::Ask(args) => print_resolved(resolver.resolve(&args.prompt).await),
        Commands::Models => {
            let adapter = GoogleAdapter::from_config(&config);
            let directory = adapter.directory().await?;
            for model in directory.iter() {
                let methods: Vec<&str> = model.capabilities.iter().map(String::as_str).collect();
                println!("{:<40} {}", model.identifier, methods.join(","));
            }
            match adapter.selected_model().await? {
                Some(model) => println!("\nselected: {model}"),
                None => println!("\nselected: (none)"),
            }
            Ok(())
        }
        Commands::Content(args) => {
            let prompt = prompts::marketing_content(args.kind, &args.topic)?;
            print_resolved(resolver.resolve(&prompt).await)
        }
        Commands::ImagePrompt(args) => {
            let prompt = prompts::image_prompt(&args.concept, args.style);
            print_resolved(resolver.resolve(&prompt).await)
        }
        Commands::Translate(args) => {
            print_resolved(resolver.resolve(&prompts::tamil_translation(&args.text)).await)
        }
        Commands::Deluge(args) => {
            print_resolved(resolver.resolve(&prompts::deluge_script(&args.text)).await)
        }
        Commands::Blog(args) => handle_blog(&resolver, args).await,
        Commands::Landing(args) => handle_landing(&resolver, args).await,
        Commands::Calendar(_) | Commands::Emi(_) | Commands::Whatsapp(_) => Ok(()),
    }
}

fn print_resolved(resolved: ResolvedResult) -> CliResult {
    match resolved {
        ResolvedResult::Text(text) => {
            println!("{text}");
            Ok(())
        }
        failed @ ResolvedResult::BothFailed(..) => Err(failed.to_string().into()),
    }
}

async fn handle_blog(resolver: &Resolver, args: BlogArgs) -> CliResult {
    let brief = BlogBrief {
        project: args.project,
        location: args.location,
        developer: args.developer,
        usps: args.usps,
        phone: args.phone,
        email: args.email,
    };

    let blog = if args.offline {
        content::local_blog(&brief)
    } else {
        resolver
            .resolve(&prompts::blog_prompt(&brief))
            .await
            .text_or_else(|primary, secondary| {
                eprintln!(
                    "note: providers unavailable (primary: {primary}; secondary: {secondary}); \
                     using local template"
                );
                content::local_blog(&brief)
            })
    };

    println!("{blog}");
    println!("\n---\nCover image prompt:\n{}", prompts::cover_image_prompt(&brief));
    Ok(())
}

async fn handle_landing(resolver: &Resolver, args: LandingArgs) -> CliResult {
    let template = std::fs::read_to_string(&args.template)?;
    let page = LandingPage {
        project: args.project,
        location: args.location,
        price: args.price,
        old_name: args.old_name,
    };

    let rendered = page.render(&template, resolver).await?;
    if let Some(failed @ ResolvedResult::BothFailed(..)) = &rendered.description {
        eprintln!("note: meta description left blank: {failed}");
    }

    let out = args.out.unwrap_or_else(|| page.file_name().into());
    std::fs::write(&out, rendered.html)?;
    println!("wrote {}", out.display());
    Ok(())
}

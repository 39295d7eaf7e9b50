/// Blog — generate and export blog posts from the command line.
///
/// Usage:
///   blog generate --topic <text> [--tone <tone>] [--length <len>] [--keywords <a,b,c>] [--out <dir>]
///   blog topics
///   blog tones
///   blog shell
///
/// Shell commands:
///   topic <text>      — set the topic
///   tone <name>       — set the tone
///   length <name>     — set the length
///   keywords <a,b,c>  — set keywords (empty to clear)
///   form              — show the current form
///   generate          — generate a post from the form
///   export            — save the current post
///   show              — print the current fragment
///   suggest           — show a topic suggestion
///   help              — list commands
///   quit              — exit

use anyhow::{Context, Result};
use blog_generator::core::config::SessionConfig;
use blog_generator::core::pipeline::BlogGenerator;
use blog_generator::core::session::{Notification, Session};
use blog_generator::logging::init_tracing;
use blog_generator::schema::length::Length;
use blog_generator::schema::request::BlogRequest;
use blog_generator::schema::tone::Tone;
use clap::{Args, Parser, Subcommand};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "blog", version, about = "Template-driven blog post generator")]
struct Cli {
    #[arg(long, short, global = true, help = "Log debug output")]
    verbose: bool,
    #[command(flatten)]
    setup: SetupArgs,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug)]
struct SetupArgs {
    #[arg(long, global = true, help = "Session settings (RON)")]
    config: Option<PathBuf>,
    #[arg(long = "topics", global = true, help = "Extra topic pack file or directory (RON)")]
    topics_dirs: Vec<PathBuf>,
    #[arg(long, global = true, default_value_t = 42, help = "Seed for the simulated delay")]
    seed: u64,
    #[arg(long, global = true, help = "Skip the simulated processing delay")]
    no_delay: bool,
    #[arg(long, global = true, default_value = ".", help = "Directory exported posts are written to")]
    out: PathBuf,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate one post and export it
    Generate {
        #[arg(long)]
        topic: String,
        #[arg(long, default_value_t = Tone::Professional)]
        tone: Tone,
        #[arg(long, default_value_t = Length::Medium)]
        length: Length,
        #[arg(long, default_value = "")]
        keywords: String,
        #[arg(long, help = "Print the fragment instead of exporting")]
        print: bool,
    },
    /// List topics with hand-written content
    Topics,
    /// List tones with their section titles
    Tones,
    /// Interactive form
    Shell,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Generate {
            topic,
            tone,
            length,
            keywords,
            print,
        } => {
            let mut session = build_session(&cli.setup)?;
            let request = BlogRequest::new(topic, tone, length).with_keywords(keywords);
            let post = match session.generate_blocking(request) {
                Ok(post) => post,
                Err(notice) => {
                    report(&notice);
                    std::process::exit(1);
                }
            };
            if print {
                println!("{}", post.fragment);
                return Ok(());
            }
            match session.export_to(&cli.setup.out) {
                Ok(exported) => {
                    report(&exported.notice);
                    println!("{}", exported.path.display());
                }
                Err(notice) => {
                    report(&notice);
                    std::process::exit(1);
                }
            }
        }
        Commands::Topics => {
            let generator = build_generator(&cli.setup)?;
            for topic in generator.library().topics() {
                println!("{}", topic);
            }
        }
        Commands::Tones => {
            for tone in Tone::ALL {
                let template = tone.template();
                println!(
                    "{}\t{}\t{}",
                    tone,
                    template.style,
                    template.sections.join(" / ")
                );
            }
        }
        Commands::Shell => {
            let mut session = build_session(&cli.setup)?;
            run_shell(&mut session, &cli.setup.out)?;
        }
    }

    Ok(())
}

fn build_generator(setup: &SetupArgs) -> Result<BlogGenerator> {
    let mut builder = BlogGenerator::builder();
    for dir in &setup.topics_dirs {
        builder = builder.topics_dir(dir);
    }
    builder.build().context("failed to load topic content")
}

fn build_session(setup: &SetupArgs) -> Result<Session> {
    let generator = build_generator(setup)?;
    let mut config = match &setup.config {
        Some(path) => SessionConfig::load_from_ron(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => SessionConfig::default(),
    };
    if setup.no_delay {
        config.delay_ms = SessionConfig::immediate().delay_ms;
    }
    Ok(Session::new(generator, config, setup.seed))
}

fn report(notice: &Notification) {
    if notice.is_error() {
        eprintln!("ERROR: {}", notice.message);
    } else {
        eprintln!("{}", notice.message);
    }
}

fn run_shell(session: &mut Session, out: &Path) -> Result<()> {
    let mut form = BlogRequest::default();

    println!(
        "Loaded {} topics. Type 'help' for commands.\n",
        session.generator().library().len()
    );

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("blog> ");
        stdout.flush().ok();

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (cmd, rest) = match line.split_once(char::is_whitespace) {
            Some((cmd, rest)) => (cmd.to_lowercase(), rest.trim()),
            None => (line.to_lowercase(), ""),
        };

        match cmd.as_str() {
            "quit" | "exit" | "q" => {
                println!("Goodbye.");
                break;
            }
            "help" | "h" | "?" => print_help(),
            "topic" => {
                if rest.is_empty() {
                    println!("Try: {}", session.next_suggestion());
                } else {
                    form.topic = rest.to_string();
                }
            }
            "tone" => match rest.parse::<Tone>() {
                Ok(tone) => form.tone = tone,
                Err(e) => println!("{}", e),
            },
            "length" => match rest.parse::<Length>() {
                Ok(length) => form.length = length,
                Err(e) => println!("{}", e),
            },
            "keywords" => form.keywords = rest.to_string(),
            "suggest" => println!("Try: {}", session.next_suggestion()),
            "generate" | "g" => {
                println!("Generating your blog post...");
                match session.generate_blocking(form.clone()) {
                    Ok(post) => println!("\n{}", post.fragment),
                    Err(notice) => report(&notice),
                }
            }
            "export" | "s" => match session.export_to(out) {
                Ok(exported) => {
                    report(&exported.notice);
                    println!("Saved {}", exported.path.display());
                }
                Err(notice) => report(&notice),
            },
            "show" => match session.current() {
                Some(post) => println!("{}", post.fragment),
                None => println!("Nothing generated yet."),
            },
            "form" => {
                println!("topic:    {}", form.topic);
                println!("tone:     {}", form.tone);
                println!("length:   {}", form.length);
                println!("keywords: {}", form.keywords);
            }
            other => println!("Unknown command: {}. Type 'help'.", other),
        }
    }

    Ok(())
}

fn print_help() {
    println!("Commands:");
    println!("  topic <text>      set the topic (no text: suggest one)");
    println!("  tone <name>       professional, casual, educational, conversational, technical");
    println!("  length <name>     short, medium, long");
    println!("  keywords <a,b,c>  comma-separated keywords (empty to clear)");
    println!("  form              show the current form");
    println!("  generate          generate a post from the form");
    println!("  export            save the current post");
    println!("  show              print the current post");
    println!("  suggest           show a topic suggestion");
    println!("  quit              exit");
}

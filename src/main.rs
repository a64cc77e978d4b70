use std::{sync::Arc, time::Duration};

use anyhow::anyhow;
use clap::Parser;
use log::debug;
use tokio::{
    io::{AsyncBufReadExt, BufReader},
    sync::watch,
    task::JoinHandle,
};

use github_repo_browser::{
    FetcherRetrier, GITHUB_API_ENDPOINT, PaginatedBrowser, PaginationState, RepositoryBrowser,
    RestFetcher, StdResult, TextRenderer, browse_pages, trigger_load_more, trigger_search,
};

const LOAD_MORE_COMMAND: &str = ":more";
const QUIT_COMMAND: &str = ":quit";

/// Command line arguments for the GitHub repository browser
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// GitHub username whose public repositories are listed
    username: Option<String>,

    /// Base URL of the GitHub REST API
    #[arg(long, env = "GITHUB_API_ENDPOINT", default_value = GITHUB_API_ENDPOINT)]
    api_endpoint: String,

    /// Maximum number of pages loaded before exiting (one-shot mode only)
    #[arg(short, long, default_value_t = 1)]
    max_pages: u32,

    /// Maximum number of attempts per page fetch
    #[arg(long, default_value_t = 1)]
    max_attempts: u32,

    /// Base delay in milliseconds between two fetch attempts
    #[arg(long, default_value_t = 500)]
    retry_base_delay_ms: u64,

    /// Read usernames and commands from the standard input
    #[arg(short, long)]
    interactive: bool,
}

#[tokio::main]
async fn main() -> StdResult<()> {
    env_logger::init();
    let args = Args::parse();
    debug!("Arguments: {args:?}");

    let browser = build_browser(&args)?;
    let renderer = spawn_renderer(browser.subscribe());
    let result = if args.interactive {
        browse_interactively(&browser, args.username.as_deref()).await
    } else {
        match args.username.as_deref() {
            Some(username) => {
                browse_pages(browser.as_ref(), username, args.max_pages).await;
                Ok(())
            }
            None => Err(anyhow!("A username is required in one-shot mode")),
        }
    };

    let final_state = browser.subscribe().borrow().clone();
    drop(browser);
    renderer.await?;
    result?;
    match final_state.error() {
        Some(error) if !args.interactive => Err(anyhow!("Browsing failed: {error}")),
        _ => Ok(()),
    }
}

fn build_browser(args: &Args) -> StdResult<Arc<dyn RepositoryBrowser>> {
    let fetcher = Arc::new(FetcherRetrier::new(
        Arc::new(RestFetcher::try_new(&args.api_endpoint)?),
        args.max_attempts,
        Duration::from_millis(args.retry_base_delay_ms),
    ));

    Ok(Arc::new(PaginatedBrowser::new(fetcher)))
}

async fn browse_interactively(
    browser: &Arc<dyn RepositoryBrowser>,
    username: Option<&str>,
) -> StdResult<()> {
    let mut tasks: Vec<JoinHandle<()>> = vec![];
    if let Some(username) = username {
        tasks.push(trigger_search(browser, username));
    }
    println!(
        "Type a username to search, `{LOAD_MORE_COMMAND}` (or Enter) for the next page, \
         `{QUIT_COMMAND}` to exit."
    );

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match line.trim() {
            QUIT_COMMAND => break,
            "" | LOAD_MORE_COMMAND => tasks.push(trigger_load_more(browser)),
            username => tasks.push(trigger_search(browser, username)),
        }
        tasks.retain(|task| !task.is_finished());
    }

    for task in tasks {
        task.await?;
    }

    Ok(())
}

fn spawn_renderer(mut states: watch::Receiver<PaginationState>) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut renderer = TextRenderer::new();
        while states.changed().await.is_ok() {
            let state = states.borrow_and_update().clone();
            for line in renderer.render(&state) {
                println!("{line}");
            }
        }
    })
}

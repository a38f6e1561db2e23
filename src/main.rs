//! YTB Downloader - desktop client for a YouTube download backend
//!
//! Looks up a video through the backend's info endpoint, shows its formats
//! and opens the backend download link for the chosen one in the browser.

use anyhow::{bail, Result};
use clap::Parser;
use iced::Application;
use std::sync::Arc;
use ytb_downloader::api::{ApiClient, InfoSource, MimeType};
use ytb_downloader::download::{BrowserNavigator, DownloadTrigger, Navigator, PrintNavigator};
use ytb_downloader::gui::{AppFlags, YtbApp};
use ytb_downloader::render::{self, RenderOptions};
use ytb_downloader::{AppSettings, SearchController};

#[derive(Parser)]
#[command(name = "ytb-downloader", version, about)]
struct Args {
    /// Backend base URL, overrides the saved setting
    #[arg(long, env = "YTB_SERVER")]
    server: Option<String>,

    /// Share link or bare token to replay at startup
    #[arg(long)]
    link: Option<String>,

    /// Look up a video ID or URL without opening the window
    #[arg(long, value_name = "KEYWORD")]
    info: Option<String>,

    /// Start the download of format INDEX of the looked-up video
    #[arg(long, value_name = "INDEX", requires = "info")]
    download: Option<usize>,

    /// Audio language to request for the download, e.g. `en`
    #[arg(long, requires = "download")]
    language: Option<String>,

    /// Container to request: none, mp4, webm, av01 or avc1
    #[arg(long, value_name = "CONTAINER", requires = "download")]
    container: Option<MimeType>,

    /// Print the download URL instead of opening the browser
    #[arg(long, requires = "download")]
    print_url: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    tracing_subscriber::fmt::init();

    let mut settings = AppSettings::load();
    if let Some(server) = &args.server {
        settings.server_url = server.clone();
        settings = settings.sanitized();
    }
    let server = settings.server()?;
    let client = ApiClient::new(&settings)?;

    if let Some(keyword) = args.info.clone() {
        let rt = tokio::runtime::Runtime::new()?;
        return rt.block_on(run_headless(&settings, client, keyword, &args));
    }

    let mut window = iced::Settings::with_flags(AppFlags {
        settings,
        server,
        source: Arc::new(client),
        initial_link: args.link,
    });
    window.window = iced::window::Settings {
        size: iced::Size::new(1100.0, 720.0),
        min_size: Some(iced::Size::new(860.0, 560.0)),
        ..Default::default()
    };
    window.antialiasing = true;

    // Start the GUI application (synchronous entrypoint)
    YtbApp::run(window)?;

    Ok(())
}

async fn run_headless(
    settings: &AppSettings,
    client: ApiClient,
    keyword: String,
    args: &Args,
) -> Result<()> {
    let server = settings.server()?;
    let mut controller = SearchController::new(server.clone());
    controller.set_input(keyword);
    let Some(ticket) = controller.submit() else {
        bail!("Nothing to look up: the keyword is blank");
    };

    println!("Looking up {} via {}...", ticket.keyword, client.id());
    let envelope = client.fetch_info(&ticket.keyword).await;
    controller.complete(ticket.seq, envelope);

    let view = render::render(
        controller.state(),
        &RenderOptions {
            placeholders: settings.placeholder_count,
        },
    );
    print!("{}", view);
    println!();
    if let Some(link) = controller.share_link() {
        println!("Share link: {}", link);
    }

    if !controller.state().envelope().is_some_and(|e| e.is_success()) {
        bail!("Search failed");
    }

    if let Some(index) = args.download {
        let navigator: Arc<dyn Navigator> = if args.print_url {
            Arc::new(PrintNavigator)
        } else {
            Arc::new(BrowserNavigator)
        };
        let trigger = DownloadTrigger::new(server, navigator)
            .with_preferences(args.language.clone(), args.container);
        if let Some(url) = trigger.start_download(controller.current_video(), index)? {
            if !args.print_url {
                println!("Opened {}", url);
            }
        }
    }

    Ok(())
}

//! Main GUI application

use crate::api::{ApiClient, InfoSource, ResultEnvelope};
use crate::controller::{SearchController, SearchTicket};
use crate::download::{BrowserNavigator, DownloadTrigger, Navigator};
use crate::gui::clipboard::{self, ClipboardNavigator};
use crate::render::{self, RenderOptions};
use crate::utils::config::{self, AppSettings};
use crate::utils::error::AppError;
use iced::widget::image;
use iced::{Application, Command, Element, Theme};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, error, info, warn};
use url::Url;

const APP_TITLE: &str = "Youtube Video Downloader";

/// Everything the window needs at startup
pub struct AppFlags {
    pub settings: AppSettings,
    /// Validated form of `settings.server_url`
    pub server: Url,
    pub source: Arc<dyn InfoSource>,
    /// Share link or bare token to replay on launch
    pub initial_link: Option<String>,
}

/// Main application state
pub struct YtbApp {
    controller: SearchController,
    source: Arc<dyn InfoSource>,
    trigger: DownloadTrigger,

    settings: AppSettings,
    settings_file: PathBuf,
    // Settings being edited; applied on save
    draft: AppSettings,
    draft_error: Option<String>,

    current_view: View,
    thumbnail: Option<image::Handle>,
    status_message: String,
}

/// Application view
#[derive(Debug, Clone, PartialEq)]
pub enum View {
    Main,
    Settings,
}

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    // Search box
    InputChanged(String),
    Submit,
    PasteFromClipboard,
    ClearInput,

    // Backend responses, tagged with the search sequence number
    SearchCompleted(u64, ResultEnvelope),
    ThumbnailLoaded(u64, Result<Vec<u8>, String>),

    // Result actions
    Download(usize),
    OpenOnYoutube,
    CopyShareLink,

    // View navigation
    SwitchToMain,
    SwitchToSettings,

    // Settings
    ServerUrlChanged(String),
    RequestTimeoutChanged(u64),
    PlaceholderCountChanged(usize),
    OpenInBrowserToggled(bool),
    SaveSettings,
}

fn navigator_for(settings: &AppSettings) -> Arc<dyn Navigator> {
    if settings.open_in_browser {
        Arc::new(BrowserNavigator)
    } else {
        Arc::new(ClipboardNavigator)
    }
}

impl YtbApp {
    fn search(&self, ticket: SearchTicket) -> Command<Message> {
        let source = Arc::clone(&self.source);
        Command::perform(
            async move {
                let envelope = source.fetch_info(&ticket.keyword).await;
                (ticket.seq, envelope)
            },
            |(seq, envelope)| Message::SearchCompleted(seq, envelope),
        )
    }

    fn load_thumbnail(&self, seq: u64) -> Command<Message> {
        let Some(url) = self
            .controller
            .current_video()
            .and_then(|video| video.preferred_thumbnail())
            .map(|thumb| thumb.url.clone())
        else {
            return Command::none();
        };

        let source = Arc::clone(&self.source);
        Command::perform(
            async move {
                source
                    .fetch_thumbnail(&url)
                    .await
                    .map_err(|e| e.to_string())
            },
            move |result| Message::ThumbnailLoaded(seq, result),
        )
    }

    /// Validate the draft, swap in a client for the new server and persist it
    fn apply_settings(&mut self) -> Result<(), AppError> {
        let settings = self.draft.clone().sanitized();
        let server = settings.server()?;
        let client = ApiClient::new(&settings)?;
        settings.save_to(&self.settings_file)?;

        self.source = Arc::new(client);
        self.trigger = DownloadTrigger::new(server.clone(), navigator_for(&settings));
        self.controller.set_share_base(server);
        self.settings = settings.clone();
        self.draft = settings;
        info!("Settings applied, backend is {}", self.settings.server_url);
        Ok(())
    }

    fn render_options(&self) -> RenderOptions {
        RenderOptions {
            placeholders: self.settings.placeholder_count,
        }
    }
}

impl Application for YtbApp {
    type Executor = iced::executor::Default;
    type Message = Message;
    type Theme = Theme;
    type Flags = AppFlags;

    fn new(flags: Self::Flags) -> (Self, Command<Message>) {
        let AppFlags {
            settings,
            server,
            source,
            initial_link,
        } = flags;

        let mut app = Self {
            controller: SearchController::new(server.clone()),
            source,
            trigger: DownloadTrigger::new(server, navigator_for(&settings)),
            draft: settings.clone(),
            settings,
            settings_file: config::settings_path(),
            draft_error: None,
            current_view: View::Main,
            thumbnail: None,
            status_message: String::new(),
        };

        let command = match initial_link.as_deref() {
            Some(link) => match app.controller.restore_link(link) {
                Some(ticket) => app.search(ticket),
                None => {
                    app.status_message = "The share link carries no search".to_string();
                    Command::none()
                }
            },
            None => Command::none(),
        };

        (app, command)
    }

    fn title(&self) -> String {
        let query = self.controller.query();
        if query.is_empty() {
            APP_TITLE.to_string()
        } else {
            format!("{} - {}", APP_TITLE, query.keyword)
        }
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        match message {
            Message::InputChanged(value) => {
                self.controller.set_input(value);
                Command::none()
            }

            Message::Submit => match self.controller.submit() {
                Some(ticket) => {
                    self.thumbnail = None;
                    self.status_message.clear();
                    self.search(ticket)
                }
                None => Command::none(),
            },

            Message::PasteFromClipboard => {
                match clipboard::get_clipboard_content() {
                    Ok(content) => self.controller.set_input(content.trim()),
                    Err(e) => {
                        warn!("{}", e);
                        self.status_message = make_error_user_friendly(&e);
                    }
                }
                Command::none()
            }

            Message::ClearInput => {
                self.controller.set_input(String::new());
                Command::none()
            }

            Message::SearchCompleted(seq, envelope) => {
                if self.controller.complete(seq, envelope) {
                    self.thumbnail = None;
                    self.load_thumbnail(seq)
                } else {
                    Command::none()
                }
            }

            Message::ThumbnailLoaded(seq, result) => {
                if seq != self.controller.latest_seq() {
                    debug!("Dropping thumbnail of superseded search #{}", seq);
                    return Command::none();
                }
                match result {
                    Ok(bytes) => self.thumbnail = Some(image::Handle::from_memory(bytes)),
                    Err(e) => warn!("Thumbnail for search #{} failed: {}", seq, e),
                }
                Command::none()
            }

            Message::Download(index) => {
                match self
                    .trigger
                    .start_download(self.controller.current_video(), index)
                {
                    Ok(Some(url)) => {
                        self.status_message = if self.settings.open_in_browser {
                            "Download opened in your browser".to_string()
                        } else {
                            format!("Download link copied: {}", url)
                        };
                    }
                    Ok(None) => {}
                    Err(e) => {
                        error!("Download failed: {}", e);
                        self.status_message = make_error_user_friendly(&e);
                    }
                }
                Command::none()
            }

            Message::OpenOnYoutube => {
                if let Some(video) = self.controller.current_video() {
                    let opened = Url::parse(&video.watch_url())
                        .map_err(AppError::from)
                        .and_then(|url| BrowserNavigator.open(&url));
                    if let Err(e) = opened {
                        warn!("{}", e);
                        self.status_message = make_error_user_friendly(&e);
                    }
                }
                Command::none()
            }

            Message::CopyShareLink => {
                if let Some(link) = self.controller.share_link() {
                    self.status_message = match clipboard::set_clipboard_content(link.as_str()) {
                        Ok(()) => "Share link copied".to_string(),
                        Err(e) => make_error_user_friendly(&e),
                    };
                }
                Command::none()
            }

            Message::SwitchToMain => {
                self.current_view = View::Main;
                Command::none()
            }

            Message::SwitchToSettings => {
                self.draft = self.settings.clone();
                self.draft_error = None;
                self.current_view = View::Settings;
                Command::none()
            }

            Message::ServerUrlChanged(value) => {
                self.draft.server_url = value;
                self.draft_error = self.draft.server().err().map(|e| e.to_string());
                Command::none()
            }

            Message::RequestTimeoutChanged(secs) => {
                self.draft.request_timeout_secs = secs;
                Command::none()
            }

            Message::PlaceholderCountChanged(count) => {
                self.draft.placeholder_count = count;
                Command::none()
            }

            Message::OpenInBrowserToggled(enabled) => {
                self.draft.open_in_browser = enabled;
                Command::none()
            }

            Message::SaveSettings => {
                match self.apply_settings() {
                    Ok(()) => {
                        self.draft_error = None;
                        self.status_message = "Settings saved".to_string();
                        self.current_view = View::Main;
                    }
                    Err(e) => {
                        error!("Failed to save settings: {}", e);
                        self.draft_error = Some(e.to_string());
                    }
                }
                Command::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        use crate::gui::theme;
        use iced::widget::{button, column, container, row, text, Space};
        use iced::Length;

        let sidebar = container(
            column![
                container(
                    text("YTB Downloader")
                        .size(22)
                        .style(iced::theme::Text::Color(theme::GRAY_800))
                )
                .padding(20),
                Space::with_height(20),
                button(text("Search").size(16))
                    .style(iced::theme::Button::Custom(Box::new(
                        if self.current_view == View::Main {
                            theme::SidebarButtonStyle::Active
                        } else {
                            theme::SidebarButtonStyle::Inactive
                        }
                    )))
                    .width(Length::Fill)
                    .padding(12)
                    .on_press(Message::SwitchToMain),
                button(text("Settings").size(16))
                    .style(iced::theme::Button::Custom(Box::new(
                        if self.current_view == View::Settings {
                            theme::SidebarButtonStyle::Active
                        } else {
                            theme::SidebarButtonStyle::Inactive
                        }
                    )))
                    .width(Length::Fill)
                    .padding(12)
                    .on_press(Message::SwitchToSettings),
            ]
            .spacing(10)
            .padding(10),
        )
        .width(Length::Fixed(220.0))
        .height(Length::Fill)
        .style(iced::theme::Container::Custom(Box::new(
            theme::SidebarContainer,
        )));

        let content = match self.current_view {
            View::Main => {
                use crate::gui::views::main_view;
                let result = render::render(self.controller.state(), &self.render_options());
                main_view(
                    self.controller.input(),
                    self.controller.state().is_searching(),
                    self.controller.share_link(),
                    &result,
                    self.thumbnail.as_ref(),
                    &self.status_message,
                )
            }
            View::Settings => {
                use crate::gui::views::{settings_view, SettingsForm};
                settings_view(SettingsForm {
                    server_url: &self.draft.server_url,
                    server_error: self.draft_error.as_deref(),
                    request_timeout_secs: self.draft.request_timeout_secs,
                    placeholder_count: self.draft.placeholder_count,
                    open_in_browser: self.draft.open_in_browser,
                })
            }
        };

        container(row![
            sidebar,
            container(content).width(Length::Fill).height(Length::Fill)
        ])
        .width(Length::Fill)
        .height(Length::Fill)
        .style(iced::theme::Container::Custom(Box::new(
            theme::MainGradientContainer,
        )))
        .into()
    }

    fn theme(&self) -> Self::Theme {
        Theme::Light
    }
}

/// Short status line for errors raised by local actions
fn make_error_user_friendly(error: &AppError) -> String {
    match error {
        AppError::Navigation(_) => "Could not open your browser".to_string(),
        AppError::Clipboard(_) => "Clipboard is not available".to_string(),
        AppError::InvalidFormatIndex { .. } => {
            "That format is no longer available, search again".to_string()
        }
        AppError::InvalidServerUrl(_) => "The server address is not a valid URL".to_string(),
        other => other.to_string(),
    }
}

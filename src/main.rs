use iced::widget::{button, column, container, image, row, text, Row};
use iced::{Alignment, ContentFit, Element, Font, Length, Size, Subscription, Task, Theme};
use std::path::PathBuf;

mod config;
mod error;
mod filters;
mod io;
mod state;
mod ui;

use error::{AppError, Severity};
use filters::Filter;
use state::session::Session;
use state::status::Status;
use ui::dialogs::{Dialogs, NativeDialogs, Notice};
use ui::preview::Preview;

/// Main application state
struct App {
    /// Loaded images and their lifecycle
    session: Session,
    /// What the canvas currently shows (None until the first load)
    preview: Option<Preview>,
    /// Status line under the canvas
    status: Status,
    /// Canvas size in pixels, tracked from window resizes
    canvas: (u32, u32),
    /// Directory of the last opened file, used to seed dialogs
    last_dir: Option<PathBuf>,
    /// File pickers and message boxes
    dialogs: Box<dyn Dialogs>,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// User clicked "Upload Image"
    Upload,
    /// User clicked "Save Image"
    Save,
    /// User clicked "Reset"
    Reset,
    /// User clicked one of the filter buttons
    ApplyFilter(Filter),
    /// Window changed size; canvas follows
    WindowResized(Size),
}

impl App {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        (Self::with_dialogs(Box::new(NativeDialogs)), Task::none())
    }

    fn with_dialogs(dialogs: Box<dyn Dialogs>) -> Self {
        App {
            session: Session::new(),
            preview: None,
            status: Status::idle(),
            canvas: ui::preview::initial_canvas(),
            last_dir: None,
            dialogs,
        }
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Upload => self.upload(),
            Message::Save => self.save(),
            Message::Reset => {
                if let Some(ws) = self.session.reset() {
                    self.preview = Some(Preview::render(ws.original(), self.canvas));
                    self.status = Status::reset();
                }
            }
            Message::ApplyFilter(filter) => match self.session.apply(filter) {
                Ok(Some(ws)) => {
                    self.preview = Some(Preview::render(ws.processed(), self.canvas));
                    self.status = Status::filtered(filter);
                }
                Ok(None) => {}
                Err(err) => report(self.dialogs.as_ref(), &err),
            },
            Message::WindowResized(size) => {
                self.canvas = ui::preview::canvas_for_window(size);
            }
        }

        Task::none()
    }

    fn upload(&mut self) {
        let start = self.start_dir();
        let Some(path) = self.dialogs.pick_image(start.as_deref()) else {
            return;
        };

        if let Err(err) = self.session.load(&path) {
            report(self.dialogs.as_ref(), &err);
            return;
        }

        if let Some(ws) = self.session.workspace() {
            self.preview = Some(Preview::render(ws.original(), self.canvas));
            self.status = Status::loaded(&io::file_name(&path));
            self.last_dir = path.parent().map(|p| p.to_path_buf());
        }
    }

    fn save(&mut self) {
        let Some(ws) = self.session.workspace() else {
            report(self.dialogs.as_ref(), &AppError::NothingToSave);
            return;
        };

        let file_name = io::suggested_file_name(Some(ws.source()), ws.applied());
        let start = self.start_dir();
        let Some(path) = self.dialogs.pick_save_path(start.as_deref(), &file_name) else {
            return;
        };

        match self.session.save(&path) {
            Ok(written) => {
                self.dialogs.notify(
                    Notice::Info,
                    "Success",
                    &format!("Image saved successfully to:\n{}", written.display()),
                );
                self.status = Status::saved(&io::file_name(&written));
            }
            Err(err) => report(self.dialogs.as_ref(), &err),
        }
    }

    fn start_dir(&self) -> Option<PathBuf> {
        self.last_dir.clone().or_else(ui::dialogs::default_directory)
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let loaded = self.session.is_loaded();
        let when_loaded = |message: Message| loaded.then_some(message);

        let heading = text("Image Filter Application").size(28).font(Font {
            weight: iced::font::Weight::Bold,
            ..Font::DEFAULT
        });

        let actions = row![
            button("Upload Image")
                .on_press(Message::Upload)
                .style(button::success)
                .padding(10),
            button("Save Image")
                .on_press_maybe(when_loaded(Message::Save))
                .style(button::primary)
                .padding(10),
            button("Reset")
                .on_press_maybe(when_loaded(Message::Reset))
                .style(button::secondary)
                .padding(10),
        ]
        .spacing(10);

        let filter_buttons = Filter::ALL.iter().fold(Row::new().spacing(10), |row, filter| {
            row.push(
                button(text(filter.label()))
                    .on_press_maybe(when_loaded(Message::ApplyFilter(*filter)))
                    .padding([8, 15]),
            )
        });

        let filter_panel = column![text("Select Filter").size(16), filter_buttons]
            .spacing(8)
            .align_x(Alignment::Center);

        let canvas_content: Element<Message> = match &self.preview {
            Some(preview) => image(preview.handle.clone())
                .width(Length::Fixed(preview.width as f32))
                .height(Length::Fixed(preview.height as f32))
                .content_fit(ContentFit::None)
                .into(),
            None => text("No image loaded").size(18).into(),
        };

        let canvas = container(canvas_content)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .style(container::bordered_box);

        let status = text(&self.status.text)
            .size(14)
            .color(ui::tone_color(self.status.tone));

        column![heading, actions, filter_panel, canvas, status]
            .spacing(15)
            .padding(20)
            .align_x(Alignment::Center)
            .into()
    }

    fn title(&self) -> String {
        match self.session.workspace() {
            Some(ws) => format!("Image Filter Application - {}", io::file_name(ws.source())),
            None => "Image Filter Application".to_string(),
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        iced::window::resize_events().map(|(_id, size)| Message::WindowResized(size))
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Light
    }
}

/// Log an error and show it in a modal of matching severity
fn report(dialogs: &dyn Dialogs, err: &AppError) {
    let notice = match err.severity() {
        Severity::Warning => {
            log::warn!("⚠️  {}", err);
            Notice::Warning
        }
        Severity::Error => {
            log::error!("❌ {}", err);
            Notice::Error
        }
    };
    dialogs.notify(notice, err.title(), &err.to_string());
}

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("🎨 Image Filter starting");

    iced::application(App::title, App::update, App::view)
        .subscription(App::subscription)
        .theme(App::theme)
        .window_size(Size::new(config::WINDOW_SIZE.0, config::WINDOW_SIZE.1))
        .resizable(true)
        .centered()
        .run_with(App::new)
}

use iced::widget::{button, canvas, column, container, row, text, image as iced_image};
use iced::{Color, Element, Length, Size, Task, Theme};
use rfd::FileDialog;

mod color;
mod filters;
mod io;
mod state;
mod ui;

use state::session::{EditSession, Phase};
use ui::display;
use ui::histogram::Histogram;

/// Main application state
struct FilterStudio {
    /// The editing session (original, processed, source path)
    session: EditSession,
    /// Display handle for the original canvas
    original_handle: Option<iced_image::Handle>,
    /// Display handle for the processed canvas
    processed_handle: Option<iced_image::Handle>,
    /// Histogram of the processed image
    histogram: Option<Histogram>,
    /// Status message to display to the user
    status: String,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// File > Open
    OpenImage,
    /// File > Save
    SaveImage,
    /// File > Reset
    Reset,
    /// File > Exit
    Exit,
    /// A filter button was clicked; index into the catalog
    FilterPressed(usize),
}

impl FilterStudio {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        println!("🎨 Filter Studio ready");

        (
            FilterStudio {
                session: EditSession::new(),
                original_handle: None,
                processed_handle: None,
                histogram: None,
                status: "Open an image to begin.".to_string(),
            },
            Task::none(),
        )
    }

    /// Handle application messages and update state
    ///
    /// Every operation runs synchronously to completion here; the only
    /// task ever returned is the exit task.
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::OpenImage => {
                let picked = FileDialog::new()
                    .set_title("Open Image")
                    .add_filter(
                        "Images",
                        &["png", "jpg", "jpeg", "bmp", "gif", "tif", "tiff", "webp"],
                    )
                    .pick_file();

                if let Some(path) = picked {
                    match self.session.load(&path) {
                        Ok((width, height)) => {
                            self.original_handle =
                                self.session.original().map(display::canvas_handle);
                            self.processed_handle = None;
                            self.histogram = None;
                            self.status =
                                format!("Loaded {} ({}x{})", path.display(), width, height);
                            println!("📷 Loaded {} ({}x{})", path.display(), width, height);
                        }
                        Err(err) => {
                            // Session is untouched; both canvases keep
                            // whatever they showed before.
                            self.status = format!("Could not open image: {}", err);
                            eprintln!("⚠️  {}", self.status);
                        }
                    }
                }

                Task::none()
            }
            Message::FilterPressed(index) => {
                let Some((label, filter)) = filters::CATALOG.get(index) else {
                    return Task::none();
                };

                if self.session.apply(*filter) {
                    self.processed_handle = self.session.processed().map(display::canvas_handle);
                    self.histogram = self.session.processed().map(Histogram::from_image);
                    self.status = format!("Applied {}.", label);
                }

                Task::none()
            }
            Message::Reset => {
                self.session.reset();
                self.processed_handle = None;
                self.histogram = None;

                if self.session.phase() != Phase::Empty {
                    self.status = "Reset to original.".to_string();
                }

                Task::none()
            }
            Message::SaveImage => {
                if self.session.phase() != Phase::Processed {
                    return Task::none();
                }

                let picked = FileDialog::new()
                    .set_title("Save Processed Image")
                    .set_file_name("processed.png")
                    .add_filter("PNG files", &["png"])
                    .add_filter("JPEG files", &["jpg", "jpeg"])
                    .save_file();

                if let Some(path) = picked {
                    match self.session.save(&path) {
                        Ok(true) => {
                            self.status = format!("✅ Saved to {}", path.display());
                            println!("💾 Saved processed image to {}", path.display());
                        }
                        Ok(false) => {}
                        Err(err) => {
                            self.status = format!("Could not save image: {}", err);
                            eprintln!("⚠️  {}", self.status);
                        }
                    }
                }

                Task::none()
            }
            Message::Exit => iced::exit(),
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let phase = self.session.phase();

        let mut save_button = button("Save").padding(8);
        if phase == Phase::Processed {
            save_button = save_button.on_press(Message::SaveImage);
        }

        let mut reset_button = button("Reset").padding(8);
        if phase != Phase::Empty {
            reset_button = reset_button.on_press(Message::Reset);
        }

        let file_row = row![
            button("Open").on_press(Message::OpenImage).padding(8),
            save_button,
            reset_button,
            button("Exit").on_press(Message::Exit).padding(8),
        ]
        .spacing(10);

        let mut filter_row = row![].spacing(10);
        for (index, (label, _)) in filters::CATALOG.iter().enumerate() {
            let mut filter_button = button(text(*label).size(14)).padding(8);
            if phase != Phase::Empty {
                filter_button = filter_button.on_press(Message::FilterPressed(index));
            }
            filter_row = filter_row.push(filter_button);
        }

        let histogram_panel: Element<Message> = match &self.histogram {
            Some(hist) => column![
                text("Histogram").size(16),
                canvas(hist.clone())
                    .width(Length::Fixed(180.0))
                    .height(Length::Fixed(120.0)),
            ]
            .spacing(10)
            .into(),
            None => column![].into(),
        };

        let previews = row![
            column![text("Original").size(16), canvas_slot(&self.original_handle)].spacing(10),
            column![
                text("Processed").size(16),
                canvas_slot(&self.processed_handle)
            ]
            .spacing(10),
            histogram_panel,
        ]
        .spacing(20);

        let content = column![
            file_row,
            filter_row,
            previews,
            text(&self.status).size(14),
        ]
        .spacing(16)
        .padding(16);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

/// One preview canvas: the image stretched to the slot, or a
/// placeholder box before anything is loaded
fn canvas_slot(handle: &Option<iced_image::Handle>) -> Element<Message> {
    let width = Length::Fixed(display::CANVAS_WIDTH as f32);
    let height = Length::Fixed(display::CANVAS_HEIGHT as f32);

    if let Some(handle) = handle {
        iced_image(handle.clone()).width(width).height(height).into()
    } else {
        container(text("No image").size(16))
            .width(width)
            .height(height)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .style(|_theme| container::Style::default().background(Color::from_rgb(0.16, 0.16, 0.16)))
            .into()
    }
}

fn main() -> iced::Result {
    iced::application("Filter Studio", FilterStudio::update, FilterStudio::view)
        .theme(FilterStudio::theme)
        .window_size(Size::new(1040.0, 620.0))
        .centered()
        .run_with(FilterStudio::new)
}

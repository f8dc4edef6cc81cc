use iced::widget::{button, column, container, row, text};
use iced::window;
use iced::{Alignment, Element, Length, Subscription, Task, Theme};

use shakudo_core::model::Breakpoint;
use shakudo_core::store::SettingsStore;

use crate::screen::{controls, preview, reference, Action, Page};
use crate::style;
use crate::theme::{self, ColorScheme, ThemeMode};
use crate::window_state::WindowState;

/// Application state: a slim router that delegates to screens.
pub struct Shakudo {
    page: Page,
    store: SettingsStore,
    // Theme
    mode: ThemeMode,
    colors: ColorScheme,
    // Screens
    preview: preview::Preview,
    controls: controls::Controls,
    reference: reference::Reference,
    // App-level chrome
    status_message: String,
    // Window persistence
    window_state: WindowState,
}

/// All messages the application can handle.
#[derive(Debug, Clone)]
pub enum Message {
    NavigateTo(Page),
    CycleThemeMode,
    WindowEvent(window::Event),
    Controls(controls::Message),
    Reference(reference::Message),
}

impl Shakudo {
    pub fn new() -> (Self, Task<Message>) {
        let store = SettingsStore::load();
        let window_state = WindowState::load();
        let mode = window_state.theme_mode;
        let page = Page::default();

        let app = Self {
            page,
            preview: preview::Preview::new(&store, Breakpoint::Desktop),
            controls: controls::Controls::new(&store),
            reference: reference::Reference::default(),
            store,
            mode,
            colors: ColorScheme::for_mode(mode),
            status_message: "Ready".into(),
            window_state,
        };
        (app, Task::none())
    }

    pub fn title(&self) -> String {
        String::from("Shakudo")
    }

    /// The breakpoint the mock page currently renders at.
    fn active_breakpoint(&self) -> Breakpoint {
        match self.page {
            Page::Preview(bp) => bp,
            Page::Reference => Breakpoint::Desktop,
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::NavigateTo(page) => {
                self.page = page;
                if let Page::Preview(bp) = page {
                    self.preview.refresh(&self.store, bp);
                }
                Task::none()
            }
            Message::CycleThemeMode => {
                self.mode = self.mode.cycle();
                self.colors = ColorScheme::for_mode(self.mode);
                self.window_state.theme_mode = self.mode;
                self.window_state.save();
                Task::none()
            }
            Message::WindowEvent(event) => {
                match event {
                    window::Event::Resized(size) => {
                        self.window_state.width = size.width;
                        self.window_state.height = size.height;
                        self.window_state.save();
                    }
                    window::Event::Moved(pos) => {
                        self.window_state.x = pos.x;
                        self.window_state.y = pos.y;
                        self.window_state.save();
                    }
                    _ => {}
                }
                Task::none()
            }
            Message::Controls(msg) => {
                let action = self.controls.update(msg, &mut self.store);
                // Any edit may move elements; relayout unconditionally.
                self.preview.refresh(&self.store, self.active_breakpoint());
                self.handle_action(action)
            }
            Message::Reference(msg) => {
                let action = self.reference.update(msg, &self.store);
                self.handle_action(action)
            }
        }
    }

    fn handle_action(&mut self, action: Action) -> Task<Message> {
        match action {
            Action::None => Task::none(),
            Action::SetStatus(msg) => {
                self.status_message = msg;
                Task::none()
            }
            Action::RunTask(task) => task,
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let cs = &self.colors;
        let nav = self.nav_rail(cs);

        let page_content: Element<'_, Message> = match self.page {
            Page::Preview(bp) => row![
                self.controls
                    .view(cs, &self.store, bp)
                    .map(Message::Controls),
                self.preview.view(cs, &self.store),
            ]
            .spacing(style::SPACE_MD)
            .padding(style::SPACE_MD)
            .into(),
            Page::Reference => self.reference.view(cs, &self.store).map(Message::Reference),
        };

        let status_bar = container(
            text(&self.status_message)
                .size(style::TEXT_XS)
                .line_height(style::LINE_HEIGHT_LOOSE),
        )
        .style(theme::status_bar(cs))
        .width(Length::Fill)
        .height(Length::Fixed(style::STATUS_BAR_HEIGHT))
        .padding([4.0, style::SPACE_MD]);

        column![row![nav, page_content].height(Length::Fill), status_bar].into()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        iced::event::listen_with(|event, _status, _id| match event {
            iced::Event::Window(e @ (window::Event::Resized(_) | window::Event::Moved(_))) => {
                Some(Message::WindowEvent(e))
            }
            _ => None,
        })
    }

    pub fn theme(&self) -> Theme {
        theme::build_theme(&self.colors)
    }

    fn nav_rail<'a>(&'a self, cs: &ColorScheme) -> Element<'a, Message> {
        let nav_item = |icon: iced::widget::Text<'static>, label: &'static str, page: Page| {
            let active = self.page == page;
            button(
                column![
                    icon.size(style::NAV_ICON_SIZE).center(),
                    text(label)
                        .size(style::NAV_LABEL_SIZE)
                        .line_height(style::LINE_HEIGHT_LOOSE)
                        .center(),
                ]
                .align_x(Alignment::Center)
                .spacing(style::SPACE_XXS)
                .width(Length::Fill),
            )
            .width(Length::Fixed(64.0))
            .padding([style::SPACE_SM, style::SPACE_XS])
            .on_press(Message::NavigateTo(page))
            .style(theme::nav_rail_item(active, cs))
        };

        use lucide_icons::iced as icons;

        let mode_icon = match self.mode {
            ThemeMode::System => icons::icon_sun_moon(),
            ThemeMode::Dark => icons::icon_moon(),
            ThemeMode::Light => icons::icon_sun(),
        };
        let mode_toggle = button(
            column![
                mode_icon.size(style::NAV_ICON_SIZE).center(),
                text(self.mode.label())
                    .size(style::NAV_LABEL_SIZE)
                    .line_height(style::LINE_HEIGHT_LOOSE)
                    .center(),
            ]
            .align_x(Alignment::Center)
            .spacing(style::SPACE_XXS)
            .width(Length::Fill),
        )
        .width(Length::Fixed(64.0))
        .padding([style::SPACE_SM, style::SPACE_XS])
        .on_press(Message::CycleThemeMode)
        .style(theme::nav_rail_item(false, cs));

        let rail = column![
            column![
                nav_item(
                    icons::icon_monitor(),
                    "Desktop",
                    Page::Preview(Breakpoint::Desktop)
                ),
                nav_item(
                    icons::icon_tablet(),
                    "Tablet",
                    Page::Preview(Breakpoint::Tablet)
                ),
                nav_item(
                    icons::icon_smartphone(),
                    "Mobile",
                    Page::Preview(Breakpoint::Mobile)
                ),
                nav_item(icons::icon_table(), "Reference", Page::Reference),
            ]
            .spacing(style::SPACE_XS)
            .align_x(Alignment::Center),
            iced::widget::Space::new().height(Length::Fill),
            container(mode_toggle)
                .align_x(Alignment::Center)
                .width(Length::Fill)
                .padding(iced::Padding::new(0.0).bottom(style::SPACE_SM)),
        ]
        .align_x(Alignment::Center)
        .width(Length::Fill)
        .height(Length::Fill);

        container(rail)
            .style(theme::nav_rail_bg(cs))
            .width(Length::Fixed(style::NAV_RAIL_WIDTH))
            .height(Length::Fill)
            .padding(iced::Padding::new(0.0).top(style::SPACE_LG))
            .into()
    }
}

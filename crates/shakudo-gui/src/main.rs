mod app;
mod screen;
mod style;
mod theme;
mod widgets;
mod window_state;

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter("shakudo=debug")
        .init();

    let ws = window_state::WindowState::load();

    let mut win = iced::window::Settings {
        size: ws.size(),
        ..Default::default()
    };

    if let Some(pos) = ws.position() {
        win.position = iced::window::Position::Specific(pos);
    } else {
        win.position = iced::window::Position::Centered;
    }

    iced::application(app::Shakudo::new, app::Shakudo::update, app::Shakudo::view)
        .title(app::Shakudo::title)
        .subscription(app::Shakudo::subscription)
        .theme(app::Shakudo::theme)
        .font(lucide_icons::LUCIDE_FONT_BYTES)
        .window(win)
        .run()
}

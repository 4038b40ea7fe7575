pub mod panel;
pub mod toggle;
pub mod track_row;

pub mod palette {
    use iced::Color;

    pub const BACKGROUND: Color = Color::from_rgb(0.05, 0.05, 0.08);
    pub const ACCENT: Color = Color::from_rgb(0.55, 0.36, 0.96);
    pub const LABEL: Color = Color::from_rgba(0.55, 0.36, 0.96, 0.8);
    pub const MUTED_TEXT: Color = Color::from_rgb(0.62, 0.62, 0.7);
    pub const TEXT: Color = Color::from_rgb(0.95, 0.95, 0.97);
}

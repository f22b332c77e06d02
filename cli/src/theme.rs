use carpool_core::Choice;
use ratatui::style::Color;

pub struct Theme {
    pub primary: Color,
    pub muted: Color,
    pub text: Color,
    pub points: Color,
    pub drives: Color,
    pub error: Color,
}

pub const THEME: Theme = Theme {
    primary: Color::Cyan,
    muted: Color::DarkGray,
    text: Color::White,
    points: Color::Rgb(46, 139, 87),
    drives: Color::Rgb(30, 144, 255),
    error: Color::Red,
};

/// Cell background per choice, matching the shared sheet's colours.
pub fn choice_bg(choice: Choice) -> Color {
    match choice {
        Choice::Driver => Color::Rgb(30, 144, 255),
        Choice::Passenger => Color::Rgb(46, 139, 87),
        Choice::NotGoing => Color::Rgb(178, 34, 34),
        Choice::Unknown => Color::Rgb(128, 128, 128),
    }
}

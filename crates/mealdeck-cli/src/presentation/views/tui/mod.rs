//! TUI widgets.
//!
//! Each view wraps a reference to a ViewModel and a `Palette`; the only
//! decisions made here are layout and colour. Stateful pieces (selection,
//! scroll offset, search input) live in `components/`.

pub mod alert;
pub mod components;
pub mod header;
pub mod meal_detail;
pub mod meal_list;
pub mod status_bar;

pub use alert::AlertView;
pub use header::HeaderView;
pub use meal_detail::MealDetailView;
pub use meal_list::MealListView;
pub use status_bar::StatusBarView;

use ratatui::style::{Color, Modifier, Style};

/// Colours for one theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub fg: Color,
    pub bg: Color,
    pub accent: Color,
    pub muted: Color,
    pub alert: Color,
}

impl Palette {
    pub fn light() -> Self {
        Self {
            fg: Color::Black,
            bg: Color::White,
            accent: Color::Blue,
            muted: Color::DarkGray,
            alert: Color::Red,
        }
    }

    pub fn dark() -> Self {
        Self {
            fg: Color::Gray,
            bg: Color::Black,
            accent: Color::Cyan,
            muted: Color::DarkGray,
            alert: Color::LightRed,
        }
    }

    pub fn for_mode(dark_mode: bool) -> Self {
        if dark_mode { Self::dark() } else { Self::light() }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }

    pub fn accent(&self) -> Style {
        self.base().fg(self.accent)
    }

    pub fn muted(&self) -> Style {
        self.base().fg(self.muted)
    }

    pub fn highlight(&self) -> Style {
        self.accent().add_modifier(Modifier::REVERSED | Modifier::BOLD)
    }
}

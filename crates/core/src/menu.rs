//! Menu selection logic.
//!
//! The menu is a list of items, each either a plain choice or a choice with
//! a cycling option (the speed picker). Navigation wraps in both directions.
//! Confirming emits the selected choice together with the fall speed picked
//! on the speed item.

use crate::error::CoreError;
use crate::types::{speed_for_label, SPEED_TABLE};

const SPEED_ITEM: &str = "Speed";

/// What the player confirmed in the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuChoice {
    Play,
    Restart,
    /// Confirming on the speed picker starts play at the picked speed.
    Speed,
    Quit,
}

impl MenuChoice {
    /// Parse a menu item name.
    ///
    /// ```
    /// use blockfall_core::{CoreError, MenuChoice};
    ///
    /// assert_eq!(MenuChoice::from_name("Restart"), Ok(MenuChoice::Restart));
    /// assert_eq!(
    ///     MenuChoice::from_name("Options"),
    ///     Err(CoreError::UnknownMenuChoice("Options".to_string()))
    /// );
    /// ```
    pub fn from_name(name: &str) -> Result<Self, CoreError> {
        match name {
            "Play" => Ok(MenuChoice::Play),
            "Restart" => Ok(MenuChoice::Restart),
            "Speed" => Ok(MenuChoice::Speed),
            "Quit" => Ok(MenuChoice::Quit),
            other => Err(CoreError::UnknownMenuChoice(other.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MenuChoice::Play => "Play",
            MenuChoice::Restart => "Restart",
            MenuChoice::Speed => "Speed",
            MenuChoice::Quit => "Quit",
        }
    }
}

/// A menu entry without options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SingleChoice {
    pub name: String,
}

/// A menu entry with a cycling option list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultipleChoice {
    pub name: String,
    pub selection: usize,
    pub choices: Vec<String>,
}

impl MultipleChoice {
    pub fn selected(&self) -> Option<&str> {
        self.choices.get(self.selection).map(String::as_str)
    }

    fn cycle(&mut self, forward: bool) {
        let len = self.choices.len();
        if len == 0 {
            return;
        }
        self.selection = if forward {
            (self.selection + 1) % len
        } else {
            (self.selection + len - 1) % len
        };
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuItem {
    Single(SingleChoice),
    Multiple(MultipleChoice),
}

impl MenuItem {
    pub fn name(&self) -> &str {
        match self {
            MenuItem::Single(item) => &item.name,
            MenuItem::Multiple(item) => &item.name,
        }
    }
}

/// Confirmed menu choice and the speed it starts play at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MenuSelection {
    pub choice: MenuChoice,
    pub speed: f64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Menu {
    title: String,
    selection: usize,
    items: Vec<MenuItem>,
}

impl Menu {
    /// Build a menu from arbitrary items.
    pub fn new(title: impl Into<String>, items: Vec<MenuItem>) -> Self {
        Self {
            title: title.into(),
            selection: 0,
            items,
        }
    }

    /// The main menu: Play, Restart, Speed (1/2/3), Quit.
    pub fn main_menu() -> Self {
        let single = |name: &str| {
            MenuItem::Single(SingleChoice {
                name: name.to_string(),
            })
        };
        Self::new(
            "Menu",
            vec![
                single("Play"),
                single("Restart"),
                MenuItem::Multiple(MultipleChoice {
                    name: SPEED_ITEM.to_string(),
                    selection: 0,
                    choices: SPEED_TABLE
                        .iter()
                        .map(|(label, _)| label.to_string())
                        .collect(),
                }),
                single("Quit"),
            ],
        )
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn selection(&self) -> usize {
        self.selection
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn selected_item(&self) -> Option<&MenuItem> {
        self.items.get(self.selection)
    }

    pub fn select_up(&mut self) {
        self.select_vertical(false);
    }

    pub fn select_down(&mut self) {
        self.select_vertical(true);
    }

    pub fn select_left(&mut self) {
        self.select_horizontal(false);
    }

    pub fn select_right(&mut self) {
        self.select_horizontal(true);
    }

    /// Jump back to the first item.
    pub fn select_first(&mut self) {
        self.selection = 0;
    }

    fn select_vertical(&mut self, down: bool) {
        let len = self.items.len();
        if len == 0 {
            return;
        }
        self.selection = if down {
            (self.selection + 1) % len
        } else {
            (self.selection + len - 1) % len
        };
    }

    fn select_horizontal(&mut self, forward: bool) {
        if let Some(MenuItem::Multiple(item)) = self.items.get_mut(self.selection) {
            item.cycle(forward);
        }
    }

    /// Fall speed currently picked on the speed item.
    pub fn speed(&self) -> Result<f64, CoreError> {
        let label = self
            .items
            .iter()
            .find_map(|item| match item {
                MenuItem::Multiple(m) if m.name == SPEED_ITEM => m.selected(),
                _ => None,
            })
            .unwrap_or_default();
        speed_for_label(label).ok_or_else(|| CoreError::UnknownSpeed(label.to_string()))
    }

    /// Confirm the selected item.
    pub fn choose(&self) -> Result<MenuSelection, CoreError> {
        let name = self.selected_item().map(MenuItem::name).unwrap_or_default();
        let choice = MenuChoice::from_name(name)?;
        let speed = self.speed()?;
        Ok(MenuSelection { choice, speed })
    }
}

impl Default for Menu {
    fn default() -> Self {
        Self::main_menu()
    }
}

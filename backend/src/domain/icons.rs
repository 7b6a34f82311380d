//! Symbolic icon names stored on tasks, resolved against a fixed table.

use std::fmt;

/// Icons the presentation layer knows how to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TaskIcon {
    #[default]
    BookOpen,
    Blocks,
    Brain,
    Calculator,
    Footprints,
    Hand,
    Heart,
    MessageCircle,
    Music,
    Palette,
    Pencil,
    Puzzle,
    Scissors,
    Shapes,
    Star,
    Users,
}

impl TaskIcon {
    /// Resolve a stored icon name. Unrecognized names fall back to `BookOpen`.
    pub fn resolve(name: &str) -> Self {
        match name.trim() {
            "BookOpen" => TaskIcon::BookOpen,
            "Blocks" => TaskIcon::Blocks,
            "Brain" => TaskIcon::Brain,
            "Calculator" => TaskIcon::Calculator,
            "Footprints" => TaskIcon::Footprints,
            "Hand" => TaskIcon::Hand,
            "Heart" => TaskIcon::Heart,
            "MessageCircle" => TaskIcon::MessageCircle,
            "Music" => TaskIcon::Music,
            "Palette" => TaskIcon::Palette,
            "Pencil" => TaskIcon::Pencil,
            "Puzzle" => TaskIcon::Puzzle,
            "Scissors" => TaskIcon::Scissors,
            "Shapes" => TaskIcon::Shapes,
            "Star" => TaskIcon::Star,
            "Users" => TaskIcon::Users,
            _ => TaskIcon::default(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            TaskIcon::BookOpen => "BookOpen",
            TaskIcon::Blocks => "Blocks",
            TaskIcon::Brain => "Brain",
            TaskIcon::Calculator => "Calculator",
            TaskIcon::Footprints => "Footprints",
            TaskIcon::Hand => "Hand",
            TaskIcon::Heart => "Heart",
            TaskIcon::MessageCircle => "MessageCircle",
            TaskIcon::Music => "Music",
            TaskIcon::Palette => "Palette",
            TaskIcon::Pencil => "Pencil",
            TaskIcon::Puzzle => "Puzzle",
            TaskIcon::Scissors => "Scissors",
            TaskIcon::Shapes => "Shapes",
            TaskIcon::Star => "Star",
            TaskIcon::Users => "Users",
        }
    }
}

impl fmt::Display for TaskIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

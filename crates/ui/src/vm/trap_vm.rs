/// Expression of the chef hanging over the sauce.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChefMood {
    Calm,
    Nervous,
    Panicked,
    Fallen,
}

impl ChefMood {
    #[must_use]
    pub const fn emoji(self) -> &'static str {
        match self {
            ChefMood::Calm => "👨‍🍳",
            ChefMood::Nervous => "😰",
            ChefMood::Panicked => "😱",
            ChefMood::Fallen => "💀",
        }
    }
}

/// Danger gauge shown above each question.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TrapVm {
    pub danger_percent: u32,
    /// Vertical position of the chef, as a percentage from the top.
    pub chef_top_percent: u32,
    pub mood: ChefMood,
    pub fallen: bool,
}

#[must_use]
pub fn map_trap(mistakes: u32, max_mistakes: u32) -> TrapVm {
    let max_mistakes = max_mistakes.max(1);
    let danger_percent = (mistakes * 100 / max_mistakes).min(100);
    let fallen = mistakes >= max_mistakes;

    let mood = if mistakes == 0 {
        ChefMood::Calm
    } else if mistakes * 2 < max_mistakes {
        ChefMood::Nervous
    } else if !fallen {
        ChefMood::Panicked
    } else {
        ChefMood::Fallen
    };

    TrapVm {
        danger_percent,
        chef_top_percent: if fallen { 80 } else { 10 + danger_percent / 2 },
        mood,
        fallen,
    }
}

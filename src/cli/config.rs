use crate::codes::GoalSuffix;
use crate::error::Result;
use crate::settings::{load_settings, save_settings, settings_path};

pub fn show() -> Result<()> {
    let settings = load_settings();
    println!("Settings:     {}", settings_path().display());
    println!("Category:     {}", settings.default_category);
    println!("Goal:         {}", settings.default_goal);
    println!("Goal suffix:  {}", suffix_label(settings.goal_suffix));
    Ok(())
}

pub fn set(category: Option<String>, goal: Option<String>, goal_suffix: Option<GoalSuffix>) -> Result<()> {
    let mut settings = load_settings();
    if category.is_none() && goal.is_none() && goal_suffix.is_none() {
        println!("Nothing to change.");
        return Ok(());
    }
    if let Some(category) = category {
        settings.default_category = category;
    }
    if let Some(goal) = goal {
        settings.default_goal = goal;
    }
    if let Some(goal_suffix) = goal_suffix {
        settings.goal_suffix = goal_suffix;
    }
    save_settings(&settings)?;
    println!("Saved {}", settings_path().display());
    Ok(())
}

fn suffix_label(suffix: GoalSuffix) -> &'static str {
    match suffix {
        GoalSuffix::Trailing => "trailing (last 4 timestamp characters)",
        GoalSuffix::Full => "full (whole timestamp)",
    }
}

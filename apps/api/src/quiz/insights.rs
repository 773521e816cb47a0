use serde::Serialize;

use crate::models::UserProfile;
use crate::quiz::scoring::QuizResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Badge {
    pub name: &'static str,
    pub icon: &'static str,
}

/// Journey completion shown on the dashboard: profile basics 30, quiz 50, recommendation 20.
pub fn profile_progress(user: &UserProfile, quiz: &QuizResult) -> u32 {
    let mut progress = 0;
    if !user.name.is_empty() && !user.class_level.is_empty() {
        progress += 30;
    }
    if quiz.completed {
        progress += 50;
    }
    if quiz.recommended_stream.is_some() {
        progress += 20;
    }
    progress.min(100)
}

pub fn badge_for(progress: u32) -> Badge {
    let (name, icon) = match progress {
        100.. => ("Career Explorer", "🎯"),
        70..=99 => ("Path Finder", "🗺️"),
        40..=69 => ("Quiz Master", "📝"),
        20..=39 => ("Beginner", "🌱"),
        _ => ("New User", "👋"),
    };
    Badge { name, icon }
}

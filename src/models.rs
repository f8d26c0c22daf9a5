//! View Models
//!
//! Pure helpers turning game state into display text and styles.

use match_core::{Constraint, GameEvent, LossReason, Resource};

/// Duration of the swap transition, shared by the CSS and the completion timer
pub const SWAP_ANIMATION_MS: u32 = 300;

/// Countdown tick interval
pub const TICK_MS: u32 = 1_000;

/// Which top-level screen is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Start,
    Playing,
}

/// Resource line under the shelf; unlimited levels have none
pub fn resource_label(resource: Resource) -> Option<String> {
    match resource {
        Resource::Unlimited => None,
        Resource::Swaps { left } => Some(format!("Swipe Limit: {}", left)),
        Resource::Seconds { left } => Some(format!("Time Left: {}s", left)),
        Resource::Points { points, .. } => Some(format!("Points remaining: {}", points)),
    }
}

/// Scoring rule lines shown under the prompt of point levels
pub fn rule_lines(constraint: &Constraint) -> Option<(String, String)> {
    match *constraint {
        Constraint::Points { bonus, penalty, .. } => Some((
            format!("+{} for each correct match", bonus),
            format!(" -{} for each incorrect match.", penalty),
        )),
        _ => None,
    }
}

/// Score popup text, `+2` / `-1`
pub fn delta_label(delta: i32) -> String {
    if delta >= 0 {
        format!("+{}", delta)
    } else {
        delta.to_string()
    }
}

pub fn correct_label(matches: usize) -> String {
    format!("You have {} correct", matches)
}

pub fn loss_detail(reason: LossReason) -> &'static str {
    match reason {
        LossReason::OutOfSwaps => "No swaps left.",
        LossReason::OutOfTime => "Time is up.",
        LossReason::OutOfPoints => "No points left.",
    }
}

/// Label of the action on the win screen
pub fn next_label(final_level: bool) -> &'static str {
    if final_level {
        "Play Again"
    } else {
        "Next Level ->"
    }
}

/// Inline transform for a card
///
/// A card in a running swap slides `offset` slots sideways with a transition;
/// a dragged card follows the pointer without one.
pub fn card_transform(offset: isize, drag: Option<(i32, i32)>) -> String {
    if offset != 0 {
        return format!(
            "transform: translateX(calc({} * (100% + var(--slot-gap)))); transition: transform {}ms ease-in-out;",
            offset, SWAP_ANIMATION_MS
        );
    }
    match drag {
        Some((dx, dy)) => format!("transform: translate({}px, {}px); z-index: 2;", dx, dy),
        None => String::new(),
    }
}

/// Events that swap `from` and `to` after a drag, given the tap selection
///
/// A drag always swaps exactly the two slots involved, so a pending tap
/// selection elsewhere is cleared first.
pub fn drag_events(selection: Option<usize>, from: usize, to: usize) -> Vec<GameEvent> {
    match selection {
        Some(selected) if selected == from => vec![GameEvent::Select(to)],
        Some(selected) => vec![
            GameEvent::Select(selected),
            GameEvent::Select(from),
            GameEvent::Select(to),
        ],
        None => vec![GameEvent::Select(from), GameEvent::Select(to)],
    }
}

use crate::types::{BadgeConfig, BadgeContent, BadgeSnapshot, BadgeState};

/// Derives the rendered value and visibility of a badge.
///
/// A badge is hidden when the caller asks for it, when there is no content,
/// or when the content is zero and `show_zero` is off. While hidden, the
/// content and cap of `previous` are kept so an exit transition does not
/// flash an empty or zero badge.
///
/// `previous` is the last *visible* snapshot, not the previous render.
/// Across several hidden renders in a row (5 shown, then 7 hidden, then 8
/// hidden) the badge keeps showing 5 rather than moving on to 7.
pub fn use_badge(config: &BadgeConfig, previous: Option<&BadgeSnapshot>) -> BadgeState {
    let invisible = config.invisible || is_hidden_by_content(config);

    let (badge_content, max) = match (invisible, previous) {
        (true, Some(prev)) => (prev.badge_content.clone(), prev.max),
        _ => (config.badge_content.clone(), config.max),
    };

    let display_value = badge_content
        .as_ref()
        .map(|content| clamp_display(content, max));

    BadgeState {
        badge_content,
        max,
        display_value,
        invisible,
    }
}

fn is_hidden_by_content(config: &BadgeConfig) -> bool {
    match &config.badge_content {
        None => true,
        Some(content) => content.is_zero() && !config.show_zero,
    }
}

/// Content above `max` renders as `"<max>+"`.
pub fn clamp_display(content: &BadgeContent, max: i64) -> BadgeContent {
    if content.is_truthy() && content.exceeds(max) {
        BadgeContent::Text(format!("{}+", max))
    } else {
        content.clone()
    }
}

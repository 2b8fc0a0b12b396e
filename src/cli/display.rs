// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display for the kumono-search CLI.
//!
//! Results print as boxed cards: title, category badge, date, link and a
//! clipped description. Colors follow OneDark on dark terminals and One Light
//! on light ones. `KUMONO_THEME` forces a theme, otherwise `COLORFGBG` is
//! consulted, otherwise dark. `NO_COLOR` and non-TTY stdout turn color off.
//!
//! # Theme detection order
//!
//! 1. `KUMONO_THEME` env var ("dark" or "light")
//! 2. `COLORFGBG` env var (terminal background hint)
//! 3. Default to dark theme

use kumono_search::render::{EmptyState, RenderSurface, ResultCard};
use kumono_search::{SearchMetrics, Suggestion};
use std::sync::OnceLock;

// Width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 72;

/// Longest description line printed under a result.
const DESCRIPTION_CHARS: usize = 64;

// ═══════════════════════════════════════════════════════════════════════════
// THEME
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("KUMONO_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // "fg;bg", background 7+ (except 8) is light
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(Ok(bg)) = colorfgbg.split(';').next_back().map(str::parse::<u8>) {
            if bg >= 7 && bg != 8 {
                return Theme::Light;
            }
        }
    }

    Theme::Dark
}

pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";

/// Semantic color roles. Each maps to one OneDark and one One Light color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Border,
    Heading,
    Title,
    Muted,
    Link,
    Good,
    Fair,
    Warn,
    Error,
    BadgeA,
    BadgeB,
    BadgeC,
}

impl Tone {
    fn rgb(self, theme: Theme) -> (u8, u8, u8) {
        match (self, theme) {
            (Tone::Border, Theme::Dark) => (92, 99, 112),      // #5c6370
            (Tone::Border, Theme::Light) => (160, 161, 167),   // #a0a1a7
            (Tone::Heading, Theme::Dark) => (86, 182, 194),    // #56b6c2
            (Tone::Heading, Theme::Light) => (1, 132, 188),    // #0184bc
            (Tone::Title, Theme::Dark) => (171, 178, 191),     // #abb2bf
            (Tone::Title, Theme::Light) => (56, 58, 66),       // #383a42
            (Tone::Muted, Theme::Dark) => (92, 99, 112),
            (Tone::Muted, Theme::Light) => (160, 161, 167),
            (Tone::Link, Theme::Dark) => (97, 175, 239),       // #61afef
            (Tone::Link, Theme::Light) => (64, 120, 242),      // #4078f2
            (Tone::Good, Theme::Dark) => (152, 195, 121),      // #98c379
            (Tone::Good, Theme::Light) => (80, 161, 79),       // #50a14f
            (Tone::Fair, Theme::Dark) => (229, 192, 123),      // #e5c07b
            (Tone::Fair, Theme::Light) => (193, 132, 1),       // #c18401
            (Tone::Warn, Theme::Dark) => (255, 215, 0),
            (Tone::Warn, Theme::Light) => (152, 104, 1),
            (Tone::Error, Theme::Dark) => (224, 108, 117),     // #e06c75
            (Tone::Error, Theme::Light) => (228, 86, 73),      // #e45649
            (Tone::BadgeA, Theme::Dark) => (198, 120, 221),    // #c678dd
            (Tone::BadgeA, Theme::Light) => (166, 38, 164),    // #a626a4
            (Tone::BadgeB, Theme::Dark) => (102, 217, 239),
            (Tone::BadgeB, Theme::Light) => (1, 112, 158),
            (Tone::BadgeC, Theme::Dark) => (240, 113, 120),
            (Tone::BadgeC, Theme::Light) => (202, 18, 67),
        }
    }

    fn escape(self) -> String {
        let (r, g, b) = self.rgb(theme());
        rgb(r, g, b)
    }
}

fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Colors only on a TTY, and never with `NO_COLOR` set.
pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply a tone with optional modifiers, or nothing off-TTY.
pub fn themed(tone: Tone, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), tone.escape(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Visible length in chars, skipping ANSI escapes.
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

/// Right-pad a styled string to a fixed visible width.
pub fn pad_right(s: &str, width: usize) -> String {
    let visible = visible_len(s);
    if visible >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - visible))
    }
}

/// Clip plain text to `max` chars, ending in `…` when clipped.
pub fn clip(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", kept)
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// │ content          │
pub fn row(content: &str) {
    let border = themed(Tone::Border, &[], "│");
    println!("{}{}{}", border, pad_right(content, BOX_WIDTH), border);
}

/// ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let label_part = format!("─ {} ", themed(Tone::Heading, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}{}{}",
        themed(Tone::Border, &[], "┌"),
        label_part,
        themed(Tone::Border, &[], &format!("{}┐", "─".repeat(remaining)))
    );
}

/// ├──────────────────┤
pub fn section_mid() {
    println!("{}", themed(Tone::Border, &[], &format!("├{}┤", "─".repeat(BOX_WIDTH))));
}

/// └──────────────────┘
pub fn section_bot() {
    println!("{}", themed(Tone::Border, &[], &format!("└{}┘", "─".repeat(BOX_WIDTH))));
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Category badge. The color is stable per category name.
pub fn category_badge(name: &str) -> String {
    if !use_colors() {
        return format!("[{}]", name);
    }
    let tones = [Tone::BadgeA, Tone::BadgeB, Tone::BadgeC, Tone::Good, Tone::Fair];
    let hash = name.bytes().fold(0usize, |acc, b| acc.wrapping_mul(31).wrapping_add(b as usize));
    let tone = tones[hash % tones.len()];
    themed(tone, &[BOLD], &format!("[{}]", name))
}

/// Relevance score, colored by strength.
pub fn score_value(score: u32) -> String {
    let text = format!("{:>4}", score);
    let tone = match score {
        50..=u32::MAX => Tone::Good,
        10..=49 => Tone::Fair,
        1..=9 => Tone::Warn,
        0 => Tone::Muted,
    };
    themed(tone, &[], &text)
}

/// `3 results (0.00s)`
pub fn metrics_line(metrics: &SearchMetrics) -> String {
    let noun = if metrics.total_results == 1 { "result" } else { "results" };
    format!(
        "{} {} {}",
        themed(Tone::Title, &[BOLD], &metrics.total_results.to_string()),
        noun,
        themed(Tone::Muted, &[], &format!("({}s)", metrics.seconds_label()))
    )
}

// ═══════════════════════════════════════════════════════════════════════════
// SURFACE
// ═══════════════════════════════════════════════════════════════════════════

/// Prints a search session to stdout.
pub struct TerminalSurface {
    pub metrics: Option<SearchMetrics>,
    pub show_scores: bool,
}

impl RenderSurface for TerminalSurface {
    fn render_results(&mut self, query: &str, cards: &[ResultCard], categories: &[String]) {
        section_top(&format!("RESULTS \"{}\"", clip(query, 40)));
        if let Some(metrics) = &self.metrics {
            row(&format!(" {}", metrics_line(metrics)));
        }
        if !categories.is_empty() {
            let badges: Vec<String> = categories.iter().map(|c| category_badge(c)).collect();
            row(&format!(" {}", badges.join(" ")));
        }
        for card in cards {
            section_mid();
            print_card(card, self.show_scores);
        }
        section_bot();
    }

    fn render_empty(&mut self, state: &EmptyState) {
        let message = state.message();
        if !message.is_empty() {
            println!("{}", themed(Tone::Muted, &[], &message));
        }
    }

    fn render_error(&mut self, message: &str) {
        eprintln!("{}", themed(Tone::Error, &[BOLD], &format!("❌ {}", message)));
    }
}

fn print_card(card: &ResultCard, show_scores: bool) {
    let mut heading = format!(" {}", themed(Tone::Title, &[BOLD], &clip(&card.title, 48)));
    if let Some(category) = &card.category {
        heading = format!("{} {}", heading, category_badge(category));
    }
    if show_scores {
        heading = format!("{} {}", heading, score_value(card.relevance_score));
    }
    row(&heading);

    let mut meta = format!(" {}", themed(Tone::Link, &[], &card.href));
    if let Some(date) = &card.published {
        meta = format!("{}  {}", meta, themed(Tone::Muted, &[], date));
    }
    row(&meta);

    if let Some(description) = card.description.as_deref().filter(|d| !d.trim().is_empty()) {
        row(&format!(" {}", themed(Tone::Muted, &[DIM], &clip(description, DESCRIPTION_CHARS))));
    }
}

/// One suggestion per line: title, then category.
pub fn print_suggestions(suggestions: &[Suggestion]) {
    for s in suggestions {
        match &s.category {
            Some(c) => println!("{}  {}", s.title, category_badge(c)),
            None => println!("{}", s.title),
        }
    }
}

/// Numbered history, most recent first.
pub fn print_history(entries: &[String]) {
    if entries.is_empty() {
        println!("{}", themed(Tone::Muted, &[], "No search history."));
        return;
    }
    for (i, entry) in entries.iter().enumerate() {
        println!("{} {}", themed(Tone::Muted, &[], &format!("{:>2}.", i + 1)), entry);
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Help text generation with colorization support.

use crate::colors;
use clap::builder::styling::Styles;

/// Generate clap Styles for help output.
pub fn styles() -> Styles {
    if !colors::should_colorize() {
        return Styles::plain();
    }

    use anstyle::{Ansi256Color, Color, Style};

    let header = Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(colors::codes::HEADER))));
    let literal = Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(colors::codes::LITERAL))));
    let context = Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(colors::codes::CONTEXT))));

    Styles::styled()
        .header(header)
        .usage(header)
        .literal(literal)
        .placeholder(context)
        .valid(context)
}

/// Main help template with colorized Options header.
pub fn template() -> String {
    format!(
        "{{about-with-newline}}
{{usage-heading}} {{usage}}

{{before-help}}{}
{{options}}{{after-help}}",
        maybe_header("Options:")
    )
}

/// Commands list shown before options in main help.
pub fn commands() -> String {
    format!(
        "\
{header_planning}
  {plan}        Synthesize sprint milestones and issues from stories
  {visualize}   Show the simulated tracker grouped by sprint

{header_setup}
  {init}        Write sprig.toml and create the store
  {schema}      Output JSON Schema for stories and records
  {completion}  Generate shell completions
",
        header_planning = maybe_header("Sprint Planning:"),
        header_setup = maybe_header("Setup:"),
        plan = maybe_literal("plan"),
        visualize = maybe_literal("visualize"),
        init = maybe_literal("init"),
        schema = maybe_literal("schema"),
        completion = maybe_literal("completion"),
    )
}

/// Quickstart help shown after options in main help.
pub fn quickstart() -> String {
    colors::examples(
        "\
Get started:
  sprig plan <owner> <repo> stories.json    Plan two sprints from stories
  sprig visualize                           Show the planned sprints",
    )
}

fn maybe_header(text: &str) -> String {
    if colors::should_colorize() {
        colors::header(text)
    } else {
        text.to_string()
    }
}

fn maybe_literal(text: &str) -> String {
    if colors::should_colorize() {
        colors::literal(text)
    } else {
        text.to_string()
    }
}

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;

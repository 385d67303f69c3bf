use colored::Colorize;

/// Renders the bordered metadata panel used by `about` and the startup banner.
///
/// Pure string assembly: widths are computed on the uncolored text, so the
/// ANSI codes added afterwards never shift the layout. Printing is the
/// caller's problem.
pub fn render(title: &str, subtitle: &str, byline: &str, description: &str) -> String {
    let description_lines: Vec<&str> = description.split('\n').collect();

    let width = [title, subtitle, byline]
        .into_iter()
        .chain(description_lines.iter().copied())
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0)
        + 4;

    let mut lines = Vec::with_capacity(6 + description_lines.len());
    lines.push(format!("╭{}╮", "─".repeat(width)).yellow().to_string());
    lines.push(row(width, &title.cyan().bold().to_string(), title));
    lines.push(row(width, &subtitle.yellow().to_string(), subtitle));
    lines.push(row(width, &byline.bright_black().to_string(), byline));
    lines.push(blank_row(width));
    for line in &description_lines {
        lines.push(row(width, &line.bright_black().to_string(), line));
    }
    lines.push(format!("╰{}╯", "─".repeat(width)).yellow().to_string());

    lines.join("\n")
}

/// One content row. `plain` is the same text as `colored_text` minus the
/// escape codes; padding comes from the plain length.
fn row(width: usize, colored_text: &str, plain: &str) -> String {
    let pad = width - plain.chars().count() - 2;
    format!(
        "{}  {}{}{}",
        "│".yellow(),
        colored_text,
        " ".repeat(pad),
        "│".yellow()
    )
}

fn blank_row(width: usize) -> String {
    format!("{}{}{}", "│".yellow(), " ".repeat(width), "│".yellow())
}

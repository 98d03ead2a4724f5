use news_core::{AppViewModel, ArticleRowView, FetchStatus};
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Tabs, Wrap};
use ratatui::Frame;

use super::constants::{APP_TITLE, KEY_HINTS};

pub fn render(
    frame: &mut Frame,
    view: &AppViewModel,
    list_state: &mut ListState,
    updated_at: Option<&str>,
) {
    let [tabs_area, list_area, status_area, hints_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(3),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    frame.render_widget(category_tabs(view), tabs_area);

    if view.rows.is_empty() {
        let placeholder = Paragraph::new(empty_text(view))
            .style(Style::default().fg(Color::DarkGray))
            .block(articles_block(view))
            .wrap(Wrap { trim: true });
        frame.render_widget(placeholder, list_area);
    } else {
        let items: Vec<ListItem> = view
            .rows
            .iter()
            .map(|row| ListItem::new(article_lines(row)))
            .collect();
        let list = List::new(items)
            .block(articles_block(view))
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");
        frame.render_stateful_widget(list, list_area, list_state);
    }

    let status_style = match view.status {
        FetchStatus::Errored => Style::default().fg(Color::White).bg(Color::Red),
        FetchStatus::Fetching => Style::default().fg(Color::Black).bg(Color::Yellow),
        FetchStatus::Idle | FetchStatus::Committed => Style::default().fg(Color::Black).bg(Color::Cyan),
    };
    frame.render_widget(
        Paragraph::new(status_text(view, updated_at)).style(status_style),
        status_area,
    );
    frame.render_widget(
        Paragraph::new(KEY_HINTS).style(Style::default().fg(Color::DarkGray)),
        hints_area,
    );
}

fn category_tabs(view: &AppViewModel) -> Tabs<'static> {
    let titles: Vec<&'static str> = view.category_options.iter().map(|o| o.label).collect();
    // A selection outside the fixed set highlights nothing.
    let highlight = if view.category_options.iter().any(|o| o.selected) {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    } else {
        Style::default()
    };
    Tabs::new(titles)
        .select(view.selected_option_index())
        .highlight_style(highlight)
        .block(
            Block::default()
                .title(APP_TITLE)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
}

fn articles_block(view: &AppViewModel) -> Block<'static> {
    Block::default()
        .title(format!(
            " {} ({}) ",
            category_label(view),
            view.article_count
        ))
        .borders(Borders::ALL)
}

fn category_label(view: &AppViewModel) -> String {
    view.category
        .clone()
        .unwrap_or_else(|| "all categories".to_string())
}

fn empty_text(view: &AppViewModel) -> &'static str {
    match view.status {
        FetchStatus::Idle | FetchStatus::Fetching => "Loading articles…",
        FetchStatus::Committed => "No articles for this category.",
        FetchStatus::Errored => "Could not load articles.",
    }
}

pub fn article_lines(row: &ArticleRowView) -> Vec<Line<'static>> {
    let mut byline = vec![Span::styled(
        format!("Source: {}", row.source),
        Style::default().fg(Color::DarkGray),
    )];
    if let Some(published) = &row.published_at {
        byline.push(Span::styled(
            format!(" | {published}"),
            Style::default().fg(Color::DarkGray),
        ));
    }

    vec![
        Line::from(Span::styled(
            row.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(row.description.clone()),
        Line::from(byline),
        Line::from(Span::styled(
            row.url.clone(),
            Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::UNDERLINED),
        )),
        Line::default(),
    ]
}

pub fn status_text(view: &AppViewModel, updated_at: Option<&str>) -> String {
    let category = category_label(view);
    let mut text = match view.status {
        FetchStatus::Idle => " Idle".to_string(),
        FetchStatus::Fetching => match view.bytes_received {
            Some(bytes) => format!(
                " Loading {category}… {} B received",
                format_with_commas(bytes)
            ),
            None => format!(" Loading {category}…"),
        },
        FetchStatus::Committed => match updated_at {
            Some(at) => format!(" {} articles | {category} | updated {at}", view.article_count),
            None => format!(" {} articles | {category}", view.article_count),
        },
        FetchStatus::Errored => format!(
            " Error: {} | showing {} earlier articles",
            view.error.as_deref().unwrap_or("fetch failed"),
            view.article_count
        ),
    };
    if view.discarded_responses > 0 {
        text.push_str(&format!(
            " | {} stale responses dropped",
            view.discarded_responses
        ));
    }
    text
}

fn format_with_commas(value: u64) -> String {
    let mut out = String::new();
    for (i, ch) in value.to_string().chars().rev().enumerate() {
        if i != 0 && i % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out.chars().rev().collect()
}

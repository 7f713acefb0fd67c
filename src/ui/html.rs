//! HTML rendering for cards, placeholders and the details modal.
//!
//! All record text is escaped. External anchors open in a new browsing
//! context with `rel="noopener noreferrer"`.

use crate::services::display_format;
use crate::types::card::{CardContent, CardLayout, CardView, DetailView};
use crate::types::category::Icon;

/// Escapes text for use in element content and quoted attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Anchor to an `http`/`https` URL. Any other URL renders as an inert span.
fn external_anchor(url: &str, class: &str, aria_label: Option<&str>, inner: &str) -> String {
    let aria = aria_label
        .map(|label| format!(r#" aria-label="{}""#, escape(label)))
        .unwrap_or_default();
    if !display_format::is_web_url(url) {
        return format!(
            r#"<span class="{} is-disabled" aria-disabled="true"{}>{}</span>"#,
            class, aria, inner
        );
    }
    format!(
        r#"<a href="{}" target="_blank" rel="noopener noreferrer" class="{}"{}>{}</a>"#,
        escape(url),
        class,
        aria,
        inner
    )
}

fn icon(icon: Icon, class: &str) -> String {
    format!(r#"<i class="icon {}" data-icon="{}"></i>"#, class, icon.name())
}

/// Renders a card view. `Hidden` renders to an empty string.
pub fn render_card(view: &CardView, layout: CardLayout) -> String {
    match view {
        CardView::Hidden => String::new(),
        CardView::Placeholder => render_placeholder(),
        CardView::Card(content) => render_card_content(content, layout),
    }
}

pub fn render_placeholder() -> String {
    concat!(
        r#"<div class="link-card link-card--loading" aria-busy="true">"#,
        r#"<div class="link-card__header">"#,
        r#"<div class="skeleton skeleton--icon"></div>"#,
        r#"<div class="skeleton-lines"><div class="skeleton skeleton--title"></div>"#,
        r#"<div class="skeleton skeleton--subtitle"></div></div>"#,
        r#"</div>"#,
        r#"<div class="skeleton skeleton--body"></div>"#,
        r#"</div>"#
    )
    .to_string()
}

fn render_card_content(card: &CardContent, layout: CardLayout) -> String {
    let star_state = if card.starred { "fill" } else { "regular" };
    // Anchors cannot nest, so a wrapped card is its own visit control.
    let visit = match layout {
        CardLayout::Standalone => external_anchor(
            &card.url,
            "link-card__control",
            Some("Visit resource"),
            r#"<i class="icon" data-icon="external-link"></i>"#,
        ),
        CardLayout::LinkWrapped => String::new(),
    };
    let controls = format!(
        concat!(
            r#"<div class="link-card__controls">{visit}"#,
            r#"<button type="button" class="link-card__control" data-action="view-details" aria-label="View details">{info}</button>"#,
            r#"<button type="button" class="link-card__control link-card__star" data-action="toggle-favorite" "#,
            r#"data-link-id="{id}" data-starred="{starred}" aria-pressed="{starred}" aria-label="Toggle favorite">{star}</button>"#,
            r#"</div>"#
        ),
        visit = visit,
        info = r#"<i class="icon" data-icon="info"></i>"#,
        id = escape(&card.link_id),
        starred = card.starred,
        star = format!(r#"<i class="icon icon--{}" data-icon="star"></i>"#, star_state),
    );

    let body = format!(
        concat!(
            r#"<div class="link-card__header">"#,
            r#"<div class="link-card__badge" style="background-color: {color}">{icon}</div>"#,
            r#"<h2 class="link-card__title">{title}</h2>{controls}"#,
            r#"</div>"#,
            r#"<p class="link-card__category">{category}</p>"#,
            r#"<p class="link-card__description">{description}</p>"#
        ),
        color = escape(&card.color),
        icon = icon(card.icon, "icon--bold"),
        title = escape(&card.title),
        controls = controls,
        category = escape(&card.category),
        description = escape(&card.description),
    );

    let tile = match layout {
        CardLayout::Standalone => format!(
            r#"<div class="link-card" data-link-id="{}">{}</div>"#,
            escape(&card.link_id),
            body
        ),
        CardLayout::LinkWrapped => {
            let wrapped = external_anchor(&card.url, "link-card__wrap", None, &body);
            format!(
                r#"<div class="link-card" data-link-id="{}">{}</div>"#,
                escape(&card.link_id),
                wrapped
            )
        }
    };

    match &card.detail {
        Some(detail) => format!("{}{}", tile, render_detail(detail)),
        None => tile,
    }
}

fn section(heading: &str, text: &str) -> String {
    format!(
        r#"<section class="details__section"><h3>{}</h3><p>{}</p></section>"#,
        heading,
        escape(text)
    )
}

/// Renders the details modal with its backdrop.
pub fn render_detail(detail: &DetailView) -> String {
    let use_case = detail
        .use_case
        .as_deref()
        .map(|text| section("Why use it?", text))
        .unwrap_or_default();
    let comments = detail
        .comments
        .as_deref()
        .map(|text| section("Personal Notes", text))
        .unwrap_or_default();

    format!(
        concat!(
            r#"<div class="details" role="dialog" aria-modal="true">"#,
            r#"<div class="details__backdrop" data-action="close-details"></div>"#,
            r#"<div class="details__panel">"#,
            r#"<header class="details__header">"#,
            r#"<div class="details__badge" style="background-color: {color}">{icon}</div>"#,
            r#"<div><h2>{title}</h2><p class="details__category">{category}</p></div>"#,
            r#"</header>"#,
            r#"<div class="details__description"><p>{description}</p></div>"#,
            r#"{use_case}{comments}"#,
            r#"<dl class="details__grid">"#,
            r#"<div><dt>Added On</dt><dd>{added_on}</dd></div>"#,
            r#"<div><dt>Website</dt><dd>{website}</dd></div>"#,
            r#"</dl>"#,
            r#"<div class="details__actions">{visit}</div>"#,
            r#"<button type="button" class="details__close" data-action="close-details" aria-label="Close">"#,
            r#"<i class="icon" data-icon="x"></i></button>"#,
            r#"</div></div>"#
        ),
        color = escape(&detail.color),
        icon = icon(detail.icon, "icon--bold"),
        title = escape(&detail.title),
        category = escape(&detail.category),
        description = escape(&detail.description),
        use_case = use_case,
        comments = comments,
        added_on = escape(&detail.added_on),
        website = escape(&detail.website),
        visit = external_anchor(&detail.url, "details__visit", None, "Visit Website"),
    )
}

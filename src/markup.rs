/*!
 * HTML fragment serialization for slide bodies.
 *
 * Pure string building: a structured tag list, description block, or
 * custom-layout grid goes in, a fixed HTML fragment shape comes out.
 * The `h5p-tl-*` class names are styling hooks consumed by the widget
 * host's stylesheet and must stay stable.
 */

use crate::params::{DescriptionMedia, EventItem, Tag};

/// Escape text for use in HTML text and attribute positions
pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Render the tag list container, or an empty string when there are no
/// tags
pub fn render_tag_list(tags: &[Tag]) -> String {
    if tags.is_empty() {
        return String::new();
    }

    let mut items = String::new();
    for tag in tags {
        match &tag.color {
            Some(color) => items.push_str(&format!(
                r#"<li class="h5p-tl-tag" style="background-color: {};">{}</li>"#,
                escape_html(color),
                escape_html(&tag.name)
            )),
            None => items.push_str(&format!(
                r#"<li class="h5p-tl-tag">{}</li>"#,
                escape_html(&tag.name)
            )),
        }
    }

    format!(
        r#"<div class="h5p-tl-tags-container"><ul class="h5p-tl-tags">{}</ul></div>"#,
        items
    )
}

/// Render the description block. The description is authored rich text
/// and is inserted as-is.
pub fn render_description(description: &str) -> String {
    format!(r#"<div class="h5p-tl-slide-description">{}</div>"#, description)
}

/// Render the custom-layout grid: a media cell next to a text cell
/// holding the tag list and description.
pub fn render_grid(event: &EventItem) -> String {
    let media_cell = render_description_media(&event.description_media);

    let mut text_cell = render_tag_list(&event.tags);
    if let Some(description) = &event.description {
        text_cell.push_str(&render_description(description));
    }

    format!(
        r#"<div class="h5p-tl-grid"><div class="h5p-tl-grid-media-cell">{}</div><div class="h5p-tl-grid-text-cell">{}</div></div>"#,
        media_cell, text_cell
    )
}

/// Render the description media for a grid cell, or an empty string
/// when absent
fn render_description_media(media: &DescriptionMedia) -> String {
    match media {
        DescriptionMedia::Image { image, image_alt } => image.as_ref().map_or_else(
            String::new,
            |file| {
                format!(
                    r#"<img class="h5p-tl-grid-media" src="{}" alt="{}" />"#,
                    escape_html(&file.path),
                    escape_html(image_alt.as_deref().unwrap_or(""))
                )
            },
        ),
        DescriptionMedia::Video { video } => first_path(video).map_or_else(
            String::new,
            |path| {
                format!(
                    r#"<video class="h5p-tl-grid-media" controls src="{}"></video>"#,
                    escape_html(path)
                )
            },
        ),
        DescriptionMedia::Audio { audio } => first_path(audio).map_or_else(
            String::new,
            |path| {
                format!(
                    r#"<audio class="h5p-tl-grid-media" controls src="{}"></audio>"#,
                    escape_html(path)
                )
            },
        ),
        DescriptionMedia::Custom { custom_media } => custom_media.as_ref().map_or_else(
            String::new,
            |reference| {
                format!(
                    r#"<a class="h5p-tl-grid-media" href="{0}">{0}</a>"#,
                    escape_html(reference)
                )
            },
        ),
        DescriptionMedia::None => String::new(),
    }
}

fn first_path(files: &Option<Vec<crate::params::MediaFile>>) -> Option<&str> {
    files
        .as_ref()
        .and_then(|files| files.first())
        .map(|file| file.path.as_str())
}

//! Markdown markup tokens for the renderer.

pub fn heading(level: u8, text: &str) -> String {
    format!("{} {}", "#".repeat(level as usize), text)
}

pub fn paragraph(text: &str) -> String {
    text.to_string()
}

pub fn image(src: &str, alt: &str) -> String {
    format!("![{alt}]({src})")
}

/// Thumbnail-plus-link pair standing in for an embedded player.
pub fn video(id: &str, title: &str) -> String {
    format!("[![{title}](https://img.youtube.com/vi/{id}/0.jpg)](https://www.youtube.com/watch?v={id})")
}

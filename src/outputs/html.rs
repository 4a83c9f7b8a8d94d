//! HTML markup tokens for the renderer.

/// Static style block prepended to HTML documents on request.
///
/// A fixed constant; never derived from article content.
pub const STYLE: &str = r#"<style>
    body {
        font-family: Arial, sans-serif;
        line-height: 1.6;
        color: #333;
        margin: 0 auto;
        max-width: 800px;
        padding: 20px;
    }

    h1, h2, h3, h4, h5, h6 {
        font-weight: 700;
        margin-top: 30px;
        margin-bottom: 15px;
        text-align: center;
    }

    p {
        margin-bottom: 15px;
    }

    img {
        max-width: 100%;
        height: auto;
        margin-bottom: 20px;
    }

    .centered-iframe {
        display: block;
        margin: 0 auto;
    }
</style>"#;

pub fn heading(level: u8, text: &str) -> String {
    format!("<h{level}>{text}</h{level}>")
}

pub fn paragraph(text: &str) -> String {
    format!("<p>{text}</p>")
}

pub fn image(src: &str, alt: &str) -> String {
    format!(r#"<img src="{src}" alt="{alt}">"#)
}

/// Embedded YouTube player for a video id.
pub fn video(id: &str, _title: &str) -> String {
    format!(
        r#"<iframe class="centered-iframe" width="100%" height="50%" src="https://www.youtube.com/embed/{id}" title="YouTube video player" frameborder="0" allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture; web-share" allowfullscreen></iframe>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_levels() {
        assert_eq!(heading(1, "Título"), "<h1>Título</h1>");
        assert_eq!(heading(3, "sub"), "<h3>sub</h3>");
    }

    #[test]
    fn test_image_tag() {
        assert_eq!(
            image("https://img/x.jpg", "legenda"),
            r#"<img src="https://img/x.jpg" alt="legenda">"#
        );
    }

    #[test]
    fn test_video_embeds_id() {
        let tag = video("xyz987", "Trailer");
        assert!(tag.contains("https://www.youtube.com/embed/xyz987"));
        assert!(tag.starts_with("<iframe"));
        assert!(tag.ends_with("</iframe>"));
    }
}

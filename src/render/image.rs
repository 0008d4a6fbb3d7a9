//! Image slide presets.

use std::fmt::Write;

use crate::model::{ImagePreset, ImageRef, ImageSlide, Slide, SplitPosition};
use crate::{Error, Result};

use super::content::{push_block, render_optional};
use super::format::format_text;
use super::non_empty;
use super::slide::write_heading;

/// Alt text used when neither the image nor the slide provides one.
pub const DEFAULT_ALT: &str = "Image";

const CAPTION_STYLE: &str = "margin-top: 1rem; color: #6b7280;";

pub(crate) fn render_image(slide: &Slide, image: &ImageSlide) -> Result<String> {
    match image.preset {
        ImagePreset::Grid => render_gallery(slide, image),
        ImagePreset::Split => render_split(slide, image),
        ImagePreset::Fullscreen => render_fullscreen(slide, image),
        ImagePreset::Icon => render_icon(slide, image),
        ImagePreset::Center => render_center(slide, image),
    }
}

/// Gallery container class. Three and four images get a fixed column count;
/// any other number is left to the stylesheet.
pub fn gallery_class(count: usize) -> &'static str {
    match count {
        3 => "image-gallery gallery-3",
        4 => "image-gallery gallery-4",
        _ => "image-gallery",
    }
}

/// Alt text: the image's own, then the slide title, then a placeholder.
fn alt_text<'a>(own: Option<&'a str>, slide: &'a Slide) -> &'a str {
    non_empty(own)
        .or(non_empty(slide.title.as_deref()))
        .unwrap_or(DEFAULT_ALT)
}

fn source(image: &ImageSlide) -> Result<&str> {
    image
        .image
        .as_deref()
        .ok_or_else(|| Error::missing("image slide", "image"))
}

fn write_img(out: &mut String, src: &str, alt: &str, extra: &str) -> std::fmt::Result {
    writeln!(out, "<img src=\"{src}\" alt=\"{alt}\"{extra}>")
}

fn write_caption(out: &mut String, caption: Option<&str>) -> std::fmt::Result {
    if let Some(caption) = non_empty(caption) {
        writeln!(out, "<p style=\"{CAPTION_STYLE}\">{}</p>", format_text(caption))?;
    }
    Ok(())
}

fn render_center(slide: &Slide, image: &ImageSlide) -> Result<String> {
    let src = source(image)?;
    let mut out = String::from("<div class=\"image-slide preset-center\">\n");
    if let Some(title) = non_empty(slide.title.as_deref()) {
        writeln!(out, "<h1>{title}</h1>")?;
    }
    write_img(&mut out, src, alt_text(image.alt.as_deref(), slide), "")?;
    write_caption(&mut out, image.caption.as_deref())?;
    out.push_str("</div>\n");
    Ok(out)
}

fn render_fullscreen(slide: &Slide, image: &ImageSlide) -> Result<String> {
    let src = source(image)?;
    let mut out = String::from("<div class=\"image-slide preset-fullscreen\">\n");
    write_img(
        &mut out,
        src,
        alt_text(image.alt.as_deref(), slide),
        " style=\"width: 100%; height: 100%; object-fit: cover;\"",
    )?;
    if let Some(caption) = non_empty(image.caption.as_deref()) {
        writeln!(out, "<div class=\"image-caption\">{}</div>", format_text(caption))?;
    }
    out.push_str("</div>\n");
    Ok(out)
}

fn render_icon(slide: &Slide, image: &ImageSlide) -> Result<String> {
    let src = source(image)?;
    let mut out = String::from(
        "<div class=\"content preset-icon\" style=\"justify-content: center; text-align: center;\">\n",
    );
    write_img(
        &mut out,
        src,
        alt_text(image.alt.as_deref(), slide),
        " class=\"icon-image\"",
    )?;
    write_heading(&mut out, slide)?;
    push_block(&mut out, &render_optional(image.content.as_ref())?);
    write_caption(&mut out, image.caption.as_deref())?;
    out.push_str("</div>\n");
    Ok(out)
}

fn render_split(slide: &Slide, image: &ImageSlide) -> Result<String> {
    let src = source(image)?;

    let mut picture = String::from("<div class=\"split-image\">\n");
    write_img(&mut picture, src, alt_text(image.alt.as_deref(), slide), "")?;
    write_caption(&mut picture, image.caption.as_deref())?;
    picture.push_str("</div>\n");

    let mut text = String::from("<div class=\"split-content\">\n");
    write_heading(&mut text, slide)?;
    push_block(&mut text, &render_optional(image.content.as_ref())?);
    text.push_str("</div>\n");

    let (side, first, second) = match image.position {
        SplitPosition::Left => ("image-left", &picture, &text),
        SplitPosition::Right => ("image-right", &text, &picture),
    };

    let mut out = String::new();
    writeln!(out, "<div class=\"image-split {side}\">")?;
    out.push_str(first);
    out.push_str(second);
    out.push_str("</div>\n");
    Ok(out)
}

fn render_gallery(slide: &Slide, image: &ImageSlide) -> Result<String> {
    let images = image
        .images
        .as_ref()
        .ok_or_else(|| Error::missing("image slide", "images"))?;

    let mut out = String::new();
    write_heading(&mut out, slide)?;
    out.push_str("<div class=\"content\">\n");
    writeln!(out, "<div class=\"{}\">", gallery_class(images.len()))?;
    for item in images {
        write_figure(&mut out, item, image, slide)?;
    }
    out.push_str("</div>\n");
    write_caption(&mut out, image.caption.as_deref())?;
    out.push_str("</div>\n");
    Ok(out)
}

fn write_figure(
    out: &mut String,
    item: &ImageRef,
    image: &ImageSlide,
    slide: &Slide,
) -> std::fmt::Result {
    let alt = alt_text(item.alt().or(image.alt.as_deref()), slide);
    out.push_str("<figure>");
    write!(out, "<img src=\"{}\" alt=\"{alt}\">", item.src())?;
    if let Some(caption) = non_empty(item.caption()) {
        write!(out, "<figcaption>{}</figcaption>", format_text(caption))?;
    }
    out.push_str("</figure>\n");
    Ok(())
}

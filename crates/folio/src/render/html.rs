//! HTML adapter for the view tree.
//!
//! This is the only place that produces markup text. Text and attribute
//! values are escaped; nothing from the catalog is emitted raw.

use std::fmt::Write as _;
use std::path::Path;

use tracing::info;

use super::client::{ClientScript, CLIENT_SCRIPT};
use crate::config::SiteConfig;
use crate::error::{Error, Result};
use crate::node::{Element, Node};

/// Elements that never have children or a closing tag.
const VOID_ELEMENTS: &[&str] = &["br", "hr", "img", "input", "link", "meta"];

/// Serialize an element tree to HTML.
#[must_use]
pub fn element_to_html(element: &Element) -> String {
    let mut out = String::new();
    write_element(element, &mut out);
    out
}

/// Wrap a page body in a complete HTML document.
#[must_use]
pub fn document(body: &Element, config: &SiteConfig, script: &ClientScript) -> String {
    let mut out = String::from("<!DOCTYPE html>\n");
    let _ = write!(
        out,
        "<html lang=\"{}\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{}</title>\n",
        escape_attr(&config.site.lang),
        escape_text(&config.site.title)
    );
    if let Some(href) = &config.site.stylesheet {
        let _ = writeln!(out, "<link rel=\"stylesheet\" href=\"{}\">", escape_attr(href));
    }
    out.push_str("</head>\n<body>\n");
    write_element(body, &mut out);
    out.push('\n');
    match script {
        ClientScript::Inline => {
            let _ = writeln!(out, "<script>\n{CLIENT_SCRIPT}</script>");
        }
        other => {
            if let Some(src) = other.src() {
                let _ = writeln!(out, "<script src=\"{}\"></script>", escape_attr(src));
            }
        }
    }
    out.push_str("</body>\n</html>\n");
    out
}

/// Write a page to `path` along with its bundled client script, if any.
///
/// # Errors
///
/// Returns [`Error::OutputWrite`] if a directory or file cannot be written.
pub fn write_site(path: &Path, body: &Element, config: &SiteConfig) -> Result<()> {
    let script = ClientScript::from_config(&config.site);
    write_document(path, &document(body, config, &script))?;
    if let Some(script_path) = script.bundle_path(path) {
        write_document(&script_path, CLIENT_SCRIPT)?;
    }
    Ok(())
}

/// Write text to `path`, creating parent directories.
///
/// # Errors
///
/// Returns [`Error::OutputWrite`] if a directory or the file cannot be written.
pub fn write_document(path: &Path, text: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| Error::OutputWrite {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    std::fs::write(path, text).map_err(|source| Error::OutputWrite {
        path: path.to_path_buf(),
        source,
    })?;
    info!(bytes = text.len(), "Wrote {}", path.display());
    Ok(())
}

fn write_node(node: &Node, out: &mut String) {
    match node {
        Node::Text(text) => out.push_str(&escape_text(text)),
        Node::Element(element) => write_element(element, out),
    }
}

fn write_element(element: &Element, out: &mut String) {
    out.push('<');
    out.push_str(element.tag);
    if !element.classes.is_empty() {
        let _ = write!(out, " class=\"{}\"", escape_attr(&element.classes.join(" ")));
    }
    for (key, value) in &element.attrs {
        if value.is_empty() {
            let _ = write!(out, " {key}");
        } else {
            let _ = write!(out, " {key}=\"{}\"", escape_attr(value));
        }
    }
    out.push('>');

    if VOID_ELEMENTS.contains(&element.tag) {
        return;
    }
    for child in &element.children {
        write_node(child, out);
    }
    let _ = write!(out, "</{}>", element.tag);
}

/// Escape text content.
#[must_use]
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape an attribute value for use inside double quotes.
#[must_use]
pub fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

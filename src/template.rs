//! Page template.
//!
//! Wraps a converted HTML fragment in the full page shell: head metadata
//! driven by [`SiteConfig`], a breadcrumb header linking back to the index,
//! and a `content-container` div holding the fragment. Uses
//! [maud](https://maud.lambda.xyz/) so the shell is checked at compile time;
//! the fragment itself is already HTML and is injected with `PreEscaped`.

use crate::config::SiteConfig;
use maud::{DOCTYPE, PreEscaped, html};
use std::time::{SystemTime, UNIX_EPOCH};

/// Render a complete HTML page around a converted fragment.
///
/// `filename` is the output filename shown in the breadcrumb; `title` is the
/// extracted document title (or the stem fallback the caller chose).
pub fn render_page(fragment: &str, title: &str, filename: &str, config: &SiteConfig) -> String {
    let page_title = format!("{} - {}", title, config.site_name);
    let canonical = format!(
        "{}/{}",
        config.base_url.trim_end_matches('/'),
        title.to_lowercase()
    );
    // Cache-buster on the stylesheet so redeploys are picked up immediately.
    let stylesheet = format!("{}?d={}", config.stylesheet, build_stamp());

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                title { (page_title) }
                link rel="shortcut icon" href=(config.favicon);
                meta name="viewport" content="width=device-width, initial-scale=1";
                meta name="description" content=(page_title);
                meta name="keywords" content={ (config.site_name.to_lowercase()) ", " (title.to_lowercase()) };
                link rel="canonical" href=(canonical);
                link rel="stylesheet" type="text/css" href=(stylesheet);
            }
            body {
                span {
                    a href="index.html" { (config.site_name) }
                    "/"
                    span.white { (filename) }
                    ";"
                    br;
                }
                div.content-container {
                    (PreEscaped(fragment))
                }
            }
        }
    }
    .into_string()
}

fn build_stamp() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis()
}

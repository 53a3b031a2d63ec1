//! HTML assembly for the dashboard document.
//!
//! Every value that did not come from this module is escaped with
//! [`escape`] before it reaches the output.

use std::fmt::Write;

use crate::config::{Config, QuickLink, WeatherConfig};
use crate::fetcher::{FeedCard, FeedStatus};

const STYLE: &str = "\
body{margin:0;font-family:Arial,sans-serif;background:#121212;color:#f0f0f0;}
header{background:#1e1e1e;padding:20px;text-align:center;font-size:2rem;border-bottom:1px solid #333;}
section{padding:20px;display:grid;grid-template-columns:1fr;gap:20px;}
.card{background:#1e1e1e;border:1px solid #333;border-radius:8px;padding:15px;}
.card h2{margin-top:0;border-bottom:1px solid #333;padding-bottom:8px;}
ul{padding-left:1rem;}li{margin-bottom:8px;}
a{color:#00bcd4;text-decoration:none;}a:hover{text-decoration:underline;}
.quick-links{display:flex;flex-wrap:wrap;gap:10px;margin-top:10px;}
.quick-links a{background:#2c2c2c;padding:10px 15px;border-radius:6px;text-decoration:none;color:#f0f0f0;border:1px solid #333;}
.quick-links a:hover{background:#3d3d3d;}
.unavailable{color:#888;font-style:italic;}
";

/// Escape `& < > " '` so the value is safe both as element text and inside a
/// quoted attribute.
pub fn escape(s: &str) -> String {
    html_escape::encode_quoted_attribute(s).into_owned()
}

/// Assemble the full document: quote card, weather card, one card per feed
/// in the order given, then quick links.
pub fn render_dashboard(config: &Config, quote: &str, cards: &[FeedCard]) -> String {
    let mut html = String::with_capacity(8 * 1024);

    render_head(&mut html, &config.title);
    render_quote_card(&mut html, quote);
    render_weather_card(&mut html, &config.weather);
    for card in cards {
        render_feed_card(&mut html, card);
    }
    render_quick_links(&mut html, &config.quick_links);

    html.push_str("</section></body></html>");
    html
}

fn render_head(html: &mut String, title: &str) {
    let title = escape(title);
    let _ = write!(
        html,
        "<!DOCTYPE html>\n<html lang=\"en\"><head>\n\
         <meta charset=\"UTF-8\"><title>{title}</title>\n\
         <style>\n{STYLE}</style></head><body>\n\
         <header>\u{2600}\u{fe0f} {title}</header><section>\n"
    );
}

fn render_quote_card(html: &mut String, quote: &str) {
    let _ = write!(
        html,
        "<div class=\"card\"><h2>Daily Stoic Quote</h2>\
         <blockquote style=\"font-style:italic;font-size:1.1rem;\">{}</blockquote></div>",
        escape(quote)
    );
}

fn render_weather_card(html: &mut String, weather: &WeatherConfig) {
    let _ = write!(
        html,
        "<div class=\"card\"><h2>{} Weather</h2>\
         <p><a href=\"{}\" target=\"_blank\">View full weather report</a></p></div>",
        escape(&weather.location),
        escape(&weather.url)
    );
}

fn render_feed_card(html: &mut String, card: &FeedCard) {
    let _ = write!(
        html,
        "<div class=\"card\"><h2>{} - Headlines</h2><ul>",
        escape(&card.name)
    );
    for headline in &card.headlines {
        let _ = write!(
            html,
            "<li><a href=\"{}\" target=\"_blank\">{}</a></li>",
            escape(&headline.link),
            escape(&headline.title)
        );
    }
    html.push_str("</ul>");
    if let FeedStatus::Unavailable(_) = card.status {
        html.push_str("<p class=\"unavailable\">Headlines unavailable</p>");
    }
    html.push_str("</div>");
}

fn render_quick_links(html: &mut String, links: &[QuickLink]) {
    html.push_str("<div class=\"card\"><h2>Quick Links</h2><div class=\"quick-links\">\n");
    for link in links {
        let _ = writeln!(
            html,
            "<a href=\"{}\" target=\"_blank\">{}</a>",
            escape(&link.url),
            escape(&link.label)
        );
    }
    html.push_str("</div></div>");
}

use crate::user_info::formatters::{format_date, format_number};
use crate::user_info::model::ChannelSummary;

pub const NO_CHANNEL_MARKUP: &str = r#"<div class="info-message">
  <p>No YouTube channel found or access was not granted.</p>
  <p class="small">You may not have a YouTube channel associated with this account.</p>
</div>"#;

/// Markup of the channel block. Every interpolated value is escaped as HTML text.
pub fn channel_markup(channel: &ChannelSummary) -> String {
    let mut html = format!(
        r#"<div class="youtube-channel">
  <img src="{thumbnail}" alt="Channel thumbnail" class="channel-thumbnail">
  <div class="channel-info">
    <h4>{title}</h4>
    <p class="channel-id">Channel ID: {id}</p>
  </div>
</div>
<div class="data-grid">
"#,
        thumbnail = escape_html(&channel.thumbnail_url),
        title = escape_html(&channel.channel_title),
        id = escape_html(&channel.channel_id),
    );

    let items = [
        ("Subscribers:", format_number(&channel.subscriber_count)),
        ("Total Videos:", format_number(&channel.video_count)),
        ("Total Views:", format_number(&channel.view_count)),
        ("Created:", format_date(&channel.created_at)),
    ];
    for (label, value) in items {
        html.push_str(&format!(
            r#"  <div class="data-item">
    <span class="label">{label}</span>
    <span class="value">{}</span>
  </div>
"#,
            escape_html(&value)
        ));
    }
    html.push_str("</div>");

    if let Some(description) = channel.description.as_deref().filter(|text| !text.is_empty()) {
        html.push_str(&format!(
            "\n<p class=\"channel-description\">{}</p>",
            escape_html(description)
        ));
    }
    html
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

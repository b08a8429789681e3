use serde_json::{json, Value};

use crate::config::{Configuration, Ga4Config};
use crate::user_info::ChannelSummary;

pub fn config_with_measurement_id(measurement_id: Option<&str>) -> Configuration {
    Configuration {
        analytics: Ga4Config {
            measurement_id: measurement_id.map(str::to_string),
        },
        ..Default::default()
    }
}

pub fn config_json(measurement_id: &str) -> Value {
    json!({
        "firebase": {
            "apiKey": "demo-api-key",
            "authDomain": "demo.firebaseapp.com",
            "projectId": "demo-project",
            "storageBucket": "demo-project.appspot.com",
            "messagingSenderId": "1234",
            "appId": "1:1234:web:abcd"
        },
        "ga4": { "measurementId": measurement_id },
        "oauth": { "clientId": "demo.apps.googleusercontent.com", "scopes": ["openid"] }
    })
}

pub fn profile_json() -> Value {
    json!({
        "id": "1234567890",
        "name": "Ada Lovelace",
        "email": "ada@example.com",
        "picture": "https://example.com/photo.jpg",
        "verified_email": true
    })
}

pub fn channel_json() -> Value {
    json!({
        "channelId": "UC_demo",
        "channelTitle": "Demo Channel",
        "description": "Engines & notes",
        "thumbnail": "https://example.com/channel.jpg",
        "subscriberCount": "12345",
        "videoCount": "42",
        "viewCount": "1234567",
        "publishedAt": "2015-06-01T12:00:00Z"
    })
}

pub fn channel_summary() -> ChannelSummary {
    serde_json::from_value(channel_json()).expect("fixture channel deserializes")
}
